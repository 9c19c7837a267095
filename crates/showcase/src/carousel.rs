use crate::ShowcaseError;

/// Cursor over a fixed, non-empty list. Moving past either end wraps.
#[derive(Debug, Clone, Copy)]
pub struct Carousel<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<'a, T> Carousel<'a, T> {
    pub fn new(items: &'a [T]) -> Result<Self, ShowcaseError> {
        if items.is_empty() {
            return Err(ShowcaseError::Empty);
        }

        Ok(Self { items, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn current(&self) -> &'a T {
        &self.items[self.index]
    }

    pub fn next_index(&self) -> usize {
        (self.index + 1) % self.items.len()
    }

    pub fn previous_index(&self) -> usize {
        (self.index + self.items.len() - 1) % self.items.len()
    }

    pub fn next(&mut self) {
        self.index = self.next_index();
    }

    pub fn previous(&mut self) {
        self.index = self.previous_index();
    }

    pub fn jump_to(&mut self, index: i64) -> Result<(), ShowcaseError> {
        let len = self.items.len();

        match usize::try_from(index) {
            Ok(i) if i < len => {
                self.index = i;
                Ok(())
            }
            _ => Err(ShowcaseError::OutOfRange { index, len }),
        }
    }

    /// Items with their position and whether they are the active one.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &'a T, bool)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (i, item, i == self.index))
    }
}
