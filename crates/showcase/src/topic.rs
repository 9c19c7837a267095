use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

use crate::ShowcaseError;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    #[default]
    Marketplace,
    Workstation,
    Plans,
    Resources,
}

impl Topic {
    /// Order used when cycling with the arrow keys.
    pub const CYCLE: [Topic; 4] = [
        Topic::Marketplace,
        Topic::Workstation,
        Topic::Plans,
        Topic::Resources,
    ];

    /// Order of the tab buttons on the card.
    pub const TABS: [Topic; 4] = [
        Topic::Workstation,
        Topic::Marketplace,
        Topic::Plans,
        Topic::Resources,
    ];

    pub fn slug(&self) -> &str {
        self.as_ref()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Topic::Marketplace => "Marketplace",
            Topic::Workstation => "Workstation",
            Topic::Plans => "Plans",
            Topic::Resources => "Resources",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Topic::Marketplace => 'm',
            Topic::Workstation => 'w',
            Topic::Plans => 'p',
            Topic::Resources => 'r',
        }
    }

    fn position(&self) -> usize {
        Self::CYCLE.iter().position(|t| t == self).unwrap_or_default()
    }

    pub fn next(&self) -> Topic {
        Self::CYCLE[(self.position() + 1) % Self::CYCLE.len()]
    }

    pub fn previous(&self) -> Topic {
        Self::CYCLE[(self.position() + Self::CYCLE.len() - 1) % Self::CYCLE.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    Escape,
    Jump(Topic),
}

impl FromStr for Key {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "ArrowRight" => Key::ArrowRight,
            "ArrowLeft" => Key::ArrowLeft,
            "Escape" => Key::Escape,
            other => match other.to_ascii_lowercase().as_str() {
                "w" => Key::Jump(Topic::Workstation),
                "m" => Key::Jump(Topic::Marketplace),
                "p" => Key::Jump(Topic::Plans),
                "r" => Key::Jump(Topic::Resources),
                _ => return Err(ShowcaseError::UnknownKey(s.to_owned())),
            },
        };

        Ok(key)
    }
}

const FRAGMENT_KEY: &str = "giantcard=";

/// Which topic the card shows and whether it is open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TopicSelection {
    active: Topic,
    expanded: bool,
}

impl TopicSelection {
    pub fn new(active: Topic, expanded: bool) -> Self {
        Self { active, expanded }
    }

    /// Reads `giantcard=<slug>` out of a location fragment. A fragment carrying
    /// the key opens the card; an unknown slug lands on the default topic.
    pub fn from_fragment(fragment: &str) -> Self {
        let lower = fragment.to_ascii_lowercase();

        let Some(start) = lower.find(FRAGMENT_KEY) else {
            return Self::default();
        };

        let slug: String = lower[start + FRAGMENT_KEY.len()..]
            .chars()
            .take_while(char::is_ascii_alphabetic)
            .collect();

        Self {
            active: slug.parse().unwrap_or_default(),
            expanded: true,
        }
    }

    /// The fragment describing this selection, none while collapsed.
    pub fn fragment(&self) -> Option<String> {
        self.expanded
            .then(|| format!("{FRAGMENT_KEY}{}", self.active.slug()))
    }

    pub fn active(&self) -> Topic {
        self.active
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn select(&mut self, topic: Topic) {
        self.active = topic;
        self.expanded = true;
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    pub fn next(&mut self) {
        self.active = self.active.next();
    }

    pub fn previous(&mut self) {
        self.active = self.active.previous();
    }

    /// Applies a keyboard shortcut. Returns whether the key was handled;
    /// every key is ignored while the card is collapsed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.expanded {
            return false;
        }

        match key {
            Key::ArrowRight => self.next(),
            Key::ArrowLeft => self.previous(),
            Key::Escape => self.collapse(),
            Key::Jump(topic) => self.active = topic,
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_collapsed_marketplace() {
        let selection = TopicSelection::default();
        assert_eq!(selection.active(), Topic::Marketplace);
        assert!(!selection.is_expanded());
        assert_eq!(selection.fragment(), None);
    }

    #[test]
    fn test_cycle_order() {
        assert_eq!(Topic::Marketplace.next(), Topic::Workstation);
        assert_eq!(Topic::Resources.next(), Topic::Marketplace);
        assert_eq!(Topic::Marketplace.previous(), Topic::Resources);
    }

    #[test]
    fn test_select_expands() {
        let mut selection = TopicSelection::default();
        selection.select(Topic::Plans);
        assert_eq!(selection, TopicSelection::new(Topic::Plans, true));
    }

    #[test]
    fn test_collapse_is_idempotent() {
        let mut selection = TopicSelection::new(Topic::Plans, true);
        selection.collapse();
        let once = selection;
        selection.collapse();

        assert_eq!(selection, once);
        assert!(!selection.is_expanded());
        assert_eq!(selection.active(), Topic::Plans);
    }

    #[test]
    fn test_keys_are_inert_while_collapsed() {
        let mut selection = TopicSelection::new(Topic::Workstation, false);

        for key in [
            Key::ArrowRight,
            Key::ArrowLeft,
            Key::Escape,
            Key::Jump(Topic::Resources),
        ] {
            assert!(!selection.handle_key(key));
            assert_eq!(selection, TopicSelection::new(Topic::Workstation, false));
        }
    }

    #[test]
    fn test_keys_while_expanded() {
        let mut selection = TopicSelection::new(Topic::Marketplace, true);

        assert!(selection.handle_key(Key::ArrowLeft));
        assert_eq!(selection.active(), Topic::Resources);

        assert!(selection.handle_key("W".parse().unwrap()));
        assert_eq!(selection.active(), Topic::Workstation);

        assert!(selection.handle_key(Key::Escape));
        assert!(!selection.is_expanded());
        assert_eq!(selection.active(), Topic::Workstation);
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!("ArrowRight".parse::<Key>(), Ok(Key::ArrowRight));
        assert_eq!("r".parse::<Key>(), Ok(Key::Jump(Topic::Resources)));
        assert_eq!(
            "x".parse::<Key>(),
            Err(ShowcaseError::UnknownKey("x".to_owned()))
        );
    }

    #[test]
    fn test_fragment_deep_link() {
        let selection = TopicSelection::from_fragment("#giantcard=Plans");
        assert_eq!(selection, TopicSelection::new(Topic::Plans, true));
        assert_eq!(selection.fragment().as_deref(), Some("giantcard=plans"));

        let selection = TopicSelection::from_fragment("#GIANTCARD=unknown");
        assert_eq!(selection, TopicSelection::new(Topic::Marketplace, true));

        assert_eq!(TopicSelection::from_fragment("#top"), TopicSelection::default());
    }
}
