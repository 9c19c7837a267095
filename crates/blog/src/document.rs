#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Code(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Link { href: String, content: Vec<Inline> },
    Break,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading {
        level: u8,
        id: Option<String>,
        content: Vec<Inline>,
    },
    Paragraph(Vec<Inline>),
    List {
        ordered: bool,
        start: Option<u64>,
        items: Vec<Vec<Block>>,
    },
    Quote(Vec<Block>),
    Code {
        lang: Option<String>,
        text: String,
    },
    Rule,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TocEntry {
    pub id: String,
    pub text: String,
    pub level: u8,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub blocks: Vec<Block>,
    pub toc: Vec<TocEntry>,
}

impl Inline {
    pub fn plain_text(inlines: &[Inline]) -> String {
        let mut text = String::new();
        for inline in inlines {
            inline.push_text(&mut text);
        }
        text
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Inline::Text(text) | Inline::Code(text) => out.push_str(text),
            Inline::Emphasis(content)
            | Inline::Strong(content)
            | Inline::Link { content, .. } => {
                for inline in content {
                    inline.push_text(out);
                }
            }
            Inline::Break => out.push(' '),
        }
    }
}

impl Block {
    fn push_text(&self, out: &mut String) {
        match self {
            Block::Heading { content, .. } | Block::Paragraph(content) => {
                out.push_str(&Inline::plain_text(content));
                out.push(' ');
            }
            Block::List { items, .. } => {
                for block in items.iter().flatten() {
                    block.push_text(out);
                }
            }
            Block::Quote(blocks) => {
                for block in blocks {
                    block.push_text(out);
                }
            }
            Block::Code { text, .. } => {
                out.push_str(text);
                out.push(' ');
            }
            Block::Rule => {}
        }
    }
}

impl Document {
    pub fn word_count(&self) -> usize {
        let mut text = String::new();
        for block in &self.blocks {
            block.push_text(&mut text);
        }
        text.split_whitespace().count()
    }
}

/// Lowercase, alphanumeric runs joined by single dashes.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("What's Next? AI & You"), "what-s-next-ai-you");
        assert_eq!(slugify("  "), "");
    }
}
