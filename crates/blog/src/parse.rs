use std::collections::HashSet;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};

use crate::{Block, Document, Inline, TocEntry, slugify};

enum Frame {
    Root(Vec<Block>),
    Quote(Vec<Block>),
    List {
        ordered: bool,
        start: Option<u64>,
        items: Vec<Vec<Block>>,
    },
    // tight list items carry their text without a paragraph
    Item {
        blocks: Vec<Block>,
        pending: Vec<Inline>,
    },
    Paragraph(Vec<Inline>),
    Heading {
        level: u8,
        content: Vec<Inline>,
    },
    Code {
        lang: Option<String>,
        text: String,
    },
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Link {
        href: Option<String>,
        content: Vec<Inline>,
    },
    Unwrapped(Vec<Inline>),
    Dropped,
}

struct Builder {
    frames: Vec<Frame>,
    ids: HashSet<String>,
    toc: Vec<TocEntry>,
}

fn append(inlines: &mut Vec<Inline>, inline: Inline) {
    if let (Some(Inline::Text(last)), Inline::Text(text)) = (inlines.last_mut(), &inline) {
        last.push_str(text);
        return;
    }

    inlines.push(inline);
}

impl Builder {
    fn new() -> Self {
        Self {
            frames: vec![Frame::Root(vec![])],
            ids: HashSet::new(),
            toc: vec![],
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            Tag::Paragraph => Frame::Paragraph(vec![]),
            Tag::Heading { level, .. } => Frame::Heading {
                level: level as u8,
                content: vec![],
            },
            Tag::BlockQuote(_) => Frame::Quote(vec![]),
            Tag::CodeBlock(kind) => Frame::Code {
                lang: match kind {
                    CodeBlockKind::Fenced(lang) => lang
                        .split(',')
                        .next()
                        .map(str::trim)
                        .filter(|lang| !lang.is_empty())
                        .map(str::to_owned),
                    CodeBlockKind::Indented => None,
                },
                text: String::new(),
            },
            Tag::List(start) => Frame::List {
                ordered: start.is_some(),
                start,
                items: vec![],
            },
            Tag::Item => Frame::Item {
                blocks: vec![],
                pending: vec![],
            },
            Tag::Emphasis => Frame::Emphasis(vec![]),
            Tag::Strong => Frame::Strong(vec![]),
            Tag::Link { dest_url, .. } => Frame::Link {
                href: safe_href(&dest_url),
                content: vec![],
            },
            Tag::HtmlBlock => Frame::Dropped,
            _ => Frame::Unwrapped(vec![]),
        };

        self.frames.push(frame);
    }

    fn end(&mut self) {
        if self.frames.len() <= 1 {
            return;
        }

        let Some(frame) = self.frames.pop() else {
            return;
        };

        match frame {
            Frame::Root(_) | Frame::Dropped => {}
            Frame::Paragraph(content) => self.push_block(Block::Paragraph(content)),
            Frame::Heading { level, content } => {
                let id = matches!(level, 2 | 3).then(|| self.heading_id(level, &content));
                self.push_block(Block::Heading { level, id, content });
            }
            Frame::Quote(blocks) => self.push_block(Block::Quote(blocks)),
            Frame::Code { lang, text } => self.push_block(Block::Code { lang, text }),
            Frame::List {
                ordered,
                start,
                items,
            } => self.push_block(Block::List {
                ordered,
                start,
                items,
            }),
            Frame::Item {
                mut blocks,
                pending,
            } => {
                if !pending.is_empty() {
                    blocks.push(Block::Paragraph(pending));
                }
                if let Some(Frame::List { items, .. }) = self.frames.last_mut() {
                    items.push(blocks);
                }
            }
            Frame::Emphasis(content) => self.push_inline(Inline::Emphasis(content)),
            Frame::Strong(content) => self.push_inline(Inline::Strong(content)),
            Frame::Link {
                href: Some(href),
                content,
            } => self.push_inline(Inline::Link { href, content }),
            Frame::Link {
                href: None,
                content,
            }
            | Frame::Unwrapped(content) => {
                for inline in content {
                    self.push_inline(inline);
                }
            }
        }
    }

    fn text(&mut self, value: &str) {
        if let Some(Frame::Code { text, .. }) = self.frames.last_mut() {
            text.push_str(value);
            return;
        }

        self.push_inline(Inline::Text(value.to_owned()));
    }

    fn push_inline(&mut self, inline: Inline) {
        match self.frames.last_mut() {
            Some(
                Frame::Paragraph(content)
                | Frame::Heading { content, .. }
                | Frame::Emphasis(content)
                | Frame::Strong(content)
                | Frame::Link { content, .. }
                | Frame::Unwrapped(content)
                | Frame::Item {
                    pending: content, ..
                },
            ) => append(content, inline),
            _ => {}
        }
    }

    fn push_block(&mut self, block: Block) {
        match self.frames.last_mut() {
            Some(Frame::Root(blocks) | Frame::Quote(blocks)) => blocks.push(block),
            Some(Frame::Item { blocks, pending }) => {
                if !pending.is_empty() {
                    blocks.push(Block::Paragraph(std::mem::take(pending)));
                }
                blocks.push(block);
            }
            _ => {}
        }
    }

    fn heading_id(&mut self, level: u8, content: &[Inline]) -> String {
        let text = Inline::plain_text(content);
        let mut slug = slugify(&text);
        if slug.is_empty() {
            slug = "section".to_owned();
        }

        let mut id = slug.clone();
        let mut n = 1;
        while self.ids.contains(&id) {
            n += 1;
            id = format!("{slug}-{n}");
        }
        self.ids.insert(id.clone());

        self.toc.push(TocEntry {
            id: id.clone(),
            text: text.trim().to_owned(),
            level,
        });

        id
    }

    fn finish(mut self) -> Document {
        while self.frames.len() > 1 {
            self.end();
        }

        let blocks = match self.frames.pop() {
            Some(Frame::Root(blocks)) => blocks,
            _ => vec![],
        };

        Document {
            blocks,
            toc: self.toc,
        }
    }
}

/// Keeps relative links and http, https and mailto URLs. Anything else, such
/// as `javascript:` or `data:`, is refused and the link becomes plain text.
pub fn safe_href(url: &str) -> Option<String> {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();

    match cleaned.find(':') {
        Some(colon) if !cleaned[..colon].contains(['/', '?', '#']) => {
            let scheme = cleaned[..colon].to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto").then_some(cleaned)
        }
        _ => Some(cleaned),
    }
}

/// Parses markdown into a document. Raw HTML is dropped.
pub fn parse_markdown(markdown: &str) -> Document {
    let mut builder = Builder::new();

    for event in Parser::new_ext(markdown, Options::empty()) {
        match event {
            Event::Start(tag) => builder.start(tag),
            Event::End(_) => builder.end(),
            Event::Text(text) => builder.text(&text),
            Event::Code(code) => builder.push_inline(Inline::Code(code.to_string())),
            Event::SoftBreak => builder.push_inline(Inline::Text(" ".to_owned())),
            Event::HardBreak => builder.push_inline(Inline::Break),
            Event::Rule => builder.push_block(Block::Rule),
            _ => {}
        }
    }

    builder.finish()
}
