use std::fmt::Write as _;

use crate::{Block, Document, Inline};

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

pub fn render_html(document: &Document) -> String {
    let mut html = String::new();
    render_blocks(&mut html, &document.blocks);
    html
}

fn render_blocks(out: &mut String, blocks: &[Block]) {
    for block in blocks {
        render_block(out, block);
    }
}

fn render_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { level, id, content } => {
            match id {
                Some(id) => {
                    let _ = write!(out, "<h{level} id=\"{}\">", escape_html(id));
                }
                None => {
                    let _ = write!(out, "<h{level}>");
                }
            }
            render_inlines(out, content);
            let _ = write!(out, "</h{level}>");
        }
        Block::Paragraph(content) => {
            out.push_str("<p>");
            render_inlines(out, content);
            out.push_str("</p>");
        }
        Block::List {
            ordered,
            start,
            items,
        } => {
            let tag = if *ordered { "ol" } else { "ul" };
            match start {
                Some(start) if *ordered && *start != 1 => {
                    let _ = write!(out, "<{tag} start=\"{start}\">");
                }
                _ => {
                    let _ = write!(out, "<{tag}>");
                }
            }
            for item in items {
                out.push_str("<li>");
                render_blocks(out, item);
                out.push_str("</li>");
            }
            let _ = write!(out, "</{tag}>");
        }
        Block::Quote(blocks) => {
            out.push_str("<blockquote>");
            render_blocks(out, blocks);
            out.push_str("</blockquote>");
        }
        Block::Code { lang, text } => {
            match lang {
                Some(lang) => {
                    let _ = write!(out, "<pre><code class=\"language-{}\">", escape_html(lang));
                }
                None => out.push_str("<pre><code>"),
            }
            out.push_str(&escape_html(text));
            out.push_str("</code></pre>");
        }
        Block::Rule => out.push_str("<hr>"),
    }
}

fn render_inlines(out: &mut String, inlines: &[Inline]) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push_str(&escape_html(text)),
            Inline::Code(code) => {
                let _ = write!(out, "<code>{}</code>", escape_html(code));
            }
            Inline::Emphasis(content) => {
                out.push_str("<em>");
                render_inlines(out, content);
                out.push_str("</em>");
            }
            Inline::Strong(content) => {
                out.push_str("<strong>");
                render_inlines(out, content);
                out.push_str("</strong>");
            }
            Inline::Link { href, content } => {
                let external = href.starts_with("http://") || href.starts_with("https://");
                let _ = write!(out, "<a href=\"{}\"", escape_html(href));
                if external {
                    out.push_str(" rel=\"noopener noreferrer\" target=\"_blank\"");
                }
                out.push('>');
                render_inlines(out, content);
                out.push_str("</a>");
            }
            Inline::Break => out.push_str("<br>"),
        }
    }
}
