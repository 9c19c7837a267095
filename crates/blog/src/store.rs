use gray_matter::{Matter, ParsedEntity, engine::YAML};
use rust_embed::RustEmbed;
use serde::Deserialize;
use time::{Date, macros::format_description};

use crate::{BlogError, Document, TocEntry, parse_markdown, render_html};

const WORDS_PER_MINUTE: usize = 200;

#[derive(RustEmbed)]
#[folder = "content"]
struct Posts;

#[derive(Deserialize)]
struct FrontMatter {
    title: String,
    slug: String,
    date: String,
    author: String,
    category: String,
    excerpt: String,
    #[serde(default)]
    tags: Vec<String>,
    read_time: Option<u32>,
    #[serde(default)]
    tldr: Vec<String>,
    #[serde(default)]
    related: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub date: Date,
    pub author: String,
    pub category: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    /// Minutes.
    pub read_time: u32,
    pub tldr: Vec<String>,
    pub related: Vec<String>,
    pub document: Document,
    pub html: String,
}

impl BlogPost {
    pub fn parse(path: &str, source: &str) -> Result<Self, BlogError> {
        let matter = Matter::<YAML>::new();
        let parsed: ParsedEntity<FrontMatter> =
            matter.parse(source).map_err(|_| BlogError::FrontMatter {
                path: path.to_owned(),
            })?;

        let Some(front) = parsed.data else {
            return Err(BlogError::FrontMatter {
                path: path.to_owned(),
            });
        };

        let date = Date::parse(&front.date, format_description!("[year]-[month]-[day]"))
            .map_err(|_| BlogError::Date {
                path: path.to_owned(),
                value: front.date.to_owned(),
            })?;

        let document = parse_markdown(&parsed.content);
        let read_time = front.read_time.unwrap_or_else(|| {
            document.word_count().div_ceil(WORDS_PER_MINUTE).max(1) as u32
        });
        let html = render_html(&document);

        Ok(Self {
            slug: front.slug,
            title: front.title,
            date,
            author: front.author,
            category: front.category,
            excerpt: front.excerpt,
            tags: front.tags,
            read_time,
            tldr: front.tldr,
            related: front.related,
            document,
            html,
        })
    }

    pub fn toc(&self) -> &[TocEntry] {
        &self.document.toc
    }
}

/// All posts, newest first.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    posts: Vec<BlogPost>,
}

impl ContentStore {
    /// Loads the posts embedded in the binary.
    pub fn load() -> Result<Self, BlogError> {
        let mut sources = vec![];

        for path in Posts::iter().filter(|path| path.ends_with(".md")) {
            let Some(file) = Posts::get(&path) else {
                continue;
            };

            let source = String::from_utf8(file.data.into_owned()).map_err(|_| {
                BlogError::Encoding {
                    path: path.to_string(),
                }
            })?;

            sources.push((path.to_string(), source));
        }

        let store = Self::from_sources(sources)?;
        tracing::info!(posts = store.posts.len(), "blog posts loaded");

        Ok(store)
    }

    pub fn from_sources<P, S>(sources: impl IntoIterator<Item = (P, S)>) -> Result<Self, BlogError>
    where
        P: AsRef<str>,
        S: AsRef<str>,
    {
        let mut posts: Vec<BlogPost> = vec![];

        for (path, source) in sources {
            let post = BlogPost::parse(path.as_ref(), source.as_ref())?;
            if posts.iter().any(|p| p.slug == post.slug) {
                return Err(BlogError::DuplicateSlug(post.slug));
            }
            posts.push(post);
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        Ok(Self { posts })
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn latest(&self, count: usize) -> &[BlogPost] {
        &self.posts[..count.min(self.posts.len())]
    }

    pub fn post(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn related(&self, post: &BlogPost) -> Vec<&BlogPost> {
        post.related
            .iter()
            .filter_map(|slug| self.post(slug))
            .filter(|related| related.slug != post.slug)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST: &str = r#"---
title: Hello
slug: hello
date: "2025-01-15"
author: ARCALAB Team
category: Notes
excerpt: First post
---

## Intro

Some words here.
"#;

    #[test]
    fn test_parse_post() {
        let post = BlogPost::parse("hello.md", POST).unwrap();

        assert_eq!(post.slug, "hello");
        assert_eq!(post.date.to_string(), "2025-01-15");
        assert_eq!(post.read_time, 1);
        assert_eq!(post.toc()[0].id, "intro");
        assert!(post.html.starts_with("<h2 id=\"intro\">Intro</h2>"));
    }

    #[test]
    fn test_missing_front_matter() {
        assert_eq!(
            BlogPost::parse("bare.md", "# Just text\n").unwrap_err(),
            BlogError::FrontMatter {
                path: "bare.md".to_owned()
            }
        );
    }

    #[test]
    fn test_bad_date() {
        let source = POST.replace("2025-01-15", "January 15");
        assert!(matches!(
            BlogPost::parse("hello.md", &source),
            Err(BlogError::Date { .. })
        ));
    }

    #[test]
    fn test_duplicate_slug() {
        let err = ContentStore::from_sources([("a.md", POST), ("b.md", POST)]).unwrap_err();
        assert_eq!(err, BlogError::DuplicateSlug("hello".to_owned()));
    }
}
