//! Front matter parsing for post documents.
//!
//! A document starts with an optional `---`-delimited block of
//! `key: value` pairs, followed by the markup body:
//!
//! ```text
//! ---
//! title: Understanding Backpropagation
//! date: 2024-03-02
//! category: Deep Learning
//! tags: [neural-networks, math]
//! ---
//! # Introduction
//! ...
//! ```
//!
//! Missing or malformed fields never fail the load; they recover with
//! defaults when the metadata record is assembled (`into_meta`).

use super::types::PostMeta;
use crate::utils::date;

/// Raw front matter fields, all optional until defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub series: Option<String>,
    pub part: Option<u32>,
    pub read_time: Option<String>,
}

impl FrontMatter {
    /// Split a raw document into front matter and body.
    ///
    /// Total over arbitrary input: a missing or unterminated block yields
    /// empty front matter with the whole input as body.
    pub fn parse(raw: &str) -> (Self, &str) {
        let Some(rest) = raw.strip_prefix("---") else {
            return (Self::default(), raw);
        };
        let Some(end) = rest.find("\n---") else {
            return (Self::default(), raw);
        };

        let block = &rest[..end];
        let body = rest[end + 4..].trim_start_matches(['\r', '\n']);

        let mut fm = Self::default();
        for line in block.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = unquote(value.trim());
            if value.is_empty() {
                continue;
            }
            match key.trim() {
                "title" => fm.title = Some(value.to_owned()),
                "date" => fm.date = Some(value.to_owned()),
                "category" => fm.category = Some(value.to_owned()),
                "tags" => fm.tags = parse_tag_list(value),
                "description" => fm.description = Some(value.to_owned()),
                "author" => fm.author = Some(value.to_owned()),
                "series" => fm.series = Some(value.to_owned()),
                "part" => fm.part = value.parse().ok(),
                "readTime" | "read_time" => fm.read_time = Some(value.to_owned()),
                _ => {}
            }
        }

        (fm, body)
    }

    /// Assemble the final metadata record, filling defaults:
    /// title from slug, date from today, category "Uncategorized",
    /// read time from word count (200 wpm, rounded up).
    pub fn into_meta(self, slug: &str, body: &str) -> PostMeta {
        let date = self
            .date
            .filter(|d| date::is_valid_date(d))
            .unwrap_or_else(date::today);

        let read_time = self
            .read_time
            .unwrap_or_else(|| estimate_read_time(body));

        PostMeta {
            slug: slug.to_owned(),
            title: self.title.unwrap_or_else(|| slug.to_owned()),
            date,
            category: self.category.unwrap_or_else(|| "Uncategorized".to_owned()),
            tags: self.tags,
            description: self.description.unwrap_or_default(),
            author: self.author,
            series: self.series,
            part: self.part,
            read_time,
        }
    }
}

/// Reading time at 200 words per minute, rounded up, minimum one minute.
fn estimate_read_time(body: &str) -> String {
    let words = body.split_whitespace().count();
    let minutes = words.div_ceil(200).max(1);
    format!("{minutes} min read")
}

/// Parse `[a, b, c]` or a bare comma-separated list into tags.
fn parse_tag_list(value: &str) -> Vec<String> {
    value
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|t| unquote(t.trim()).to_owned())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Strip one pair of surrounding quotes, if present.
fn unquote(value: &str) -> &str {
    let stripped = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
    stripped.unwrap_or(value)
}
