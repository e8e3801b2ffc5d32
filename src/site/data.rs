//! Listing data files for index pages.
//!
//! Listing and filtering pages read `/_data/posts.json` and
//! `/_data/tags.json` instead of re-parsing documents.

use crate::content::PostMeta;
use serde::Serialize;
use std::collections::BTreeMap;

/// Tags index: tag name to posts carrying it, alphabetical by tag.
pub type TagsIndex = BTreeMap<String, Vec<TaggedPost>>;

/// A post reference within a tag index.
#[derive(Debug, Clone, Serialize)]
pub struct TaggedPost {
    pub slug: String,
    pub title: String,
    pub date: String,
}

/// Serialize the post list (already in date-descending order).
pub fn posts_to_json(posts: &[PostMeta]) -> String {
    serde_json::to_string_pretty(posts).unwrap_or_else(|_| "[]".to_string())
}

/// Build the tags index from post metadata.
///
/// Posts within each tag keep the input (date-descending) order.
pub fn tags_index(posts: &[PostMeta]) -> TagsIndex {
    let mut tags: TagsIndex = BTreeMap::new();
    for post in posts {
        for tag in &post.tags {
            tags.entry(tag.clone()).or_default().push(TaggedPost {
                slug: post.slug.clone(),
                title: post.title.clone(),
                date: post.date.clone(),
            });
        }
    }
    tags
}

/// Serialize the tags index.
pub fn tags_to_json(posts: &[PostMeta]) -> String {
    serde_json::to_string_pretty(&tags_index(posts)).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, date: &str, tags: &[&str]) -> PostMeta {
        PostMeta {
            slug: slug.into(),
            title: slug.to_uppercase(),
            date: date.into(),
            category: "Test".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            description: String::new(),
            author: None,
            series: None,
            part: None,
            read_time: "1 min read".into(),
        }
    }

    #[test]
    fn test_tags_index_groups_and_sorts() {
        let posts = vec![
            post("new", "2024-02-01", &["rust", "math"]),
            post("old", "2023-01-01", &["rust"]),
        ];
        let index = tags_index(&posts);

        let keys: Vec<_> = index.keys().cloned().collect();
        assert_eq!(keys, vec!["math", "rust"]);

        let rust: Vec<_> = index["rust"].iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(rust, vec!["new", "old"]);
    }

    #[test]
    fn test_posts_json_round_trips() {
        let posts = vec![post("a", "2024-01-01", &["t"])];
        let json = posts_to_json(&posts);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["slug"], "a");
        assert_eq!(parsed[0]["read_time"], "1 min read");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(posts_to_json(&[]), "[]");
        assert_eq!(tags_to_json(&[]), "{}");
    }
}
