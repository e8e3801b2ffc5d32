//! Post metadata types.
//!
//! These types are serialized to JSON and exposed to listing pages.

use serde::Serialize;

/// Metadata for a single post, exposed in `/_data/posts.json`.
#[derive(Debug, Clone, Serialize)]
pub struct PostMeta {
    /// URL slug, derived from the source filename
    pub slug: String,

    /// Post title (falls back to slug when front matter omits it)
    pub title: String,

    /// Publication date as ISO 8601 string (e.g., "2024-01-15")
    pub date: String,

    /// Category name ("Uncategorized" when absent)
    pub category: String,

    /// Tags associated with this post
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Short summary shown on listing pages
    pub description: String,

    /// Author name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Series this post belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,

    /// Ordinal within the series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part: Option<u32>,

    /// Estimated reading time (e.g., "5 min read")
    pub read_time: String,
}
