//! Text passes: citation markers, headers, list items, emphasis, links,
//! and final paragraph wrapping.
//!
//! Citation markers are rewritten before the list pass so a line like
//! `3. See [4].` cannot have its marker confused with ordered-list syntax,
//! and before the link pass so `[4]` is never half-matched as a link label.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_CITATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(\d+)\]").unwrap());

static RE_H3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());
static RE_H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static RE_H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());

static RE_UL_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\* (.*)$").unwrap());
static RE_OL_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\d+\. (.*)$").unwrap());

static RE_STRONG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static RE_EM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static RE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Tags that start a block-level run; such runs are not paragraph-wrapped.
const BLOCK_TAGS: &[&str] = &["<h1", "<h2", "<h3", "<li", "<figure", "<div"];

/// Turn `[N]` markers into superscript links targeting bibliography anchors.
///
/// Unregistered ids still get an anchor; whether the anchor resolves is the
/// bibliography builder's concern.
pub fn citation_markers(input: &str) -> String {
    RE_CITATION
        .replace_all(
            input,
            "<sup class=\"citation-ref\"><a href=\"#citation-$1\">$1</a></sup>",
        )
        .into_owned()
}

/// Convert `#`/`##`/`###` lines into headings.
///
/// Three hashes are tested first so `### Title` cannot be consumed by the
/// one-hash rule with leftover hashes in the text.
pub fn headers(input: &str) -> String {
    let input = RE_H3.replace_all(input, "<h3>$1</h3>");
    let input = RE_H2.replace_all(&input, "<h2>$1</h2>");
    RE_H1.replace_all(&input, "<h1>$1</h1>").into_owned()
}

/// Convert `* ` and `N. ` lines into bare list items.
///
/// Items are emitted without a wrapping container; styling supplies the
/// bullet and number glyphs.
pub fn list_items(input: &str) -> String {
    let input = RE_UL_ITEM.replace_all(input, "<li class=\"ul-item\">$1</li>");
    RE_OL_ITEM
        .replace_all(&input, "<li class=\"ol-item\">$1</li>")
        .into_owned()
}

/// Convert `**strong**`, `*emphasis*` and `[text](url)` links.
///
/// Runs after headers, lists and citations so it cannot corrupt attributes
/// of already-emitted tags.
pub fn emphasis_and_links(input: &str) -> String {
    let input = RE_STRONG.replace_all(input, "<strong>$1</strong>");
    let input = RE_EM.replace_all(&input, "<em>$1</em>");
    RE_LINK
        .replace_all(&input, |caps: &Captures| {
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                &caps[2], &caps[1]
            )
        })
        .into_owned()
}

/// Wrap remaining blank-line-separated runs in paragraph tags.
///
/// Runs whose first content is already a block-level tag (headings, list
/// items, figures, math blocks) are passed through unwrapped.
pub fn paragraphs(input: &str) -> String {
    input
        .split("\n\n")
        .filter_map(|run| {
            let trimmed = run.trim();
            if trimmed.is_empty() {
                return None;
            }
            if starts_with_block_tag(trimmed) {
                Some(trimmed.to_owned())
            } else {
                Some(format!("<p>{trimmed}</p>"))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn starts_with_block_tag(run: &str) -> bool {
    BLOCK_TAGS.iter().any(|tag| run.starts_with(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_marker_becomes_anchor_link() {
        let out = citation_markers("as shown in [12].");
        assert_eq!(
            out,
            "as shown in <sup class=\"citation-ref\"><a href=\"#citation-12\">12</a></sup>."
        );
    }

    #[test]
    fn test_citation_marker_unknown_id_still_linked() {
        let out = citation_markers("see [9999]");
        assert!(out.contains("#citation-9999"));
    }

    #[test]
    fn test_named_brackets_left_alone() {
        assert_eq!(citation_markers("[note] stays"), "[note] stays");
    }

    #[test]
    fn test_header_precedence() {
        assert_eq!(headers("### Title"), "<h3>Title</h3>");
        assert_eq!(headers("## Title"), "<h2>Title</h2>");
        assert_eq!(headers("# Title"), "<h1>Title</h1>");
    }

    #[test]
    fn test_header_requires_line_start() {
        assert_eq!(headers("not a # header"), "not a # header");
    }

    #[test]
    fn test_list_items() {
        let out = list_items("* first\n2. second");
        assert_eq!(
            out,
            "<li class=\"ul-item\">first</li>\n<li class=\"ol-item\">second</li>"
        );
    }

    #[test]
    fn test_ordered_item_after_citation_pass() {
        // Pipeline order: citation markers are gone before the list pass,
        // so the digits of a marker cannot produce a bogus ordered item.
        let input = citation_markers("1. step one [3]\n");
        let out = list_items(&input);
        assert!(out.starts_with("<li class=\"ol-item\">step one"));
        assert!(out.contains("#citation-3"));
    }

    #[test]
    fn test_emphasis_and_links() {
        let out = emphasis_and_links("**bold** and *soft* and [docs](https://example.com)");
        assert!(out.contains("<strong>bold</strong>"));
        assert!(out.contains("<em>soft</em>"));
        assert!(out.contains(
            "<a href=\"https://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">docs</a>"
        ));
    }

    #[test]
    fn test_strong_not_eaten_by_em() {
        let out = emphasis_and_links("**bold**");
        assert_eq!(out, "<strong>bold</strong>");
    }

    #[test]
    fn test_paragraph_wrapping() {
        let out = paragraphs("first para\n\nsecond para");
        assert_eq!(out, "<p>first para</p>\n<p>second para</p>");
    }

    #[test]
    fn test_paragraphs_skip_block_runs() {
        let out = paragraphs("<h1>Title</h1>\n\nbody text\n\n<li class=\"ul-item\">x</li>");
        assert_eq!(
            out,
            "<h1>Title</h1>\n<p>body text</p>\n<li class=\"ul-item\">x</li>"
        );
    }

    #[test]
    fn test_paragraphs_drop_empty_runs() {
        let out = paragraphs("a\n\n\n\nb");
        assert_eq!(out, "<p>a</p>\n<p>b</p>");
    }
}
