//! Citation resolution and bibliography formatting.
//!
//! `used_ids` scans a raw body for `[N]` markers; `build_bibliography`
//! turns the deduplicated id set into formatted entries, ascending by id,
//! silently dropping ids the registry does not know.

use super::registry::{Citation, CitationKind, CitationRegistry};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static RE_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(\d+)\]").unwrap());

/// Collect the distinct citation ids referenced in a body.
///
/// Pure and idempotent: the same body always yields the same set.
/// Markers whose digits overflow `u32` are ignored.
pub fn used_ids(body: &str) -> BTreeSet<u32> {
    RE_MARKER
        .captures_iter(body)
        .filter_map(|caps| caps[1].parse().ok())
        .collect()
}

/// Resolve an id set against the registry into formatted entries.
///
/// Output is ascending by id (`BTreeSet` iteration order). Unknown ids
/// contribute nothing.
pub fn build_bibliography<'a>(
    ids: &BTreeSet<u32>,
    registry: &'a CitationRegistry,
) -> Vec<(u32, &'a Citation, String)> {
    ids.iter()
        .filter_map(|&id| registry.get(id).map(|c| (id, c, format_citation(c))))
        .collect()
}

/// Format a citation per its kind's template.
pub fn format_citation(citation: &Citation) -> String {
    let Citation {
        authors,
        title,
        source,
        year,
        ..
    } = citation;
    let head = format!("{authors} ({year}). \"{title}.\" {source}");

    match citation.kind {
        CitationKind::Paper => {
            let mut formatted = head;
            if let Some(volume) = &citation.volume {
                formatted.push_str(&format!(", {volume}"));
            }
            if let Some(pages) = &citation.pages {
                formatted.push_str(&format!(", pp. {pages}"));
            }
            formatted.push('.');
            formatted
        }
        CitationKind::Preprint => format!("{head}. arXiv preprint."),
        CitationKind::Blog | CitationKind::Book | CitationKind::TechReport => {
            format!("{head}.")
        }
    }
}
