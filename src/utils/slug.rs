//! URL slugification for post filenames.

use deunicode::deunicode;
use std::path::Path;

/// Characters forbidden in slugs and anchors
const FORBIDDEN_CHARS: &[char] = &[
    '<', '>', ':', '|', '?', '*', '#', '\\', '(', ')', '[', ']', '\t', '\r', '\n',
];

/// Derive a URL slug from a file's stem.
///
/// `posts/Attention Is All You Need.md` → `"attention-is-all-you-need"`
pub fn slugify_stem(path: impl AsRef<Path>) -> String {
    let stem = path
        .as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    slugify(&stem)
}

/// Convert arbitrary text to a lowercase ASCII slug.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text.trim());
    let mut slug = String::with_capacity(ascii.len());
    let mut prev_dash = false;

    for c in ascii.chars() {
        if FORBIDDEN_CHARS.contains(&c) {
            continue;
        }
        if c.is_whitespace() || c == '_' {
            if !prev_dash && !slug.is_empty() {
                slug.push('-');
                prev_dash = true;
            }
        } else {
            slug.push(c.to_ascii_lowercase());
            prev_dash = c == '-';
        }
    }

    slug.trim_end_matches('-').to_owned()
}
