//! Image passes: captioned figures, plain figures, and asset path rewriting.
//!
//! The captioned pass must run before the generic pass so that an image
//! followed by its caption annotation is consumed as one figure instead
//! of being wrapped twice.

use crate::config::SiteConfig;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// `![alt](src)` followed by a blank line and a `> **Label**: description`
// caption annotation.
static RE_CAPTIONED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)\n\n> \*\*([^*\n]+)\*\*: ([^\n]+)").unwrap()
});

// Any remaining `![alt](src)` reference.
static RE_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

// `src="..."` attributes, for the path rewrite pass.
static RE_SRC_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"src="([^"]+)""#).unwrap());

/// Animated-asset extensions that earn the "animated" badge.
const ANIMATED_EXTENSIONS: &[&str] = &[".gif"];

/// Convert image references with caption annotations into single figures.
pub fn captioned_images(input: &str) -> String {
    RE_CAPTIONED
        .replace_all(input, |caps: &Captures| {
            let (alt, src, description) = (&caps[1], &caps[2], &caps[4]);
            let badge = if is_animated(src) {
                "<span class=\"badge-animated\">animated</span>"
            } else {
                ""
            };
            format!(
                "<figure class=\"content-image\">\
                 <img src=\"{}\" alt=\"{}\" loading=\"lazy\" />{badge}\
                 <figcaption><strong>{}</strong> <em>{}</em></figcaption>\
                 </figure>",
                escape_attr(src),
                escape_attr(alt),
                escape_text(alt),
                escape_text(description),
            )
        })
        .into_owned()
}

/// Convert remaining image references into plain framed figures.
pub fn generic_images(input: &str) -> String {
    RE_IMAGE
        .replace_all(input, |caps: &Captures| {
            let (alt, src) = (&caps[1], &caps[2]);
            format!(
                "<figure class=\"content-image\">\
                 <img src=\"{}\" alt=\"{}\" loading=\"lazy\" />\
                 <figcaption>{}</figcaption>\
                 </figure>",
                escape_attr(src),
                escape_attr(alt),
                escape_text(alt),
            )
        })
        .into_owned()
}

fn is_animated(src: &str) -> bool {
    let src = src.to_lowercase();
    ANIMATED_EXTENSIONS.iter().any(|ext| src.contains(ext))
}

/// Rewrites relative references into generated-image directories to their
/// deployed absolute locations.
///
/// A source like `../../manim-animator-output/descent.gif` becomes
/// `<base_path>/images/manim-animator-output/descent.gif`; everything else
/// passes through untouched.
#[derive(Debug, Clone, Default)]
pub struct AssetRewriter {
    /// (relative prefix, deployed prefix) pairs
    rules: Vec<(String, String)>,
}

impl AssetRewriter {
    pub fn new(image_roots: &[String], base_path: &str) -> Self {
        let rules = image_roots
            .iter()
            .map(|root| {
                (
                    format!("../../{root}"),
                    format!("{base_path}/images/{root}"),
                )
            })
            .collect();
        Self { rules }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.build.image_roots, config.base_path())
    }

    /// Rewrite matching `src` attributes in already-emitted markup.
    pub fn rewrite_sources(&self, input: &str) -> String {
        RE_SRC_ATTR
            .replace_all(input, |caps: &Captures| {
                let src = &caps[1];
                for (from, to) in &self.rules {
                    if let Some(rest) = src.strip_prefix(from.as_str()) {
                        return format!("src=\"{to}{rest}\"");
                    }
                }
                caps[0].to_owned()
            })
            .into_owned()
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
