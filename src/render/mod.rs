//! The content rendering pipeline.
//!
//! A post body is transformed by a strict left-to-right sequence of total
//! `&str -> String` passes. The order is a correctness invariant:
//!
//! 1. captioned image blocks (consumed before generic images)
//! 2. generic images
//! 3. asset path rewrite for generated-image directories
//! 4. block math `$$...$$`
//! 5. inline math `$...$`
//! 6. citation markers `[N]` (before lists, so digits cannot be
//!    mistaken for ordered-list syntax; before links, so `[N]` is never
//!    half-matched as a link label)
//! 7. headers (`###` before `##` before `#`)
//! 8. list items
//! 9. emphasis and links
//! 10. paragraph wrapping (last, over the remaining plain runs)
//!
//! No pass fails on any input. The math renderer is the only fallible
//! collaborator and its failures are rendered inline (see [`math`]).

mod images;
pub mod math;
mod text;

pub use images::AssetRewriter;
pub use math::{DisplayMode, MathRenderer, MathmlRenderer};

use crate::config::SiteConfig;

/// A configured rendering pipeline. Stateless across calls; renders of
/// different bodies are independent and may run in parallel.
pub struct Pipeline<'a> {
    math: &'a dyn MathRenderer,
    rewriter: AssetRewriter,
}

impl<'a> Pipeline<'a> {
    pub fn new(math: &'a dyn MathRenderer, rewriter: AssetRewriter) -> Self {
        Self { math, rewriter }
    }

    pub fn from_config(math: &'a dyn MathRenderer, config: &SiteConfig) -> Self {
        Self::new(math, AssetRewriter::from_config(config))
    }

    /// Render a raw body into an HTML fragment.
    pub fn render(&self, body: &str) -> String {
        let html = images::captioned_images(body);
        let html = images::generic_images(&html);
        let html = self.rewriter.rewrite_sources(&html);
        let html = math::block_math(&html, self.math);
        let html = math::inline_math(&html, self.math);
        let html = text::citation_markers(&html);
        let html = text::headers(&html);
        let html = text::list_items(&html);
        let html = text::emphasis_and_links(&html);
        text::paragraphs(&html)
    }
}
