//! `[build]` section configuration.
//!
//! Contains build settings including paths, minification and the
//! asset rewrite rule for generated image directories.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in quill.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// content = "content/posts"   # Source directory
/// output = "public"           # Output directory
/// minify = true               # Minify HTML
/// image_roots = ["excalidraw-generator-output", "manim-animator-output"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Content source directory (markup documents).
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Minify HTML output (removes whitespace).
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Clear output directory before each build.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// Generated-image directory names whose relative references are
    /// rewritten to `/images/<name>/...` in rendered bodies.
    #[serde(default = "defaults::build::image_roots")]
    #[educe(Default = defaults::build::image_roots())]
    pub image_roots: Vec<String>,
}
