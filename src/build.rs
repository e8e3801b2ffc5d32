//! Site building orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     ├── PostStore::list_all() ──► post metadata, date-descending
//!     │
//!     ├── render posts in parallel
//!     │       body ──► Pipeline::render ──► fragment
//!     │       body ──► used_ids ──► bibliography
//!     │       both ──► render_post_page ──► public/posts/<slug>/index.html
//!     │
//!     └── write listing data ──► public/_data/{posts,tags}.json
//! ```

use crate::citations::CitationRegistry;
use crate::config::SiteConfig;
use crate::content::PostStore;
use crate::log;
use crate::render::{MathmlRenderer, Pipeline};
use crate::site::{posts_to_json, render_post_page, tags_to_json};
use crate::utils::minify::minify_html;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// Default stylesheet shipped with every build.
const STYLESHEET: &str = include_str!("site/style.css");

/// Build the entire site.
///
/// Pages render in parallel; each render is independent since the pipeline
/// and registry are read-only. If `[build].clean` is set, the output
/// directory is cleared first.
pub fn build_site(config: &'static SiteConfig) -> Result<()> {
    let output = &config.build.output;
    prepare_output_dir(output, config.build.clean)?;

    let store = PostStore::new(&config.build.content);
    let posts = store.list_all();
    log!("build"; "found {} posts in {}", posts.len(), config.build.content.display());

    let math = MathmlRenderer;
    let pipeline = Pipeline::from_config(&math, config);
    let registry = CitationRegistry::global();

    posts.par_iter().try_for_each(|meta| -> Result<()> {
        let (_, body) = store
            .get_by_slug(&meta.slug)
            .with_context(|| format!("post disappeared during build: {}", meta.slug))?;

        let html = render_post_page(meta, &body, &pipeline, registry, config);
        let html = minify_html(html.as_bytes(), config);

        let page_dir = output.join("posts").join(&meta.slug);
        fs::create_dir_all(&page_dir)
            .with_context(|| format!("failed to create {}", page_dir.display()))?;
        let page_path = page_dir.join("index.html");
        fs::write(&page_path, &html)
            .with_context(|| format!("failed to write {}", page_path.display()))?;

        log!("render"; "posts/{}", meta.slug);
        Ok(())
    })?;

    write_listing_data(output, &posts)?;
    fs::write(output.join("style.css"), STYLESHEET)
        .context("failed to write style.css")?;
    log!("build"; "done: {} pages", posts.len());
    Ok(())
}

fn prepare_output_dir(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("failed to clean {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("failed to create {}", output.display()))
}

fn write_listing_data(output: &Path, posts: &[crate::content::PostMeta]) -> Result<()> {
    let data_dir = output.join("_data");
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create {}", data_dir.display()))?;

    fs::write(data_dir.join("posts.json"), posts_to_json(posts))
        .context("failed to write posts.json")?;
    fs::write(data_dir.join("tags.json"), tags_to_json(posts))
        .context("failed to write tags.json")?;
    Ok(())
}
