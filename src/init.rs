//! Site initialization module.
//!
//! Creates new site structure with default configuration and a sample post.

use crate::cli::Commands;
use crate::config::SiteConfig;
use crate::log;
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Default config filename
const CONFIG_FILE: &str = "quill.toml";

/// Default site directory structure
const SITE_DIRS: &[&str] = &["content/posts", "assets/images"];

const SAMPLE_POST: &str = "---\n\
title: Hello, Quill\n\
date: 2024-01-01\n\
category: Meta\n\
tags: [meta]\n\
description: Your first post\n\
---\n\
# Hello\n\n\
This is **your first post**. Math like $e^{i\\pi} + 1 = 0$ works,\n\
and so do citations [1].\n\n\
* Edit content/posts/hello.md\n\
* Run `quill build`\n";

/// Create a new site with default structure
pub fn new_site(config: &'static SiteConfig) -> Result<()> {
    let root = config.get_root();
    let has_name = matches!(
        &config.get_cli().command,
        Commands::Init { name: Some(_) }
    );

    // Safety check: if no name was provided (init in current dir),
    // the directory must be completely empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `quill init <SITE_NAME>` to create in a subdirectory."
        );
    }

    init_site_structure(root)?;
    init_default_config(root)?;
    fs::write(root.join("content/posts/hello.md"), SAMPLE_POST)
        .context("Failed to write sample post")?;

    log!("init"; "created site at {}", root.display());
    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(root: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(root.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Create site directory structure
fn init_site_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `quill init <SITE_NAME>` instead.",
                path.display()
            );
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}
