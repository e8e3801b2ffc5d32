//! Post store: directory scanning and metadata listing.
//!
//! The store re-reads the content directory on every call. There is no
//! cache to invalidate because builds are one-shot and static.

use super::front_matter::FrontMatter;
use super::types::PostMeta;
use crate::log;
use crate::utils::slug::slugify_stem;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Document extensions recognized as posts.
const POST_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Read-only access to the post content directory.
#[derive(Debug, Clone)]
pub struct PostStore {
    content_dir: PathBuf,
}

impl PostStore {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    /// List all post metadata, sorted by date descending.
    ///
    /// The sort is stable: posts sharing a date keep their encounter order.
    /// Unreadable files are logged and skipped.
    pub fn list_all(&self) -> Vec<PostMeta> {
        let mut posts: Vec<PostMeta> = self
            .post_files()
            .into_iter()
            .filter_map(|path| match fs::read_to_string(&path) {
                Ok(raw) => {
                    let slug = slugify_stem(&path);
                    let (fm, body) = FrontMatter::parse(&raw);
                    Some(fm.into_meta(&slug, body))
                }
                Err(err) => {
                    log!("warn"; "skipping unreadable post {}: {err}", path.display());
                    None
                }
            })
            .collect();

        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    /// Look up a single post by slug, returning metadata and raw body.
    ///
    /// A missing or unreadable document is `None`, never an error.
    pub fn get_by_slug(&self, slug: &str) -> Option<(PostMeta, String)> {
        let path = self
            .post_files()
            .into_iter()
            .find(|path| slugify_stem(path) == slug)?;

        let raw = fs::read_to_string(&path).ok()?;
        let (fm, body) = FrontMatter::parse(&raw);
        let body = body.to_owned();
        Some((fm.into_meta(slug, &body), body))
    }

    /// Posts carrying the given tag, in `list_all` order.
    pub fn posts_by_tag(&self, tag: &str) -> Vec<PostMeta> {
        self.list_all()
            .into_iter()
            .filter(|p| p.tags.iter().any(|t| t == tag))
            .collect()
    }

    /// Posts in the given category, in `list_all` order.
    pub fn posts_by_category(&self, category: &str) -> Vec<PostMeta> {
        self.list_all()
            .into_iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// All distinct tags, sorted alphabetically.
    pub fn all_tags(&self) -> Vec<String> {
        let tags: BTreeSet<String> = self
            .list_all()
            .into_iter()
            .flat_map(|p| p.tags)
            .collect();
        tags.into_iter().collect()
    }

    /// All distinct categories, sorted alphabetically.
    pub fn all_categories(&self) -> Vec<String> {
        let categories: BTreeSet<String> =
            self.list_all().into_iter().map(|p| p.category).collect();
        categories.into_iter().collect()
    }

    /// Collect post files in a deterministic order.
    fn post_files(&self) -> Vec<PathBuf> {
        if !self.content_dir.exists() {
            return Vec::new();
        }

        WalkDir::new(&self.content_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file() && is_post_file(e.path()))
            .map(|e| e.into_path())
            .collect()
    }
}

fn is_post_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| POST_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_post(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn make_store() -> (TempDir, PostStore) {
        let dir = TempDir::new().unwrap();
        let store = PostStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_list_all_sorted_by_date_descending() {
        let (dir, store) = make_store();
        write_post(dir.path(), "old.md", "---\ndate: 2022-01-01\n---\nbody");
        write_post(dir.path(), "new.md", "---\ndate: 2024-06-15\n---\nbody");
        write_post(dir.path(), "mid.md", "---\ndate: 2023-03-10\n---\nbody");

        let posts = store.list_all();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_list_all_stable_tie_order() {
        let (dir, store) = make_store();
        write_post(dir.path(), "a-first.md", "---\ndate: 2024-01-01\n---\nbody");
        write_post(dir.path(), "b-second.md", "---\ndate: 2024-01-01\n---\nbody");

        let posts = store.list_all();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        // Same date: encounter (filename) order is preserved
        assert_eq!(slugs, vec!["a-first", "b-second"]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let store = PostStore::new("/nonexistent/posts");
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_get_by_slug_found_and_missing() {
        let (dir, store) = make_store();
        write_post(
            dir.path(),
            "hello.md",
            "---\ntitle: Hello\ndate: 2024-01-01\n---\nThe body text.",
        );

        let (meta, body) = store.get_by_slug("hello").unwrap();
        assert_eq!(meta.title, "Hello");
        assert_eq!(body, "The body text.");

        assert!(store.get_by_slug("nope").is_none());
    }

    #[test]
    fn test_tag_and_category_queries() {
        let (dir, store) = make_store();
        write_post(
            dir.path(),
            "a.md",
            "---\ndate: 2024-01-02\ncategory: ML\ntags: [rust, math]\n---\nbody",
        );
        write_post(
            dir.path(),
            "b.md",
            "---\ndate: 2024-01-01\ncategory: Notes\ntags: [rust]\n---\nbody",
        );

        assert_eq!(store.posts_by_tag("rust").len(), 2);
        assert_eq!(store.posts_by_tag("math").len(), 1);
        assert_eq!(store.posts_by_category("Notes").len(), 1);
        assert_eq!(store.all_tags(), vec!["math", "rust"]);
        assert_eq!(store.all_categories(), vec!["ML", "Notes"]);
    }

    #[test]
    fn test_non_post_files_ignored() {
        let (dir, store) = make_store();
        write_post(dir.path(), "post.md", "---\ndate: 2024-01-01\n---\nbody");
        write_post(dir.path(), "notes.txt", "not a post");

        assert_eq!(store.list_all().len(), 1);
    }
}
