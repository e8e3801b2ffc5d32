//! Content loading: front matter parsing and the post store.

mod front_matter;
mod store;
mod types;

pub use front_matter::FrontMatter;
pub use store::PostStore;
pub use types::PostMeta;
