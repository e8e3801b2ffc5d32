//! Page assembly and listing data generation.

mod data;
mod page;

pub use data::{posts_to_json, tags_index, tags_to_json};
pub use page::render_post_page;
