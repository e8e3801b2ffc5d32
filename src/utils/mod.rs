pub mod date;
pub mod minify;
pub mod slug;
