//! Citation registry and bibliography assembly.
//!
//! Bodies reference bibliography entries with `[N]` markers. The registry
//! is a fixed table keyed by id; the bibliography for a post is derived
//! per render from the markers actually present in the raw body.

mod bibliography;
mod registry;

pub use bibliography::{build_bibliography, used_ids};
pub use registry::{Citation, CitationKind, CitationRegistry};
