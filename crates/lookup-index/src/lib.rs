//! In-memory number index and its builder.
//!
//! The index is built once from a line-oriented source at startup and is
//! read-only afterwards, so it can be shared across request tasks without any
//! synchronization.
//!
//! # Components
//!
//! - `builder`: reads lines, parses them as `u64` and tolerates malformed input
//! - `index`: the immutable ordered sequence and its `Searcher` implementation

pub mod builder;
pub mod errors;
pub mod index;

pub use builder::{IndexBuilder, IngestReport};
pub use errors::{IndexError, Result};
pub use index::Index;
