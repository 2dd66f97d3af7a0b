//! Shared types for the number lookup service.
//!
//! This crate holds the pieces every other crate agrees on: the `Searcher`
//! capability exposed by the index, its error type, and the JSON envelope the
//! HTTP layer writes back to callers.

pub mod api;
pub mod errors;
pub mod searcher;

pub use api::*;
pub use errors::*;
pub use searcher::*;
