//! Error types for lookups.

use thiserror::Error;

pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Outcome of a lookup that did not produce a position.
///
/// A missing value is an expected answer, not a fault, so callers should not
/// log it as an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
	#[error("could not find given number")]
	NumberNotFound,
}
