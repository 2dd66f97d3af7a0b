//! The search capability consumed by the HTTP layer.

use crate::errors::SearchResult;

/// Point lookup over an ordered collection of numbers.
///
/// Implementations must be safe to share between request tasks; the service
/// holds one behind an `Arc<dyn Searcher>`.
pub trait Searcher: Send + Sync {
	/// Returns the zero-based position of `n`, or
	/// [`SearchError::NumberNotFound`](crate::SearchError::NumberNotFound).
	fn search(&self, n: u64) -> SearchResult<usize>;

	/// Number of entries available to search.
	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
