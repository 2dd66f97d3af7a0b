//! Immutable ordered index with binary search lookups.

use lookup_types::{SearchError, SearchResult, Searcher};

/// Ordered sequence of numbers loaded at startup.
///
/// Lookups assume ascending order. The builder keeps file order unless it is
/// asked to sort, so an unsorted source yields unreliable answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
	entries: Vec<u64>,
}

impl Index {
	pub fn new(entries: Vec<u64>) -> Self {
		Self { entries }
	}

	pub fn as_slice(&self) -> &[u64] {
		&self.entries
	}

	/// Whether every adjacent pair is in ascending order.
	pub fn is_sorted(&self) -> bool {
		self.entries.windows(2).all(|pair| pair[0] <= pair[1])
	}
}

impl From<Vec<u64>> for Index {
	fn from(entries: Vec<u64>) -> Self {
		Self::new(entries)
	}
}

impl Searcher for Index {
	fn search(&self, n: u64) -> SearchResult<usize> {
		self.entries
			.binary_search(&n)
			.map_err(|_| SearchError::NumberNotFound)
	}

	fn len(&self) -> usize {
		self.entries.len()
	}
}
