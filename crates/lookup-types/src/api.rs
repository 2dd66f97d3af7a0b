//! API types for the lookup HTTP API.

use serde::{Deserialize, Serialize};

/// Message returned when a queried number is absent from the index.
pub const NOT_FOUND_MESSAGE: &str = "couldn't find valid index number for given input";

/// Response envelope for `GET /search/{n}`.
///
/// Exactly one of the two fields is populated; both are always serialized so
/// clients see an explicit `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
	/// Zero-based position of the number in the index
	pub index: Option<u64>,
	/// Human-readable reason the lookup failed
	#[serde(rename = "errorMessage")]
	pub error_message: Option<String>,
}

impl SearchResponse {
	pub fn found(index: u64) -> Self {
		Self {
			index: Some(index),
			error_message: None,
		}
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self {
			index: None,
			error_message: Some(message.into()),
		}
	}

	/// Envelope for a path parameter that is not a non-negative integer.
	pub fn not_a_number(input: &str) -> Self {
		Self::error(format!("\"{}\" is not a number", input))
	}

	pub fn not_found() -> Self {
		Self::error(NOT_FOUND_MESSAGE)
	}
}

/// Response for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
	pub status: String,
	/// Number of entries loaded into the index
	pub entries: usize,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_found_serializes_null_error() {
		let body = serde_json::to_string(&SearchResponse::found(1)).unwrap();
		assert_eq!(body, r#"{"index":1,"errorMessage":null}"#);
	}

	#[test]
	fn test_not_a_number_quotes_input() {
		let body = serde_json::to_string(&SearchResponse::not_a_number("oops")).unwrap();
		assert_eq!(body, r#"{"index":null,"errorMessage":"\"oops\" is not a number"}"#);
	}

	#[test]
	fn test_not_found_message() {
		let response = SearchResponse::not_found();
		assert_eq!(response.index, None);
		assert_eq!(response.error_message.as_deref(), Some(NOT_FOUND_MESSAGE));
	}
}
