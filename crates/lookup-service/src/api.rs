//! HTTP API for number lookups.
//!
//! Routes:
//!
//! - `GET /search/{n}`: position of `n` in the index, wrapped in a
//!   [`SearchResponse`] envelope
//! - `GET /health`: liveness plus the number of loaded entries
//!
//! The router only sees the index through `Arc<dyn Searcher>`, so tests can
//! substitute any implementation.

use axum::{
	extract::{rejection::PathRejection, Path, State},
	http::{StatusCode, Uri},
	response::Json,
	routing::get,
	Router,
};
use lookup_types::{HealthResponse, SearchError, SearchResponse, Searcher};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::debug;

#[derive(Clone)]
pub struct AppState {
	pub searcher: Arc<dyn Searcher>,
}

/// Build the application router around `searcher`.
pub fn router(searcher: Arc<dyn Searcher>) -> Router {
	Router::new()
		.route("/search/{n}", get(handle_search))
		.route("/health", get(health_check))
		.with_state(AppState { searcher })
		.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

async fn handle_search(
	State(state): State<AppState>,
	uri: Uri,
	param: Result<Path<String>, PathRejection>,
) -> (StatusCode, Json<SearchResponse>) {
	let param = match param {
		Ok(Path(param)) => param,
		Err(rejection) => {
			let input = raw_segment(&uri);
			debug!(input = %input, %rejection, "rejected undecodable search input");
			return (
				StatusCode::BAD_REQUEST,
				Json(SearchResponse::not_a_number(&input)),
			);
		}
	};

	let n = match param.parse::<u64>() {
		Ok(n) => n,
		Err(_) => {
			debug!(input = %param, "rejected non-numeric search input");
			return (
				StatusCode::BAD_REQUEST,
				Json(SearchResponse::not_a_number(&param)),
			);
		}
	};

	match state.searcher.search(n) {
		Ok(position) => (StatusCode::OK, Json(SearchResponse::found(position as u64))),
		Err(SearchError::NumberNotFound) => {
			debug!(n, "number not found");
			(StatusCode::NOT_FOUND, Json(SearchResponse::not_found()))
		}
	}
}

/// Last path segment, percent-decoded with invalid UTF-8 replaced.
fn raw_segment(uri: &Uri) -> String {
	let segment = uri.path().rsplit('/').next().unwrap_or_default();
	String::from_utf8_lossy(&urlencoding::decode_binary(segment.as_bytes())).into_owned()
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
	Json(HealthResponse {
		status: "ok".to_string(),
		entries: state.searcher.len(),
	})
}
