//! Error types for index ingestion.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Error, Debug)]
pub enum IndexError {
	#[error("could not open input file {path:?}: {source}")]
	Open {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("could not read line {line}: {source}")]
	Read {
		line: usize,
		#[source]
		source: std::io::Error,
	},
}
