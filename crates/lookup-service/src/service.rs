//! Startup steps shared by the binary: configuration and index ingestion.

use crate::cli::Args;
use anyhow::{Context, Result};
use lookup_config::ServiceConfig;
use lookup_index::{Index, IndexBuilder, IngestReport};
use std::path::Path;
use tracing::{error, info};

/// Resolve the configuration: defaults, file, environment, then command line.
pub fn load_config(args: &Args) -> Result<ServiceConfig> {
	let config = args
		.config_loader()
		.load()
		.context("Failed to load configuration")?;

	Ok(config)
}

/// Build the search index from `path`.
///
/// A file that cannot be opened or read is fatal; the error is logged here so
/// it shows up even when the caller only propagates it.
pub fn load_index(path: &Path, config: &ServiceConfig) -> Result<(Index, IngestReport)> {
	info!(file = ?path, "loading search index");

	let result = IndexBuilder::new()
		.with_sort_on_load(config.index.sort_on_load)
		.build_from_path(path);

	match result {
		Ok((index, report)) => {
			info!(
				lines = report.lines_read,
				entries = report.accepted,
				skipped = report.skipped_lines.len(),
				"search index loaded"
			);
			Ok((index, report))
		}
		Err(err) => {
			error!(%err, file = ?path, "could not ingest input file");
			Err(err).context("Failed to build search index")
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use lookup_index::IndexError;
	use lookup_types::{SearchError, Searcher};
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[test]
	fn test_load_index_from_file() {
		let mut file = NamedTempFile::new().unwrap();
		write!(file, "0\n100\noops\n200\n").unwrap();

		let (index, report) = load_index(file.path(), &ServiceConfig::default()).unwrap();

		assert_eq!(index.search(100), Ok(1));
		assert_eq!(report.accepted, 3);
		assert_eq!(report.skipped_lines, vec![3]);
	}

	#[test]
	fn test_load_index_sorts_when_configured() {
		let mut file = NamedTempFile::new().unwrap();
		write!(file, "200\n0\n100\n").unwrap();

		let mut config = ServiceConfig::default();
		config.index.sort_on_load = true;
		let (index, _) = load_index(file.path(), &config).unwrap();

		assert_eq!(index.as_slice(), &[0, 100, 200]);
	}

	#[test]
	fn test_empty_file_builds_empty_index() {
		let file = NamedTempFile::new().unwrap();

		let (index, _) = load_index(file.path(), &ServiceConfig::default()).unwrap();

		assert!(index.is_empty());
		assert_eq!(index.search(5), Err(SearchError::NumberNotFound));
	}

	#[test]
	fn test_unreadable_input_is_fatal() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("input.txt");

		let err = load_index(&missing, &ServiceConfig::default()).unwrap_err();

		assert!(err.to_string().contains("Failed to build search index"));
		assert!(matches!(
			err.downcast_ref::<IndexError>(),
			Some(IndexError::Open { path, .. }) if *path == missing
		));
	}

	#[test]
	fn test_directory_as_input_is_fatal() {
		let dir = tempfile::tempdir().unwrap();

		assert!(load_index(dir.path(), &ServiceConfig::default()).is_err());
	}
}
