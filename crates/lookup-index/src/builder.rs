//! Index ingestion from line-oriented sources.

use crate::errors::{IndexError, Result};
use crate::index::Index;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Summary of a single ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
	/// Lines seen before end-of-stream
	pub lines_read: usize,
	/// Lines parsed into the index
	pub accepted: usize,
	/// 1-based numbers of lines that were skipped
	pub skipped_lines: Vec<usize>,
	/// Adjacent accepted values found in descending order
	pub out_of_order: usize,
}

/// Builds an [`Index`] from newline-delimited decimal numbers.
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
	sort_on_load: bool,
}

impl IndexBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sort the ingested values instead of trusting the source order.
	pub fn with_sort_on_load(mut self, sort: bool) -> Self {
		self.sort_on_load = sort;
		self
	}

	pub fn build<R: BufRead>(&self, reader: R) -> Result<Index> {
		self.build_with_report(reader).map(|(index, _)| index)
	}

	/// Open `path` and ingest it.
	pub fn build_from_path<P: AsRef<Path>>(&self, path: P) -> Result<(Index, IngestReport)> {
		let path = path.as_ref();
		let file = File::open(path).map_err(|source| IndexError::Open {
			path: path.to_path_buf(),
			source,
		})?;

		self.build_with_report(BufReader::new(file))
	}

	/// Read `reader` until end-of-stream, skipping lines that are not a `u64`.
	///
	/// Only a failing read aborts ingestion. Malformed lines are logged with
	/// their line number and dropped.
	pub fn build_with_report<R: BufRead>(&self, mut reader: R) -> Result<(Index, IngestReport)> {
		let mut entries = Vec::new();
		let mut report = IngestReport::default();
		let mut line = Vec::new();

		loop {
			line.clear();
			let line_number = report.lines_read + 1;

			let read = reader
				.read_until(b'\n', &mut line)
				.map_err(|source| IndexError::Read {
					line: line_number,
					source,
				})?;
			if read == 0 {
				debug!("EOF for input file");
				break;
			}
			report.lines_read = line_number;

			match parse_line(&line) {
				Some(n) => {
					if entries.last().is_some_and(|prev| *prev > n) {
						report.out_of_order += 1;
					}
					entries.push(n);
				}
				None => {
					warn!(line_number, "invalid input value");
					report.skipped_lines.push(line_number);
				}
			}
		}

		report.accepted = entries.len();

		if report.out_of_order > 0 {
			if self.sort_on_load {
				info!(
					out_of_order = report.out_of_order,
					"sorting input values"
				);
				entries.sort_unstable();
			} else {
				// Warnings are reserved for skipped lines
				info!(
					out_of_order = report.out_of_order,
					"input values are not in ascending order, lookups may miss present values"
				);
			}
		}

		Ok((Index::new(entries), report))
	}
}

/// Strip the line terminator and parse a base-10 `u64`.
fn parse_line(raw: &[u8]) -> Option<u64> {
	let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
	let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

	std::str::from_utf8(raw).ok()?.parse().ok()
}
