//! Command-line interface definitions.

use clap::Parser;
use lookup_config::{ConfigLoader, LogLevel};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lookup-service")]
#[command(about = "Serves position lookups over a sorted list of numbers", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	/// File with one unsigned integer per line
	#[arg(value_name = "INPUT", default_value = "input.txt")]
	pub input: PathBuf,

	/// Path to configuration file
	#[arg(short, long, env = "CONFIG_FILE", value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Log level override (DEBUG, INFO, WARN, ERROR)
	#[arg(short, long, value_name = "LEVEL")]
	pub log_level: Option<LogLevel>,

	/// Service port override
	#[arg(short, long)]
	pub port: Option<u16>,

	/// Ingest the input file, report and exit without serving
	#[arg(long)]
	pub check: bool,
}

/// Configuration file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "lookup.toml";

impl Args {
	/// Loader for the selected config file with command-line overrides applied.
	pub fn config_loader(&self) -> ConfigLoader {
		let loader = match &self.config {
			Some(path) => ConfigLoader::new().with_file(path),
			None => ConfigLoader::new().with_optional_file(DEFAULT_CONFIG_FILE),
		};

		loader
			.with_log_level(self.log_level)
			.with_port(self.port)
	}
}
