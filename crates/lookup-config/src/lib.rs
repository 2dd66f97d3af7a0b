//! Configuration loading for the lookup service.
//!
//! Settings are resolved in layers: built-in defaults, an optional TOML file
//! and environment variable overrides. See [`ConfigLoader`].

use thiserror::Error;

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("File not found: {0}")]
	FileNotFound(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Environment variable not found: {0}")]
	EnvVarNotFound(String),

	#[error(
		"invalid log level: \"{0}\", please choose between DEBUG, INFO, WARN or ERROR"
	)]
	InvalidLogLevel(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}
