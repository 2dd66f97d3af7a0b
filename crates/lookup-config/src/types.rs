//! Configuration types for the lookup service.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Complete service configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
	/// HTTP server and logging settings
	pub service: ServiceSettings,
	/// Index ingestion settings
	pub index: IndexSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceSettings {
	/// Minimum level of emitted log events
	pub log_level: LogLevel,
	/// Address the HTTP server binds to
	pub host: String,
	/// Port the HTTP server listens on
	pub port: u16,
	/// Upper bound for draining in-flight requests on shutdown
	pub shutdown_timeout_ms: u64,
}

impl Default for ServiceSettings {
	fn default() -> Self {
		Self {
			log_level: LogLevel::Debug,
			host: "0.0.0.0".to_string(),
			port: 8080,
			shutdown_timeout_ms: 1000,
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct IndexSettings {
	/// Sort ingested values instead of requiring a sorted input file
	pub sort_on_load: bool,
}

/// Supported log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum LogLevel {
	Debug,
	Info,
	Warn,
	Error,
}

impl LogLevel {
	/// Directive understood by `tracing_subscriber::EnvFilter`.
	pub fn as_directive(&self) -> &'static str {
		match self {
			LogLevel::Debug => "debug",
			LogLevel::Info => "info",
			LogLevel::Warn => "warn",
			LogLevel::Error => "error",
		}
	}
}

impl FromStr for LogLevel {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_uppercase().as_str() {
			"DEBUG" => Ok(LogLevel::Debug),
			"INFO" => Ok(LogLevel::Info),
			"WARN" => Ok(LogLevel::Warn),
			"ERROR" => Ok(LogLevel::Error),
			_ => Err(ConfigError::InvalidLogLevel(s.to_string())),
		}
	}
}

impl TryFrom<String> for LogLevel {
	type Error = ConfigError;

	fn try_from(value: String) -> Result<Self, ConfigError> {
		value.parse()
	}
}

impl From<LogLevel> for String {
	fn from(level: LogLevel) -> Self {
		level.to_string()
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			LogLevel::Debug => "DEBUG",
			LogLevel::Info => "INFO",
			LogLevel::Warn => "WARN",
			LogLevel::Error => "ERROR",
		};
		write!(f, "{}", name)
	}
}
