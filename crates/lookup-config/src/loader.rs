//! Configuration loading from files and environment.

use crate::{ConfigError, LogLevel, ServiceConfig};
use regex::Regex;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader with environment variable substitution
#[derive(Debug, Default)]
pub struct ConfigLoader {
	file_path: Option<PathBuf>,
	file_required: bool,
	env_prefix: String,
	log_level: Option<LogLevel>,
	port: Option<u16>,
}

impl ConfigLoader {
	pub fn new() -> Self {
		Self::default()
	}

	/// Load `path`, failing if it does not exist.
	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_path_buf());
		self.file_required = true;
		self
	}

	/// Load `path` when present, otherwise fall back to defaults.
	pub fn with_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_path_buf());
		self.file_required = false;
		self
	}

	pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.env_prefix = prefix.into();
		self
	}

	/// Fix the log level, ignoring file and environment values.
	pub fn with_log_level(mut self, level: Option<LogLevel>) -> Self {
		self.log_level = level;
		self
	}

	/// Fix the service port, ignoring file and environment values.
	pub fn with_port(mut self, port: Option<u16>) -> Self {
		self.port = port;
		self
	}

	pub fn load(&self) -> Result<ServiceConfig, ConfigError> {
		self.load_with(|name| env::var(name).ok())
	}

	/// Like [`load`](Self::load), resolving variables through `lookup`.
	pub fn load_with<F>(&self, lookup: F) -> Result<ServiceConfig, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut config = match &self.file_path {
			Some(path) if path.exists() => self.load_from_file(path, &lookup)?,
			Some(path) if self.file_required => {
				return Err(ConfigError::FileNotFound(path.display().to_string()));
			}
			Some(path) => {
				debug!("No configuration file at {:?}, using defaults", path);
				ServiceConfig::default()
			}
			None => ServiceConfig::default(),
		};

		self.apply_env_overrides(&mut config, &lookup)?;
		Self::validate_config(&config)?;

		Ok(config)
	}

	fn load_from_file<F>(&self, path: &Path, lookup: &F) -> Result<ServiceConfig, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		debug!("Loading configuration from {:?}", path);
		let content = std::fs::read_to_string(path)?;

		let substituted = Self::substitute_env_vars(&content, lookup)?;

		toml::from_str(&substituted).map_err(|e| ConfigError::ParseError(e.to_string()))
	}

	fn substitute_env_vars<F>(content: &str, lookup: &F) -> Result<String, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut result = content.to_string();

		// Find and replace ${VAR_NAME} patterns
		let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConfigError::ParseError(e.to_string()))?;

		for cap in re.captures_iter(content) {
			let full_match = &cap[0];
			let var_name = &cap[1];

			let value =
				lookup(var_name).ok_or_else(|| ConfigError::EnvVarNotFound(var_name.to_string()))?;

			result = result.replace(full_match, &value);
		}

		Ok(result)
	}

	fn apply_env_overrides<F>(&self, config: &mut ServiceConfig, lookup: &F) -> Result<(), ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		// Explicit overrides win, so their env values are never parsed
		if let Some(level) = self.log_level {
			config.service.log_level = level;
		} else if let Some(level) = lookup(&format!("{}LOG_LEVEL", self.env_prefix)) {
			config.service.log_level = level.parse::<LogLevel>()?;
		}

		if let Some(port) = self.port {
			config.service.port = port;
		} else if let Some(port) = lookup(&format!("{}SERVICE_PORT", self.env_prefix)) {
			config.service.port = port
				.parse()
				.map_err(|e| ConfigError::ValidationError(format!("Invalid service port: {}", e)))?;
		}

		Ok(())
	}

	/// Check settings that deserialize fine but cannot be served.
	pub fn validate_config(config: &ServiceConfig) -> Result<(), ConfigError> {
		if config.service.port == 0 {
			return Err(ConfigError::ValidationError(
				"Service port must be greater than zero".to_string(),
			));
		}

		if config.service.shutdown_timeout_ms == 0 {
			return Err(ConfigError::ValidationError(
				"Shutdown timeout must be greater than zero".to_string(),
			));
		}

		if config.service.host.trim().is_empty() {
			return Err(ConfigError::ValidationError(
				"Service host must not be empty".to_string(),
			));
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;
	use std::io::Write;
	use tempfile::NamedTempFile;

	fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	fn write_config(contents: &str) -> NamedTempFile {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(contents.as_bytes()).unwrap();
		file
	}

	#[test]
	fn test_defaults_without_file() {
		let config = ConfigLoader::new().load_with(|_| None).unwrap();
		assert_eq!(config.service.log_level, LogLevel::Debug);
		assert_eq!(config.service.port, 8080);
	}

	#[test]
	fn test_toml_parsing() {
		let file = write_config(
			r#"
[service]
log_level = "warn"
port = 9000
shutdown_timeout_ms = 250

[index]
sort_on_load = true
"#,
		);

		let config = ConfigLoader::new()
			.with_file(file.path())
			.load_with(|_| None)
			.unwrap();

		assert_eq!(config.service.log_level, LogLevel::Warn);
		assert_eq!(config.service.port, 9000);
		assert_eq!(config.service.shutdown_timeout_ms, 250);
		assert_eq!(config.service.host, "0.0.0.0");
		assert!(config.index.sort_on_load);
	}

	#[test]
	fn test_env_overrides_file() {
		let file = write_config("[service]\nlog_level = \"INFO\"\nport = 9000\n");
		let env = vars(&[("LOG_LEVEL", "error"), ("SERVICE_PORT", "3000")]);

		let config = ConfigLoader::new()
			.with_file(file.path())
			.load_with(|k| env.get(k).cloned())
			.unwrap();

		assert_eq!(config.service.log_level, LogLevel::Error);
		assert_eq!(config.service.port, 3000);
	}

	#[test]
	fn test_explicit_overrides_beat_invalid_env() {
		let env = vars(&[("LOG_LEVEL", "chatty"), ("SERVICE_PORT", "http")]);

		let config = ConfigLoader::new()
			.with_log_level(Some(LogLevel::Info))
			.with_port(Some(9191))
			.load_with(|k| env.get(k).cloned())
			.unwrap();

		assert_eq!(config.service.log_level, LogLevel::Info);
		assert_eq!(config.service.port, 9191);
	}

	#[test]
	fn test_explicit_overrides_beat_file() {
		let file = write_config("[service]\nlog_level = \"ERROR\"\nport = 9000\n");

		let config = ConfigLoader::new()
			.with_file(file.path())
			.with_log_level(Some(LogLevel::Debug))
			.with_port(None)
			.load_with(|_| None)
			.unwrap();

		assert_eq!(config.service.log_level, LogLevel::Debug);
		assert_eq!(config.service.port, 9000);
	}

	#[test]
	fn test_env_prefix() {
		let env = vars(&[("LOOKUP_SERVICE_PORT", "4000"), ("SERVICE_PORT", "5000")]);

		let config = ConfigLoader::new()
			.with_env_prefix("LOOKUP_")
			.load_with(|k| env.get(k).cloned())
			.unwrap();

		assert_eq!(config.service.port, 4000);
	}

	#[test]
	fn test_invalid_log_level_from_env() {
		let env = vars(&[("LOG_LEVEL", "chatty")]);
		let err = ConfigLoader::new()
			.load_with(|k| env.get(k).cloned())
			.unwrap_err();
		assert!(matches!(err, ConfigError::InvalidLogLevel(level) if level == "chatty"));
	}

	#[test]
	fn test_invalid_log_level_in_file() {
		let file = write_config("[service]\nlog_level = \"TRACE\"\n");
		let err = ConfigLoader::new()
			.with_file(file.path())
			.load_with(|_| None)
			.unwrap_err();
		assert!(matches!(err, ConfigError::ParseError(_)));
	}

	#[test]
	fn test_invalid_port_from_env() {
		let env = vars(&[("SERVICE_PORT", "http")]);
		let err = ConfigLoader::new()
			.load_with(|k| env.get(k).cloned())
			.unwrap_err();
		assert!(matches!(err, ConfigError::ValidationError(_)));

		let env = vars(&[("SERVICE_PORT", "0")]);
		let err = ConfigLoader::new()
			.load_with(|k| env.get(k).cloned())
			.unwrap_err();
		assert!(matches!(err, ConfigError::ValidationError(_)));
	}

	#[test]
	fn test_env_substitution_in_file() {
		let file = write_config("[service]\nport = ${LOOKUP_PORT}\n");
		let env = vars(&[("LOOKUP_PORT", "7070")]);

		let config = ConfigLoader::new()
			.with_file(file.path())
			.load_with(|k| env.get(k).cloned())
			.unwrap();
		assert_eq!(config.service.port, 7070);

		let err = ConfigLoader::new()
			.with_file(file.path())
			.load_with(|_| None)
			.unwrap_err();
		assert!(matches!(err, ConfigError::EnvVarNotFound(name) if name == "LOOKUP_PORT"));
	}

	#[test]
	fn test_missing_required_file() {
		let dir = tempfile::tempdir().unwrap();
		let err = ConfigLoader::new()
			.with_file(dir.path().join("lookup.toml"))
			.load_with(|_| None)
			.unwrap_err();
		assert!(matches!(err, ConfigError::FileNotFound(_)));
	}

	#[test]
	fn test_missing_optional_file_uses_defaults() {
		let dir = tempfile::tempdir().unwrap();
		let config = ConfigLoader::new()
			.with_optional_file(dir.path().join("lookup.toml"))
			.load_with(|_| None)
			.unwrap();
		assert_eq!(config.service.port, 8080);
	}
}
