use anyhow::{Context, Result};
use clap::Parser;
use lookup_config::{LogLevel, ServiceConfig};
use lookup_index::Index;
use lookup_service::cli::Args;
use lookup_service::server::{shutdown_signal, ApiServer};
use lookup_service::service::{load_config, load_index};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	let config = load_config(&args)?;

	// Initialize tracing
	setup_tracing(config.service.log_level)?;

	let (index, report) = load_index(&args.input, &config)?;

	if args.check {
		info!(
			entries = report.accepted,
			skipped = report.skipped_lines.len(),
			sorted = index.is_sorted(),
			"input file check finished"
		);
		return Ok(());
	}

	start_service(config, index).await
}

async fn start_service(config: ServiceConfig, index: Index) -> Result<()> {
	let server = ApiServer::new(
		config.service.host,
		config.service.port,
		Duration::from_millis(config.service.shutdown_timeout_ms),
		Arc::new(index),
	);

	server.run(shutdown_signal()).await
}

fn setup_tracing(level: LogLevel) -> Result<()> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.as_directive()));

	tracing_subscriber::registry()
		.with(env_filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.try_init()
		.context("Failed to initialize tracing")?;

	Ok(())
}
