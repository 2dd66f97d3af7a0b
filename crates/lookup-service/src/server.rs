//! HTTP server lifecycle.
//!
//! Binds the listener, serves the API router and drains in-flight requests
//! once the shutdown future resolves. Draining is bounded so a stuck client
//! cannot keep the process alive.

use crate::api;
use anyhow::{Context, Result};
use axum::Router;
use lookup_types::Searcher;
use std::future::{Future, IntoFuture};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::oneshot;
use tracing::{error, info};

/// API server for the lookup service
pub struct ApiServer {
	host: String,
	port: u16,
	shutdown_timeout: Duration,
	searcher: Arc<dyn Searcher>,
}

impl ApiServer {
	pub fn new(
		host: impl Into<String>,
		port: u16,
		shutdown_timeout: Duration,
		searcher: Arc<dyn Searcher>,
	) -> Self {
		Self {
			host: host.into(),
			port,
			shutdown_timeout,
			searcher,
		}
	}

	pub async fn run<F>(self, shutdown: F) -> Result<()>
	where
		F: Future<Output = ()> + Send + 'static,
	{
		let addr = format!("{}:{}", self.host, self.port);
		let listener = TcpListener::bind(&addr)
			.await
			.with_context(|| format!("Failed to bind {}", addr))?;

		info!(service_port = self.port, "starting web server on {}", addr);

		serve(
			listener,
			api::router(self.searcher),
			shutdown,
			self.shutdown_timeout,
		)
		.await
	}
}

/// Serve `app` on `listener` until `shutdown` resolves.
///
/// After the signal, open connections get `drain_timeout` to finish before
/// the server is dropped.
pub async fn serve<F>(
	listener: TcpListener,
	app: Router,
	shutdown: F,
	drain_timeout: Duration,
) -> Result<()>
where
	F: Future<Output = ()> + Send + 'static,
{
	let (stopping_tx, stopping_rx) = oneshot::channel::<()>();

	let server = axum::serve(listener, app)
		.with_graceful_shutdown(async move {
			shutdown.await;
			let _ = stopping_tx.send(());
		})
		.into_future();
	tokio::pin!(server);

	tokio::select! {
		result = &mut server => {
			result.context("HTTP server failed")?;
		}
		_ = stopping_rx => {
			info!("server stopping, draining in-flight requests");
			match tokio::time::timeout(drain_timeout, &mut server).await {
				Ok(result) => result.context("HTTP server failed")?,
				Err(_) => error!(
					timeout_ms = drain_timeout.as_millis() as u64,
					"server shutdown failed: timed out draining connections"
				),
			}
		}
	}

	info!("server stopped");
	Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(err) = signal::ctrl_c().await {
			error!(%err, "failed to install Ctrl+C handler");
			std::future::pending::<()>().await;
		}
	};

	#[cfg(unix)]
	let terminate = async {
		match signal::unix::signal(signal::unix::SignalKind::terminate()) {
			Ok(mut stream) => {
				stream.recv().await;
			}
			Err(err) => {
				error!(%err, "failed to install signal handler");
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {},
		_ = terminate => {},
	}
}
