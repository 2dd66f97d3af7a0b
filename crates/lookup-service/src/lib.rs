//! Number lookup service.
//!
//! This crate wires the index and configuration crates into a runnable HTTP
//! service.
//!
//! # Components
//!
//! - `api`: axum router and handlers for `/search/{n}` and `/health`
//! - `cli`: command-line arguments and their configuration overrides
//! - `server`: listener binding, graceful shutdown and signal handling
//! - `service`: configuration resolution and index ingestion at startup

pub mod api;
pub mod cli;
pub mod server;
pub mod service;
