//! ChefMate - terminal client for the ChefMate AI cooking assistant
//!
//! This library provides the client side of ChefMate: wire types and an HTTP
//! client for the backend, markdown rendering for terminal output, small
//! persistent stores, and the TUI state machine driven by the binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod markdown;
pub mod protocol;
pub mod storage;
pub mod tui;


use std::path::Path;

/// Result type alias for ChefMate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ChefMate operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport-level HTTP failure (connect, send, decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend returned status {0}")]
    Status(u16),

    /// Storage operation error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Async runtime error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Initialize logging into a file
///
/// The terminal belongs to the UI, so log output is appended to `path`
/// instead of stdout. Returns false when the file could not be opened or a
/// global subscriber is already installed; the app keeps running without
/// logs in that case.
pub fn init_logging<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let file = match std::fs::OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}
