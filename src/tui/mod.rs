//! TUI (Terminal User Interface) module
//!
//! This module contains all TUI logic separated from the binary for better testability.
//! Screens hold state only; the app owns the runtime and the backend client.

pub mod types;
pub mod screens;
pub mod app;
pub mod clipboard;
pub mod ui;

// Re-export main types for convenience
pub use types::{BackendStatus, Tab};
pub use screens::*;
pub use app::App;
