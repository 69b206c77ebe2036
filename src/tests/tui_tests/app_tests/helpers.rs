//! Shared test helpers for app tests

use crate::storage::Settings;
use crate::tests::support::unreachable_url;
use crate::tui::clipboard::mock::MockClipboard;
use crate::tui::App;
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Helper to create an App talking to `api_url` with temporary local storage
/// Returns (App, TempDir) - the TempDir must be kept alive for the test duration
pub fn create_test_app(api_url: &str) -> (App, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let app = open_app(api_url, &temp_dir.path().join("local_storage.json"));
    (app, temp_dir)
}

/// App whose backend is unreachable; for tests that never complete a request
pub fn create_offline_app() -> (App, TempDir) {
    create_test_app(&unreachable_url())
}

/// Open an App on an existing local storage file
pub fn open_app(api_url: &str, storage_path: &Path) -> App {
    let settings = Settings::default().with_api_url_override(Some(api_url.to_string()));
    let mut app = App::new_with_settings(settings, storage_path).expect("Failed to create app");
    app.set_clipboard(Box::new(MockClipboard::default()));
    app
}

/// Poll until every in-flight request has been applied
pub fn wait_until_idle(app: &mut App) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while app.has_pending_requests() {
        assert!(Instant::now() < deadline, "Timed out waiting for the backend");
        std::thread::sleep(Duration::from_millis(10));
        app.poll_requests();
    }
}

/// Poll until the health probe result has been applied
pub fn wait_for_health(app: &mut App) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while !app.poll_health_check() {
        assert!(Instant::now() < deadline, "Timed out waiting for the health probe");
        std::thread::sleep(Duration::from_millis(10));
    }
}

/// Type text into the active chat input
pub fn type_chat(app: &mut App, text: &str) {
    for c in text.chars() {
        app.chat_screen.add_char(c);
    }
}
