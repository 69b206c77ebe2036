//! App creation, settings and tab restore tests

use super::helpers::{create_offline_app, create_test_app, open_app};
use crate::tests::support::unreachable_url;
use crate::tui::types::{BackendStatus, Tab};
use tempfile::TempDir;

#[test]
fn test_app_starts_on_chat() {
    let (app, _temp_dir) = create_offline_app();

    assert_eq!(app.active_tab, Tab::Chat);
    assert!(!app.should_quit);
    assert_eq!(app.backend_status, BackendStatus::Checking);
    assert!(!app.has_pending_requests());
    assert!(app.chat_screen.conversation.is_empty());
}

#[test]
fn test_app_uses_normalized_api_url() {
    let (app, _temp_dir) = create_test_app("http://chef.local:8000/");

    assert_eq!(app.api_url(), "http://chef.local:8000");
    assert_eq!(app.settings.api_url, "http://chef.local:8000");
}

#[test]
fn test_app_restores_persisted_tab() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("local_storage.json");
    std::fs::write(&path, r#"{"chefmate.activeTab": "substitutions"}"#).unwrap();

    let app = open_app(&unreachable_url(), &path);

    assert_eq!(app.active_tab, Tab::Substitutions);
}

#[test]
fn test_app_unknown_persisted_tab_falls_back_to_chat() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("local_storage.json");
    std::fs::write(&path, r#"{"chefmate.activeTab": "settings"}"#).unwrap();

    let app = open_app(&unreachable_url(), &path);

    assert_eq!(app.active_tab, Tab::Chat);
}

#[test]
fn test_app_corrupt_storage_falls_back_to_chat() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("local_storage.json");
    std::fs::write(&path, "{{{{").unwrap();

    let app = open_app(&unreachable_url(), &path);

    assert_eq!(app.active_tab, Tab::Chat);
}
