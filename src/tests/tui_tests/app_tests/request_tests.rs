//! Round trips against the mock backend

use super::helpers::{create_offline_app, create_test_app, type_chat, wait_until_idle};
use crate::tests::support::MockBackend;
use crate::tui::screens::{CHAT_FALLBACK, RECIPES_FALLBACK, SUBSTITUTIONS_FALLBACK};
use crate::tui::types::Tab;
use serde_json::json;

#[test]
fn test_chat_round_trip() {
    let backend = MockBackend::healthy();
    let (mut app, _temp_dir) = create_test_app(&backend.url());

    type_chat(&mut app, "What can I make with leeks?");
    assert!(app.submit_chat());
    assert!(app.chat_screen.busy);
    assert!(app.has_pending_requests());

    wait_until_idle(&mut app);

    assert!(!app.chat_screen.busy);
    let turns = app.chat_screen.conversation.turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[1].content, "**Hello** from the kitchen");

    let recorded = backend.requests_to("/chat");
    assert_eq!(recorded.len(), 1);
    assert_eq!(
        recorded[0].body,
        json!({"message": "What can I make with leeks?", "conversation_history": []})
    );
}

#[test]
fn test_chat_history_sent_with_second_message() {
    let backend = MockBackend::healthy();
    let (mut app, _temp_dir) = create_test_app(&backend.url());

    type_chat(&mut app, "First");
    app.submit_chat();
    wait_until_idle(&mut app);
    type_chat(&mut app, "Second");
    app.submit_chat();
    wait_until_idle(&mut app);

    let recorded = backend.requests_to("/chat");
    assert_eq!(recorded.len(), 2);
    assert_eq!(
        recorded[1].body,
        json!({
            "message": "Second",
            "conversation_history": [
                {"role": "user", "content": "First"},
                {"role": "assistant", "content": "**Hello** from the kitchen"}
            ]
        })
    );
    assert_eq!(app.chat_screen.conversation.len(), 4);
}

#[test]
fn test_empty_chat_sends_nothing() {
    let backend = MockBackend::healthy();
    let (mut app, _temp_dir) = create_test_app(&backend.url());

    type_chat(&mut app, "   ");
    assert!(!app.submit_chat());
    assert!(!app.has_pending_requests());
    assert!(backend.requests().is_empty());
}

#[test]
fn test_chat_busy_ignores_second_submit() {
    let backend = MockBackend::healthy();
    let (mut app, _temp_dir) = create_test_app(&backend.url());

    type_chat(&mut app, "One");
    assert!(app.submit_chat());
    type_chat(&mut app, "Two");
    assert!(!app.submit_chat());
    assert!(!app.clear_active_tab(), "Clear is a no-op while busy");

    wait_until_idle(&mut app);

    assert_eq!(backend.requests_to("/chat").len(), 1);
    assert_eq!(app.chat_screen.conversation.len(), 2);
}

#[test]
fn test_chat_server_error_shows_fallback() {
    let backend = MockBackend::start(&[("/chat", 500, r#"{"detail": "boom"}"#)]);
    let (mut app, _temp_dir) = create_test_app(&backend.url());

    type_chat(&mut app, "Hello?");
    app.submit_chat();
    wait_until_idle(&mut app);

    let last = app.chat_screen.conversation.turns().last().unwrap();
    assert_eq!(last.content, CHAT_FALLBACK);
    assert!(!app.chat_screen.busy);
}

#[test]
fn test_chat_malformed_response_shows_fallback() {
    let backend = MockBackend::start(&[("/chat", 200, "not json at all")]);
    let (mut app, _temp_dir) = create_test_app(&backend.url());

    type_chat(&mut app, "Hello?");
    app.submit_chat();
    wait_until_idle(&mut app);

    assert_eq!(app.chat_screen.conversation.turns().last().unwrap().content, CHAT_FALLBACK);
}

#[test]
fn test_chat_unreachable_backend_shows_fallback() {
    let (mut app, _temp_dir) = create_offline_app();

    type_chat(&mut app, "Anyone there?");
    app.submit_chat();
    wait_until_idle(&mut app);

    assert_eq!(app.chat_screen.conversation.turns().last().unwrap().content, CHAT_FALLBACK);
}

#[test]
fn test_copy_after_answer() {
    let backend = MockBackend::healthy();
    let (mut app, _temp_dir) = create_test_app(&backend.url());

    type_chat(&mut app, "Hi");
    app.submit_chat();
    wait_until_idle(&mut app);
    app.copy_last_response();

    assert_eq!(app.chat_screen.status_message.as_deref(), Some("✓ Copied"));
}

#[test]
fn test_recipe_search_round_trip() {
    let backend = MockBackend::healthy();
    let (mut app, _temp_dir) = create_test_app(&backend.url());
    app.switch_tab(Tab::Recipes);

    for c in "chicken, tomatoes, chicken,  garlic".chars() {
        app.recipe_screen.add_char(c);
    }
    assert!(!app.confirm_recipe_input(), "First Enter adds the typed ingredients");
    app.recipe_screen.toggle_focus();
    for c in "gluten-free".chars() {
        app.recipe_screen.add_char(c);
    }
    app.confirm_recipe_input();

    assert!(app.submit_active_tab());
    wait_until_idle(&mut app);

    assert_eq!(app.recipe_screen.result.text(), "1. Fried rice");
    assert_eq!(
        backend.requests_to("/recipe-search")[0].body,
        json!({
            "ingredients": ["chicken", "tomatoes", "garlic"],
            "dietary_restrictions": ["gluten-free"]
        })
    );
}

#[test]
fn test_recipe_search_without_ingredients_sends_nothing() {
    let backend = MockBackend::healthy();
    let (mut app, _temp_dir) = create_test_app(&backend.url());

    assert!(!app.submit_recipe_search());
    assert!(backend.requests().is_empty());
}

#[test]
fn test_recipe_search_failure_shows_fallback() {
    let backend = MockBackend::start(&[("/recipe-search", 503, "{}")]);
    let (mut app, _temp_dir) = create_test_app(&backend.url());

    for c in "beans".chars() {
        app.recipe_screen.add_char(c);
    }
    app.recipe_screen.add_ingredient();
    app.submit_recipe_search();
    wait_until_idle(&mut app);

    assert_eq!(app.recipe_screen.result.text(), RECIPES_FALLBACK);
}

#[test]
fn test_substitution_round_trip_null_context() {
    let backend = MockBackend::healthy();
    let (mut app, _temp_dir) = create_test_app(&backend.url());
    app.switch_tab(Tab::Substitutions);

    for c in " eggs ".chars() {
        app.substitution_screen.add_char(c);
    }
    assert!(app.submit_substitution());
    wait_until_idle(&mut app);

    assert_eq!(app.substitution_screen.result.text(), "- Flax egg");
    assert_eq!(app.substitution_screen.result_for, "eggs");
    assert_eq!(
        backend.requests_to("/substitution")[0].body,
        json!({"ingredient": "eggs", "context": null})
    );
}

#[test]
fn test_substitution_with_context() {
    let backend = MockBackend::healthy();
    let (mut app, _temp_dir) = create_test_app(&backend.url());

    for c in "butter".chars() {
        app.substitution_screen.add_char(c);
    }
    app.substitution_screen.toggle_focus();
    for c in "shortbread".chars() {
        app.substitution_screen.add_char(c);
    }
    app.submit_substitution();
    wait_until_idle(&mut app);

    assert_eq!(
        backend.requests_to("/substitution")[0].body,
        json!({"ingredient": "butter", "context": "shortbread"})
    );
}

#[test]
fn test_substitution_failure_shows_fallback() {
    let backend = MockBackend::start(&[("/substitution", 200, r#"{"wrong": "shape"}"#)]);
    let (mut app, _temp_dir) = create_test_app(&backend.url());

    for c in "milk".chars() {
        app.substitution_screen.add_char(c);
    }
    app.submit_substitution();
    wait_until_idle(&mut app);

    assert_eq!(app.substitution_screen.result.text(), SUBSTITUTIONS_FALLBACK);
}

#[test]
fn test_tabs_request_independently() {
    let backend = MockBackend::healthy();
    let (mut app, _temp_dir) = create_test_app(&backend.url());

    type_chat(&mut app, "Hi");
    app.submit_chat();
    for c in "tofu".chars() {
        app.substitution_screen.add_char(c);
    }
    app.submit_substitution();

    assert!(app.chat_screen.busy);
    assert!(app.substitution_screen.busy);
    assert!(!app.recipe_screen.busy);

    wait_until_idle(&mut app);

    assert_eq!(app.chat_screen.conversation.len(), 2);
    assert_eq!(app.substitution_screen.result.text(), "- Flax egg");
}
