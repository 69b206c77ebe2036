// Conversation Tests - Testing turns and history building

use crate::protocol::{HistoryMessage, Role};
use crate::storage::{Conversation, ConversationTurn};

#[test]
fn test_new_conversation_is_empty() {
    let conversation = Conversation::new();

    assert!(conversation.is_empty());
    assert_eq!(conversation.len(), 0);
    assert!(conversation.history().is_empty());
    assert!(conversation.last_assistant().is_none());
}

#[test]
fn test_push_keeps_order() {
    let mut conversation = Conversation::new();
    conversation.push(Role::User, "Hi".to_string());
    conversation.push(Role::Assistant, "Hello!".to_string());

    let turns = conversation.turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].role, Role::User);
    assert_eq!(turns[1].content, "Hello!");
    assert!(turns[0].timestamp <= turns[1].timestamp);
}

#[test]
fn test_history_matches_turns() {
    let mut conversation = Conversation::new();
    conversation.push(Role::User, "Soup?".to_string());
    conversation.push(Role::Assistant, "Minestrone".to_string());

    assert_eq!(
        conversation.history(),
        vec![
            HistoryMessage { role: Role::User, content: "Soup?".to_string() },
            HistoryMessage { role: Role::Assistant, content: "Minestrone".to_string() },
        ]
    );
}

#[test]
fn test_last_assistant() {
    let mut conversation = Conversation::new();
    conversation.push(Role::User, "One".to_string());
    assert!(conversation.last_assistant().is_none());

    conversation.push(Role::Assistant, "First answer".to_string());
    conversation.push(Role::User, "Two".to_string());
    conversation.push(Role::Assistant, "Second answer".to_string());
    conversation.push(Role::User, "Three".to_string());

    assert_eq!(conversation.last_assistant().unwrap().content, "Second answer");
}

#[test]
fn test_clear() {
    let mut conversation = Conversation::new();
    conversation.push(Role::User, "Hi".to_string());
    conversation.clear();

    assert!(conversation.is_empty());
}

#[test]
fn test_turn_to_history() {
    let turn = ConversationTurn::new(Role::Assistant, "Use butter".to_string());

    assert_eq!(
        turn.to_history(),
        HistoryMessage { role: Role::Assistant, content: "Use butter".to_string() }
    );
}
