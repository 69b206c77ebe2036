//! Chat conversation history

use crate::protocol::{HistoryMessage, Role};
use chrono::{DateTime, Local};

/// A single turn of the conversation
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationTurn {
    /// Who produced the turn
    pub role: Role,
    /// Raw markdown text
    pub content: String,
    /// Local time the turn was added (display only, never sent)
    pub timestamp: DateTime<Local>,
}

impl ConversationTurn {
    /// Create a new turn stamped with the current time
    pub fn new(role: Role, content: String) -> Self {
        Self {
            role,
            content,
            timestamp: Local::now(),
        }
    }

    /// Wire form of this turn
    pub fn to_history(&self) -> HistoryMessage {
        HistoryMessage {
            role: self.role,
            content: self.content.clone(),
        }
    }
}

/// Ordered, append-only list of turns for one session
///
/// Nothing here is persisted; the only way to shrink a conversation is
/// [`Conversation::clear`].
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<ConversationTurn>,
}

impl Conversation {
    /// Create an empty conversation
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn
    pub fn push(&mut self, role: Role, content: String) {
        self.turns.push(ConversationTurn::new(role, content));
    }

    /// All turns, oldest first
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Number of turns
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Check if there are no turns
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Drop every turn
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Wire form of the whole conversation, oldest first
    pub fn history(&self) -> Vec<HistoryMessage> {
        self.turns.iter().map(ConversationTurn::to_history).collect()
    }

    /// Most recent assistant answer, if any
    pub fn last_assistant(&self) -> Option<&ConversationTurn> {
        self.turns.iter().rev().find(|turn| turn.role == Role::Assistant)
    }
}
