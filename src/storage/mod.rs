//! Local storage module
//!
//! This module holds the client's small pieces of state:
//! - `local_store` - Persistent key/value file (the tab selection lives here)
//! - `settings` - Client configuration (backend URL, log file)
//! - `conversation` - In-memory chat history
//! - `entry_set` - De-duplicated ingredient and restriction lists

// Submodules
pub mod conversation;
pub mod entry_set;
pub mod local_store;
pub mod settings;

// Re-export commonly used types
pub use conversation::{Conversation, ConversationTurn};
pub use entry_set::EntrySet;
pub use local_store::LocalStore;
pub use settings::Settings;
