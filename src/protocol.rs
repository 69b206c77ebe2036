//! Protocol module
//!
//! This module defines the JSON wire format spoken with the ChefMate backend:
//! - Request bodies for `/chat`, `/recipe-search` and `/substitution`
//! - Response bodies (one text field each, extra fields ignored)
//! - The `/health` probe response
//! - Endpoint paths

use serde::{Deserialize, Serialize};

/// Default backend base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Chat endpoint path
pub const CHAT_PATH: &str = "/chat";
/// Recipe search endpoint path
pub const RECIPE_SEARCH_PATH: &str = "/recipe-search";
/// Substitution endpoint path
pub const SUBSTITUTION_PATH: &str = "/substitution";
/// Health probe endpoint path
pub const HEALTH_PATH: &str = "/health";

/// Author of a conversation turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Typed by the user
    User,
    /// Answered by the backend
    Assistant,
}

impl Role {
    /// Wire representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One prior message as sent in `conversation_history`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryMessage {
    /// Who said it
    pub role: Role,
    /// What was said
    pub content: String,
}

/// Body of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    /// The new user message
    pub message: String,
    /// Every turn before `message`, oldest first
    pub conversation_history: Vec<HistoryMessage>,
}

/// Response of `POST /chat`
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Markdown answer
    pub response: String,
}

/// Body of `POST /recipe-search`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeSearchRequest {
    /// Ingredients on hand, in display order
    pub ingredients: Vec<String>,
    /// Dietary restrictions, possibly empty
    pub dietary_restrictions: Vec<String>,
}

/// Response of `POST /recipe-search`
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeSearchResponse {
    /// Markdown recipe suggestions
    pub recipes: String,
}

/// Body of `POST /substitution`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubstitutionRequest {
    /// Ingredient to replace
    pub ingredient: String,
    /// Optional recipe context; serialized as `null` when absent
    pub context: Option<String>,
}

/// Response of `POST /substitution`
#[derive(Debug, Clone, Deserialize)]
pub struct SubstitutionResponse {
    /// Markdown substitution options
    pub substitutions: String,
}

/// Response of `GET /health`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Backend self-reported status, `"healthy"` when up
    pub status: String,
    /// Whether the AI agent finished initializing
    #[serde(default)]
    pub agent_ready: bool,
}

impl HealthResponse {
    /// Check whether the backend reports itself usable
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy" && self.agent_ready
    }
}
