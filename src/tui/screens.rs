//! Screen state structures for TUI
//!
//! Every tab owns its inputs, a busy flag and a result area. Submitting is
//! split in two halves so the state machine stays free of I/O:
//! `begin_submit` validates and returns the request body (or `None` when
//! nothing should be sent), `finish_submit` applies the outcome. The app
//! runs the HTTP call in between.

use crate::markdown;
use crate::protocol::{ChatRequest, RecipeSearchRequest, Role, SubstitutionRequest};
use crate::storage::{Conversation, EntrySet};
use crate::tui::clipboard::ClipboardProvider;
use crate::tui::types::{RecipeField, SubstitutionField};
use ratatui::text::Line;
use std::cell::Cell;
use std::time::{Duration, Instant};

/// Shown in the chat when a request fails
pub const CHAT_FALLBACK: &str =
    "Sorry, I encountered an error. Please make sure the backend is running.";
/// Shown on the recipe tab when a search fails
pub const RECIPES_FALLBACK: &str =
    "Sorry, I couldn't find recipes. Please make sure the backend is running.";
/// Shown on the substitution tab when a lookup fails
pub const SUBSTITUTIONS_FALLBACK: &str =
    "Sorry, I couldn't find substitutions. Please make sure the backend is running.";

/// Canned prompts offered while the conversation is empty
pub const QUICK_PROMPTS: [&str; 4] = [
    "What can I cook with chicken and rice?",
    "Give me a 15-minute vegetarian dinner idea.",
    "How do I fix over-salted curry?",
    "Suggest a substitute for eggs in baking.",
];

/// How long the copy confirmation stays visible
pub const COPY_FEEDBACK: Duration = Duration::from_millis(1200);

/// Latest backend answer for a tab, kept raw and rendered
#[derive(Debug, Default)]
pub struct ResultArea {
    text: String,
    rendered: Vec<Line<'static>>,
    /// Lines scrolled down from the top
    pub scroll: usize,
    /// Largest useful scroll value, updated by the renderer
    pub max_scroll: Cell<usize>,
}

impl ResultArea {
    /// Replace the content with new markdown text
    pub fn set(&mut self, text: String) {
        self.rendered = markdown::render(&text);
        self.text = text;
        self.scroll = 0;
    }

    /// Empty the area
    pub fn clear(&mut self) {
        self.text.clear();
        self.rendered.clear();
        self.scroll = 0;
    }

    /// Raw markdown text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Styled lines produced from the text
    pub fn rendered(&self) -> &[Line<'static>] {
        &self.rendered
    }

    /// Check if there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Scroll towards the start
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scroll towards the end
    pub fn scroll_down(&mut self) {
        if self.scroll < self.max_scroll.get() {
            self.scroll += 1;
        }
    }
}

/// Chat tab state
#[derive(Debug)]
pub struct ChatScreen {
    /// Message being composed
    pub input: String,
    /// Turns of the current session
    pub conversation: Conversation,
    /// A request is in flight
    pub busy: bool,
    /// Lines scrolled back from the newest message (0 follows the tail)
    pub scroll_back: usize,
    /// Largest useful `scroll_back`, updated by the renderer
    pub max_scroll_back: Cell<usize>,
    /// Status message (copy feedback)
    pub status_message: Option<String>,
    /// Whether the status is an error
    pub is_error: bool,
    status_set_at: Option<Instant>,
}

impl ChatScreen {
    /// Create new chat screen
    pub fn new() -> Self {
        Self {
            input: String::new(),
            conversation: Conversation::new(),
            busy: false,
            scroll_back: 0,
            max_scroll_back: Cell::new(0),
            status_message: None,
            is_error: false,
            status_set_at: None,
        }
    }

    /// Add character to input (ignored while busy)
    pub fn add_char(&mut self, c: char) {
        if !self.busy {
            self.input.push(c);
        }
    }

    /// Insert a line break into the input
    pub fn insert_newline(&mut self) {
        self.add_char('\n');
    }

    /// Remove last character from input
    pub fn backspace(&mut self) {
        if !self.busy {
            self.input.pop();
        }
    }

    /// Fill the input with quick prompt `index`
    ///
    /// Only offered while the conversation is empty; returns true if the
    /// input changed.
    pub fn use_quick_prompt(&mut self, index: usize) -> bool {
        if self.busy || !self.conversation.is_empty() {
            return false;
        }
        match QUICK_PROMPTS.get(index) {
            Some(prompt) => {
                self.input = prompt.to_string();
                true
            }
            None => false,
        }
    }

    /// Check whether the send action is available
    pub fn can_submit(&self) -> bool {
        !self.busy && !self.input.trim().is_empty()
    }

    /// Validate input and start a request
    ///
    /// Appends the user turn, clears the input and marks the screen busy.
    /// The returned history holds only the turns before this message.
    pub fn begin_submit(&mut self) -> Option<ChatRequest> {
        if !self.can_submit() {
            return None;
        }

        let message = std::mem::take(&mut self.input);
        let request = ChatRequest {
            message: message.clone(),
            conversation_history: self.conversation.history(),
        };

        self.conversation.push(Role::User, message);
        self.busy = true;
        self.scroll_back = 0;
        Some(request)
    }

    /// Apply the outcome of a request started by [`ChatScreen::begin_submit`]
    pub fn finish_submit(&mut self, outcome: crate::Result<String>) {
        let content = outcome.unwrap_or_else(|_| CHAT_FALLBACK.to_string());
        self.conversation.push(Role::Assistant, content);
        self.busy = false;
        self.scroll_back = 0;
    }

    /// Drop the conversation and the input (no-op while busy)
    pub fn clear(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.conversation.clear();
        self.input.clear();
        self.scroll_back = 0;
        self.max_scroll_back.set(0);
        self.clear_status();
        true
    }

    /// Scroll towards older messages
    pub fn scroll_up(&mut self) {
        if self.scroll_back < self.max_scroll_back.get() {
            self.scroll_back += 1;
        }
    }

    /// Scroll towards newer messages
    pub fn scroll_down(&mut self) {
        self.scroll_back = self.scroll_back.saturating_sub(1);
    }

    /// Copy the latest assistant answer to the clipboard
    pub fn copy_last_response(&mut self, clipboard: &mut dyn ClipboardProvider) {
        let Some(turn) = self.conversation.last_assistant() else {
            self.set_status("Nothing to copy yet".to_string(), true);
            return;
        };

        match clipboard.set_text(&turn.content) {
            Ok(_) => self.set_status("✓ Copied".to_string(), false),
            Err(e) => self.set_status(format!("Copy failed: {}", e), true),
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: String, is_error: bool) {
        self.status_message = Some(message);
        self.is_error = is_error;
        self.status_set_at = Some(Instant::now());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.is_error = false;
        self.status_set_at = None;
    }

    /// Drop the status once it has been visible for [`COPY_FEEDBACK`]
    pub fn expire_status(&mut self, now: Instant) {
        if let Some(set_at) = self.status_set_at {
            if now.duration_since(set_at) >= COPY_FEEDBACK {
                self.clear_status();
            }
        }
    }
}

impl Default for ChatScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Recipe search tab state
#[derive(Debug, Default)]
pub struct RecipeSearchScreen {
    /// Ingredient input buffer (accepts comma-separated lists)
    pub ingredient_input: String,
    /// Dietary restriction input buffer
    pub restriction_input: String,
    /// Ingredients on hand
    pub ingredients: EntrySet,
    /// Dietary restrictions
    pub restrictions: EntrySet,
    /// Latest search result
    pub result: ResultArea,
    /// A request is in flight
    pub busy: bool,
    /// Focused field
    pub focus: RecipeField,
    /// Selected chip in the focused field's list
    pub selected_chip: Option<usize>,
}

impl RecipeSearchScreen {
    /// Create new recipe search screen
    pub fn new() -> Self {
        Self::default()
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            RecipeField::Ingredients => &mut self.ingredient_input,
            RecipeField::Restrictions => &mut self.restriction_input,
        }
    }

    fn focused_set(&self) -> &EntrySet {
        match self.focus {
            RecipeField::Ingredients => &self.ingredients,
            RecipeField::Restrictions => &self.restrictions,
        }
    }

    /// Add character to the focused input
    pub fn add_char(&mut self, c: char) {
        self.focused_input().push(c);
    }

    /// Remove last character from the focused input
    pub fn backspace(&mut self) {
        self.focused_input().pop();
    }

    /// Switch focus between ingredients and restrictions
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            RecipeField::Ingredients => RecipeField::Restrictions,
            RecipeField::Restrictions => RecipeField::Ingredients,
        };
        self.selected_chip = None;
    }

    /// Add every comma-separated ingredient from the input
    pub fn add_ingredient(&mut self) {
        if self.ingredient_input.trim().is_empty() {
            return;
        }
        self.ingredients.insert_comma_separated(&self.ingredient_input);
        self.ingredient_input.clear();
    }

    /// Add the restriction input as a single entry
    ///
    /// A duplicate leaves the input untouched.
    pub fn add_restriction(&mut self) {
        if self.restrictions.insert(&self.restriction_input) {
            self.restriction_input.clear();
        }
    }

    /// Enter on a field: add the typed text, or search when the input is empty
    ///
    /// Returns the request to send when a search starts.
    pub fn confirm(&mut self) -> Option<RecipeSearchRequest> {
        match self.focus {
            RecipeField::Ingredients if !self.ingredient_input.trim().is_empty() => {
                self.add_ingredient();
                None
            }
            RecipeField::Restrictions if !self.restriction_input.trim().is_empty() => {
                self.add_restriction();
                None
            }
            _ => self.begin_submit(),
        }
    }

    /// Remove an ingredient by value
    pub fn remove_ingredient(&mut self, ingredient: &str) -> bool {
        let removed = self.ingredients.remove(ingredient);
        self.clamp_selection();
        removed
    }

    /// Remove a restriction by value
    pub fn remove_restriction(&mut self, restriction: &str) -> bool {
        let removed = self.restrictions.remove(restriction);
        self.clamp_selection();
        removed
    }

    /// Move chip selection right, wrapping
    pub fn select_next_chip(&mut self) {
        let count = self.focused_set().len();
        if count == 0 {
            self.selected_chip = None;
            return;
        }
        self.selected_chip = Some(match self.selected_chip {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    /// Move chip selection left, wrapping
    pub fn select_previous_chip(&mut self) {
        let count = self.focused_set().len();
        if count == 0 {
            self.selected_chip = None;
            return;
        }
        self.selected_chip = Some(match self.selected_chip {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        });
    }

    /// Remove the selected chip from the focused list
    pub fn remove_selected_chip(&mut self) -> Option<String> {
        let index = self.selected_chip?;
        let removed = match self.focus {
            RecipeField::Ingredients => self.ingredients.remove_at(index),
            RecipeField::Restrictions => self.restrictions.remove_at(index),
        };
        self.clamp_selection();
        removed
    }

    fn clamp_selection(&mut self) {
        let count = self.focused_set().len();
        self.selected_chip = match self.selected_chip {
            _ if count == 0 => None,
            Some(i) if i >= count => Some(count - 1),
            other => other,
        };
    }

    /// Check whether the search action is available
    pub fn can_submit(&self) -> bool {
        !self.busy && !self.ingredients.is_empty()
    }

    /// Validate input and start a search
    pub fn begin_submit(&mut self) -> Option<RecipeSearchRequest> {
        if !self.can_submit() {
            return None;
        }

        self.result.clear();
        self.busy = true;
        Some(RecipeSearchRequest {
            ingredients: self.ingredients.to_vec(),
            dietary_restrictions: self.restrictions.to_vec(),
        })
    }

    /// Apply the outcome of a search
    pub fn finish_submit(&mut self, outcome: crate::Result<String>) {
        let text = outcome.unwrap_or_else(|_| RECIPES_FALLBACK.to_string());
        self.result.set(text);
        self.busy = false;
    }

    /// Reset every input and the result (no-op while busy)
    pub fn clear(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.ingredients.clear();
        self.restrictions.clear();
        self.ingredient_input.clear();
        self.restriction_input.clear();
        self.result.clear();
        self.selected_chip = None;
        true
    }
}

/// Substitution tab state
#[derive(Debug, Default)]
pub struct SubstitutionScreen {
    /// Ingredient to substitute
    pub ingredient: String,
    /// Optional recipe context
    pub context: String,
    /// Latest lookup result
    pub result: ResultArea,
    /// Ingredient the current result answers
    pub result_for: String,
    /// A request is in flight
    pub busy: bool,
    /// Focused field
    pub focus: SubstitutionField,
}

impl SubstitutionScreen {
    /// Create new substitution screen
    pub fn new() -> Self {
        Self::default()
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            SubstitutionField::Ingredient => &mut self.ingredient,
            SubstitutionField::Context => &mut self.context,
        }
    }

    /// Add character to the focused input
    pub fn add_char(&mut self, c: char) {
        self.focused_input().push(c);
    }

    /// Remove last character from the focused input
    pub fn backspace(&mut self) {
        self.focused_input().pop();
    }

    /// Switch focus between ingredient and context
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SubstitutionField::Ingredient => SubstitutionField::Context,
            SubstitutionField::Context => SubstitutionField::Ingredient,
        };
    }

    /// Check whether the lookup action is available
    pub fn can_submit(&self) -> bool {
        !self.busy && !self.ingredient.trim().is_empty()
    }

    /// Validate input and start a lookup
    ///
    /// A blank context is sent as `null`.
    pub fn begin_submit(&mut self) -> Option<SubstitutionRequest> {
        if !self.can_submit() {
            return None;
        }

        let ingredient = self.ingredient.trim().to_string();
        let context = match self.context.trim() {
            "" => None,
            context => Some(context.to_string()),
        };

        self.result.clear();
        self.result_for = ingredient.clone();
        self.busy = true;
        Some(SubstitutionRequest { ingredient, context })
    }

    /// Apply the outcome of a lookup
    pub fn finish_submit(&mut self, outcome: crate::Result<String>) {
        let text = outcome.unwrap_or_else(|_| SUBSTITUTIONS_FALLBACK.to_string());
        self.result.set(text);
        self.busy = false;
    }

    /// Reset both inputs and the result (no-op while busy)
    pub fn clear(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.ingredient.clear();
        self.context.clear();
        self.result.clear();
        self.result_for.clear();
        self.focus = SubstitutionField::Ingredient;
        true
    }
}
