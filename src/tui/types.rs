//! Core types for TUI tabs and navigation

/// Local storage key holding the active tab
pub const ACTIVE_TAB_KEY: &str = "chefmate.activeTab";

/// Top-level tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Free-form cooking chat
    #[default]
    Chat,
    /// Recipe search by ingredients
    Recipes,
    /// Ingredient substitution lookup
    Substitutions,
}

impl Tab {
    /// Get all tabs in display order
    pub fn all() -> [Self; 3] {
        [Self::Chat, Self::Recipes, Self::Substitutions]
    }

    /// Value persisted in local storage
    pub fn storage_value(&self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Recipes => "recipes",
            Self::Substitutions => "substitutions",
        }
    }

    /// Parse a persisted value; anything unknown is rejected
    pub fn from_storage_value(value: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|tab| tab.storage_value() == value)
    }

    /// Get display label for the tab
    pub fn label(&self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::Recipes => "Recipes",
            Self::Substitutions => "Substitutions",
        }
    }

    /// Function key that selects this tab
    pub fn hotkey(&self) -> u8 {
        match self {
            Self::Chat => 1,
            Self::Recipes => 2,
            Self::Substitutions => 3,
        }
    }

    /// Position in [`Tab::all`]
    pub fn index(&self) -> usize {
        match self {
            Self::Chat => 0,
            Self::Recipes => 1,
            Self::Substitutions => 2,
        }
    }

    /// Next tab, wrapping around
    pub fn next(&self) -> Self {
        Self::all()[(self.index() + 1) % 3]
    }

    /// Previous tab, wrapping around
    pub fn previous(&self) -> Self {
        Self::all()[(self.index() + 2) % 3]
    }
}

/// Backend reachability as reported by the startup health probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendStatus {
    /// Probe still running
    Checking,
    /// Backend answered healthy
    Live,
    /// Backend unreachable or unhealthy (reason for logs and the header)
    Offline(String),
}

impl BackendStatus {
    /// Short header label
    pub fn label(&self) -> &str {
        match self {
            Self::Checking => "Checking",
            Self::Live => "Live",
            Self::Offline(_) => "Offline",
        }
    }
}

/// Focused input on the recipe search tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipeField {
    /// Ingredient input and chips
    #[default]
    Ingredients,
    /// Dietary restriction input and chips
    Restrictions,
}

/// Focused input on the substitution tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubstitutionField {
    /// Ingredient to substitute
    #[default]
    Ingredient,
    /// Optional recipe context
    Context,
}
