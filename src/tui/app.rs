//! Main TUI application state and logic

use crate::api::ApiClient;
use crate::protocol::HealthResponse;
use crate::storage::settings::DEFAULT_DATA_DIR;
use crate::storage::{LocalStore, Settings};
use crate::tui::clipboard::{ClipboardProvider, SystemClipboard};
use crate::tui::screens::*;
use crate::tui::types::{BackendStatus, Tab, ACTIVE_TAB_KEY};
use crate::{Error, Result};
use std::path::Path;
use std::time::Instant;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

/// In-flight request producing the answer text
type PendingRequest = Option<JoinHandle<Result<String>>>;

/// Application state
pub struct App {
    /// Currently selected tab
    pub active_tab: Tab,
    /// Should quit
    pub should_quit: bool,
    /// Chat tab
    pub chat_screen: ChatScreen,
    /// Recipe search tab
    pub recipe_screen: RecipeSearchScreen,
    /// Substitution tab
    pub substitution_screen: SubstitutionScreen,
    /// Result of the startup health probe
    pub backend_status: BackendStatus,
    /// Effective settings (file + environment)
    pub settings: Settings,
    /// Frame counter driving the spinner
    pub tick: u64,
    client: ApiClient,
    store: LocalStore,
    clipboard: Box<dyn ClipboardProvider>,
    runtime: Runtime,
    chat_request: PendingRequest,
    recipe_request: PendingRequest,
    substitution_request: PendingRequest,
    health_check: Option<JoinHandle<Result<HealthResponse>>>,
}

impl App {
    /// Create the application with the default data directory
    ///
    /// Settings come from `./app_data/settings.json` (a corrupt file is
    /// logged and replaced by defaults), then `CHEFMATE_API_URL`.
    pub fn new() -> Result<Self> {
        let data_dir = Path::new(DEFAULT_DATA_DIR);
        let settings = match Settings::load(data_dir.join("settings.json")) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Using default settings: {}", e);
                Settings::default()
            }
        };

        Self::new_with_settings(settings.with_env_override(), data_dir.join("local_storage.json"))
    }

    /// Create the application with explicit settings and local storage file
    ///
    /// Used primarily for testing to avoid touching the user's data.
    pub fn new_with_settings<P: AsRef<Path>>(settings: Settings, storage_path: P) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .map_err(|e| Error::Runtime(format!("Failed to create tokio runtime: {}", e)))?;

        let store = LocalStore::open(storage_path);
        let active_tab = Self::restore_tab(&store);
        let client = ApiClient::new(&settings.api_url);

        tracing::info!(
            "ChefMate client starting (backend {}, tab {})",
            client.base_url(),
            active_tab.storage_value()
        );

        Ok(Self {
            active_tab,
            should_quit: false,
            chat_screen: ChatScreen::new(),
            recipe_screen: RecipeSearchScreen::new(),
            substitution_screen: SubstitutionScreen::new(),
            backend_status: BackendStatus::Checking,
            settings,
            tick: 0,
            client,
            store,
            clipboard: Box::new(SystemClipboard::new()),
            runtime,
            chat_request: None,
            recipe_request: None,
            substitution_request: None,
            health_check: None,
        })
    }

    /// Read the persisted tab; unknown or missing values mean chat
    fn restore_tab(store: &LocalStore) -> Tab {
        match store.get_item(ACTIVE_TAB_KEY) {
            Some(value) => Tab::from_storage_value(value).unwrap_or_else(|| {
                tracing::warn!("Ignoring unknown persisted tab {:?}", value);
                Tab::default()
            }),
            None => Tab::default(),
        }
    }

    /// Replace the clipboard backend
    pub fn set_clipboard(&mut self, clipboard: Box<dyn ClipboardProvider>) {
        self.clipboard = clipboard;
    }

    /// Backend base URL in use
    pub fn api_url(&self) -> &str {
        self.client.base_url()
    }

    /// Select a tab and remember it
    ///
    /// Storage failures are logged and otherwise ignored.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        if let Err(e) = self.store.set_item(ACTIVE_TAB_KEY, tab.storage_value()) {
            tracing::warn!("Failed to persist active tab: {}", e);
        }
    }

    /// Select the tab to the right
    pub fn next_tab(&mut self) {
        self.switch_tab(self.active_tab.next());
    }

    /// Select the tab to the left
    pub fn previous_tab(&mut self) {
        self.switch_tab(self.active_tab.previous());
    }

    /// Send the chat input
    ///
    /// Returns true if a request was started.
    pub fn submit_chat(&mut self) -> bool {
        let Some(request) = self.chat_screen.begin_submit() else {
            return false;
        };

        tracing::info!("Sending chat message ({} prior turns)", request.conversation_history.len());
        let client = self.client.clone();
        self.chat_request = Some(self.runtime.spawn(async move { client.chat(&request).await }));
        true
    }

    /// Search recipes for the current ingredients
    ///
    /// Returns true if a request was started.
    pub fn submit_recipe_search(&mut self) -> bool {
        let request = self.recipe_screen.begin_submit();
        self.spawn_recipe_search(request)
    }

    /// Enter on the recipe tab: add typed entries, or search when the input is empty
    pub fn confirm_recipe_input(&mut self) -> bool {
        let request = self.recipe_screen.confirm();
        self.spawn_recipe_search(request)
    }

    fn spawn_recipe_search(&mut self, request: Option<crate::protocol::RecipeSearchRequest>) -> bool {
        let Some(request) = request else {
            return false;
        };

        tracing::info!(
            "Searching recipes for {} ingredients, {} restrictions",
            request.ingredients.len(),
            request.dietary_restrictions.len()
        );
        let client = self.client.clone();
        self.recipe_request =
            Some(self.runtime.spawn(async move { client.search_recipes(&request).await }));
        true
    }

    /// Look up substitutes for the typed ingredient
    ///
    /// Returns true if a request was started.
    pub fn submit_substitution(&mut self) -> bool {
        let Some(request) = self.substitution_screen.begin_submit() else {
            return false;
        };

        tracing::info!("Looking up substitutions for {:?}", request.ingredient);
        let client = self.client.clone();
        self.substitution_request =
            Some(self.runtime.spawn(async move { client.find_substitutions(&request).await }));
        true
    }

    /// Submit whatever the active tab submits
    pub fn submit_active_tab(&mut self) -> bool {
        match self.active_tab {
            Tab::Chat => self.submit_chat(),
            Tab::Recipes => self.submit_recipe_search(),
            Tab::Substitutions => self.submit_substitution(),
        }
    }

    /// Clear the active tab's inputs and result
    ///
    /// The persisted tab is left alone. Returns false while the tab is busy.
    pub fn clear_active_tab(&mut self) -> bool {
        match self.active_tab {
            Tab::Chat => self.chat_screen.clear(),
            Tab::Recipes => self.recipe_screen.clear(),
            Tab::Substitutions => self.substitution_screen.clear(),
        }
    }

    /// Copy the latest assistant answer
    pub fn copy_last_response(&mut self) {
        self.chat_screen.copy_last_response(self.clipboard.as_mut());
    }

    /// Check whether any tab is waiting on the backend
    pub fn has_pending_requests(&self) -> bool {
        self.chat_request.is_some()
            || self.recipe_request.is_some()
            || self.substitution_request.is_some()
    }

    /// Apply every finished request (non-blocking)
    ///
    /// Returns true if any screen changed.
    pub fn poll_requests(&mut self) -> bool {
        let mut changed = false;

        if let Some(outcome) = take_finished(&self.runtime, &mut self.chat_request) {
            if let Err(e) = &outcome {
                tracing::error!("Chat request failed: {}", e);
            }
            self.chat_screen.finish_submit(outcome);
            changed = true;
        }

        if let Some(outcome) = take_finished(&self.runtime, &mut self.recipe_request) {
            if let Err(e) = &outcome {
                tracing::error!("Recipe search failed: {}", e);
            }
            self.recipe_screen.finish_submit(outcome);
            changed = true;
        }

        if let Some(outcome) = take_finished(&self.runtime, &mut self.substitution_request) {
            if let Err(e) = &outcome {
                tracing::error!("Substitution lookup failed: {}", e);
            }
            self.substitution_screen.finish_submit(outcome);
            changed = true;
        }

        changed
    }

    /// Start the backend health probe in the background
    pub fn trigger_health_check(&mut self) {
        if self.health_check.is_some() {
            return;
        }

        self.backend_status = BackendStatus::Checking;
        let client = self.client.clone();
        self.health_check = Some(self.runtime.spawn(async move { client.health().await }));
    }

    /// Apply the health probe result once it is available (non-blocking)
    ///
    /// Returns true if the status changed this call.
    pub fn poll_health_check(&mut self) -> bool {
        let Some(outcome) = take_finished(&self.runtime, &mut self.health_check) else {
            return false;
        };

        self.backend_status = match outcome {
            Ok(health) if health.is_healthy() => {
                tracing::info!("Backend is live");
                BackendStatus::Live
            }
            Ok(health) => {
                tracing::warn!("Backend reports status {:?}", health.status);
                BackendStatus::Offline(format!("status {}", health.status))
            }
            Err(e) => {
                tracing::warn!("Backend health probe failed: {}", e);
                BackendStatus::Offline(e.to_string())
            }
        };
        true
    }

    /// Advance timers and collect finished work; called once per loop iteration
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.chat_screen.expire_status(Instant::now());
        self.poll_requests();
        self.poll_health_check();
    }
}

/// Take the result out of `slot` if its task has finished
fn take_finished<T>(runtime: &Runtime, slot: &mut Option<JoinHandle<Result<T>>>) -> Option<Result<T>> {
    if !slot.as_ref().is_some_and(|handle| handle.is_finished()) {
        return None;
    }

    let handle = slot.take()?;
    Some(match runtime.block_on(handle) {
        Ok(outcome) => outcome,
        Err(e) => Err(Error::Runtime(format!("Request task failed: {}", e))),
    })
}
