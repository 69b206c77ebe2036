//! Backend API client
//!
//! This module talks to the ChefMate backend over HTTP:
//! - One `POST` per user action (`/chat`, `/recipe-search`, `/substitution`)
//! - A `GET /health` probe for the status indicator
//! - Non-2xx statuses, transport failures and undecodable bodies all come
//!   back as `Err`; callers decide how to present them
//!
//! There are no retries and no timeouts.

use crate::protocol::{
    ChatRequest, ChatResponse, HealthResponse, RecipeSearchRequest, RecipeSearchResponse,
    SubstitutionRequest, SubstitutionResponse, CHAT_PATH, HEALTH_PATH, RECIPE_SEARCH_PATH,
    SUBSTITUTION_PATH,
};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

/// HTTP client bound to one backend base URL
///
/// Cheap to clone; clones share the underlying connection pool, so one
/// client can be handed to every background request.
///
/// # Example
/// ```rust,no_run
/// use chefmate::api::ApiClient;
/// use chefmate::protocol::SubstitutionRequest;
///
/// # async fn example() -> chefmate::Result<()> {
/// let client = ApiClient::new("http://localhost:8000");
/// let text = client
///     .find_substitutions(&SubstitutionRequest {
///         ingredient: "eggs".to_string(),
///         context: Some("baking cookies".to_string()),
///     })
///     .await?;
/// println!("{}", text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` (trailing slashes are ignored)
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a chat message and return the assistant's answer
    pub async fn chat(&self, request: &ChatRequest) -> Result<String> {
        let response: ChatResponse = self.post_json(CHAT_PATH, request).await?;
        Ok(response.response)
    }

    /// Ask for recipes built from the given ingredients
    pub async fn search_recipes(&self, request: &RecipeSearchRequest) -> Result<String> {
        let response: RecipeSearchResponse = self.post_json(RECIPE_SEARCH_PATH, request).await?;
        Ok(response.recipes)
    }

    /// Ask for substitutes for one ingredient
    pub async fn find_substitutions(&self, request: &SubstitutionRequest) -> Result<String> {
        let response: SubstitutionResponse = self.post_json(SUBSTITUTION_PATH, request).await?;
        Ok(response.substitutions)
    }

    /// Probe the backend health endpoint
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = self.url(HEALTH_PATH);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            warn!("Health probe failed with status {}", response.status());
            return Err(Error::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        info!("POST {}", url);

        let response = match self.client.post(&url).json(body).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {}", url, e);
                return Err(Error::Http(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Request to {} failed with status {}", url, status);
            return Err(Error::Status(status.as_u16()));
        }

        match response.json::<R>().await {
            Ok(parsed) => {
                debug!("Request to {} succeeded", url);
                Ok(parsed)
            }
            Err(e) => {
                warn!("Malformed response from {}: {}", url, e);
                Err(Error::Http(e))
            }
        }
    }
}
