//! Session context for the orchestration layer.
//!
//! A [`Session`] owns everything the search and save clients share: the
//! configuration, one HTTP client, the [`TokenStore`], and the two host
//! capabilities ([`Window`] and [`SessionStorage`]). It starts empty and is
//! torn down either by the token expiry timer or by [`Session::sign_out`].

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::Config,
    error::Result,
    management::{AccessToken, TokenStore},
};

/// Storage key of the pending search term.
pub const PENDING_SEARCH_KEY: &str = "pendingSearchTerm";

/// The parts of a browser window the orchestration layer touches.
pub trait Window: Send + Sync {
    /// Current location, including any fragment.
    fn href(&self) -> String;

    /// Rewrites the visible location without adding a history entry.
    fn replace_location(&self, url: &str);

    /// Full navigation away from the current page.
    fn navigate(&self, url: &str);

    /// Shows a blocking message to the user.
    fn alert(&self, message: &str);
}

/// Session-scoped key/value storage that survives an authorization redirect.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Per-user context passed to every operation; nothing is kept in globals.
pub struct Session {
    config: Config,
    http: Client,
    token: TokenStore,
    storage: Arc<dyn SessionStorage>,
    window: Arc<dyn Window>,
}

impl Session {
    /// Opens an empty session: no token, and a fresh HTTP client.
    ///
    /// # Arguments
    ///
    /// * `config` - Client id, endpoints and redirect settings
    /// * `storage` - Where the pending search term is kept across redirects
    /// * `window` - Location and navigation of the host page
    pub fn new(
        config: Config,
        storage: Arc<dyn SessionStorage>,
        window: Arc<dyn Window>,
    ) -> Self {
        Self {
            config,
            http: Client::new(),
            token: TokenStore::new(),
            storage,
            window,
        }
    }

    /// Configuration the session was opened with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// HTTP client shared by every provider call of this session.
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// The session's token store. Prefer [`Session::current_token`] for reads.
    pub fn tokens(&self) -> &TokenStore {
        &self.token
    }

    pub fn storage(&self) -> &dyn SessionStorage {
        self.storage.as_ref()
    }

    pub fn window(&self) -> &dyn Window {
        self.window.as_ref()
    }

    /// Token currently held, if it has not expired.
    pub async fn current_token(&self) -> Option<AccessToken> {
        self.token.current().await
    }

    /// Search term saved before the last authorization redirect.
    ///
    /// # Returns
    ///
    /// The stored term, or `None` when nothing is pending. A storage failure
    /// is logged and treated as nothing pending.
    pub async fn pending_search(&self) -> Option<String> {
        match self.storage.get(PENDING_SEARCH_KEY).await {
            Ok(term) => term,
            Err(e) => {
                tracing::warn!("Cannot read pending search term: {}", e);
                None
            }
        }
    }

    /// Drops the token, cancels its expiry timer and forgets the pending search.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Storage`] if the pending term cannot be removed;
    /// the token is dropped regardless.
    pub async fn sign_out(&self) -> Result<()> {
        self.token.clear().await;
        self.storage.remove(PENDING_SEARCH_KEY).await
    }
}
