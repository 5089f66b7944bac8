use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{Instant, sleep_until},
};

/// Longest lifetime accepted for a single token. Spotify grants one hour.
pub const MAX_TOKEN_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// An access token granted through the implicit flow.
///
/// Never serialized: it lives only as long as the session that captured it.
#[derive(Clone)]
pub struct AccessToken {
    value: String,
    obtained_at: DateTime<Utc>,
    expires_at: Instant,
}

impl AccessToken {
    /// Creates a token that expires `expires_in` from now.
    ///
    /// Lifetimes beyond [`MAX_TOKEN_LIFETIME`] are shortened to it.
    ///
    /// # Arguments
    ///
    /// * `value` - Bearer token as granted by the provider
    /// * `expires_in` - Lifetime announced with the grant
    ///
    /// # Example
    ///
    /// ```
    /// let token = AccessToken::new("BQD...", Duration::from_secs(3600));
    /// assert!(!token.is_expired());
    /// ```
    pub fn new(value: impl Into<String>, expires_in: Duration) -> Self {
        let now = Instant::now();
        let expires_at = now
            .checked_add(expires_in.min(MAX_TOKEN_LIFETIME))
            .unwrap_or(now);

        Self {
            value: value.into(),
            obtained_at: Utc::now(),
            expires_at,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Wall-clock time the token was captured.
    pub fn obtained_at(&self) -> DateTime<Utc> {
        self.obtained_at
    }

    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Time left until the token expires, zero once it has.
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("obtained_at", &self.obtained_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[derive(Default)]
struct Slot {
    token: Option<AccessToken>,
    expiry: Option<JoinHandle<()>>,
}

/// Holds at most one access token and clears it when its lifetime runs out.
///
/// Storing a token spawns a timer task on the current tokio runtime; the task
/// empties the slot at the token's deadline unless a newer token replaced it.
#[derive(Clone, Default)]
pub struct TokenStore {
    inner: Arc<Mutex<Slot>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored token, unless it has expired.
    pub async fn current(&self) -> Option<AccessToken> {
        let slot = self.inner.lock().await;
        slot.token.as_ref().filter(|t| !t.is_expired()).cloned()
    }

    /// Replaces the stored token and restarts the expiry timer.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn store(&self, token: AccessToken) {
        let deadline = token.expires_at();
        let value = token.value().to_string();

        let mut slot = self.inner.lock().await;
        if let Some(previous) = slot.expiry.take() {
            previous.abort();
        }
        slot.token = Some(token);

        let inner = Arc::clone(&self.inner);
        slot.expiry = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            let mut slot = inner.lock().await;
            if slot.token.as_ref().is_some_and(|t| t.value() == value) {
                tracing::debug!("Access token expired, clearing it");
                slot.token = None;
                slot.expiry = None;
            }
        }));
    }

    pub async fn clear(&self) {
        let mut slot = self.inner.lock().await;
        if let Some(expiry) = slot.expiry.take() {
            expiry.abort();
        }
        slot.token = None;
    }
}
