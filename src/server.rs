use std::{
    net::SocketAddr,
    str::FromStr,
    sync::{Arc, Mutex},
};

use axum::{Extension, Router, routing::get};
use tokio::task::JoinHandle;
use url::Url;

use crate::{
    api,
    config::Config,
    error::{Error, Result},
};

#[derive(Default)]
struct Capture {
    awaiting: bool,
    fragment: Option<String>,
}

/// Hand-over point between the `/token` endpoint and the waiting session.
///
/// A fragment is only accepted while the slot is open, that is between a
/// navigation to the authorization page and the first redirect back.
/// Anything sent to `/token` at other times is dropped.
#[derive(Clone, Default)]
pub struct RedirectSlot {
    inner: Arc<Mutex<Capture>>,
}

impl RedirectSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the slot for the next redirect, dropping any earlier capture.
    pub fn open(&self) {
        let mut capture = self.lock();
        capture.awaiting = true;
        capture.fragment = None;
    }

    /// Stores `fragment` if a redirect is awaited. The slot closes on
    /// acceptance, so only the first redirect counts.
    ///
    /// # Returns
    ///
    /// `true` if the fragment was accepted.
    pub fn offer(&self, fragment: String) -> bool {
        let mut capture = self.lock();
        if !capture.awaiting {
            return false;
        }
        capture.awaiting = false;
        capture.fragment = Some(fragment);
        true
    }

    /// Takes the accepted fragment, if any.
    pub fn take(&self) -> Option<String> {
        self.lock().fragment.take()
    }

    /// Stops accepting fragments and drops an untaken one.
    pub fn close(&self) {
        let mut capture = self.lock();
        capture.awaiting = false;
        capture.fragment = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Capture> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Binds the local redirect server and serves it in the background.
///
/// The landing page is mounted at the path of the configured redirect URI,
/// so the provider's redirect lands on it directly.
///
/// # Arguments
///
/// * `config` - Supplies the redirect URI and the address to bind
/// * `slot` - Receives fragments forwarded to `/token`
///
/// # Errors
///
/// Returns [`Error::Configuration`] when the redirect URI path collides with
/// a server route, or the address cannot be parsed or bound.
pub async fn start_redirect_server(config: &Config, slot: RedirectSlot) -> Result<JoinHandle<()>> {
    let callback_path = Url::parse(&config.redirect_uri)?.path().to_string();
    if callback_path == "/token" || callback_path == "/health" {
        return Err(Error::Configuration(format!(
            "Redirect URI path {} is reserved by the redirect server",
            callback_path
        )));
    }

    let app = Router::new()
        .route("/health", get(api::health))
        .route(&callback_path, get(api::callback))
        .route("/token", get(api::token).layer(Extension(slot)));

    let addr = SocketAddr::from_str(&config.server_address).map_err(|e| {
        Error::Configuration(format!(
            "Failed to parse server address {}: {}",
            config.server_address, e
        ))
    })?;

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        Error::Configuration(format!("Cannot bind redirect server to {}: {}", addr, e))
    })?;
    tracing::debug!("Redirect server listening on {}", addr);

    Ok(tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Redirect server stopped: {}", e);
        }
    }))
}
