//! Terminal host for the [`Window`] capability.
//!
//! A terminal has no location bar, so [`BrowserWindow`] keeps one: it starts
//! at the redirect URI, navigation opens the system browser, and once the
//! provider redirects back, the local redirect server hands over the URL
//! fragment and the location becomes `<redirect_uri>#<fragment>` - exactly
//! what a browser tab would show after the round trip.

use std::{
    sync::Mutex as StdMutex,
    time::{Duration, Instant},
};

use tokio::task::JoinHandle;

use crate::{
    config::Config,
    error::Result,
    server::{RedirectSlot, start_redirect_server},
    session::Window,
    spotify::redirect,
    warning,
};

const POLL_INTERVAL: Duration = Duration::from_millis(500);

pub struct BrowserWindow {
    home: String,
    location: StdMutex<String>,
    navigation: StdMutex<Option<String>>,
    captured: RedirectSlot,
    server: JoinHandle<()>,
}

impl BrowserWindow {
    /// Starts the redirect server and returns a window located at the
    /// redirect URI.
    pub async fn open(config: &Config) -> Result<Self> {
        let captured = RedirectSlot::new();
        let server = start_redirect_server(config, captured.clone()).await?;
        let home = redirect::strip_fragment(&config.redirect_uri);

        Ok(Self {
            location: StdMutex::new(home.clone()),
            home,
            navigation: StdMutex::new(None),
            captured,
            server,
        })
    }

    /// Whether a navigation to the authorization page is outstanding.
    pub fn navigation_pending(&self) -> bool {
        self.navigation
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Waits for the provider to redirect back after a navigation.
    ///
    /// Returns `true` once the redirect arrived and the location carries its
    /// fragment, `false` when nothing was pending or `timeout` elapsed.
    pub async fn wait_for_redirect(&self, timeout: Duration) -> bool {
        if !self.navigation_pending() {
            return false;
        }

        let start = Instant::now();
        let fragment = loop {
            if let Some(fragment) = self.captured.take() {
                break Some(fragment);
            }
            if start.elapsed() >= timeout {
                break None;
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        };

        *self.navigation.lock().unwrap_or_else(|e| e.into_inner()) = None;
        self.captured.close();

        match fragment {
            Some(fragment) => {
                *self.location.lock().unwrap_or_else(|e| e.into_inner()) =
                    format!("{}#{}", self.home, fragment);
                true
            }
            None => false,
        }
    }
}

impl Window for BrowserWindow {
    fn href(&self) -> String {
        self.location
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn replace_location(&self, url: &str) {
        *self.location.lock().unwrap_or_else(|e| e.into_inner()) = url.to_string();
    }

    fn navigate(&self, url: &str) {
        *self.navigation.lock().unwrap_or_else(|e| e.into_inner()) = Some(url.to_string());
        self.captured.open();

        if webbrowser::open(url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                url
            )
        }
    }

    fn alert(&self, message: &str) {
        warning!("{}", message);
    }
}

impl Drop for BrowserWindow {
    fn drop(&mut self) {
        self.server.abort();
    }
}
