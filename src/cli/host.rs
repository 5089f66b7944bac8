use std::sync::Arc;

use crate::{
    browser::BrowserWindow,
    config::Config,
    error::Result,
    info,
    management::FileStorage,
    session::Session,
    spotify::{self, redirect},
    success,
    types::Track,
    warning,
};

/// Builds a session backed by the on-disk session storage and the terminal
/// browser window.
///
/// Storage left behind by an earlier process is cleared: a session starts
/// empty and lives as long as the process.
pub async fn open_session(config: Config) -> Result<(Session, Arc<BrowserWindow>)> {
    let window = Arc::new(BrowserWindow::open(&config).await?);
    let storage = Arc::new(FileStorage::new());
    storage.clear().await?;
    let session = Session::new(config, storage, window.clone());
    Ok((session, window))
}

/// Completes an authorization round trip started by the last operation.
///
/// Returns the results of the resumed pending search, if one ran.
pub(crate) async fn finish_redirect(
    session: &Session,
    window: &BrowserWindow,
) -> Option<Vec<Track>> {
    if !window.navigation_pending() {
        return None;
    }

    info!("Waiting for authorization in your browser...");
    if !window
        .wait_for_redirect(session.config().redirect_timeout)
        .await
    {
        warning!("Authorization failed or timed out.");
        return None;
    }

    let resumed = spotify::search::resume_pending(session).await;
    if redirect::has_access_token(&session.window().href()) {
        // nothing was pending, take the token now
        spotify::auth::get_access_token(session).await;
    }
    if session.current_token().await.is_some() {
        success!("Authentication successful!");
    }
    resumed
}
