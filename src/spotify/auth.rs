use url::Url;

use crate::{
    config::Config,
    error::{Error, Result},
    session::Session,
    spotify::redirect,
};

/// Resolves the access token for the next provider request.
///
/// Resolution order:
/// 1. A token already held by the session that has not expired.
/// 2. A token fragment on the current window location, left there by the
///    provider's redirect. It is stored with an expiry timer and the
///    fragment is removed from the location.
/// 3. Neither: the window is sent to the authorization endpoint and `None`
///    is returned, since the current page is about to be left.
///
/// A missing client id is reported through [`crate::session::Window::alert`]
/// and yields `None` without any navigation.
pub async fn get_access_token(session: &Session) -> Option<String> {
    if let Some(token) = session.current_token().await {
        return Some(token.value().to_string());
    }

    if let Some(token) = redirect::capture_grant(session.window()) {
        let value = token.value().to_string();
        session.tokens().store(token).await;
        return Some(value);
    }

    if let Err(e) = redirect_to_authorize(session).await {
        tracing::error!("Cannot start authorization: {}", e);
        session.window().alert(&e.to_string());
    }
    None
}

/// Navigates the window to the provider's authorization endpoint.
///
/// The pending search term, when one is stored, travels along as `state`.
/// It is only informational: after the redirect the stored term is read
/// back from session storage, not from the echoed parameter.
pub async fn redirect_to_authorize(session: &Session) -> Result<()> {
    let pending = session.pending_search().await;
    let url = authorize_url(session.config(), pending.as_deref())?;

    tracing::info!("Redirecting to the authorization endpoint");
    session.window().navigate(url.as_str());
    Ok(())
}

/// Builds the implicit-grant authorization URL.
///
/// ```text
/// {auth_url}?client_id=..&response_type=token&scope=..&redirect_uri=..[&state=..]
/// ```
pub fn authorize_url(config: &Config, pending: Option<&str>) -> Result<Url> {
    let client_id = config.client_id.as_deref().ok_or_else(|| {
        Error::Configuration(
            "Spotify client id is missing. Set SPOTIFY_API_AUTH_CLIENT_ID in your environment."
                .to_string(),
        )
    })?;

    let mut params = vec![
        ("client_id", client_id),
        ("response_type", "token"),
        ("scope", config.scope.as_str()),
        ("redirect_uri", config.redirect_uri.as_str()),
    ];
    if let Some(term) = pending.filter(|t| !t.is_empty()) {
        params.push(("state", term));
    }

    Url::parse_with_params(&config.auth_url, &params).map_err(|e| {
        Error::Configuration(format!(
            "Invalid authorization URL {}: {}",
            config.auth_url, e
        ))
    })
}
