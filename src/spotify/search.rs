use crate::{
    error::{Error, Result},
    session::{PENDING_SEARCH_KEY, Session},
    spotify::{auth, redirect},
    types::{SearchResponse, Track},
};

/// Searches the catalog for tracks matching `term`.
///
/// The term is stored as the pending search before a token is resolved so
/// it survives an authorization redirect. Without a token the result is
/// empty and the term stays pending; with one, the term is cleared and the
/// request goes out.
///
/// Failures never reach the caller: a non-success status, an unreachable
/// provider or a response without a `tracks` collection all yield an
/// empty list. Results keep the provider's order.
pub async fn search(session: &Session, term: &str) -> Vec<Track> {
    if let Err(e) = session.storage().set(PENDING_SEARCH_KEY, term).await {
        tracing::warn!("Cannot store pending search term: {}", e);
    }

    let Some(token) = auth::get_access_token(session).await else {
        tracing::info!("No access token, waiting for authorization");
        return Vec::new();
    };

    if let Err(e) = session.storage().remove(PENDING_SEARCH_KEY).await {
        tracing::warn!("Cannot clear pending search term: {}", e);
    }

    match fetch_tracks(session, &token, term).await {
        Ok(tracks) => tracks,
        Err(e) => {
            tracing::warn!("Search failed: {}", e);
            Vec::new()
        }
    }
}

/// Resumes the search that was interrupted by the authorization redirect.
///
/// Runs only when the window location carries an `access_token` fragment
/// and a pending search term is stored; returns `None` otherwise.
pub async fn resume_pending(session: &Session) -> Option<Vec<Track>> {
    if !redirect::has_access_token(&session.window().href()) {
        return None;
    }
    let term = session.pending_search().await?;

    tracing::debug!("Resuming pending search after authorization");
    Some(search(session, &term).await)
}

async fn fetch_tracks(session: &Session, token: &str, term: &str) -> Result<Vec<Track>> {
    let url = session.config().endpoint(&["search"])?;

    let response = session
        .http()
        .get(url)
        .query(&[("type", "track"), ("q", term)])
        .bearer_auth(token)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Transport {
            step: "Search",
            status,
        });
    }

    let json = response.json::<SearchResponse>().await?;
    let Some(page) = json.tracks else {
        return Err(Error::MalformedResponse(
            "search response has no tracks collection".to_string(),
        ));
    };

    Ok(page.items.into_iter().map(Track::from).collect())
}
