use reqwest::Response;

use crate::{
    error::{Error, Result},
    session::Session,
    spotify::auth,
    types::{
        AddTracksToPlaylistRequest, CreatePlaylistRequest, CreatePlaylistResponse,
        CurrentUserResponse,
    },
};

/// Most URIs the provider accepts in one add-tracks request.
pub const MAX_TRACKS_PER_REQUEST: usize = 100;

/// Saves `track_uris` as a new playlist called `name` on the user's account.
///
/// An empty name or an empty track list is a successful no-op. Otherwise the
/// save runs as a strict sequence, each step starting only after the
/// previous one succeeded:
///
/// 1. `GET /me` for the account id
/// 2. `POST /users/{id}/playlists` with `{ name }` for the playlist id
/// 3. `POST /users/{id}/playlists/{playlist}/tracks` with `{ uris }`, in
///    batches of [`MAX_TRACKS_PER_REQUEST`], in the given order
///
/// The first failure ends the sequence and is returned. Without a token the
/// save is rejected with [`Error::AuthenticationRequired`].
///
/// # Arguments
///
/// * `session` - Session holding the token and the HTTP client
/// * `name` - Name of the new playlist
/// * `track_uris` - Track URIs in playlist order
///
/// # Errors
///
/// * [`Error::AuthenticationRequired`] - no token; a redirect to the
///   authorization page was started instead
/// * [`Error::Transport`] - a step answered with a non-success status
/// * [`Error::MalformedResponse`] - a step answered without the expected id
/// * [`Error::Http`] - the request itself failed
///
/// # Example
///
/// ```
/// let uris = vec!["spotify:track:2Foc5Q5nqNiosCNqttzHof".to_string()];
/// playlist::save(&session, "Road trip", &uris).await?;
/// ```
pub async fn save(session: &Session, name: &str, track_uris: &[String]) -> Result<()> {
    if name.is_empty() || track_uris.is_empty() {
        return Ok(());
    }

    let Some(token) = auth::get_access_token(session).await else {
        tracing::error!("No token available for saving playlist");
        return Err(Error::AuthenticationRequired);
    };

    let user_id = current_user_id(session, &token).await?;
    let playlist_id = create(session, &token, &user_id, name).await?;
    add_tracks(session, &token, &user_id, &playlist_id, track_uris).await?;

    tracing::debug!(
        "Saved playlist with {} tracks for the current user",
        track_uris.len()
    );
    Ok(())
}

/// Account id of the token's owner.
///
/// # Errors
///
/// [`Error::Transport`] on a non-success status, [`Error::MalformedResponse`]
/// when the body carries no id.
pub async fn current_user_id(session: &Session, token: &str) -> Result<String> {
    let url = session.config().endpoint(&["me"])?;
    let response = session.http().get(url).bearer_auth(token).send().await?;
    let response = ensure_success(response, "Current user lookup")?;

    response
        .json::<CurrentUserResponse>()
        .await?
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| Error::MalformedResponse("current user has no id".to_string()))
}

/// Creates an empty playlist and returns its id.
///
/// # Arguments
///
/// * `session` - Session holding the HTTP client and endpoints
/// * `token` - Bearer token for the request
/// * `user_id` - Owner of the new playlist, from [`current_user_id`]
/// * `name` - Playlist name
///
/// # Errors
///
/// [`Error::Transport`] on a non-success status, [`Error::MalformedResponse`]
/// when the created playlist has no id.
pub async fn create(session: &Session, token: &str, user_id: &str, name: &str) -> Result<String> {
    let url = session
        .config()
        .endpoint(&["users", user_id, "playlists"])?;
    let body = CreatePlaylistRequest {
        name: name.to_string(),
    };

    let response = session
        .http()
        .post(url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;
    let response = ensure_success(response, "Playlist creation")?;

    response
        .json::<CreatePlaylistResponse>()
        .await?
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| Error::MalformedResponse("created playlist has no id".to_string()))
}

/// Appends `track_uris` to the playlist, one batch after the other.
///
/// A failing batch stops the loop, later batches are never sent. Batches
/// already added stay in the playlist.
///
/// # Errors
///
/// [`Error::Transport`] carrying the status of the first failing batch.
pub async fn add_tracks(
    session: &Session,
    token: &str,
    user_id: &str,
    playlist_id: &str,
    track_uris: &[String],
) -> Result<()> {
    let url = session
        .config()
        .endpoint(&["users", user_id, "playlists", playlist_id, "tracks"])?;

    for chunk in track_uris.chunks(MAX_TRACKS_PER_REQUEST) {
        let body = AddTracksToPlaylistRequest {
            uris: chunk.to_vec(),
        };
        let response = session
            .http()
            .post(url.clone())
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;
        ensure_success(response, "Adding tracks")?;
    }
    Ok(())
}

fn ensure_success(response: Response, step: &'static str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Transport { step, status })
    }
}
