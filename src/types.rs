use serde::{Deserialize, Serialize};
use tabled::Tabled;

pub const SPOTIFY_OPEN_URL: &str = "https://open.spotify.com";

/// A search result normalized from the provider's track object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub artist_id: String,
    pub album: String,
    pub album_id: String,
    pub uri: String,
    pub album_cover: String,
}

impl Track {
    /// Link to the track on the Spotify web player.
    ///
    /// # Example
    ///
    /// ```
    /// assert_eq!(track.track_url(), "https://open.spotify.com/track/2Foc5Q5nqNiosCNqttzHof");
    /// ```
    pub fn track_url(&self) -> String {
        format!("{}/track/{}", SPOTIFY_OPEN_URL, self.id)
    }

    /// Link to the first credited artist.
    pub fn artist_url(&self) -> String {
        format!("{}/artist/{}", SPOTIFY_OPEN_URL, self.artist_id)
    }

    /// Link to the album the track appears on.
    pub fn album_url(&self) -> String {
        format!("{}/album/{}", SPOTIFY_OPEN_URL, self.album_id)
    }
}

impl From<RawTrack> for Track {
    fn from(raw: RawTrack) -> Self {
        let artist = raw.artists.into_iter().next().unwrap_or_default();
        let album_cover = raw
            .album
            .images
            .into_iter()
            .next()
            .map(|image| image.url)
            .unwrap_or_default();

        Track {
            id: raw.id,
            name: raw.name,
            artist: artist.name,
            artist_id: artist.id,
            album: raw.album.name,
            album_id: raw.album.id,
            uri: raw.uri,
            album_cover,
        }
    }
}

/// Body of `GET /search?type=track`. Only the tracks page is read.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<TrackPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackPage {
    #[serde(default)]
    pub items: Vec<RawTrack>,
}

/// Track object as the provider sends it. Every field is optional on the
/// wire; missing ones default to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrack {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub artists: Vec<RawArtist>,
    #[serde(default)]
    pub album: RawAlbum,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArtist {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAlbum {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub url: String,
}

/// Body of `GET /me`.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentUserResponse {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddTracksToPlaylistRequest {
    pub uris: Vec<String>,
}

/// One row of the results or playlist table, `index` is 1-based.
#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    pub name: String,
    pub artist: String,
    pub album: String,
}

#[derive(Tabled)]
pub struct TrackLinkRow {
    pub link: String,
    pub url: String,
}
