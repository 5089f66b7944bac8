use crate::types::Track;

pub const DEFAULT_PLAYLIST_NAME: &str = "New Playlist";

/// The playlist being assembled in the shell before it is saved.
#[derive(Debug, Clone)]
pub struct PlaylistDraft {
    name: String,
    tracks: Vec<Track>,
}

impl Default for PlaylistDraft {
    fn default() -> Self {
        Self {
            name: DEFAULT_PLAYLIST_NAME.to_string(),
            tracks: Vec::new(),
        }
    }
}

impl PlaylistDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Appends `track` unless a track with the same id is already present.
    pub fn add(&mut self, track: Track) -> bool {
        if self.tracks.iter().any(|t| t.id == track.id) {
            return false;
        }
        self.tracks.push(track);
        true
    }

    pub fn remove(&mut self, track_id: &str) -> Option<Track> {
        let pos = self.tracks.iter().position(|t| t.id == track_id)?;
        Some(self.tracks.remove(pos))
    }

    /// Track URIs in playlist order, as sent to the provider.
    pub fn uris(&self) -> Vec<String> {
        self.tracks.iter().map(|t| t.uri.clone()).collect()
    }

    /// Back to an empty draft named [`DEFAULT_PLAYLIST_NAME`].
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
