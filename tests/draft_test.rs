use musetunes::management::{DEFAULT_PLAYLIST_NAME, PlaylistDraft};
use musetunes::types::Track;

fn track(id: &str) -> Track {
    Track {
        id: id.to_string(),
        name: format!("Track {}", id),
        artist: "Artist".to_string(),
        artist_id: "artist".to_string(),
        album: "Album".to_string(),
        album_id: "album".to_string(),
        uri: format!("spotify:track:{}", id),
        album_cover: String::new(),
    }
}

#[test]
fn test_new_draft() {
    let draft = PlaylistDraft::new();

    assert_eq!(draft.name(), DEFAULT_PLAYLIST_NAME);
    assert!(draft.is_empty());
    assert!(draft.uris().is_empty());
}

#[test]
fn test_add_keeps_tracks_unique_by_id() {
    let mut draft = PlaylistDraft::new();

    assert!(draft.add(track("a")));
    assert!(draft.add(track("b")));
    assert!(!draft.add(track("a")));

    assert_eq!(draft.len(), 2);
    assert_eq!(draft.uris(), vec!["spotify:track:a", "spotify:track:b"]);
}

#[test]
fn test_remove_by_id() {
    let mut draft = PlaylistDraft::new();
    draft.add(track("a"));
    draft.add(track("b"));
    draft.add(track("c"));

    let removed = draft.remove("b").expect("track b present");
    assert_eq!(removed.id, "b");
    assert!(draft.remove("b").is_none());
    assert_eq!(draft.uris(), vec!["spotify:track:a", "spotify:track:c"]);
}

#[test]
fn test_rename_and_reset() {
    let mut draft = PlaylistDraft::new();
    draft.rename("Road trip");
    draft.add(track("a"));

    assert_eq!(draft.name(), "Road trip");

    draft.reset();
    assert_eq!(draft.name(), DEFAULT_PLAYLIST_NAME);
    assert!(draft.is_empty());
}
