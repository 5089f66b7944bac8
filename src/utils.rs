use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::types::{Track, TrackLinkRow, TrackTableRow};

/// Converts tracks into numbered table rows.
///
/// # Arguments
///
/// * `tracks` - Tracks in display order
///
/// # Returns
///
/// One row per track, numbered from 1.
pub fn track_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            index: i + 1,
            name: t.name.clone(),
            artist: t.artist.clone(),
            album: t.album.clone(),
        })
        .collect()
}

pub fn track_table(tracks: &[Track]) -> Table {
    Table::new(track_rows(tracks))
}

/// Web player links of a single track: the track, its artist, its album and
/// the album cover when the provider sent one.
pub fn track_links(track: &Track) -> Vec<TrackLinkRow> {
    let mut rows = vec![
        TrackLinkRow {
            link: "track".to_string(),
            url: track.track_url(),
        },
        TrackLinkRow {
            link: "artist".to_string(),
            url: track.artist_url(),
        },
        TrackLinkRow {
            link: "album".to_string(),
            url: track.album_url(),
        },
    ];
    if !track.album_cover.is_empty() {
        rows.push(TrackLinkRow {
            link: "cover".to_string(),
            url: track.album_cover.clone(),
        });
    }
    rows
}

/// Formats a token lifetime as minutes and seconds, e.g. `59m 07s`.
pub fn format_remaining(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{}m {:02}s", secs / 60, secs % 60)
}

/// Splits 1-based positions into valid 0-based indices and rejected input.
///
/// Duplicates are dropped; the order of first appearance is kept.
///
/// # Arguments
///
/// * `positions` - Positions as typed by the user
/// * `len` - Length of the list they refer to
///
/// # Example
///
/// ```
/// let (selected, rejected) = select_positions(&[2, 0, 2, 9], 3);
/// assert_eq!(selected, vec![1]);
/// assert_eq!(rejected, vec![0, 9]);
/// ```
pub fn select_positions(positions: &[usize], len: usize) -> (Vec<usize>, Vec<usize>) {
    let mut selected: Vec<usize> = Vec::new();
    let mut rejected = Vec::new();

    for &pos in positions {
        if pos == 0 || pos > len {
            rejected.push(pos);
        } else if !selected.contains(&(pos - 1)) {
            selected.push(pos - 1);
        }
    }

    (selected, rejected)
}

/// Joins shell words back into a single phrase.
pub fn join_words(words: &[String]) -> String {
    words
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Steady-ticking spinner for calls that may take a while.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
