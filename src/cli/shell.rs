use std::sync::Arc;

use chrono::Local;
use clap::{Parser, Subcommand};
use tabled::Table;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::{
    browser::BrowserWindow,
    cli::host::{finish_redirect, open_session},
    config::Config,
    error, info,
    management::PlaylistDraft,
    session::Session,
    spotify, success,
    types::Track,
    utils, warning,
};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Search the catalog for tracks
    Search {
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },
    /// Add tracks from the last search results by position
    Add {
        #[arg(required = true, num_args = 1..)]
        positions: Vec<usize>,
    },
    /// Remove tracks from the playlist by position
    Remove {
        #[arg(required = true, num_args = 1..)]
        positions: Vec<usize>,
    },
    /// Rename the playlist
    Name {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Show the playlist
    List,
    /// Show the last search results
    Results,
    /// Show Spotify links of a search result, or of a playlist track with --playlist
    Show {
        position: usize,
        #[arg(long)]
        playlist: bool,
    },
    /// Show whether you are signed in and for how long
    Status,
    /// Save the playlist to your Spotify account
    Save,
    /// Forget the access token and any pending search
    Logout,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

struct ShellState {
    session: Session,
    window: Arc<BrowserWindow>,
    draft: PlaylistDraft,
    results: Vec<Track>,
}

/// Interactive session: search, assemble a playlist, save it.
///
/// Reads one command per line from stdin until `quit` or end of input. A
/// search or save without a valid token opens the authorization page in the
/// browser and waits for the redirect before continuing.
///
/// # Example
///
/// ```text
/// musetunes [New Playlist]> search daft punk
/// musetunes [New Playlist]> add 1 3
/// musetunes [New Playlist]> name Road trip
/// musetunes [Road trip]> save
/// ```
pub async fn shell() {
    let (session, window) = match open_session(Config::from_env()).await {
        Ok(opened) => opened,
        Err(e) => error!("Cannot start session. Err: {}", e),
    };

    let mut state = ShellState {
        session,
        window,
        draft: PlaylistDraft::new(),
        results: Vec::new(),
    };

    info!("Type `help` for the list of commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt(state.draft.name()).await;

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warning!("Cannot read input. Err: {}", e);
                break;
            }
        };

        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                // help and parse errors both land here
                let _ = e.print();
                continue;
            }
        };

        if !state.run(command).await {
            break;
        }
    }
}

impl ShellState {
    /// Runs one command; `false` ends the shell.
    async fn run(&mut self, command: ShellCommand) -> bool {
        match command {
            ShellCommand::Search { term } => self.search(utils::join_words(&term)).await,
            ShellCommand::Add { positions } => self.add(&positions),
            ShellCommand::Remove { positions } => self.remove(&positions),
            ShellCommand::Name { name } => {
                self.draft.rename(utils::join_words(&name));
                success!("Playlist renamed to \"{}\"", self.draft.name());
            }
            ShellCommand::List => self.list(),
            ShellCommand::Results => self.show_results(self.results.clone()),
            ShellCommand::Show { position, playlist } => self.show(position, playlist),
            ShellCommand::Status => self.status().await,
            ShellCommand::Save => self.save().await,
            ShellCommand::Logout => match self.session.sign_out().await {
                Ok(()) => success!("Signed out."),
                Err(e) => warning!("Failed to sign out. Err: {}", e),
            },
            ShellCommand::Quit => return false,
        }
        true
    }

    async fn search(&mut self, term: String) {
        let pb = utils::spinner("Searching... Please wait or login if redirected.");
        let tracks = spotify::search::search(&self.session, &term).await;
        pb.finish_and_clear();

        let tracks = finish_redirect(&self.session, &self.window)
            .await
            .unwrap_or(tracks);
        self.show_results(tracks);
    }

    fn show_results(&mut self, tracks: Vec<Track>) {
        self.results = tracks;
        if self.results.is_empty() {
            info!("No tracks to show.");
            return;
        }
        println!("{}", utils::track_table(&self.results));
    }

    fn add(&mut self, positions: &[usize]) {
        let (selected, rejected) = utils::select_positions(positions, self.results.len());
        for pos in rejected {
            warning!("No search result at position {}", pos);
        }

        for index in selected {
            let track = self.results[index].clone();
            let name = track.name.clone();
            if self.draft.add(track) {
                success!("Added \"{}\"", name);
            } else {
                info!("\"{}\" is already in the playlist", name);
            }
        }
    }

    fn remove(&mut self, positions: &[usize]) {
        let (selected, rejected) = utils::select_positions(positions, self.draft.len());
        for pos in rejected {
            warning!("No playlist track at position {}", pos);
        }

        let ids: Vec<String> = selected
            .into_iter()
            .map(|i| self.draft.tracks()[i].id.clone())
            .collect();
        for id in ids {
            if let Some(track) = self.draft.remove(&id) {
                success!("Removed \"{}\"", track.name);
            }
        }
    }

    fn list(&self) {
        info!(
            "Playlist \"{}\" ({} tracks)",
            self.draft.name(),
            self.draft.len()
        );
        if !self.draft.is_empty() {
            println!("{}", utils::track_table(self.draft.tracks()));
        }
    }

    fn show(&self, position: usize, playlist: bool) {
        let tracks = if playlist {
            self.draft.tracks()
        } else {
            self.results.as_slice()
        };

        let (selected, _) = utils::select_positions(&[position], tracks.len());
        let Some(&index) = selected.first() else {
            warning!("No track at position {}", position);
            return;
        };

        let track = &tracks[index];
        info!("\"{}\" by {} on {}", track.name, track.artist, track.album);
        println!("{}", Table::new(utils::track_links(track)));
    }

    async fn status(&self) {
        match self.session.current_token().await {
            Some(token) => info!(
                "Signed in since {}, token valid for another {}",
                token
                    .obtained_at()
                    .with_timezone(&Local)
                    .format("%H:%M:%S"),
                utils::format_remaining(token.remaining())
            ),
            None => info!("Not signed in. Searching or saving starts the sign-in."),
        }
    }

    async fn save(&mut self) {
        // keep the draft (and a custom name) around for later
        if self.draft.is_empty() {
            info!("The playlist has no tracks, nothing to save.");
            return;
        }

        let uris = self.draft.uris();
        match spotify::playlist::save(&self.session, self.draft.name(), &uris).await {
            Ok(()) => {
                if !self.draft.name().is_empty() {
                    success!("Playlist \"{}\" saved.", self.draft.name());
                }
                self.draft.reset();
            }
            Err(e) if e.is_auth_required() => {
                warning!("Authentication required. Run `save` again once signed in.");
                if let Some(resumed) = finish_redirect(&self.session, &self.window).await {
                    self.show_results(resumed);
                }
            }
            Err(e) => warning!("Failed to save playlist: {}", e),
        }
    }
}

async fn prompt(playlist: &str) {
    let mut stdout = tokio::io::stdout();
    let _ = stdout
        .write_all(format!("musetunes [{}]> ", playlist).as_bytes())
        .await;
    let _ = stdout.flush().await;
}
