//! musetunes playlist builder library
//!
//! Searches the Spotify catalog, assembles tracks into a named playlist and
//! saves it to the user's account. Authentication uses the OAuth implicit
//! grant: the token arrives in the redirect URL fragment and is held in
//! memory until it expires.
//!
//! # Modules
//!
//! - `api` - endpoints of the local redirect server
//! - `browser` - terminal implementation of the window capability
//! - `cli` - one-shot commands and the interactive shell
//! - `config` - configuration from environment variables and `.env`
//! - `error` - crate error type
//! - `management` - token store, session storage and playlist draft
//! - `server` - local redirect server
//! - `session` - session context and host capability traits
//! - `spotify` - token resolution, search and playlist save
//! - `types` - provider payloads and normalized tracks
//! - `utils` - table and selection helpers

pub mod api;
pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, Result};

/// Prints an informational message with a blue bullet point.
///
/// ```
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for the command layer: library operations return errors instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
