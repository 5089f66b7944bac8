//! # CLI Module
//!
//! The user-facing side of musetunes: the part a web front end would play.
//! It owns the draft playlist and the last search results, calls into
//! [`crate::spotify`] and renders what comes back.
//!
//! ## Commands
//!
//! - [`search`] - one-shot catalog search
//! - [`shell`] - interactive session for searching, assembling and saving
//!   a playlist
//!
//! ## Authorization round trip
//!
//! When an operation finds no token, the browser is opened on the
//! authorization page and the operation returns empty-handed. The command
//! then waits for the redirect, and once the location carries the token
//! fragment it resumes the pending search, if any. Saves are never retried
//! on their own; the user runs `save` again after signing in.

mod host;
mod search;
mod shell;

pub use host::open_session;
pub use search::search;
pub use shell::shell;
