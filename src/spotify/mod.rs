//! # Spotify Integration Module
//!
//! The orchestration layer between the user interface and the Spotify Web
//! API. Every operation takes a [`crate::session::Session`], which carries
//! the token store, the pending search term storage and the window the
//! OAuth redirect goes through.
//!
//! ```text
//! UI (shell, one-shot commands)
//!          ↓
//!     ├── search    (Search Client)
//!     └── playlist  (Playlist Save Client)
//!          ↓
//!     auth          (token resolution, authorization redirect)
//!     redirect      (token fragment capture)
//!          ↓
//! Spotify Web API / accounts service
//! ```
//!
//! ## Authentication
//!
//! [`auth`] uses the OAuth 2.0 implicit grant: the user is sent to the
//! accounts service with `response_type=token` and comes back to the redirect
//! URI with the access token in the URL fragment. There is no client secret
//! and no token exchange. Tokens are held in memory only and dropped when
//! their advertised lifetime runs out; the next call starts a new
//! authorization.
//!
//! ## Failure policy
//!
//! - [`search::search`] never fails: missing tokens, HTTP errors and
//!   malformed responses all produce an empty list.
//! - [`playlist::save`] is a write with visible consequences and returns
//!   every failure, including a missing token.
//! - Nothing is retried automatically.

pub mod auth;
pub mod playlist;
pub mod redirect;
pub mod search;
