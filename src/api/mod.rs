//! # API Module
//!
//! HTTP endpoints of the local redirect server that stands in for the web
//! page the provider sends the user back to.
//!
//! - [`callback`] - served at the redirect URI path; a small page that
//!   forwards its URL fragment (where the implicit grant puts the token)
//!   to [`token`].
//! - [`token`] - stores the forwarded fragment for the waiting session.
//! - [`health`] - status and version for quick checks.

mod callback;
mod health;

pub use callback::callback;
pub use callback::token;
pub use health::health;
