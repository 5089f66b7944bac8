mod draft;
mod storage;
mod token;

pub use draft::DEFAULT_PLAYLIST_NAME;
pub use draft::PlaylistDraft;
pub use storage::FileStorage;
pub use storage::MemoryStorage;
pub use token::AccessToken;
pub use token::MAX_TOKEN_LIFETIME;
pub use token::TokenStore;
