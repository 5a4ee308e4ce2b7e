//! Error types raised while mirroring sprites.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the sprite mirror.
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read creature documents: {0}")]
    Documents(#[from] game_data::DataError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MirrorError {
    /// The remote source refused or throttled the request.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, MirrorError::Status { status: 429, .. })
    }
}

pub type Result<T> = std::result::Result<T, MirrorError>;
