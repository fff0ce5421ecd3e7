//! Error type for the whole crate.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (DNS, TLS, connection reset, ...)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but not with a success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A well-formed response that carries neither a score nor a known code
    #[error("unexpected response: {0}")]
    Response(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    /// A tagger did not return exactly one tag per word
    #[error("tagging failed: {0}")]
    Tagging(String),
}
