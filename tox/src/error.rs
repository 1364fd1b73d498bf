//! Unified error type for the fallible parts of the API.
//!
//! Boundary calls never surface as `Err`: they are logged and return
//! `None`/`false`. `Error` covers construction and argument parsing.

use crate::code::ErrNew;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The library refused to create a session.
    #[error("tox_new failed: {0}")]
    New(ErrNew),

    /// A key, address or id had the wrong length or was not valid hex.
    #[error("invalid key: {0}")]
    InvalidKey(String),
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Self::InvalidKey(err.to_string())
    }
}
