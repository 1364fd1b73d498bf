//! CLI error type.

use std::io;
use std::path::PathBuf;

/// Anything that can stop a subcommand.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Filesystem access failed.
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `profile.toml` could not be parsed.
    #[error("invalid profile config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// `profile.toml` could not be written.
    #[error("cannot encode profile config: {0}")]
    ConfigEncode(#[from] toml::ser::Error),

    /// The session could not be created or used.
    #[error(transparent)]
    Tox(#[from] tox::Error),

    /// Bad profile name, missing profile, duplicate profile.
    #[error("{0}")]
    Profile(String),

    /// The worker thread could not be started.
    #[error("cannot spawn worker thread: {0}")]
    Spawn(#[source] io::Error),

    /// The worker thread went away.
    #[error("worker stopped unexpectedly")]
    Worker,
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;

/// Attach a path to an I/O error.
pub fn io_at(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> CliError {
    let path = path.into();
    move |source| CliError::Io { path, source }
}
