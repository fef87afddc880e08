//! CLI error types.

use sidenav_config::ConfigError;
use sidenav_tree::{LoadError, NotFound, SourceError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Source(#[from] SourceError),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    NotFound(#[from] NotFound),

    #[error("{0}")]
    Validation(String),
}
