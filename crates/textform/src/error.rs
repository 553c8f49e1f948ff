use textform_engine::{PatternError, RewriteError};
use thiserror::Error;

pub type Result<T, E = TransformError> = std::result::Result<T, E>;

/// Rejected before any tree is walked.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("budget must be greater than zero")]
    ZeroBudget,

    #[error("continuation marker must not be empty")]
    EmptyMarker,

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Rewrite(#[from] RewriteError),
}
