use thiserror::Error;

/// Error type a fallible matcher or replacer may return.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, RewriteError>;

/// A rule could not be constructed.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid regex pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("literal pattern must not be empty")]
    EmptyLiteral,
}

/// A rewrite pass was aborted.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("matcher of rule `{rule}` did not partition its input (covered {covered} of {len} bytes)")]
    Partition {
        rule: String,
        covered: usize,
        len: usize,
    },

    #[error("rule `{rule}` failed: {source}")]
    Rule {
        rule: String,
        #[source]
        source: BoxError,
    },
}

impl RewriteError {
    /// Name of the rule whose pass was aborted.
    #[must_use]
    pub fn rule(&self) -> &str {
        match self {
            Self::Partition { rule, .. } | Self::Rule { rule, .. } => rule,
        }
    }
}
