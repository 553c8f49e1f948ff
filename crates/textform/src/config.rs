//! Transform configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use textform_engine::DEFAULT_MARKER;

use crate::error::ConfigError;

/// Budget, initial toggle state, and continuation marker.
///
/// Rules are code and are passed separately; everything here is plain data
/// and can be loaded from a file with the `serde` feature.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransformConfig {
    /// Maximum number of chars shown while collapsed. `None` disables
    /// truncation.
    pub budget: Option<usize>,
    /// Initial collapsed flag. `None` starts collapsed.
    pub collapsed: Option<bool>,
    /// Appended to the leaf where the budget ran out.
    pub continuation_marker: String,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            budget: None,
            collapsed: None,
            continuation_marker: DEFAULT_MARKER.to_owned(),
        }
    }
}

impl TransformConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = Some(budget);
        self
    }

    #[must_use]
    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.continuation_marker = marker.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.budget == Some(0) {
            return Err(ConfigError::ZeroBudget);
        }
        if self.continuation_marker.is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        Ok(())
    }

    /// The budget as the signed value the truncation engine counts down.
    #[must_use]
    pub(crate) fn signed_budget(&self) -> Option<isize> {
        self.budget
            .map(|budget| isize::try_from(budget).unwrap_or(isize::MAX))
    }
}
