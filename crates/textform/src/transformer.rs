//! The transform orchestrator.
//!
//! Folds the rewrite engine over the configured rules, then runs the
//! truncation engine when a budget is set.

use textform_engine::{
    PatternError, PatternRule, RewriteError, Truncated, rewrite_all, truncate_with_marker,
};
use textform_tree::TextNode;
use tracing::debug;

use crate::config::TransformConfig;
use crate::error::{ConfigError, Result};
use crate::presentation::Presentation;

/// Validated rule list plus configuration.
///
/// Holds no per-input state: one transformer can serve any number of
/// inputs, from any thread.
///
/// ```
/// use textform::{PatternRule, TextNode, TextTransformer};
///
/// let transformer = TextTransformer::builder()
///     .rule(PatternRule::literal("world").unwrap().wrap("bold"))
///     .budget(8)
///     .build()
///     .unwrap();
/// let out = transformer.transform(TextNode::leaf("hello world")).unwrap();
/// assert_eq!(out.full().plain_text(), "hello world");
/// assert_eq!(out.truncated().map(TextNode::plain_text).as_deref(), Some("hello ..."));
/// assert!(out.budget_exceeded());
/// ```
#[derive(Debug)]
pub struct TextTransformer {
    rules: Vec<PatternRule>,
    config: TransformConfig,
}

impl TextTransformer {
    pub fn new(rules: Vec<PatternRule>, config: TransformConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { rules, config })
    }

    #[must_use]
    pub fn builder() -> TransformerBuilder {
        TransformerBuilder::default()
    }

    #[must_use]
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Apply every rule in order, without truncating.
    pub fn rewrite(&self, input: TextNode) -> Result<TextNode, RewriteError> {
        rewrite_all(input, &self.rules)
    }

    /// Rewrite `input`, then truncate it if a budget is configured.
    pub fn transform(&self, input: TextNode) -> Result<Transformed> {
        let full = self.rewrite(input)?;
        let truncated = self.config.signed_budget().map(|budget| {
            truncate_with_marker(&full, budget, &self.config.continuation_marker)
        });
        let transformed = Transformed { full, truncated };
        debug!(
            rules = self.rules.len(),
            budget = ?self.config.budget,
            exceeded = transformed.budget_exceeded(),
            "text transformed"
        );
        Ok(transformed)
    }

    /// Transform `input` and wrap the result in toggle state seeded from the
    /// configured collapsed flag.
    pub fn present(&self, input: TextNode) -> Result<Presentation> {
        let transformed = self.transform(input)?;
        Ok(Presentation::new(transformed, self.config.collapsed))
    }
}

/// Builder for [`TextTransformer`].
///
/// Rule construction errors passed through [`try_rule`](Self::try_rule) are
/// held until [`build`](Self::build), which reports the first one.
#[derive(Debug, Default)]
pub struct TransformerBuilder {
    rules: Vec<PatternRule>,
    config: TransformConfig,
    error: Option<PatternError>,
}

impl TransformerBuilder {
    #[must_use]
    pub fn rule(mut self, rule: PatternRule) -> Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn try_rule(mut self, rule: Result<PatternRule, PatternError>) -> Self {
        match rule {
            Ok(rule) => self.rules.push(rule),
            Err(error) => {
                self.error.get_or_insert(error);
            }
        }
        self
    }

    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = PatternRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    #[must_use]
    pub fn config(mut self, config: TransformConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn budget(mut self, budget: usize) -> Self {
        self.config.budget = Some(budget);
        self
    }

    #[must_use]
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.config.collapsed = Some(collapsed);
        self
    }

    #[must_use]
    pub fn continuation_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.continuation_marker = marker.into();
        self
    }

    pub fn build(self) -> Result<TextTransformer, ConfigError> {
        if let Some(error) = self.error {
            return Err(error.into());
        }
        TextTransformer::new(self.rules, self.config)
    }
}

/// Output of one [`TextTransformer::transform`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    full: TextNode,
    truncated: Option<Truncated>,
}

impl Transformed {
    /// The rewritten, untruncated tree.
    #[must_use]
    pub fn full(&self) -> &TextNode {
        &self.full
    }

    /// The truncated tree, when a budget is configured.
    #[must_use]
    pub fn truncated(&self) -> Option<&TextNode> {
        self.truncated.as_ref().map(|truncated| &truncated.node)
    }

    /// Budget left after truncation; zero or negative means it ran out.
    #[must_use]
    pub fn remaining(&self) -> Option<isize> {
        self.truncated.as_ref().map(|truncated| truncated.remaining)
    }

    #[must_use]
    pub fn budget_exceeded(&self) -> bool {
        self.truncated.as_ref().is_some_and(Truncated::exhausted)
    }

    #[must_use]
    pub fn into_parts(self) -> (TextNode, Option<Truncated>) {
        (self.full, self.truncated)
    }
}
