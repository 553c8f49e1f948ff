//! Pattern rules.

use std::borrow::Cow;
use std::fmt;

use textform_tree::{Tag, TextNode};

use crate::error::{BoxError, PatternError};
use crate::matcher::{LiteralMatcher, Matcher, RegexMatcher};

type ReplaceFn = dyn Fn(&str) -> Result<TextNode, BoxError> + Send + Sync;

/// One rewrite rule: what to match, what to put in its place, and whether
/// later rules may rewrite the result.
///
/// Rules are exclusive by default: the replacement is wrapped in a blocked
/// wrapper that later passes never enter.
///
/// ```
/// use textform_engine::PatternRule;
/// use textform_tree::TextNode;
///
/// let rule = PatternRule::regex(r"@\w+")
///     .unwrap()
///     .named("mention")
///     .replace_with(|m| TextNode::leaf(m.to_uppercase()))
///     .wrap("mention");
/// assert_eq!(rule.name(), "mention");
/// assert!(rule.is_blocking());
/// ```
pub struct PatternRule {
    name: Cow<'static, str>,
    matcher: Box<dyn Matcher>,
    replacer: Option<Box<ReplaceFn>>,
    allow_other_patterns: bool,
    wrap: Option<Tag>,
}

impl PatternRule {
    /// A rule over any matcher. The matcher's description becomes the name.
    #[must_use]
    pub fn new(matcher: impl Matcher + 'static) -> Self {
        let name = Cow::Owned(matcher.describe().into_owned());
        Self {
            name,
            matcher: Box::new(matcher),
            replacer: None,
            allow_other_patterns: false,
            wrap: None,
        }
    }

    pub fn regex(pattern: &str) -> Result<Self, PatternError> {
        Ok(Self::new(RegexMatcher::new(pattern)?))
    }

    pub fn literal(needle: impl Into<String>) -> Result<Self, PatternError> {
        Ok(Self::new(LiteralMatcher::new(needle)?))
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace each match with the tree `replace` builds from it.
    #[must_use]
    pub fn replace_with<F>(self, replace: F) -> Self
    where
        F: Fn(&str) -> TextNode + Send + Sync + 'static,
    {
        self.try_replace_with(move |matched| Ok::<_, BoxError>(replace(matched)))
    }

    /// Like [`replace_with`](Self::replace_with) for replacers that can fail.
    /// An error aborts the pass.
    #[must_use]
    pub fn try_replace_with<F, E>(mut self, replace: F) -> Self
    where
        F: Fn(&str) -> Result<TextNode, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.replacer = Some(Box::new(move |matched: &str| {
            replace(matched).map_err(Into::<BoxError>::into)
        }));
        self
    }

    /// Let later rules rewrite this rule's output.
    #[must_use]
    pub fn allow_other_patterns(mut self, allow: bool) -> Self {
        self.allow_other_patterns = allow;
        self
    }

    /// Wrap each replacement in a wrapper tagged `tag`.
    #[must_use]
    pub fn wrap(mut self, tag: impl Into<Tag>) -> Self {
        self.wrap = Some(tag.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn matcher(&self) -> &dyn Matcher {
        self.matcher.as_ref()
    }

    #[must_use]
    pub const fn allows_other_patterns(&self) -> bool {
        self.allow_other_patterns
    }

    /// Wrappers this rule creates are blocked.
    #[must_use]
    pub const fn is_blocking(&self) -> bool {
        !self.allow_other_patterns
    }

    #[must_use]
    pub fn wrap_tag(&self) -> Option<&Tag> {
        self.wrap.as_ref()
    }

    /// Replacements are emitted bare instead of wrapped.
    #[must_use]
    pub(crate) const fn emits_raw(&self) -> bool {
        self.allow_other_patterns && self.wrap.is_none()
    }

    pub(crate) fn replace(&self, matched: &str) -> Result<TextNode, BoxError> {
        match &self.replacer {
            Some(replace) => replace(matched),
            None => Ok(TextNode::leaf(matched)),
        }
    }
}

impl fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRule")
            .field("name", &self.name)
            .field("has_replacer", &self.replacer.is_some())
            .field("allow_other_patterns", &self.allow_other_patterns)
            .field("wrap", &self.wrap)
            .finish_non_exhaustive()
    }
}
