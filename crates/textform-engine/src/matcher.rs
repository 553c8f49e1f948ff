//! Span-splitting matchers.
//!
//! A [`Matcher`] partitions a text into ordered [`Span`]s whose concatenation
//! is exactly the input. The rewrite engine checks that contract on every
//! leaf and aborts the pass when it is broken.

use std::borrow::Cow;
use std::ops::Range;

use regex::Regex;

use crate::error::{BoxError, PatternError};

/// A slice of matcher input, flagged when it is a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'t> {
    pub text: &'t str,
    pub is_match: bool,
}

impl<'t> Span<'t> {
    #[must_use]
    pub const fn plain(text: &'t str) -> Self {
        Self {
            text,
            is_match: false,
        }
    }

    #[must_use]
    pub const fn matched(text: &'t str) -> Self {
        Self {
            text,
            is_match: true,
        }
    }
}

/// Splits text into alternating unmatched/matched spans.
pub trait Matcher: Send + Sync {
    /// Partition `text`. Concatenating the returned spans must reproduce it.
    fn split<'t>(&self, text: &'t str) -> Result<Vec<Span<'t>>, BoxError>;

    /// Short description used as the default rule name in logs and errors.
    fn describe(&self) -> Cow<'_, str> {
        Cow::Borrowed("matcher")
    }
}

/// Build spans from sorted, non-overlapping match ranges.
///
/// Empty ranges are skipped; they would produce empty matched spans.
pub fn spans_from_ranges<'t>(
    text: &'t str,
    ranges: impl IntoIterator<Item = Range<usize>>,
) -> Vec<Span<'t>> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    for range in ranges {
        if range.is_empty() {
            continue;
        }
        if range.start > cursor {
            spans.push(Span::plain(&text[cursor..range.start]));
        }
        spans.push(Span::matched(&text[range.clone()]));
        cursor = range.end;
    }
    if cursor < text.len() || spans.is_empty() {
        spans.push(Span::plain(&text[cursor..]));
    }
    spans
}

/// Regex-backed matcher. Every non-empty match is one matched span.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl From<Regex> for RegexMatcher {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

impl Matcher for RegexMatcher {
    fn split<'t>(&self, text: &'t str) -> Result<Vec<Span<'t>>, BoxError> {
        Ok(spans_from_ranges(
            text,
            self.regex.find_iter(text).map(|found| found.range()),
        ))
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.regex.as_str())
    }
}

/// Exact substring matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralMatcher {
    needle: String,
}

impl LiteralMatcher {
    pub fn new(needle: impl Into<String>) -> Result<Self, PatternError> {
        let needle = needle.into();
        if needle.is_empty() {
            return Err(PatternError::EmptyLiteral);
        }
        Ok(Self { needle })
    }

    #[must_use]
    pub fn needle(&self) -> &str {
        &self.needle
    }
}

impl Matcher for LiteralMatcher {
    fn split<'t>(&self, text: &'t str) -> Result<Vec<Span<'t>>, BoxError> {
        let len = self.needle.len();
        Ok(spans_from_ranges(
            text,
            text.match_indices(self.needle.as_str())
                .map(|(start, _)| start..start + len),
        ))
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.needle)
    }
}
