//! Expand/collapse state and the renderer seam.
//!
//! A [`Presentation`] owns one transform result and a two-state toggle. It
//! decides which tree the renderer sees and which continuation control, if
//! any, should be offered. Rendering the control and wiring it to
//! [`Presentation::activate`] (or `expand`/`collapse` directly) is the
//! caller's job.
//!
//! # Example
//! ```
//! use textform::{Affordance, TextNode, TextTransformer};
//!
//! let transformer = TextTransformer::builder().budget(6).build().unwrap();
//! let mut view = transformer.present(TextNode::leaf("a long sentence")).unwrap();
//!
//! let frame = view.frame();
//! assert_eq!(frame.tree.plain_text(), "a l...");
//! assert_eq!(frame.affordance, Some(Affordance::ShowMore));
//!
//! view.expand();
//! let frame = view.frame();
//! assert_eq!(frame.tree.plain_text(), "a long sentence");
//! assert_eq!(frame.affordance, Some(Affordance::ShowLess));
//! ```

use textform_tree::TextNode;
use tracing::debug;

use crate::transformer::Transformed;

/// The two toggle states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

impl Disclosure {
    /// Initial state for a caller-supplied collapsed flag. Only an explicit
    /// `Some(false)` starts expanded.
    #[must_use]
    pub const fn from_collapsed(collapsed: Option<bool>) -> Self {
        match collapsed {
            Some(false) => Self::Expanded,
            _ => Self::Collapsed,
        }
    }

    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

/// Continuation control the renderer should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affordance {
    /// Text is truncated; activating it expands.
    ShowMore,
    /// Text is expanded past the budget; activating it collapses.
    ShowLess,
}

/// What a renderer draws for one presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    pub tree: &'a TextNode,
    /// The budget ran out, whether or not the truncated tree is shown.
    pub budget_exceeded: bool,
    pub affordance: Option<Affordance>,
}

/// Turns a [`Frame`] into the caller's output type.
///
/// A frame names the control to offer but carries no callbacks. The caller
/// owns the control and wires it back to [`Presentation::activate`] with
/// the frame's [`Affordance`], or to [`Presentation::expand`] and
/// [`Presentation::collapse`] directly.
pub trait Renderer {
    type Output;

    fn render(&mut self, frame: Frame<'_>) -> Self::Output;
}

/// A transform result plus its expand/collapse toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    transformed: Transformed,
    disclosure: Disclosure,
}

impl Presentation {
    #[must_use]
    pub fn new(transformed: Transformed, collapsed: Option<bool>) -> Self {
        Self {
            transformed,
            disclosure: Disclosure::from_collapsed(collapsed),
        }
    }

    #[must_use]
    pub fn transformed(&self) -> &Transformed {
        &self.transformed
    }

    #[must_use]
    pub const fn disclosure(&self) -> Disclosure {
        self.disclosure
    }

    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.disclosure.is_expanded()
    }

    #[must_use]
    pub fn budget_exceeded(&self) -> bool {
        self.transformed.budget_exceeded()
    }

    /// Show the untruncated tree.
    pub fn expand(&mut self) {
        self.set(Disclosure::Expanded);
    }

    /// Show the truncated tree again.
    pub fn collapse(&mut self) {
        self.set(Disclosure::Collapsed);
    }

    /// Run the trigger behind `affordance`.
    pub fn activate(&mut self, affordance: Affordance) {
        match affordance {
            Affordance::ShowMore => self.expand(),
            Affordance::ShowLess => self.collapse(),
        }
    }

    /// Re-apply a caller-supplied collapsed flag. `None` keeps the current
    /// state.
    pub fn sync_collapsed(&mut self, collapsed: Option<bool>) {
        if let Some(collapsed) = collapsed {
            self.set(if collapsed {
                Disclosure::Collapsed
            } else {
                Disclosure::Expanded
            });
        }
    }

    /// The tree and control for the current state.
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        let budget_exceeded = self.transformed.budget_exceeded();
        match self.transformed.truncated() {
            Some(truncated) if budget_exceeded && !self.is_expanded() => Frame {
                tree: truncated,
                budget_exceeded,
                affordance: Some(Affordance::ShowMore),
            },
            _ => Frame {
                tree: self.transformed.full(),
                budget_exceeded,
                affordance: budget_exceeded.then_some(Affordance::ShowLess),
            },
        }
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> R::Output {
        renderer.render(self.frame())
    }

    fn set(&mut self, next: Disclosure) {
        if self.disclosure != next {
            debug!(from = ?self.disclosure, to = ?next, "disclosure changed");
            self.disclosure = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextTransformer;
    use tracing_test::traced_test;

    fn present(budget: usize, collapsed: Option<bool>, text: &str) -> Presentation {
        let mut builder = TextTransformer::builder().budget(budget);
        if let Some(collapsed) = collapsed {
            builder = builder.collapsed(collapsed);
        }
        builder
            .build()
            .unwrap()
            .present(TextNode::leaf(text))
            .unwrap()
    }

    #[test]
    fn starts_collapsed_by_default() {
        assert_eq!(Disclosure::from_collapsed(None), Disclosure::Collapsed);
        assert_eq!(Disclosure::from_collapsed(Some(true)), Disclosure::Collapsed);
        assert_eq!(Disclosure::from_collapsed(Some(false)), Disclosure::Expanded);
    }

    #[test]
    fn within_budget_offers_nothing() {
        let view = present(20, None, "short");
        let frame = view.frame();
        assert_eq!(frame.tree.plain_text(), "short");
        assert!(!frame.budget_exceeded);
        assert_eq!(frame.affordance, None);
    }

    #[test]
    fn within_budget_ignores_expanded_state() {
        let mut view = present(20, Some(false), "short");
        assert!(view.is_expanded());
        assert_eq!(view.frame().affordance, None);
        view.collapse();
        assert_eq!(view.frame().affordance, None);
    }

    #[test]
    fn toggles_between_truncated_and_full() {
        let mut view = present(5, None, "abcdefgh");
        assert_eq!(view.frame().tree.plain_text(), "ab...");
        view.activate(Affordance::ShowMore);
        assert!(view.is_expanded());
        assert_eq!(view.frame().tree.plain_text(), "abcdefgh");
        assert_eq!(view.frame().affordance, Some(Affordance::ShowLess));
        view.activate(Affordance::ShowLess);
        assert!(!view.is_expanded());
        assert_eq!(view.frame().affordance, Some(Affordance::ShowMore));
    }

    #[test]
    fn starting_expanded_shows_full_text() {
        let view = present(5, Some(false), "abcdefgh");
        let frame = view.frame();
        assert_eq!(frame.tree.plain_text(), "abcdefgh");
        assert!(frame.budget_exceeded);
        assert_eq!(frame.affordance, Some(Affordance::ShowLess));
    }

    #[test]
    fn sync_collapsed_overrides_only_when_set() {
        let mut view = present(5, None, "abcdefgh");
        view.expand();
        view.sync_collapsed(None);
        assert!(view.is_expanded());
        view.sync_collapsed(Some(true));
        assert!(!view.is_expanded());
        view.sync_collapsed(Some(false));
        assert!(view.is_expanded());
    }

    #[test]
    fn repeated_triggers_are_idempotent() {
        let mut view = present(5, None, "abcdefgh");
        view.collapse();
        assert_eq!(view.disclosure(), Disclosure::Collapsed);
        view.expand();
        view.expand();
        assert_eq!(view.disclosure(), Disclosure::Expanded);
    }

    #[traced_test]
    #[test]
    fn transitions_are_logged() {
        let mut view = present(5, None, "abcdefgh");
        view.expand();
        assert!(logs_contain("disclosure changed"));
    }
}
