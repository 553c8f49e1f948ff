//! Reference renderer.

use crate::presentation::{Affordance, Frame, Renderer};

/// Flattens a frame into its leaf texts, followed by the label of the
/// offered control when one is configured for it.
///
/// Empty leaves are skipped. Useful for logs, plain-text surfaces, and
/// tests.
///
/// ```
/// use textform::{SegmentRenderer, TextNode, TextTransformer};
///
/// let transformer = TextTransformer::builder().budget(4).build().unwrap();
/// let view = transformer.present(TextNode::leaf("abcdef")).unwrap();
/// let mut renderer = SegmentRenderer::new().with_more_label("more");
/// assert_eq!(view.render(&mut renderer), ["a...", "more"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentRenderer {
    more: Option<String>,
    less: Option<String>,
}

impl SegmentRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_more_label(mut self, label: impl Into<String>) -> Self {
        self.more = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_less_label(mut self, label: impl Into<String>) -> Self {
        self.less = Some(label.into());
        self
    }

    fn label(&self, affordance: Affordance) -> Option<&str> {
        match affordance {
            Affordance::ShowMore => self.more.as_deref(),
            Affordance::ShowLess => self.less.as_deref(),
        }
    }
}

impl Renderer for SegmentRenderer {
    type Output = Vec<String>;

    fn render(&mut self, frame: Frame<'_>) -> Self::Output {
        let mut segments: Vec<String> = frame
            .tree
            .leaves()
            .filter(|text| !text.is_empty())
            .map(str::to_owned)
            .collect();
        if let Some(label) = frame.affordance.and_then(|affordance| self.label(affordance)) {
            segments.push(label.to_owned());
        }
        segments
    }
}
