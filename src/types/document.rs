use std::iter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{annotation::Annotation, span::Span};

/// A text together with the annotations laid over it. `origin` names the
/// document in error messages and diagnostics.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    origin: String,
    text: String,
    annotations: Vec<Annotation>,
}

impl Document {
    #[must_use]
    pub fn new(origin: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            text: text.into(),
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }

    #[must_use]
    pub fn origin(&self) -> &str { &self.origin }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn annotations(&self) -> &[Annotation] { &self.annotations }

    /// Length of the text in characters.
    #[must_use]
    pub fn len(&self) -> usize { self.text.chars().count() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    /// The characters covered by `span`. Parts of the span beyond the end
    /// of the text are ignored.
    #[must_use]
    pub fn text_in(&self, span: Span) -> &str {
        let mut offsets = self
            .text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(iter::once(self.text.len()));

        let start = offsets.nth(span.start).unwrap_or(self.text.len());
        let end = if span.is_empty() {
            start
        } else {
            offsets.nth(span.len() - 1).unwrap_or(self.text.len())
        };

        &self.text[start..end]
    }
}
