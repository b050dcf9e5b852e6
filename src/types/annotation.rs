use std::{collections::BTreeMap, fmt::Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{annotation_kind::AnnotationKind, span::Span};

/// A labeled span of a document's text.
///
/// The engine only reads annotations. Identity is whatever the annotation
/// store assigned; it is reported back in events but the engine itself
/// tracks annotations by their position in the collection, so duplicated
/// identifiers across documents are fine.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    id: String,
    span: Span,
    label: String,

    #[cfg_attr(feature = "serde", serde(default))]
    attributes: BTreeMap<String, String>,
}

impl Annotation {
    #[must_use]
    pub fn new(id: impl Into<String>, span: Span, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            span,
            label: label.into(),
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &str { &self.id }

    #[must_use]
    pub fn span(&self) -> Span { self.span }

    #[must_use]
    pub fn label(&self) -> &str { &self.label }

    #[must_use]
    pub fn kind(&self) -> AnnotationKind { AnnotationKind::from_label(&self.label) }

    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, String> { &self.attributes }
}

impl Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.id, self.label, self.span)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_attributes_and_kind() {
        let annotation = Annotation::new("stac_1", Span::new(0, 4), "Strategic_planning")
            .with_attribute("Addressee", "Bob")
            .with_attribute("Surface_act", "Assertion");

        assert_eq!(annotation.kind(), AnnotationKind::DialogueAct);
        assert_eq!(annotation.attribute("Addressee"), Some("Bob"));
        assert_eq!(annotation.attribute("Missing"), None);
        assert_eq!(annotation.attributes().len(), 2);
        assert_eq!(annotation.to_string(), "stac_1 [Strategic_planning] (0,4)");
    }
}
