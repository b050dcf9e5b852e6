#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Discourse act labels that mark a unit as an elementary discourse unit,
/// compared case-insensitively.
const DIALOGUE_ACTS: [&str; 6] = [
    "accept",
    "counteroffer",
    "offer",
    "other",
    "refusal",
    "strategic_comment",
];

/// Older corpora label some discourse acts with names that were later
/// renamed; they still count as discourse acts.
const LEGACY_DIALOGUE_ACTS: [&str; 1] = ["strategic_planning"];

/// Structural category of an annotation, derived from its type label.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    Dialogue,
    Segment,
    DialogueAct,
    Other,
}

impl AnnotationKind {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();

        match label.as_str() {
            "dialogue" => AnnotationKind::Dialogue,
            "segment" => AnnotationKind::Segment,
            act if DIALOGUE_ACTS.contains(&act) || LEGACY_DIALOGUE_ACTS.contains(&act) => {
                AnnotationKind::DialogueAct
            }
            _ => AnnotationKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("Dialogue", AnnotationKind::Dialogue)]
    #[test_case("dialogue", AnnotationKind::Dialogue)]
    #[test_case("SEGMENT", AnnotationKind::Segment)]
    #[test_case("Offer", AnnotationKind::DialogueAct)]
    #[test_case("Strategic_comment", AnnotationKind::DialogueAct)]
    #[test_case("Strategic_planning", AnnotationKind::DialogueAct)]
    #[test_case("Turn", AnnotationKind::Other)]
    #[test_case("Resource", AnnotationKind::Other)]
    #[test_case("", AnnotationKind::Other)]
    fn test_from_label(label: &str, expected: AnnotationKind) {
        assert_eq!(AnnotationKind::from_label(label), expected);
    }
}
