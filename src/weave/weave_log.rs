use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Side,
    types::span::Span,
    weave::{check_matches::Gap, updates::Status},
};

/// Something noteworthy that happened while weaving, meant for an operator
/// reviewing the result rather than for further processing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeaveEvent {
    /// Target text not covered by any match, tolerated in lenient mode
    TargetGap {
        origin: String,
        gap: Gap,
        text: String,
    },

    /// An annotation was found to have a counterpart after all
    Cleared {
        side: Side,
        id: String,
        span: Span,
        from: Status,
    },

    /// A target annotation is covered by several source annotations
    Merge { target: String, sources: Vec<String> },

    /// A source annotation is covered by several target annotations
    Split { source: String, targets: Vec<String> },
}

impl Display for WeaveEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeaveEvent::TargetGap { origin, gap, text } => {
                write!(f, "Match gap in target document <{origin}> {gap}: {text:?}")
            }
            WeaveEvent::Cleared { side, id, span, from } => {
                write!(f, "Remove {side} annotation {id} {span} from {from}")
            }
            WeaveEvent::Merge { target, sources } => {
                write!(f, "Guess: {target} results from a merge on [{}]", sources.join(", "))
            }
            WeaveEvent::Split { source, targets } => {
                write!(f, "Guess: [{}] results from a split on {source}", targets.join(", "))
            }
        }
    }
}

/// Collects [`WeaveEvent`]s in the order they happen and forwards each of
/// them to the `log` facade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeaveLog {
    events: Vec<WeaveEvent>,
}

impl WeaveLog {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, event: WeaveEvent) {
        match &event {
            WeaveEvent::TargetGap { .. } => log::warn!("{event}"),
            _ => log::debug!("{event}"),
        }

        self.events.push(event);
    }

    #[must_use]
    pub fn events(&self) -> &[WeaveEvent] { &self.events }

    #[must_use]
    pub fn into_events(self) -> Vec<WeaveEvent> { self.events }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.events.is_empty() }

    #[must_use]
    pub fn len(&self) -> usize { self.events.len() }

    /// The guesses made by the structural pass, without the bookkeeping
    /// events.
    pub fn guesses(&self) -> impl Iterator<Item = &WeaveEvent> {
        self.events
            .iter()
            .filter(|event| matches!(event, WeaveEvent::Merge { .. } | WeaveEvent::Split { .. }))
    }
}
