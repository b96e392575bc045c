//! Status messages shown after import and reset.

use crate::error::RejectionReason;

/// Transient message for the UI to display after an import or reset.
///
/// The session keeps the latest one until the UI calls
/// `SessionState::clear_status`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusMessage {
    /// An import replaced the deck.
    Loaded { count: usize },
    /// An import was refused; the previous deck is intact.
    Rejected(RejectionReason),
    /// The deck was emptied.
    Emptied,
}

impl StatusMessage {
    /// Should this be styled as an error?
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Rejected(_))
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusMessage::Loaded { count: 1 } => write!(f, "Loaded 1 card."),
            StatusMessage::Loaded { count } => write!(f, "Loaded {} cards.", count),
            StatusMessage::Rejected(RejectionReason::ParseFailure { .. }) => {
                write!(f, "Error: could not read that file.")
            }
            StatusMessage::Rejected(RejectionReason::MalformedStructure(problem)) => {
                write!(f, "That file is not a card collection: {}. Check the format.", problem)
            }
            StatusMessage::Emptied => write!(f, "Deck emptied."),
        }
    }
}
