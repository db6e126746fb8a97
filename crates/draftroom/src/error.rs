use super::*;

/// Expected failures of draft operations, returned as values.
///
/// `NoPackAvailable` and `CardNotInPack` are kept apart so clients can tell
/// "not your pack yet" from "that card is not in your pack".
#[derive(Debug, Clone, PartialEq)]
pub enum DraftError {
    DraftNotPending,
    DraftNotActive,
    DraftFull,
    DraftNotFound,
    ParticipantNotFound,
    NoPackAvailable,
    CardNotInPack,
    InsufficientParticipants,
    SeatingMismatch,
    MissingPacks,
    /// The repository rejected or timed out on a write. In-memory state
    /// has already moved on.
    Store(StoreError),
    /// The session is gone (finished, closed, or crashed).
    Closed,
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DraftNotPending => write!(f, "draft has already started"),
            Self::DraftNotActive => write!(f, "draft is not in progress"),
            Self::DraftFull => write!(f, "draft is full"),
            Self::DraftNotFound => write!(f, "draft not found"),
            Self::ParticipantNotFound => write!(f, "participant not found"),
            Self::NoPackAvailable => write!(f, "no pack available yet"),
            Self::CardNotInPack => write!(f, "card is not in your pack"),
            Self::InsufficientParticipants => write!(f, "not enough participants to start"),
            Self::SeatingMismatch => write!(f, "seating does not match participants"),
            Self::MissingPacks => write!(f, "every participant needs one pack per round"),
            Self::Store(e) => write!(f, "pick recorded in session but not persisted: {}", e),
            Self::Closed => write!(f, "draft session closed"),
        }
    }
}

impl std::error::Error for DraftError {}

impl From<StoreError> for DraftError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
