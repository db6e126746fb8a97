use crate::Draft;
use crate::Drafter;
use bd_cards::*;
use bd_core::*;

/// One persisted pick.
/// Composite key: (draft, drafter, round, ordinal)
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pick {
    draft: ID<Draft>,
    drafter: ID<Drafter>,
    card: Card,
    round: Round,
    ordinal: Ordinal,
}

impl Pick {
    pub fn new(draft: ID<Draft>, drafter: ID<Drafter>, card: Card, round: Round, ordinal: Ordinal) -> Self {
        Self {
            draft,
            drafter,
            card,
            round,
            ordinal,
        }
    }
    pub fn draft(&self) -> ID<Draft> {
        self.draft
    }
    pub fn drafter(&self) -> ID<Drafter> {
        self.drafter
    }
    pub fn card(&self) -> &Card {
        &self.card
    }
    pub fn round(&self) -> Round {
        self.round
    }
    pub fn ordinal(&self) -> Ordinal {
        self.ordinal
    }
    /// True if both records claim the same slot.
    pub fn collides(&self, other: &Self) -> bool {
        self.draft == other.draft
            && self.drafter == other.drafter
            && self.round == other.round
            && self.ordinal == other.ordinal
    }
}

impl std::fmt::Display for Pick {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {}p{} {}",
            self.drafter.short(),
            self.round,
            self.ordinal,
            self.card
        )
    }
}
