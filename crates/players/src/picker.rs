use bd_cards::*;
use rand::RngCore;

/// Trait for entities that choose a card on behalf of an automated drafter.
///
/// Pickers are stateless with respect to the draft: the pack in hand is all
/// they see, and randomness is injected by the caller so sessions can be
/// seeded and replayed.
pub trait Picker: Send + Sync {
    /// Card to take from `pack`. None only for an empty pack.
    fn choose(&self, pack: &Pack, rng: &mut dyn RngCore) -> Option<Card>;
}
