use super::*;
use bd_cards::*;
use bd_core::Probability;
use rand::RngCore;
use rand::seq::IndexedRandom;

/// CPU drafter that favors scarce cards.
///
/// Each card is weighted by rarity (and boosted when foil), then one is
/// sampled proportionally. Rares usually go first, but not always, which
/// keeps a table of sharks from drafting identically.
#[derive(Debug, Clone, Copy)]
pub struct Shark {
    foil: Probability,
}

impl Default for Shark {
    fn default() -> Self {
        Self { foil: 1.5 }
    }
}

impl Shark {
    /// Multiplier applied to foil cards.
    pub fn with_foil(foil: Probability) -> Self {
        Self { foil }
    }
    pub fn weight(&self, card: &Card) -> Probability {
        let base = match card.rarity() {
            Rarity::Basic => 0.05,
            Rarity::Common => 1.0,
            Rarity::Uncommon => 3.0,
            Rarity::Rare => 9.0,
            Rarity::Mythic => 14.0,
        };
        match card.foil() {
            true => base * self.foil,
            false => base,
        }
    }
}

impl Picker for Shark {
    fn choose(&self, pack: &Pack, rng: &mut dyn RngCore) -> Option<Card> {
        pack.cards()
            .choose_weighted(rng, |c| self.weight(c))
            .ok()
            .or_else(|| pack.cards().first())
            .cloned()
    }
}
