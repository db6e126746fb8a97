use super::*;
use bd_cards::*;
use rand::RngCore;
use rand::seq::IndexedRandom;

/// CPU drafter that takes any card uniformly at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fish;

impl Picker for Fish {
    fn choose(&self, pack: &Pack, rng: &mut dyn RngCore) -> Option<Card> {
        pack.cards().choose(rng).cloned()
    }
}
