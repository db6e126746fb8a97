use super::card::Card;
use super::card::Printing;
use super::composition::Composition;
use super::composition::Slot;
use super::pack::Pack;
use super::rarity::Rarity;
use bd_core::*;
use rand::Rng;
use rand::seq::IndexedRandom;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::hash::Hash;

/// Stateless booster sampler over a rarity-partitioned card pool.
///
/// A pack is built in three passes:
/// 1. each slot draws its count without replacement from its rarity pools
/// 2. with probability `foil`, a foil-eligible printing from the whole pool
///    replaces a random common (or rides along as a bonus card when the pack
///    has no common)
/// 3. the cards are shuffled so sampling order never leaks
///
/// Short pools produce short packs rather than errors.
#[derive(Debug, Clone)]
pub struct Booster {
    pools: HashMap<Rarity, Vec<Printing>>,
    foils: Vec<Printing>,
    composition: Composition,
    foil: Probability,
}

impl From<Vec<Printing>> for Booster {
    fn from(printings: Vec<Printing>) -> Self {
        Self::new(printings, Composition::default())
    }
}

impl Booster {
    pub fn new(printings: Vec<Printing>, composition: Composition) -> Self {
        let foils = printings.iter().filter(|p| p.foil).cloned().collect();
        let mut pools = HashMap::<Rarity, Vec<Printing>>::new();
        for printing in printings {
            pools.entry(printing.rarity).or_default().push(printing);
        }
        Self {
            pools,
            foils,
            composition,
            foil: FOIL_CHANCE,
        }
    }
    /// Overrides the foil probability (clamped to [0, 1]; NaN or infinite
    /// means no foils).
    pub fn with_foil(mut self, foil: Probability) -> Self {
        self.foil = match foil.is_finite() {
            true => foil.clamp(0.0, 1.0),
            false => 0.0,
        };
        self
    }
    pub fn composition(&self) -> &Composition {
        &self.composition
    }
    /// Printings available to a rarity pool.
    pub fn pool(&self, rarity: Rarity) -> &[Printing] {
        self.pools.get(&rarity).map(Vec::as_slice).unwrap_or(&[])
    }

    /// One complete pack.
    pub fn pack<R>(&self, rng: &mut R) -> Pack
    where
        R: Rng + ?Sized,
    {
        let mut cards = Slot::all()
            .into_iter()
            .flat_map(|slot| self.draw(slot, rng))
            .collect::<Vec<Card>>();
        if rng.random_bool(self.foil as f64) {
            self.substitute(&mut cards, rng);
        }
        cards.shuffle(rng);
        Pack::from(cards)
    }

    /// `n` independent packs.
    pub fn packs<R>(&self, n: usize, rng: &mut R) -> Vec<Pack>
    where
        R: Rng + ?Sized,
    {
        (0..n).map(|_| self.pack(rng)).collect()
    }

    /// Generates `drafters.len() * per` packs and hands each drafter
    /// exactly `per` of them, one per round, in drafter order.
    pub fn distribute<T, R>(&self, drafters: &[T], per: usize, rng: &mut R) -> HashMap<T, Vec<Pack>>
    where
        T: Clone + Eq + Hash,
        R: Rng + ?Sized,
    {
        let mut packs = self.packs(drafters.len() * per, rng).into_iter();
        drafters
            .iter()
            .map(|d| (d.clone(), packs.by_ref().take(per).collect()))
            .collect()
    }
}

impl Booster {
    fn draw<R>(&self, slot: Slot, rng: &mut R) -> Vec<Card>
    where
        R: Rng + ?Sized,
    {
        let candidates = slot
            .rarities()
            .iter()
            .flat_map(|r| self.pool(*r))
            .collect::<Vec<&Printing>>();
        let count = self.composition.count(slot);
        if candidates.len() < count {
            log::debug!(
                "[booster] {:?} slot wants {} cards, pool holds {}",
                slot,
                count,
                candidates.len()
            );
        }
        candidates
            .choose_multiple(rng, count)
            .map(|p| p.card())
            .collect()
    }
    fn substitute<R>(&self, cards: &mut Vec<Card>, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        let Some(foil) = self.foils.choose(rng).map(Printing::foiled) else {
            return;
        };
        let commons = cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.rarity() == Rarity::Common)
            .map(|(i, _)| i)
            .collect::<Vec<usize>>();
        if let Some(i) = commons.choose(rng) {
            cards.swap_remove(*i);
        }
        cards.push(foil);
    }
}
