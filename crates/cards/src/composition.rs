use super::rarity::Rarity;
use bd_core::*;

/// A booster slot and the rarity pools it samples from.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Slot {
    Basic,
    Common,
    Uncommon,
    /// Rare and mythic are pooled together.
    Rare,
}

impl Slot {
    pub const fn all() -> [Self; 4] {
        [Self::Basic, Self::Common, Self::Uncommon, Self::Rare]
    }
    pub const fn rarities(&self) -> &'static [Rarity] {
        match self {
            Self::Basic => &[Rarity::Basic],
            Self::Common => &[Rarity::Common],
            Self::Uncommon => &[Rarity::Uncommon],
            Self::Rare => &[Rarity::Rare, Rarity::Mythic],
        }
    }
}

/// How many cards each slot contributes to a pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Composition {
    pub basic: usize,
    pub common: usize,
    pub uncommon: usize,
    pub rare: usize,
}

impl Default for Composition {
    fn default() -> Self {
        Self {
            basic: BASIC_SLOTS,
            common: COMMON_SLOTS,
            uncommon: UNCOMMON_SLOTS,
            rare: RARE_SLOTS,
        }
    }
}

impl Composition {
    pub fn count(&self, slot: Slot) -> usize {
        match slot {
            Slot::Basic => self.basic,
            Slot::Common => self.common,
            Slot::Uncommon => self.uncommon,
            Slot::Rare => self.rare,
        }
    }
    /// Cards in a pack before any foil bonus.
    pub fn size(&self) -> usize {
        Slot::all().iter().map(|s| self.count(*s)).sum()
    }
    /// Rarities this composition actually draws from.
    pub fn rarities(&self) -> Vec<Rarity> {
        Slot::all()
            .into_iter()
            .filter(|s| self.count(*s) > 0)
            .flat_map(|s| s.rarities().iter().copied())
            .collect()
    }
}
