use super::card::Card;
use bd_core::ID;

/// A booster pack: an unordered multiset of cards.
///
/// Packs only ever shrink. The identifier survives removals so a pack can
/// be followed around the table; a pack with no cards left is retired.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Pack {
    id: ID<Pack>,
    cards: Vec<Card>,
}

impl From<Vec<Card>> for Pack {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            id: ID::default(),
            cards,
        }
    }
}
impl From<Pack> for Vec<Card> {
    fn from(pack: Pack) -> Self {
        pack.cards
    }
}

impl Pack {
    pub fn id(&self) -> ID<Self> {
        self.id
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    /// True if any card in the pack carries this id.
    pub fn contains(&self, card: &str) -> bool {
        self.cards.iter().any(|c| c.id() == card)
    }
    /// First card carrying this id.
    pub fn find(&self, card: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == card)
    }
    /// Removes exactly one card carrying this id. A pack without a match
    /// comes back unchanged.
    pub fn remove(mut self, card: &str) -> Self {
        if let Some(i) = self.cards.iter().position(|c| c.id() == card) {
            self.cards.remove(i);
        }
        self
    }
}

impl std::fmt::Display for Pack {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.cards
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Printing;
    use crate::Rarity;

    fn pack(ids: &[&str]) -> Pack {
        Pack::from(
            ids.iter()
                .map(|id| Card::new(*id, Rarity::Common, false))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn contains_by_id() {
        let pack = pack(&["a", "b"]);
        assert!(pack.contains("a"));
        assert!(!pack.contains("z"));
    }

    #[test]
    fn remove_takes_exactly_one() {
        let pack = pack(&["a", "b", "a"]);
        let pack = pack.remove("a");
        assert_eq!(pack.len(), 2);
        assert!(pack.contains("a"));
        assert!(pack.contains("b"));
    }

    #[test]
    fn remove_missing_is_identity() {
        let before = pack(&["a", "b"]);
        let after = before.clone().remove("z");
        assert_eq!(before, after);
    }

    #[test]
    fn remove_keeps_identity() {
        let before = pack(&["a"]);
        let id = before.id();
        let after = before.remove("a");
        assert_eq!(after.id(), id);
        assert!(after.is_empty());
    }

    #[test]
    fn foil_copy_is_picked_apart_from_plain() {
        let printing = Printing::new("a", "tst", Rarity::Common, true);
        let pack = Pack::from(vec![printing.card(), printing.foiled()]);
        let foil = printing.foiled();
        assert_eq!(pack.find(foil.id()).map(Card::foil), Some(true));
        let rest = pack.remove(foil.id());
        assert_eq!(rest.len(), 1);
        assert!(rest.cards().iter().all(|c| !c.foil()));
        assert!(rest.contains("a"));
    }
}
