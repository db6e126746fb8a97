use super::rarity::Rarity;

/// Catalog identifier of a card (set code plus collector number, or any
/// other stable key the catalog hands out).
pub type CardId = String;

/// Appended to a printing's id to name its foil copy, so a plain and a
/// foil copy in the same pack can be picked apart.
pub const FOIL_SUFFIX: &str = "*foil";

/// A catalog entry: one printing that boosters may sample.
/// `foil` marks printings that also exist in a foil finish.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Printing {
    pub id: CardId,
    pub set: String,
    pub rarity: Rarity,
    #[serde(default)]
    pub foil: bool,
}

impl Printing {
    pub fn new(id: impl Into<CardId>, set: impl Into<String>, rarity: Rarity, foil: bool) -> Self {
        Self {
            id: id.into(),
            set: set.into(),
            rarity,
            foil,
        }
    }
    /// Non-foil copy for a regular slot.
    pub fn card(&self) -> Card {
        Card::new(self.id.clone(), self.rarity, false)
    }
    /// Foil copy for the foil slot, under its own id.
    pub fn foiled(&self) -> Card {
        Card::new(format!("{}{}", self.id, FOIL_SUFFIX), self.rarity, true)
    }
}

/// A physical card inside a pack. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Card {
    id: CardId,
    rarity: Rarity,
    foil: bool,
}

impl Card {
    pub fn new(id: impl Into<CardId>, rarity: Rarity, foil: bool) -> Self {
        Self {
            id: id.into(),
            rarity,
            foil,
        }
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn rarity(&self) -> Rarity {
        self.rarity
    }
    pub fn foil(&self) -> bool {
        self.foil
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.foil {
            true => write!(f, "{}({}*)", self.id, self.rarity.symbol()),
            false => write!(f, "{}({})", self.id, self.rarity.symbol()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printing_copies() {
        let printing = Printing::new("dmu-001", "dmu", Rarity::Rare, true);
        assert!(!printing.card().foil());
        assert!(printing.foiled().foil());
        assert_eq!(printing.card().id(), "dmu-001");
        assert_eq!(printing.foiled().id(), "dmu-001*foil");
        assert_eq!(printing.card().rarity(), Rarity::Rare);
    }

    #[test]
    fn display_marks_foils() {
        let card = Card::new("dmu-001", Rarity::Mythic, true);
        assert_eq!(card.to_string(), "dmu-001(M*)");
    }

    #[test]
    fn printing_foil_defaults_false() {
        let json = r#"{"id":"x-1","set":"x","rarity":"common"}"#;
        let printing = serde_json::from_str::<Printing>(json).unwrap();
        assert!(!printing.foil);
    }
}
