/// Card rarity as printed on the card.
///
/// Rarity drives booster composition: each pack slot samples from one or
/// more rarity pools. Rare and mythic share the single rare slot.
///
/// The ordering (basic < common < uncommon < rare < mythic) follows
/// scarcity and is used by rarity-aware pickers.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Basic = 0,
    #[default]
    Common = 1,
    Uncommon = 2,
    Rare = 3,
    Mythic = 4,
}

impl Rarity {
    /// All five rarities in scarcity order.
    pub const fn all() -> [Rarity; 5] {
        [
            Rarity::Basic,
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Mythic,
        ]
    }
    /// Single-character set symbol code.
    pub fn symbol(&self) -> char {
        match self {
            Rarity::Basic => 'L',
            Rarity::Common => 'C',
            Rarity::Uncommon => 'U',
            Rarity::Rare => 'R',
            Rarity::Mythic => 'M',
        }
    }
}

/// u8 isomorphism
impl From<u8> for Rarity {
    fn from(n: u8) -> Rarity {
        match n {
            0 => Rarity::Basic,
            1 => Rarity::Common,
            2 => Rarity::Uncommon,
            3 => Rarity::Rare,
            4 => Rarity::Mythic,
            _ => unreachable!("invalid rarity"),
        }
    }
}
impl From<Rarity> for u8 {
    fn from(r: Rarity) -> u8 {
        r as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Rarity {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "l" | "basic" | "land" => Ok(Rarity::Basic),
            "c" | "common" => Ok(Rarity::Common),
            "u" | "uncommon" => Ok(Rarity::Uncommon),
            "r" | "rare" => Ok(Rarity::Rare),
            "m" | "mythic" => Ok(Rarity::Mythic),
            _ => Err(format!("invalid rarity str: {}", s)),
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Rarity::Basic => write!(f, "basic"),
            Rarity::Common => write!(f, "common"),
            Rarity::Uncommon => write!(f, "uncommon"),
            Rarity::Rare => write!(f, "rare"),
            Rarity::Mythic => write!(f, "mythic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let rarity = Rarity::Uncommon;
        assert!(rarity == Rarity::from(u8::from(rarity)));
    }

    #[test]
    fn parses_symbols_and_names() {
        assert_eq!(Rarity::try_from("M"), Ok(Rarity::Mythic));
        assert_eq!(Rarity::try_from(" rare "), Ok(Rarity::Rare));
        assert_eq!(Rarity::try_from("land"), Ok(Rarity::Basic));
        assert!(Rarity::try_from("special").is_err());
    }

    #[test]
    fn scarcity_order() {
        assert!(Rarity::Basic < Rarity::Common);
        assert!(Rarity::Rare < Rarity::Mythic);
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&Rarity::Uncommon).unwrap();
        assert_eq!(json, "\"uncommon\"");
    }
}
