use super::card::Printing;
use super::rarity::Rarity;

/// Source of card printings for booster generation.
/// Implementations can be an in-memory library, a card database, a remote
/// API, etc. Only the booster generator consumes it.
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// Printings from any of `sets` whose rarity is in `rarities`.
    async fn fetch_pool(&self, sets: &[String], rarities: &[Rarity]) -> anyhow::Result<Vec<Printing>>;
}

/// In-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct Library {
    printings: Vec<Printing>,
}

impl From<Vec<Printing>> for Library {
    fn from(printings: Vec<Printing>) -> Self {
        Self { printings }
    }
}

impl Library {
    pub fn printings(&self) -> &[Printing] {
        &self.printings
    }
    /// Parses a JSON array of printings.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str::<Vec<Printing>>(json)
            .map(Self::from)
            .map_err(|e| anyhow::anyhow!("invalid card list: {}", e))
    }
    /// Reads a JSON array of printings from disk.
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read {}: {}", path.display(), e))
            .and_then(|json| Self::from_json(&json))
            .inspect(|lib| log::info!("loaded {} printings from {}", lib.printings.len(), path.display()))
    }
    /// A made-up set with `n` printings per rarity, in the proportions of
    /// a real set. Every other printing has a foil finish.
    pub fn synthetic(set: &str, n: usize) -> Self {
        let sizes = [
            (Rarity::Basic, n / 2),
            (Rarity::Common, n * 4),
            (Rarity::Uncommon, n * 3),
            (Rarity::Rare, n * 2),
            (Rarity::Mythic, n / 2),
        ];
        sizes
            .into_iter()
            .flat_map(|(rarity, k)| {
                (0..k).map(move |i| {
                    Printing::new(
                        format!("{}-{}{:03}", set, rarity.symbol(), i),
                        set,
                        rarity,
                        i % 2 == 0,
                    )
                })
            })
            .collect::<Vec<Printing>>()
            .into()
    }
}

#[async_trait::async_trait]
impl Catalog for Library {
    async fn fetch_pool(&self, sets: &[String], rarities: &[Rarity]) -> anyhow::Result<Vec<Printing>> {
        Ok(self
            .printings
            .iter()
            .filter(|p| sets.is_empty() || sets.contains(&p.set))
            .filter(|p| rarities.contains(&p.rarity))
            .cloned()
            .collect())
    }
}
