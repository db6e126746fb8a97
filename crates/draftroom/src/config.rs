use super::*;
use bd_cards::*;
use bd_core::*;
use std::time::Duration;

/// Per-draft settings, chosen when the draft is created and mirrored to
/// the repository.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DraftConfig {
    pub id: ID<Draft>,
    /// Set codes boosters are drawn from. Empty means every set.
    pub sets: Vec<String>,
    pub composition: Composition,
    pub foil: Probability,
    pub capacity: usize,
    /// Randomize seats at start instead of using join order.
    pub shuffle: bool,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            id: ID::default(),
            sets: Vec::new(),
            composition: Composition::default(),
            foil: FOIL_CHANCE,
            capacity: MAX_DRAFTERS,
            shuffle: false,
        }
    }
}

impl DraftConfig {
    pub fn with_sets<S>(mut self, sets: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        self.sets = sets.into_iter().map(Into::into).collect();
        self
    }
    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }
    pub fn with_foil(mut self, foil: Probability) -> Self {
        self.foil = foil;
        self
    }
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
    pub fn shuffled(mut self) -> Self {
        self.shuffle = true;
        self
    }
}

/// Runtime tuning shared by every session a process hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Delay before an automated drafter picks from a new head pack.
    pub autopick: Duration,
    /// Bound on each repository call.
    pub store_timeout: Duration,
    /// Mailbox capacity per draft.
    pub mailbox: usize,
    /// Upper bound on any draft's seat capacity.
    pub seats: usize,
    /// Seed for booster and autopick randomness. None draws from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            autopick: Duration::from_millis(AUTOPICK_DELAY_MS),
            store_timeout: Duration::from_millis(STORE_TIMEOUT_MS),
            mailbox: MAILBOX_CAPACITY,
            seats: MAX_DRAFTERS,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by `AUTOPICK_DELAY_MS`, `STORE_TIMEOUT_MS`,
    /// `DRAFT_MAX_SEATS`, `DRAFT_MAILBOX` and `DRAFT_SEED` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse = |key: &str| {
            lookup(key).and_then(|v| {
                v.trim()
                    .parse::<u64>()
                    .inspect_err(|e| log::warn!("ignoring {}={}: {}", key, v, e))
                    .ok()
            })
        };
        let default = Self::default();
        Self {
            autopick: parse("AUTOPICK_DELAY_MS")
                .map(Duration::from_millis)
                .unwrap_or(default.autopick),
            store_timeout: parse("STORE_TIMEOUT_MS")
                .map(Duration::from_millis)
                .unwrap_or(default.store_timeout),
            seats: parse("DRAFT_MAX_SEATS")
                .map(|n| (n as usize).clamp(MIN_DRAFTERS, MAX_DRAFTERS))
                .unwrap_or(default.seats),
            mailbox: parse("DRAFT_MAILBOX")
                .map(|n| n.max(1) as usize)
                .unwrap_or(default.mailbox),
            seed: parse("DRAFT_SEED").or(default.seed),
        }
    }
    pub fn with_autopick(mut self, autopick: Duration) -> Self {
        self.autopick = autopick;
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_session_config() {
        let config = SessionConfig::default();
        assert_eq!(config.autopick, Duration::from_millis(AUTOPICK_DELAY_MS));
        assert!(config.autopick >= Duration::from_millis(500));
        assert!(config.autopick <= Duration::from_millis(1000));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn lookup_overrides() {
        let env = HashMap::from([
            ("AUTOPICK_DELAY_MS", "20"),
            ("STORE_TIMEOUT_MS", "oops"),
            ("DRAFT_SEED", "9"),
            ("DRAFT_MAX_SEATS", "64"),
        ]);
        let config = SessionConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.autopick, Duration::from_millis(20));
        assert_eq!(config.store_timeout, Duration::from_millis(STORE_TIMEOUT_MS));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.mailbox, MAILBOX_CAPACITY);
        assert_eq!(config.seats, MAX_DRAFTERS);
    }

    #[test]
    fn draft_config_builders() {
        let config = DraftConfig::default()
            .with_sets(["dmu", "bro"])
            .with_capacity(4)
            .shuffled();
        assert_eq!(config.sets, vec!["dmu".to_string(), "bro".to_string()]);
        assert_eq!(config.capacity, 4);
        assert!(config.shuffle);
    }

    #[test]
    fn draft_config_round_trips_json() {
        let config = DraftConfig::default().with_sets(["dmu"]);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<DraftConfig>(&json).unwrap(), config);
    }
}
