//! Core identifiers, type aliases, and constants for boosterdraft.
//!
//! This crate provides the foundational types and default parameters
//! used throughout the boosterdraft workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index around the draft table (0-based, defines the passing ring).
pub type Seat = usize;
/// Position of a pick within one drafter's round (first pick = 1).
pub type Ordinal = u16;
/// Foil odds and pick weights.
pub type Probability = f32;

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
    /// Cast ID<T> to ID<U> while preserving the underlying UUID.
    pub fn cast<U>(self) -> ID<U> {
        ID {
            inner: self.inner,
            marker: PhantomData,
        }
    }
    /// First eight hex digits, for log lines.
    pub fn short(&self) -> String {
        self.inner.simple().to_string()[..8].to_string()
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner.serialize(serializer)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        uuid::Uuid::deserialize(deserializer).map(Self::from)
    }
}

// ============================================================================
// DRAFT STRUCTURE
// ============================================================================
/// Rounds per draft; each drafter opens one pack per round.
pub const ROUNDS: usize = 3;
/// Packs generated per drafter (one per round).
pub const PACKS_PER_DRAFTER: usize = ROUNDS;
/// Fewest drafters a draft may start with.
pub const MIN_DRAFTERS: usize = 2;
/// Default seat capacity of a draft table.
pub const MAX_DRAFTERS: usize = 8;

// ============================================================================
// BOOSTER COMPOSITION
// Play booster layout: 1 basic, 10 commons, 3 uncommons, 1 rare-or-mythic.
// ============================================================================
/// Basic land slots per pack.
pub const BASIC_SLOTS: usize = 1;
/// Common slots per pack.
pub const COMMON_SLOTS: usize = 10;
/// Uncommon slots per pack.
pub const UNCOMMON_SLOTS: usize = 3;
/// Rare-or-mythic slots per pack.
pub const RARE_SLOTS: usize = 1;
/// Chance that a pack carries a foil (replacing a common when possible).
pub const FOIL_CHANCE: Probability = 0.25;

// ============================================================================
// SESSION RUNTIME
// ============================================================================
/// Delay before an automated drafter picks from a newly arrived pack (millis).
pub const AUTOPICK_DELAY_MS: u64 = 750;
/// Upper bound on a single repository call before it is abandoned (millis).
pub const STORE_TIMEOUT_MS: u64 = 2000;
/// Commands buffered per draft mailbox before senders wait.
pub const MAILBOX_CAPACITY: usize = 256;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
