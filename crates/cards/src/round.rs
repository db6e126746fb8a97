use bd_core::ROUNDS;

/// The three rounds of a booster draft.
///
/// Every drafter opens one pack per round. Packs circulate around the
/// table until empty, and the next round begins only when every pack of
/// the current round has been retired.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Round {
    #[default]
    First = 1isize,
    Second = 2isize,
    Third = 3isize,
}

impl Round {
    /// All three rounds in order.
    pub const fn all() -> [Self; ROUNDS] {
        [Self::First, Self::Second, Self::Third]
    }
    /// The following round, or None after the last.
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::First => Some(Self::Second),
            Self::Second => Some(Self::Third),
            Self::Third => None,
        }
    }
    /// Zero-based index for per-round tables.
    pub const fn index(&self) -> usize {
        *self as usize - 1
    }
    pub const fn is_last(&self) -> bool {
        matches!(self, Self::Third)
    }
    /// Passing direction: left, right, left.
    pub const fn direction(&self) -> Direction {
        match self {
            Self::First => Direction::Left,
            Self::Second => Direction::Right,
            Self::Third => Direction::Left,
        }
    }
}

/// u8 isomorphism (1-based)
impl From<Round> for u8 {
    fn from(r: Round) -> u8 {
        r as u8
    }
}
impl TryFrom<u8> for Round {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            _ => Err(format!("invalid round: {}", n)),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "R{}", u8::from(*self))
    }
}

/// Direction a pack travels after a pick.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward increasing seat index.
    Left,
    /// Toward decreasing seat index.
    Right,
}

impl Direction {
    /// Seat that receives a pack passed from `current` at a table of `n`.
    /// An empty table has nowhere to pass, so `current` comes back.
    pub const fn next(&self, current: usize, n: usize) -> usize {
        if n == 0 {
            return current;
        }
        match self {
            Self::Left => (current + 1) % n,
            Self::Right => (current % n + n - 1) % n,
        }
    }
}

impl From<Round> for Direction {
    fn from(round: Round) -> Self {
        round.direction()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}
