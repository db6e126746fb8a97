use crate::Drafter;
use crate::DraftConfig;
use crate::Status;
use bd_core::*;

/// Persisted view of a draft: how it was configured, where it stands, and
/// who sits where once it has started.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DraftRecord {
    pub config: DraftConfig,
    pub status: Status,
    pub seating: Vec<ID<Drafter>>,
}

impl From<DraftConfig> for DraftRecord {
    fn from(config: DraftConfig) -> Self {
        Self {
            config,
            status: Status::Pending,
            seating: Vec::new(),
        }
    }
}
