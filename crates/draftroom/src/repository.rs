use super::*;
use bd_core::*;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use tokio::sync::RwLock;

/// Failures of the persistence mirror.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    NotFound(String),
    Duplicate(String),
    Unavailable(String),
    Timeout,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(what) => write!(f, "not found: {}", what),
            Self::Duplicate(what) => write!(f, "duplicate: {}", what),
            Self::Unavailable(why) => write!(f, "store unavailable: {}", why),
            Self::Timeout => write!(f, "store timed out"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Repository defines the persistence interface for drafts.
/// Sessions treat every call as a best-effort side effect: in-memory
/// state is authoritative and is never rolled back on failure.
#[async_trait::async_trait]
pub trait Repository: Send + Sync {
    async fn create_draft(&self, config: &DraftConfig) -> Result<(), StoreError>;
    async fn load_draft_config(&self, draft: ID<Draft>) -> Result<DraftRecord, StoreError>;
    async fn mark_draft_status(&self, draft: ID<Draft>, status: Status) -> Result<(), StoreError>;
    async fn record_seating(
        &self,
        draft: ID<Draft>,
        seating: &[ID<Drafter>],
    ) -> Result<(), StoreError>;
    async fn record_pick(&self, pick: Pick) -> Result<Pick, StoreError>;
    async fn picks(&self, draft: ID<Draft>) -> Result<Vec<Pick>, StoreError>;
}

/// In-process repository. Can be switched offline to exercise failure
/// paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    drafts: RwLock<HashMap<ID<Draft>, DraftRecord>>,
    picks: RwLock<HashMap<ID<Draft>, Vec<Pick>>>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Relaxed);
    }
    fn check(&self) -> Result<(), StoreError> {
        match self.offline.load(Ordering::Relaxed) {
            true => Err(StoreError::Unavailable("offline".to_string())),
            false => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl Repository for MemoryStore {
    async fn create_draft(&self, config: &DraftConfig) -> Result<(), StoreError> {
        self.check()?;
        let mut drafts = self.drafts.write().await;
        if drafts.contains_key(&config.id) {
            return Err(StoreError::Duplicate(format!("draft {}", config.id)));
        }
        drafts.insert(config.id, DraftRecord::from(config.clone()));
        Ok(())
    }
    async fn load_draft_config(&self, draft: ID<Draft>) -> Result<DraftRecord, StoreError> {
        self.check()?;
        self.drafts
            .read()
            .await
            .get(&draft)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("draft {}", draft)))
    }
    async fn mark_draft_status(&self, draft: ID<Draft>, status: Status) -> Result<(), StoreError> {
        self.check()?;
        self.drafts
            .write()
            .await
            .get_mut(&draft)
            .map(|record| record.status = status)
            .ok_or_else(|| StoreError::NotFound(format!("draft {}", draft)))
    }
    async fn record_seating(
        &self,
        draft: ID<Draft>,
        seating: &[ID<Drafter>],
    ) -> Result<(), StoreError> {
        self.check()?;
        self.drafts
            .write()
            .await
            .get_mut(&draft)
            .map(|record| record.seating = seating.to_vec())
            .ok_or_else(|| StoreError::NotFound(format!("draft {}", draft)))
    }
    async fn record_pick(&self, pick: Pick) -> Result<Pick, StoreError> {
        self.check()?;
        let mut picks = self.picks.write().await;
        let picks = picks.entry(pick.draft()).or_default();
        if picks.iter().any(|p| p.collides(&pick)) {
            return Err(StoreError::Duplicate(pick.to_string()));
        }
        picks.push(pick.clone());
        Ok(pick)
    }
    async fn picks(&self, draft: ID<Draft>) -> Result<Vec<Pick>, StoreError> {
        self.check()?;
        Ok(self
            .picks
            .read()
            .await
            .get(&draft)
            .cloned()
            .unwrap_or_default())
    }
}
