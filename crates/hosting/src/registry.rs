use bd_cards::*;
use bd_core::*;
use bd_draftroom::*;
use bd_players::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Deals attempted before a start that keeps losing races to joins fails.
const START_ATTEMPTS: usize = 3;

/// Manages live drafts and their lifecycles.
///
/// Each draft runs in its own session task; the registry only maps ids to
/// handles. A watcher per draft removes the entry once the session ends,
/// whether it completed, was closed, or panicked.
pub struct Registry {
    store: Arc<dyn Repository>,
    catalog: Arc<dyn Catalog>,
    notifier: Arc<dyn Notifier>,
    picker: Arc<dyn Picker>,
    config: SessionConfig,
    drafts: RwLock<HashMap<ID<Draft>, DraftHandle>>,
}

impl Registry {
    pub fn new(
        store: Arc<dyn Repository>,
        catalog: Arc<dyn Catalog>,
        notifier: Arc<dyn Notifier>,
        picker: Arc<dyn Picker>,
        config: SessionConfig,
    ) -> Self {
        Self {
            store,
            catalog,
            notifier,
            picker,
            config,
            drafts: RwLock::new(HashMap::new()),
        }
    }
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
    /// Number of live drafts.
    pub async fn len(&self) -> usize {
        self.drafts.read().await.len()
    }
    pub async fn is_empty(&self) -> bool {
        self.drafts.read().await.is_empty()
    }
    pub async fn ids(&self) -> Vec<ID<Draft>> {
        self.drafts.read().await.keys().copied().collect()
    }
}

impl Registry {
    /// Persists the config, spawns a pending session, and returns its id.
    pub async fn create(self: &Arc<Self>, config: DraftConfig) -> anyhow::Result<ID<Draft>> {
        let id = config.id;
        if self.drafts.read().await.contains_key(&id) {
            anyhow::bail!("draft {} already live", id);
        }
        let capacity = config.capacity.clamp(MIN_DRAFTERS, self.config.seats);
        self.persist(self.store.create_draft(&config)).await?;
        let (session, handle) = Session::new(
            Draft::new(id, capacity),
            self.config,
            self.store.clone(),
            self.notifier.clone(),
            self.picker.clone(),
        );
        self.drafts.write().await.insert(id, handle);
        let task = tokio::spawn(session.run());
        let registry = self.clone();
        tokio::spawn(async move {
            match task.await {
                Ok(draft) => log::info!("[registry] draft {} ended {}", id, draft.status()),
                Err(e) if e.is_panic() => log::error!("[registry] draft {} crashed: {}", id, e),
                Err(e) => log::warn!("[registry] draft {} aborted: {}", id, e),
            }
            registry.remove(id).await;
        });
        log::info!("[registry] created draft {} ({} seats)", id, capacity);
        Ok(id)
    }
    /// Deals boosters from the catalog and starts the draft.
    ///
    /// Seating is read after the catalog call. A join that still slips in
    /// between the snapshot and the start is answered by dealing again.
    pub async fn start(&self, id: ID<Draft>) -> anyhow::Result<()> {
        let handle = self.handle(id).await?;
        Self::startable(&handle.state().await?)?;
        let record = self.persist(self.store.load_draft_config(id)).await?;
        let composition = record.config.composition;
        let pool = self
            .catalog
            .fetch_pool(&record.config.sets, &composition.rarities())
            .await?;
        if pool.is_empty() {
            anyhow::bail!("no printings for sets {:?}", record.config.sets);
        }
        let booster = Booster::new(pool, composition).with_foil(record.config.foil);
        let ref mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        let mut attempt = 0;
        loop {
            attempt += 1;
            let draft = handle.state().await?;
            Self::startable(&draft)?;
            let mut seating = draft.drafters().iter().map(Drafter::id).collect::<Vec<_>>();
            if record.config.shuffle {
                seating.shuffle(rng);
            }
            let packs = booster.distribute(&seating, PACKS_PER_DRAFTER, rng);
            match handle.start(seating, packs).await {
                Ok(()) => {
                    log::info!("[registry] started draft {}", id);
                    return Ok(());
                }
                Err(e @ (DraftError::MissingPacks | DraftError::SeatingMismatch))
                    if attempt < START_ATTEMPTS =>
                {
                    log::debug!("[registry] draft {} changed before start: {}", id, e);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
    /// Stops a draft and forgets it.
    pub async fn close(&self, id: ID<Draft>) -> anyhow::Result<()> {
        let handle = self
            .drafts
            .write()
            .await
            .remove(&id)
            .ok_or(DraftError::DraftNotFound)?;
        if let Err(e) = handle.close().await {
            log::debug!("[registry] draft {} already gone: {}", id, e);
        }
        log::info!("[registry] closed draft {}", id);
        Ok(())
    }
}

impl Registry {
    pub async fn handle(&self, id: ID<Draft>) -> Result<DraftHandle, DraftError> {
        self.drafts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(DraftError::DraftNotFound)
    }
    pub async fn join(
        &self,
        id: ID<Draft>,
        drafter: ID<Drafter>,
        automated: bool,
    ) -> Result<bool, DraftError> {
        self.handle(id).await?.join(drafter, automated).await
    }
    pub async fn reconnect(&self, id: ID<Draft>, drafter: ID<Drafter>) -> Result<Draft, DraftError> {
        self.handle(id).await?.reconnect(drafter).await
    }
    pub async fn pick(
        &self,
        id: ID<Draft>,
        drafter: ID<Drafter>,
        card: impl Into<CardId>,
    ) -> Result<Pick, DraftError> {
        self.handle(id).await?.pick(drafter, card).await
    }
    pub async fn state(&self, id: ID<Draft>) -> Result<Draft, DraftError> {
        self.handle(id).await?.state().await
    }
}

impl Registry {
    fn startable(draft: &Draft) -> Result<(), DraftError> {
        if draft.status() != Status::Pending {
            return Err(DraftError::DraftNotPending);
        }
        if draft.drafters().len() < MIN_DRAFTERS {
            return Err(DraftError::InsufficientParticipants);
        }
        Ok(())
    }
    async fn remove(&self, id: ID<Draft>) {
        if self.drafts.write().await.remove(&id).is_some() {
            log::debug!("[registry] draft {} cleaned up", id);
        }
    }
    async fn persist<T, F>(&self, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        tokio::time::timeout(self.config.store_timeout, call)
            .await
            .unwrap_or(Err(StoreError::Timeout))
    }
}
