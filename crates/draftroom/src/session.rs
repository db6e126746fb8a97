use super::*;
use bd_cards::*;
use bd_core::*;
use bd_players::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Live draft coordinator.
/// Imperative shell that owns the Draft (functional core) and handles
/// the mailbox, persistence, events, and autopick timers.
pub struct Session {
    draft: Draft,
    inbox: mpsc::Receiver<Command>,
    config: SessionConfig,
    store: Arc<dyn Repository>,
    notifier: Arc<dyn Notifier>,
    picker: Arc<dyn Picker>,
    autopick: Autopick,
    rng: SmallRng,
}

impl Session {
    pub fn new(
        draft: Draft,
        config: SessionConfig,
        store: Arc<dyn Repository>,
        notifier: Arc<dyn Notifier>,
        picker: Arc<dyn Picker>,
    ) -> (Self, DraftHandle) {
        let (tx, inbox) = mpsc::channel(config.mailbox.max(1));
        let autopick = Autopick::new(draft.id(), tx.downgrade(), config.autopick);
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        let handle = DraftHandle::new(draft.id(), tx);
        let session = Self {
            draft,
            inbox,
            config,
            store,
            notifier,
            picker,
            autopick,
            rng,
        };
        (session, handle)
    }

    /// Applies commands until the draft completes, a close arrives, or
    /// every handle is dropped. Returns the final aggregate.
    pub async fn run(mut self) -> Draft {
        log::info!("[session {}] open", self.id().short());
        while let Some(command) = self.inbox.recv().await {
            log::trace!("[session {}] {}", self.id().short(), command);
            match command {
                Command::Join {
                    drafter,
                    automated,
                    reply,
                } => {
                    let _ = reply.send(self.join(drafter, automated));
                }
                Command::Reconnect { drafter, reply } => {
                    let _ = reply.send(self.reconnect(drafter));
                }
                Command::Start {
                    seating,
                    packs,
                    reply,
                } => {
                    let _ = reply.send(self.start(seating, packs).await);
                }
                Command::Pick {
                    drafter,
                    card,
                    reply,
                } => {
                    let _ = reply.send(self.pick(drafter, &card).await);
                }
                Command::State { reply } => {
                    let _ = reply.send(self.draft.clone());
                }
                Command::Autopick { drafter, pack } => {
                    self.autopick(drafter, pack).await;
                }
                Command::Close { reply } => {
                    log::info!("[session {}] closed", self.id().short());
                    let _ = reply.send(());
                    break;
                }
            }
            if self.draft.is_complete() {
                break;
            }
        }
        log::debug!("[session {}] exit ({})", self.id().short(), self.draft.status());
        self.draft
    }
}

impl Session {
    fn join(&mut self, drafter: ID<Drafter>, automated: bool) -> Result<bool, DraftError> {
        let joined = self.draft.join(drafter, automated)?;
        if joined {
            log::debug!("[session {}] {} joined", self.id().short(), drafter.short());
            self.emit(Event::Joined { drafter });
        }
        Ok(joined)
    }
    fn reconnect(&mut self, drafter: ID<Drafter>) -> Result<Draft, DraftError> {
        if self.draft.reconnect(drafter)? {
            self.emit(Event::Joined { drafter });
        }
        log::debug!("[session {}] {} reconnected", self.id().short(), drafter.short());
        Ok(self.draft.clone())
    }
    async fn start(
        &mut self,
        seating: Vec<ID<Drafter>>,
        packs: HashMap<ID<Drafter>, Vec<Pack>>,
    ) -> Result<(), DraftError> {
        let progress = self.draft.start(seating.clone(), packs)?;
        log::info!(
            "[session {}] started with {} drafters",
            self.id().short(),
            seating.len()
        );
        if let Err(e) = self.persist(self.store.record_seating(self.id(), &seating)).await {
            log::warn!("[session {}] seating not persisted: {}", self.id().short(), e);
        }
        self.mark(Status::Active).await;
        self.emit(Event::DraftStarted { seating });
        self.advance(progress).await;
        self.announce();
        self.autopick.arm(&self.draft);
        Ok(())
    }
    async fn pick(&mut self, drafter: ID<Drafter>, card: &str) -> Result<Pick, DraftError> {
        let transition = self.draft.pick(drafter, card)?;
        let pick = transition.pick;
        log::debug!("[session {}] {}", self.id().short(), pick);
        self.autopick.disarm(drafter);
        self.emit(Event::Picked {
            drafter,
            round: pick.round(),
            ordinal: pick.ordinal(),
        });
        self.queued(drafter);
        if let Some(neighbor) = transition.passed {
            self.queued(neighbor);
        }
        let persisted = self.persist(self.store.record_pick(pick.clone())).await;
        let advanced = !transition.progress.advanced.is_empty();
        self.advance(transition.progress).await;
        if advanced {
            self.announce();
        }
        self.autopick.arm(&self.draft);
        persisted.map_err(|e| {
            log::warn!("[session {}] pick not persisted: {}", self.id().short(), e);
            DraftError::Store(e)
        })
    }
    /// Runs a deferred pick if its pack is still at the drafter's head.
    async fn autopick(&mut self, drafter: ID<Drafter>, pack: ID<Pack>) {
        let choice = match self
            .draft
            .drafter(drafter)
            .and_then(|d| d.queue().head())
        {
            Some((_, head)) if head.id() == pack && !head.is_empty() => {
                self.picker.choose(head, &mut self.rng)
            }
            _ => {
                log::trace!("[autopick {}] stale {}", self.id().short(), pack.short());
                return;
            }
        };
        match choice {
            Some(card) => {
                if let Err(e) = self.pick(drafter, card.id()).await {
                    log::debug!("[autopick {}] {}: {}", self.id().short(), drafter.short(), e);
                }
            }
            None => log::debug!("[autopick {}] no choice from {}", self.id().short(), pack.short()),
        }
    }
}

impl Session {
    fn id(&self) -> ID<Draft> {
        self.draft.id()
    }
    fn emit(&self, event: Event) {
        self.notifier.publish(self.id(), event);
    }
    fn queued(&self, drafter: ID<Drafter>) {
        let queued = self
            .draft
            .drafter(drafter)
            .map(|d| d.queue().len())
            .unwrap_or_default();
        self.emit(Event::PackUpdated { drafter, queued });
    }
    /// Queue sizes of every drafter holding packs.
    fn announce(&self) {
        self.draft
            .drafters()
            .iter()
            .filter(|d| !d.queue().is_empty())
            .for_each(|d| self.queued(d.id()));
    }
    async fn advance(&mut self, progress: Progress) {
        for round in progress.advanced {
            log::info!("[session {}] {} open", self.id().short(), round);
            self.emit(Event::RoundAdvanced { round });
        }
        if progress.completed {
            log::info!("[session {}] complete", self.id().short());
            self.emit(Event::DraftCompleted);
            self.mark(Status::Complete).await;
        }
    }
    async fn mark(&self, status: Status) {
        if let Err(e) = self.persist(self.store.mark_draft_status(self.id(), status)).await {
            log::warn!("[session {}] status {} not persisted: {}", self.id().short(), status, e);
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
