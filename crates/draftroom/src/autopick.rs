use super::*;
use bd_cards::*;
use bd_core::*;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc::WeakSender;

/// Deferred picks for automated drafters.
///
/// Whenever a new pack reaches the head of an automated drafter's queue, a
/// timer is armed for it. On expiry the timer drops an
/// [`Command::Autopick`] into the session mailbox, where it waits behind
/// anything that arrived first and is re-validated before it is applied.
/// Timers hold a weak sender, so they never keep a finished session alive.
#[derive(Debug)]
pub struct Autopick {
    draft: ID<Draft>,
    mailbox: WeakSender<Command>,
    delay: Duration,
    armed: HashMap<ID<Drafter>, ID<Pack>>,
}

impl Autopick {
    pub fn new(draft: ID<Draft>, mailbox: WeakSender<Command>, delay: Duration) -> Self {
        Self {
            draft,
            mailbox,
            delay,
            armed: HashMap::new(),
        }
    }
    pub fn delay(&self) -> Duration {
        self.delay
    }
    /// Pack each automated drafter has a timer running for.
    pub fn armed(&self, drafter: ID<Drafter>) -> Option<ID<Pack>> {
        self.armed.get(&drafter).copied()
    }
    /// Schedules a timer for every automated head pack not already armed.
    pub fn arm(&mut self, draft: &Draft) {
        for (drafter, pack) in draft.automated_heads() {
            if self.armed.get(&drafter) != Some(&pack) {
                self.armed.insert(drafter, pack);
                self.schedule(drafter, pack);
            }
        }
    }
    /// Forgets the drafter's timer after they pick, so the next head pack
    /// gets a fresh one.
    pub fn disarm(&mut self, drafter: ID<Drafter>) {
        self.armed.remove(&drafter);
    }
    fn schedule(&self, drafter: ID<Drafter>, pack: ID<Pack>) {
        let draft = self.draft;
        let delay = self.delay;
        let mailbox = self.mailbox.clone();
        log::trace!("[autopick {}] {} in {:?}", draft.short(), drafter.short(), delay);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match mailbox.upgrade() {
                Some(tx) => {
                    if tx.send(Command::Autopick { drafter, pack }).await.is_err() {
                        log::trace!("[autopick {}] session gone", draft.short());
                    }
                }
                None => log::trace!("[autopick {}] session gone", draft.short()),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn dealt(automated: bool) -> (Draft, ID<Drafter>) {
        let mut draft = Draft::new(ID::default(), MAX_DRAFTERS);
        let bot = ID::default();
        let other = ID::default();
        draft.join(bot, automated).unwrap();
        draft.join(other, false).unwrap();
        let packs = [bot, other]
            .into_iter()
            .map(|id| {
                let pack = Pack::from(vec![Card::new("a", Rarity::Common, false)]);
                (id, vec![pack, Pack::from(vec![]), Pack::from(vec![])])
            })
            .collect();
        draft.start(vec![bot, other], packs).unwrap();
        (draft, bot)
    }

    #[tokio::test]
    async fn fires_once_per_head() {
        let (tx, mut rx) = mpsc::channel(8);
        let (draft, bot) = dealt(true);
        let mut autopick = Autopick::new(draft.id(), tx.downgrade(), Duration::from_millis(1));
        autopick.arm(&draft);
        autopick.arm(&draft);
        let head = draft.drafter(bot).and_then(|d| d.queue().head()).map(|(_, p)| p.id());
        assert_eq!(autopick.armed(bot), head);
        match rx.recv().await {
            Some(Command::Autopick { drafter, pack }) => {
                assert_eq!(drafter, bot);
                assert_eq!(Some(pack), head);
            }
            other => panic!("unexpected {:?}", other),
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn ignores_humans() {
        let (tx, _rx) = mpsc::channel(8);
        let (draft, bot) = dealt(false);
        let mut autopick = Autopick::new(draft.id(), tx.downgrade(), Duration::from_millis(1));
        autopick.arm(&draft);
        assert_eq!(autopick.armed(bot), None);
    }

    #[tokio::test]
    async fn disarm_allows_rearm() {
        let (tx, mut rx) = mpsc::channel(8);
        let (draft, bot) = dealt(true);
        let mut autopick = Autopick::new(draft.id(), tx.downgrade(), Duration::from_millis(1));
        autopick.arm(&draft);
        autopick.disarm(bot);
        assert_eq!(autopick.armed(bot), None);
        autopick.arm(&draft);
        assert!(rx.recv().await.is_some());
        assert!(rx.recv().await.is_some());
    }

    #[tokio::test]
    async fn timers_do_not_keep_mailbox_alive() {
        let (tx, mut rx) = mpsc::channel(8);
        let (draft, _) = dealt(true);
        let mut autopick = Autopick::new(draft.id(), tx.downgrade(), Duration::from_millis(5));
        autopick.arm(&draft);
        drop(tx);
        assert!(rx.recv().await.is_none());
    }
}
