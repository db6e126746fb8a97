use super::*;
use bd_cards::*;
use bd_core::*;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::sync::oneshot;

/// Cloneable front door to one draft session.
///
/// Every call is a request/reply round trip through the session mailbox.
/// A session that has finished or crashed answers [`DraftError::Closed`].
#[derive(Debug, Clone)]
pub struct DraftHandle {
    id: ID<Draft>,
    tx: mpsc::Sender<Command>,
}

impl DraftHandle {
    pub(crate) fn new(id: ID<Draft>, tx: mpsc::Sender<Command>) -> Self {
        Self { id, tx }
    }
    pub fn id(&self) -> ID<Draft> {
        self.id
    }
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
    /// Ok(false) if the drafter was already seated.
    pub async fn join(&self, drafter: ID<Drafter>, automated: bool) -> Result<bool, DraftError> {
        self.request(|reply| Command::Join {
            drafter,
            automated,
            reply,
        })
        .await
    }
    pub async fn reconnect(&self, drafter: ID<Drafter>) -> Result<Draft, DraftError> {
        self.request(|reply| Command::Reconnect { drafter, reply })
            .await
    }
    pub async fn start(
        &self,
        seating: Vec<ID<Drafter>>,
        packs: HashMap<ID<Drafter>, Vec<Pack>>,
    ) -> Result<(), DraftError> {
        self.request(|reply| Command::Start {
            seating,
            packs,
            reply,
        })
        .await
    }
    pub async fn pick(&self, drafter: ID<Drafter>, card: impl Into<CardId>) -> Result<Pick, DraftError> {
        let card = card.into();
        self.request(|reply| Command::Pick {
            drafter,
            card,
            reply,
        })
        .await
    }
    /// Snapshot of the aggregate.
    pub async fn state(&self) -> Result<Draft, DraftError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::State { reply }).await?;
        rx.await.map_err(|_| DraftError::Closed)
    }
    /// Asks the session to stop after the commands queued ahead of this one.
    pub async fn close(&self) -> Result<(), DraftError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Close { reply }).await?;
        rx.await.map_err(|_| DraftError::Closed)
    }
}

impl DraftHandle {
    async fn request<T, F>(&self, command: F) -> Result<T, DraftError>
    where
        F: FnOnce(Reply<T>) -> Command,
    {
        let (reply, rx) = oneshot::channel();
        self.send(command(reply)).await?;
        rx.await.map_err(|_| DraftError::Closed)?
    }
    pub(crate) async fn send(&self, command: Command) -> Result<(), DraftError> {
        self.tx
            .send(command)
            .await
            .map_err(|_| DraftError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dead_session_is_closed() {
        let (tx, rx) = mpsc::channel(1);
        let handle = DraftHandle::new(ID::default(), tx);
        drop(rx);
        assert!(handle.is_closed());
        assert_eq!(handle.join(ID::default(), false).await, Err(DraftError::Closed));
        assert!(matches!(handle.state().await, Err(DraftError::Closed)));
    }

    #[tokio::test]
    async fn dropped_reply_is_closed() {
        let (tx, mut rx) = mpsc::channel(1);
        let handle = DraftHandle::new(ID::default(), tx);
        let session = tokio::spawn(async move {
            let command = rx.recv().await;
            drop(command);
        });
        assert_eq!(handle.pick(ID::default(), "a").await, Err(DraftError::Closed));
        session.await.unwrap();
    }
}
