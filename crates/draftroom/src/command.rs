use super::*;
use bd_cards::*;
use bd_core::*;
use std::collections::HashMap;
use tokio::sync::oneshot;

/// Reply channel for a request that can be rejected.
pub type Reply<T> = oneshot::Sender<Result<T, DraftError>>;

/// Mailbox entries of a draft session, applied one at a time in arrival
/// order.
#[derive(Debug)]
pub enum Command {
    Join {
        drafter: ID<Drafter>,
        automated: bool,
        reply: Reply<bool>,
    },
    Reconnect {
        drafter: ID<Drafter>,
        reply: Reply<Draft>,
    },
    Start {
        seating: Vec<ID<Drafter>>,
        packs: HashMap<ID<Drafter>, Vec<Pack>>,
        reply: Reply<()>,
    },
    Pick {
        drafter: ID<Drafter>,
        card: CardId,
        reply: Reply<Pick>,
    },
    State {
        reply: oneshot::Sender<Draft>,
    },
    /// Deferred pick for an automated drafter, valid only while `pack` is
    /// still at the head of their queue.
    Autopick {
        drafter: ID<Drafter>,
        pack: ID<Pack>,
    },
    Close {
        reply: oneshot::Sender<()>,
    },
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Join { drafter, .. } => write!(f, "join {}", drafter.short()),
            Self::Reconnect { drafter, .. } => write!(f, "reconnect {}", drafter.short()),
            Self::Start { seating, .. } => write!(f, "start {} seats", seating.len()),
            Self::Pick { drafter, card, .. } => write!(f, "pick {} {}", drafter.short(), card),
            Self::State { .. } => write!(f, "state"),
            Self::Autopick { drafter, pack } => {
                write!(f, "autopick {} {}", drafter.short(), pack.short())
            }
            Self::Close { .. } => write!(f, "close"),
        }
    }
}
