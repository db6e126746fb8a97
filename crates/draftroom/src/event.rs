use super::*;
use bd_cards::*;
use bd_core::*;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Events published by a session as the draft moves.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A participant took a seat before the start.
    Joined { drafter: ID<Drafter> },
    /// Packs are open; seating is final.
    DraftStarted { seating: Vec<ID<Drafter>> },
    /// A drafter's queue changed (arrival or pick).
    PackUpdated { drafter: ID<Drafter>, queued: usize },
    /// A pick was applied.
    Picked {
        drafter: ID<Drafter>,
        round: Round,
        ordinal: Ordinal,
    },
    /// Every pack of the previous round is gone; new packs are open.
    RoundAdvanced { round: Round },
    /// Every pack of the last round is gone.
    DraftCompleted,
}

impl Event {
    pub fn drafter(&self) -> Option<ID<Drafter>> {
        match self {
            Self::Joined { drafter } => Some(*drafter),
            Self::PackUpdated { drafter, .. } => Some(*drafter),
            Self::Picked { drafter, .. } => Some(*drafter),
            _ => None,
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize event")
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Joined { drafter } => write!(f, "{} joined", drafter.short()),
            Self::DraftStarted { seating } => write!(f, "started with {} seats", seating.len()),
            Self::PackUpdated { drafter, queued } => {
                write!(f, "{} holds {} packs", drafter.short(), queued)
            }
            Self::Picked {
                drafter,
                round,
                ordinal,
            } => write!(f, "{} {}p{}", drafter.short(), round, ordinal),
            Self::RoundAdvanced { round } => write!(f, "{} open", round),
            Self::DraftCompleted => write!(f, "draft complete"),
        }
    }
}

/// Fire-and-forget sink for draft events.
/// Implementations must not block: sessions call this inline.
pub trait Notifier: Send + Sync {
    fn publish(&self, draft: ID<Draft>, event: Event);
}

/// Notifier backed by an unbounded channel. The receiving end is whatever
/// pushes events to clients.
#[derive(Debug, Clone)]
pub struct Outbox {
    tx: UnboundedSender<(ID<Draft>, Event)>,
}

impl Outbox {
    pub fn new() -> (Self, UnboundedReceiver<(ID<Draft>, Event)>) {
        let (tx, rx) = unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for Outbox {
    fn publish(&self, draft: ID<Draft>, event: Event) {
        log::trace!("[outbox] {} {}", draft.short(), event);
        if let Err(e) = self.tx.send((draft, event)) {
            log::warn!("[outbox] dropped event for {}: {}", draft.short(), e.0.1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_is_tagged() {
        let event = Event::RoundAdvanced {
            round: Round::Second,
        };
        assert_eq!(event.to_json(), r#"{"type":"round_advanced","round":2}"#);
        assert_eq!(Event::DraftCompleted.to_json(), r#"{"type":"draft_completed"}"#);
    }

    #[test]
    fn outbox_delivers() {
        let (outbox, mut rx) = Outbox::new();
        let draft = ID::default();
        outbox.publish(draft, Event::DraftCompleted);
        assert_eq!(rx.try_recv().ok(), Some((draft, Event::DraftCompleted)));
    }

    #[test]
    fn outbox_survives_closed_receiver() {
        let (outbox, rx) = Outbox::new();
        drop(rx);
        outbox.publish(ID::default(), Event::DraftCompleted);
    }
}
