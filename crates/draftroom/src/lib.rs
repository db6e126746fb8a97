//! Async runtime for live booster drafts.
//!
//! One [`Session`] task owns each draft. Every operation on a draft, whether
//! a human pick, an automated pick, a join or a state read, is a
//! [`Command`] in that session's mailbox and is applied one at a time, so
//! the [`Draft`] aggregate never sees concurrent mutation.
//!
//! ## Architecture
//!
//! - [`Draft`] — Functional core: queues, counters, rounds, completion
//! - [`Session`] — Imperative shell: mailbox loop, persistence, events
//! - [`DraftHandle`] — Cloneable request/reply front for a session
//! - [`Autopick`] — Deferred picks for automated drafters
//!
//! ## Collaborators
//!
//! - [`Repository`] — Persistence mirror ([`MemoryStore`] in-process)
//! - [`Notifier`] — Fire-and-forget event sink ([`Outbox`] channel)
//!
//! ## Submodules
//!
//! - [`records`] — Persisted pick and draft shapes
mod autopick;
mod command;
mod config;
mod draft;
mod drafter;
mod error;
mod event;
mod handle;
mod queue;
mod repository;
mod session;

pub mod records;

pub use autopick::*;
pub use command::*;
pub use config::*;
pub use draft::*;
pub use drafter::*;
pub use error::*;
pub use event::*;
pub use handle::*;
pub use queue::*;
pub use records::*;
pub use repository::*;
pub use session::*;
