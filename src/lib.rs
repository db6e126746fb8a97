//! Multiplayer booster drafts.
//!
//! Re-exports the workspace crates under one roof:
//!
//! - [`bd_core`] — Identifiers, aliases, constants, logging bootstrap
//! - [`bd_cards`] — Cards, packs, rounds, seating, booster generation, catalog
//! - [`bd_players`] — Automated pick strategies
//! - [`bd_draftroom`] — Draft aggregate and per-draft session actor
//! - [`bd_hosting`] — Registry of live drafts
pub use bd_cards::*;
pub use bd_core::*;
pub use bd_draftroom::*;
pub use bd_hosting::*;
pub use bd_players::*;
