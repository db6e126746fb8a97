//! Cards, packs, and booster generation for booster drafts.
//!
//! ## Core Types
//!
//! - [`Rarity`] — Printed rarity, the unit of booster stratification
//! - [`Printing`] — Catalog entry a booster samples from
//! - [`Card`] — A generated card inside a pack
//! - [`Pack`] — Shrinking multiset of cards with a stable identity
//!
//! ## Circulation
//!
//! - [`Round`] — The three draft rounds and their fixed passing directions
//! - [`Direction`] — Left/right seat resolver
//! - [`Seating`] — Cyclic table order with neighbor lookup
//!
//! ## Generation
//!
//! - [`Composition`] — Cards per slot
//! - [`Booster`] — Rarity-stratified sampler with foil substitution
//! - [`Catalog`] — Printing source consumed by the generator
mod booster;
mod card;
mod catalog;
mod composition;
mod pack;
mod rarity;
mod round;
mod seating;

pub use booster::*;
pub use card::*;
pub use catalog::*;
pub use composition::*;
pub use pack::*;
pub use rarity::*;
pub use round::*;
pub use seating::*;
