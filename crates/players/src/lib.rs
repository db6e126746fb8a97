//! Automated pick strategies.
//!
//! - [`Picker`] — Trait for choosing a card out of a pack
//! - [`Fish`] — Uniform random pick
//! - [`Shark`] — Rarity-weighted pick with some randomness
mod fish;
mod picker;
mod shark;

pub use fish::*;
pub use picker::*;
pub use shark::*;
