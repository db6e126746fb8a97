//! Record shapes mirrored to the repository.
mod draft;
mod pick;

pub use draft::*;
pub use pick::*;
