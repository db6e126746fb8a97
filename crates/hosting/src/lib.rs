//! Draft hosting.
//!
//! - [`Registry`] — Live drafts by id: create, route, and clean up sessions
mod registry;

pub use registry::*;
