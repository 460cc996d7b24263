//! Mansion map for Detetive Quest.
//!
//! A mansion is a binary tree of named rooms. Each room owns its left and
//! right children outright, so the map is acyclic by construction and is
//! released as a whole when the owning [`Mansion`] goes away. The fixed
//! layout played by the game comes from [`build_mansion_map`].

/// Error types used throughout the crate.
pub mod error;
/// The mansion that owns the room tree, plus the fixed game layout.
pub mod mansion;
/// Rooms and the branches that link them.
pub mod room;
/// Post-order release of a finished mansion.
pub mod teardown;

#[cfg(test)]
mod test_support;

/// Re-export error types.
pub use error::{MapError, MapResult};
/// Re-export the mansion and its builder.
pub use mansion::{Mansion, build_mansion_map};
/// Re-export room types.
pub use room::{Branch, Room};
/// Re-export the teardown entry point.
pub use teardown::release;
