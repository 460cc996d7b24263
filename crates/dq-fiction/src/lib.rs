//! Exploration engine for Detetive Quest.
//!
//! Drives a player through a [`dq_map::Mansion`] one room at a time. Each
//! turn shows the current room and its exits, reads a single-letter choice
//! (`e` left, `d` right, `s` quit) and moves the cursor. The session ends when
//! the player quits, input runs out, or the cursor reaches a room with no
//! exits.

/// Session configuration.
pub mod config;
/// Error types for the exploration engine.
pub mod error;
/// Player-facing text.
pub mod narrator;
/// Choice parsing and room name resolution.
pub mod parser;
/// Line-oriented driver over any reader and writer.
pub mod play;
/// Exploration session state machine.
pub mod session;

pub use config::ExplorationConfig;
pub use error::{FictionError, FictionResult};
pub use parser::{Command, parse_choice};
pub use session::{ExplorationSession, SessionState};
