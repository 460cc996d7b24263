//! Error types for the exploration engine.

use dq_map::MapError;
use thiserror::Error;

/// Result type for exploration operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while exploring the mansion.
#[derive(Debug, Error)]
pub enum FictionError {
    /// No room matches the requested name.
    #[error("room not found: {0}")]
    RoomNotFound(String),

    /// A turn was submitted after the session reached a terminal state.
    #[error("the exploration session is already over")]
    SessionOver,

    /// Writing the transcript failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The mansion map could not be built.
    #[error("map error: {0}")]
    Map(#[from] MapError),
}
