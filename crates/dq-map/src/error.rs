use std::collections::TryReserveError;

/// Alias for `Result<T, MapError>`.
pub type MapResult<T> = Result<T, MapError>;

/// Errors that can occur while building a mansion.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// A room was given an empty or whitespace-only name.
    #[error("room name must not be empty")]
    EmptyRoomName,

    /// Two rooms in the same mansion share a name.
    #[error("room already exists: \"{0}\"")]
    DuplicateRoom(String),

    /// Storage for a room name could not be allocated.
    #[error("failed to allocate room storage: {0}")]
    Allocation(#[from] TryReserveError),
}
