//! Room error definitions.

use thiserror::Error;

use crate::domain::TransportError;

/// Errors returned when talking to the room through a [`super::RoomHandle`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RoomError {
    /// The room task is no longer running
    #[error("room is closed")]
    Closed,
}

/// Why a client's session ended with an error.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Room(#[from] RoomError),
}
