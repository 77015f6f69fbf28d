//! Server state shared by handlers.

use crate::room::RoomHandle;

/// Shared application state
pub struct AppState {
    /// Handle to the single room every connection joins
    pub room: RoomHandle,
}

impl AppState {
    pub fn new(room: RoomHandle) -> Self {
        Self { room }
    }
}
