//! The room: a single serialized hub that owns membership and fans messages
//! out, plus the per-client read/write boundary that feeds and drains it.
//!
//! ```text
//! FrameReceiver ──read loop──▶ RoomHandle ──mailbox──▶ Room (one task)
//!                                                        │ try_send
//! FrameSender ◀──write loop── outbound queue ◀───────────┘
//! ```

pub mod client;
pub mod error;
pub mod handle;
pub mod hub;

pub use client::Client;
pub use error::{RoomError, SessionError};
pub use handle::RoomHandle;
pub use hub::{MemberInfo, Room};

/// Default capacity of a client's outbound queue.
pub const DEFAULT_OUTBOUND_CAPACITY: usize = 256;

/// Capacity of the room's request mailbox.
pub const MAILBOX_CAPACITY: usize = 64;

/// Tunables for a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSettings {
    /// Messages a client may have queued before it is evicted as unresponsive
    pub outbound_capacity: usize,
    /// Deliver a message back to the client that sent it
    pub echo_to_sender: bool,
}

impl RoomSettings {
    /// Settings with the given outbound capacity (at least 1).
    pub fn with_outbound_capacity(outbound_capacity: usize) -> Self {
        Self {
            outbound_capacity: outbound_capacity.max(1),
            ..Self::default()
        }
    }

    pub fn echo_to_sender(mut self, echo: bool) -> Self {
        self.echo_to_sender = echo;
        self
    }
}

impl Default for RoomSettings {
    fn default() -> Self {
        Self {
            outbound_capacity: DEFAULT_OUTBOUND_CAPACITY,
            echo_to_sender: true,
        }
    }
}
