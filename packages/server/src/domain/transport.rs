//! Framed transport contract consumed by a client's read and write loops.
//!
//! A concrete transport (WebSocket, in-memory test double, ...) is split into
//! a receiving half and a sending half so each loop owns exactly one of them.

use async_trait::async_trait;

use super::{entity::Message, error::TransportError};

/// Receiving half of a framed connection.
#[async_trait]
pub trait FrameReceiver: Send {
    /// Wait for the next frame body.
    ///
    /// `Ok(None)` means the peer closed the connection.
    async fn receive(&mut self) -> Result<Option<String>, TransportError>;
}

/// Sending half of a framed connection.
#[async_trait]
pub trait FrameSender: Send {
    /// Encode and write one message as a frame.
    async fn send(&mut self, message: &Message) -> Result<(), TransportError>;

    /// Send a close frame to the peer.
    async fn close(&mut self) -> Result<(), TransportError>;
}
