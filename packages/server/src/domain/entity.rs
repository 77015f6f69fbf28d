//! Core domain models for the chat room.

use serde::{Deserialize, Serialize};

use super::value_object::{ClientId, Identity, Timestamp};

/// One chat line relayed through the room.
///
/// Immutable once built. The room hands the same `Arc<Message>` to every
/// outbound queue it delivers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Connection that produced the message
    origin: ClientId,
    /// Sender's identity label
    sender: Identity,
    /// Message text, relayed untouched
    body: String,
    /// Arrival time
    sent_at: Timestamp,
}

impl Message {
    /// Create a new message
    pub fn new(origin: ClientId, sender: Identity, body: String, sent_at: Timestamp) -> Self {
        Self {
            origin,
            sender,
            body,
            sent_at,
        }
    }

    pub fn origin(&self) -> ClientId {
        self.origin
    }

    pub fn sender(&self) -> &Identity {
        &self.sender
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn sent_at(&self) -> Timestamp {
        self.sent_at
    }
}
