//! WebSocket message DTOs for the chat room.

use serde::{Deserialize, Serialize};

use crate::domain::Message;

/// Chat line sent by a browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundChatMessage {
    #[serde(alias = "Message")]
    pub message: String,
}

/// Chat line delivered to a browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundChatMessage {
    pub name: String,
    pub message: String,
    /// RFC 3339 arrival time
    pub when: String,
}

impl From<&Message> for OutboundChatMessage {
    fn from(message: &Message) -> Self {
        Self {
            name: message.sender().as_str().to_string(),
            message: message.body().to_string(),
            when: message.sent_at().to_rfc3339(),
        }
    }
}

/// Extract the body of an inbound text frame.
///
/// Frames that are not an [`InboundChatMessage`] are relayed verbatim.
pub fn decode_inbound(text: &str) -> String {
    match serde_json::from_str::<InboundChatMessage>(text) {
        Ok(inbound) => inbound.message,
        Err(_) => text.to_string(),
    }
}
