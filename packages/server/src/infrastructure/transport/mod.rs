//! Framed transports implementing the domain transport contract.

pub mod websocket;

pub use websocket::{WebSocketReceiver, WebSocketSender, split};
