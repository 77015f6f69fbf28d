//! Request handlers.

pub mod http;
pub mod websocket;

pub use http::{health_check, room_state};
pub use websocket::room_handler;
