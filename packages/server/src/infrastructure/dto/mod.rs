//! Data transfer objects exchanged with browsers and API callers.

pub mod http;
pub mod websocket;
