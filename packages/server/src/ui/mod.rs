//! HTTP and WebSocket surface of the chat room.

mod handler;
mod identity;
mod runner;
mod signal;
pub mod state;

pub use identity::resolve_identity;
pub use runner::{build_router, run, serve};
