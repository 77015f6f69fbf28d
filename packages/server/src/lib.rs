//! Hearth chat room relay.
//!
//! A single room hub admits WebSocket clients and fans every chat line out to
//! all of them. Slow consumers are evicted instead of slowing the room down.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod room;
pub mod ui;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run as run_server;
