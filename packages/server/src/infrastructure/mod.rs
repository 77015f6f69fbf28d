//! Infrastructure layer.
//!
//! Concrete implementations of the domain contracts: trace sinks, the axum
//! WebSocket transport and the JSON shapes that travel over it.

pub mod dto;
pub mod tracer;
pub mod transport;
