//! Domain layer for the chat room.
//!
//! Value objects, the relayed message, and the contracts (trace sink,
//! framed transport) the room depends on. Nothing here knows about axum.

pub mod entity;
pub mod error;
pub mod factory;
pub mod tracer;
pub mod transport;
pub mod value_object;

pub use entity::Message;
pub use error::{BoxError, TransportError, ValueObjectError};
pub use factory::ClientIdFactory;
pub use tracer::{NoopTracer, Tracer};
pub use transport::{FrameReceiver, FrameSender};
pub use value_object::{ClientId, Identity, Timestamp};
