//! Domain layer error definitions.

use thiserror::Error;

/// Boxed error coming out of a concrete transport.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// Identity validation error
    #[error("Identity cannot be empty")]
    IdentityEmpty,
}

/// Errors raised by a framed transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Receiving the next frame failed
    #[error("failed to receive frame: {0}")]
    Receive(#[source] BoxError),

    /// Writing a frame failed
    #[error("failed to send frame: {0}")]
    Send(#[source] BoxError),

    /// Encoding an outbound message failed
    #[error("failed to encode frame: {0}")]
    Encode(#[source] BoxError),
}
