//! Errors surfaced at the edges of the server.

use std::{io, net::SocketAddr};

use thiserror::Error;

use crate::domain::ValueObjectError;

/// Failures resolving who a connection belongs to.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// Neither the auth cookie nor the identity header is present
    #[error("no identity attached to the request")]
    Missing,

    #[error(transparent)]
    Invalid(#[from] ValueObjectError),
}

/// Fatal server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}
