//! Domain factories for creating domain entities and value objects.

use super::ClientId;

/// Factory for generating ClientId instances.
///
/// Generation is kept apart from the value object so tests can build ids from
/// known UUIDs.
pub struct ClientIdFactory;

impl ClientIdFactory {
    /// Generate a new ClientId with a random UUID v4.
    pub fn generate() -> ClientId {
        ClientId::from_uuid(uuid::Uuid::new_v4())
    }
}
