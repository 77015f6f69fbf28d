//! Cloneable handle for submitting requests to a running room.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::domain::{ClientId, Message};

use super::{
    error::RoomError,
    hub::{Member, MemberInfo, RoomRequest},
};

/// Non-owning reference to a [`super::Room`].
///
/// Each method enqueues one request on the room's mailbox; the room alone
/// touches membership.
#[derive(Clone)]
pub struct RoomHandle {
    requests: mpsc::Sender<RoomRequest>,
    outbound_capacity: usize,
}

impl RoomHandle {
    pub(crate) fn new(requests: mpsc::Sender<RoomRequest>, outbound_capacity: usize) -> Self {
        Self {
            requests,
            outbound_capacity,
        }
    }

    /// Capacity new clients should use for their outbound queue.
    pub fn outbound_capacity(&self) -> usize {
        self.outbound_capacity
    }

    /// Whether the room has stopped.
    pub fn is_closed(&self) -> bool {
        self.requests.is_closed()
    }

    /// Admit a member and wait until the room has processed it.
    pub(crate) async fn admit(&self, member: Member) -> Result<(), RoomError> {
        let (admitted, done) = oneshot::channel();
        self.submit(RoomRequest::Admit { member, admitted }).await?;
        done.await.map_err(|_| RoomError::Closed)
    }

    /// Ask the room to drop a client. Removing an absent client is a no-op.
    pub async fn remove(&self, client_id: ClientId) -> Result<(), RoomError> {
        self.submit(RoomRequest::Remove(client_id)).await
    }

    /// Broadcast a message to the room.
    pub async fn forward(&self, message: Message) -> Result<(), RoomError> {
        self.submit(RoomRequest::Forward(Arc::new(message))).await
    }

    /// Current membership, in admission order.
    pub async fn members(&self) -> Result<Vec<MemberInfo>, RoomError> {
        let (reply, snapshot) = oneshot::channel();
        self.submit(RoomRequest::Members(reply)).await?;
        snapshot.await.map_err(|_| RoomError::Closed)
    }

    async fn submit(&self, request: RoomRequest) -> Result<(), RoomError> {
        self.requests
            .send(request)
            .await
            .map_err(|_| RoomError::Closed)
    }
}
