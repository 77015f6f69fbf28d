//! Client: one connected participant and its read/write loops.
//!
//! The read loop turns inbound frames into messages for the room; the write
//! loop drains the client's outbound queue onto the wire. They only meet
//! through the room, never directly.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::{
    ClientId, ClientIdFactory, FrameReceiver, FrameSender, Identity, Message, Timestamp,
    TransportError,
};

use super::{
    error::{RoomError, SessionError},
    handle::RoomHandle,
    hub::Member,
};

/// An admitted participant, ready to be bound to a transport.
pub struct Client {
    id: ClientId,
    identity: Identity,
    outbound: mpsc::Receiver<Arc<Message>>,
    room: RoomHandle,
}

impl Client {
    /// Create a client with a fresh id and wait for the room to admit it.
    pub async fn join(room: RoomHandle, identity: Identity) -> Result<Self, RoomError> {
        let id = ClientIdFactory::generate();
        let (sender, outbound) = mpsc::channel(room.outbound_capacity());
        room.admit(Member::new(id, identity.clone(), sender)).await?;

        Ok(Self {
            id,
            identity,
            outbound,
            room,
        })
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Run both loops until the connection ends, then make sure the room has
    /// dropped this client.
    ///
    /// The write loop runs on its own task. If the read side finishes first,
    /// removal closes the outbound queue and the write loop exits after
    /// sending a close frame. If the write side finishes first (write error or
    /// eviction), reading stops.
    pub async fn run<R, S>(self, receiver: R, sender: S)
    where
        R: FrameReceiver,
        S: FrameSender + 'static,
    {
        let Self {
            id,
            identity,
            outbound,
            room,
        } = self;

        let mut write_task = tokio::spawn(write_loop(outbound, sender));

        tokio::select! {
            read = read_loop(id, &identity, receiver, &room) => {
                match read {
                    Ok(()) => tracing::info!("Client '{}' ({}) closed the connection", identity, id),
                    Err(e) => tracing::warn!("Read loop for '{}' ({}) failed: {}", identity, id, e),
                }

                request_removal(&room, id).await;

                match write_task.await {
                    Ok(Ok(())) => tracing::debug!("Write loop for {} finished", id),
                    Ok(Err(e)) => tracing::warn!("Write loop for '{}' ({}) failed: {}", identity, id, e),
                    Err(e) => tracing::error!("Write loop for {} aborted: {}", id, e),
                }
            }
            written = &mut write_task => {
                match written {
                    Ok(Ok(())) => tracing::info!("Outbound queue for '{}' ({}) closed by the room", identity, id),
                    Ok(Err(e)) => tracing::warn!("Write loop for '{}' ({}) failed: {}", identity, id, e),
                    Err(e) => tracing::error!("Write loop for {} aborted: {}", id, e),
                }

                request_removal(&room, id).await;
            }
        }
    }
}

async fn read_loop<R: FrameReceiver>(
    id: ClientId,
    identity: &Identity,
    mut receiver: R,
    room: &RoomHandle,
) -> Result<(), SessionError> {
    while let Some(body) = receiver.receive().await? {
        tracing::debug!("Received {} bytes from '{}'", body.len(), identity);
        let message = Message::new(id, identity.clone(), body, Timestamp::now());
        room.forward(message).await?;
    }
    Ok(())
}

async fn write_loop<S: FrameSender>(
    mut outbound: mpsc::Receiver<Arc<Message>>,
    mut sender: S,
) -> Result<(), TransportError> {
    while let Some(message) = outbound.recv().await {
        sender.send(&message).await?;
    }
    sender.close().await
}

async fn request_removal(room: &RoomHandle, id: ClientId) {
    if let Err(e) = room.remove(id).await {
        tracing::debug!("Could not remove {}: {}", id, e);
    }
}
