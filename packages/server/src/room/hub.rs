//! Room hub: the single task that owns membership.
//!
//! Every admit, remove and forward goes through one FIFO mailbox and is
//! handled to completion before the next request is looked at, so fan-out
//! never sees a half-applied membership change and no lock is needed.

use std::{
    collections::HashMap,
    fmt,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use tokio::sync::{
    mpsc::{self, error::TrySendError},
    oneshot,
};

use crate::domain::{ClientId, Identity, Message, Timestamp, Tracer};

use super::{MAILBOX_CAPACITY, RoomSettings, handle::RoomHandle};

/// A request handled by the room loop, exactly one per iteration.
pub(crate) enum RoomRequest {
    Admit {
        member: Member,
        admitted: oneshot::Sender<()>,
    },
    Remove(ClientId),
    Forward(Arc<Message>),
    Members(oneshot::Sender<Vec<MemberInfo>>),
}

/// Room-side record of an admitted client.
///
/// Holds the only sender of the client's outbound queue; dropping the record
/// is what closes the queue.
pub(crate) struct Member {
    id: ClientId,
    identity: Identity,
    joined_at: Timestamp,
    /// Admission order, assigned by the room
    seq: u64,
    outbound: mpsc::Sender<Arc<Message>>,
}

impl Member {
    pub(crate) fn new(
        id: ClientId,
        identity: Identity,
        outbound: mpsc::Sender<Arc<Message>>,
    ) -> Self {
        Self {
            id,
            identity,
            joined_at: Timestamp::now(),
            seq: 0,
            outbound,
        }
    }

    fn info(&self) -> MemberInfo {
        MemberInfo {
            client_id: self.id,
            identity: self.identity.clone(),
            joined_at: self.joined_at,
        }
    }
}

/// Snapshot of one admitted client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInfo {
    pub client_id: ClientId,
    pub identity: Identity,
    pub joined_at: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Eviction {
    QueueFull,
    Disconnected,
    DeliveryPanicked,
}

impl fmt::Display for Eviction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::QueueFull => "outbound queue full",
            Self::Disconnected => "outbound queue dropped",
            Self::DeliveryPanicked => "delivery panicked",
        };
        f.write_str(reason)
    }
}

/// The room coordinator.
///
/// Build one with [`Room::spawn`] (or [`Room::new`] + [`Room::run`]) and talk
/// to it through the returned [`RoomHandle`].
pub struct Room {
    members: HashMap<ClientId, Member>,
    requests: mpsc::Receiver<RoomRequest>,
    tracer: Arc<dyn Tracer>,
    settings: RoomSettings,
    next_seq: u64,
}

impl Room {
    /// Create a room and the handle used to reach it. Nothing runs until
    /// [`Room::run`] is polled.
    pub fn new(settings: RoomSettings, tracer: Arc<dyn Tracer>) -> (Self, RoomHandle) {
        let (requests_tx, requests) = mpsc::channel(MAILBOX_CAPACITY);
        let handle = RoomHandle::new(requests_tx, settings.outbound_capacity);
        let room = Self {
            members: HashMap::new(),
            requests,
            tracer,
            settings,
            next_seq: 0,
        };
        (room, handle)
    }

    /// Create a room and run it on its own tokio task.
    pub fn spawn(settings: RoomSettings, tracer: Arc<dyn Tracer>) -> RoomHandle {
        let (room, handle) = Self::new(settings, tracer);
        tokio::spawn(room.run());
        handle
    }

    /// Process requests until every [`RoomHandle`] is gone.
    pub async fn run(mut self) {
        tracing::info!(
            "Room started (outbound capacity: {}, echo to sender: {})",
            self.settings.outbound_capacity,
            self.settings.echo_to_sender
        );

        while let Some(request) = self.requests.recv().await {
            self.process(request);
        }

        tracing::info!("Room stopped: all handles dropped");
    }

    pub(crate) fn process(&mut self, request: RoomRequest) {
        match request {
            RoomRequest::Admit { member, admitted } => {
                self.admit(member);
                let _ = admitted.send(());
            }
            RoomRequest::Remove(client_id) => self.remove(client_id),
            RoomRequest::Forward(message) => self.forward(&message),
            RoomRequest::Members(reply) => {
                let _ = reply.send(self.snapshot());
            }
        }
    }

    fn admit(&mut self, mut member: Member) {
        member.seq = self.next_seq;
        self.next_seq += 1;
        let event = format!("client joined: {} ({})", member.identity, member.id);
        tracing::info!("Client '{}' ({}) joined", member.identity, member.id);
        self.members.insert(member.id, member);
        self.trace(&event);
    }

    fn remove(&mut self, client_id: ClientId) {
        let Some(member) = self.members.remove(&client_id) else {
            tracing::debug!("Client {} already left", client_id);
            return;
        };

        tracing::info!("Client '{}' ({}) left", member.identity, client_id);
        self.trace(&format!("client left: {} ({})", member.identity, client_id));
    }

    fn forward(&mut self, message: &Arc<Message>) {
        let mut evicted = Vec::new();

        for (client_id, member) in &self.members {
            if !self.settings.echo_to_sender && *client_id == message.origin() {
                continue;
            }

            match panic::catch_unwind(AssertUnwindSafe(|| self.deliver(member, message))) {
                Ok(Ok(())) => {}
                Ok(Err(reason)) => evicted.push((*client_id, reason)),
                Err(_) => evicted.push((*client_id, Eviction::DeliveryPanicked)),
            }
        }

        for (client_id, reason) in evicted {
            self.evict(client_id, reason);
        }
    }

    /// A slot is reserved before tracing, so a panicking sink releases it
    /// unused: the member is either sent the message or evicted, never both.
    fn deliver(&self, member: &Member, message: &Arc<Message>) -> Result<(), Eviction> {
        let permit = match member.outbound.try_reserve() {
            Ok(permit) => permit,
            Err(TrySendError::Full(())) => return Err(Eviction::QueueFull),
            Err(TrySendError::Closed(())) => return Err(Eviction::Disconnected),
        };

        self.tracer.trace(&format!(
            "message sent: {} -> {}: {}",
            message.sender(),
            member.identity,
            message.body()
        ));
        permit.send(Arc::clone(message));
        Ok(())
    }

    fn evict(&mut self, client_id: ClientId, reason: Eviction) {
        let Some(member) = self.members.remove(&client_id) else {
            return;
        };

        tracing::warn!(
            "Evicted client '{}' ({}): {}",
            member.identity,
            client_id,
            reason
        );
        self.trace(&format!(
            "client evicted: {} ({}): {}",
            member.identity, client_id, reason
        ));
    }

    fn snapshot(&self) -> Vec<MemberInfo> {
        let mut members: Vec<&Member> = self.members.values().collect();
        members.sort_by_key(|m| m.seq);
        members.into_iter().map(Member::info).collect()
    }

    /// Membership and joins/leaves must not depend on the sink behaving.
    fn trace(&self, event: &str) {
        if panic::catch_unwind(AssertUnwindSafe(|| self.tracer.trace(event))).is_err() {
            tracing::warn!("Trace sink panicked on event: {}", event);
        }
    }
}
