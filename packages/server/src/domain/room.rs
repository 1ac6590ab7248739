//! Room aggregate: the connection registry plus the message history.
//!
//! Every operation takes `&mut self`, so whoever owns the room (the in-memory
//! repository, behind a mutex) makes registration, removal and broadcast
//! mutually exclusive. Frames are queued into unbounded channels, which never
//! waits on a peer's socket.

use super::{
    entity::{ChatMessage, ClientConnection, ConnectionChannel},
    error::{PushError, ValueObjectError},
    history::HistoryBuffer,
    registry::ConnectionRegistry,
    value_object::{ConnectionId, DisplayName},
};

/// Outcome of registering a connection
#[derive(Debug, PartialEq, Eq)]
pub struct JoinReport {
    pub id: ConnectionId,
    /// Number of messages in the initial history frame
    pub history_len: usize,
    /// Whether the history frame could be queued
    pub history_push: Result<(), PushError>,
}

/// Outcome of fanning one message out to the registered connections
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Connections the frame was queued for
    pub delivered: Vec<ConnectionId>,
    /// Connections whose queue was already closed
    pub failed: Vec<(ConnectionId, PushError)>,
}

#[derive(Debug, Default)]
pub struct Room {
    registry: ConnectionRegistry,
    history: HistoryBuffer,
}

impl Room {
    pub fn new(history_capacity: usize) -> Result<Self, ValueObjectError> {
        Ok(Self {
            registry: ConnectionRegistry::new(),
            history: HistoryBuffer::new(history_capacity)?,
        })
    }

    /// Register a connection and queue the current history as its first frame.
    ///
    /// The history frame is queued before the connection becomes visible to
    /// broadcasts, so it always precedes any live frame. An empty history is
    /// still sent.
    pub fn join(
        &mut self,
        display_name: DisplayName,
        channel: ConnectionChannel,
    ) -> JoinReport {
        let connection = ClientConnection::new(ConnectionId::generate(), display_name, channel);
        let history = self.history.snapshot();
        let history_len = history.len();
        let history_push = connection.push(history);
        let id = self.registry.add_connection(connection);
        JoinReport {
            id,
            history_len,
            history_push,
        }
    }

    /// Unregister a connection. Unknown or already removed ids are ignored.
    pub fn leave(&mut self, id: &ConnectionId) -> Option<ClientConnection> {
        self.registry.remove(id)
    }

    /// Append to history, then queue a one-message frame for every connection
    /// including the sender. A closed peer is recorded and skipped.
    pub fn post(&mut self, message: ChatMessage) -> BroadcastReport {
        self.history.append(message.clone());

        let mut report = BroadcastReport::default();
        for connection in self.registry.snapshot() {
            match connection.push(vec![message.clone()]) {
                Ok(()) => report.delivered.push(connection.id),
                Err(e) => report.failed.push((connection.id, e)),
            }
        }
        report
    }

    pub fn history(&self) -> Vec<ChatMessage> {
        self.history.snapshot()
    }

    pub fn connection_count(&self) -> usize {
        self.registry.len()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
