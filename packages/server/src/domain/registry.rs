//! Registry of live client connections.

use super::{
    entity::{ClientConnection, ConnectionChannel},
    value_object::{ConnectionId, DisplayName},
};

/// Insertion-ordered set of live connections keyed by [`ConnectionId`].
///
/// A connection appears at most once. Removal goes through the id, never
/// through a position, so churn on other entries cannot remove the wrong one.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    connections: Vec<ClientConnection>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly accepted connection and return its identity
    pub fn add(&mut self, display_name: DisplayName, channel: ConnectionChannel) -> ConnectionId {
        self.add_connection(ClientConnection::new(
            ConnectionId::generate(),
            display_name,
            channel,
        ))
    }

    /// Register an already built connection. Adding the same id twice keeps
    /// the first entry.
    pub fn add_connection(&mut self, connection: ClientConnection) -> ConnectionId {
        let id = connection.id;
        if !self.contains(&id) {
            self.connections.push(connection);
        }
        id
    }

    /// Unregister a connection.
    ///
    /// Returns `None` when the id is unknown or was already removed.
    pub fn remove(&mut self, id: &ConnectionId) -> Option<ClientConnection> {
        let position = self.connections.iter().position(|c| &c.id == id)?;
        Some(self.connections.remove(position))
    }

    /// Point-in-time copy of the live connections, in registration order
    pub fn snapshot(&self) -> Vec<ClientConnection> {
        self.connections.clone()
    }

    pub fn contains(&self, id: &ConnectionId) -> bool {
        self.connections.iter().any(|c| &c.id == id)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}
