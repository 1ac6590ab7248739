//! Domain entities.

use tokio::sync::mpsc;

use super::{
    error::PushError,
    value_object::{ConnectionId, DisplayName, MessageBody, Timestamp},
};

/// A chat message relayed to every connection. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: DisplayName,
    pub body: MessageBody,
    pub sent_at: Timestamp,
}

impl ChatMessage {
    pub fn new(sender: DisplayName, body: MessageBody, sent_at: Timestamp) -> Self {
        Self {
            sender,
            body,
            sent_at,
        }
    }
}

/// One outbound payload: the history on join, or a single message on broadcast
pub type Frame = Vec<ChatMessage>;

/// Sending half of a connection's outbound queue
pub type ConnectionChannel = mpsc::UnboundedSender<Frame>;

/// A live client connection owned by the registry
#[derive(Debug, Clone)]
pub struct ClientConnection {
    pub id: ConnectionId,
    pub display_name: DisplayName,
    channel: ConnectionChannel,
}

impl ClientConnection {
    pub fn new(id: ConnectionId, display_name: DisplayName, channel: ConnectionChannel) -> Self {
        Self {
            id,
            display_name,
            channel,
        }
    }

    /// Queue a frame for this connection without waiting on the socket
    pub fn push(&self, frame: Frame) -> Result<(), PushError> {
        self.channel
            .send(frame)
            .map_err(|_| PushError::ChannelClosed(self.id.to_string()))
    }
}
