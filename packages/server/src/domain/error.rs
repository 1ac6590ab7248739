//! Domain errors.

use thiserror::Error;

/// Value object validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    /// Inbound text frame carried no text
    #[error("message body must not be empty")]
    EmptyMessageBody,

    /// History must be able to hold at least one message
    #[error("history capacity must be at least 1 (got {0})")]
    InvalidHistoryCapacity(usize),
}

/// Failure to queue a frame for a single connection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PushError {
    /// The receiving half is gone (the socket writer has stopped)
    #[error("connection '{0}' is closed")]
    ChannelClosed(String),
}
