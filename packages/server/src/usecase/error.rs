//! UseCase errors.

use thiserror::Error;

use crate::domain::ValueObjectError;

/// Reasons an inbound text frame is not relayed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    #[error("invalid message: {0}")]
    InvalidMessage(#[from] ValueObjectError),
}
