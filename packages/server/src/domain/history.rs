//! Bounded message history delivered to newly joined clients.

use std::collections::VecDeque;

use super::{entity::ChatMessage, error::ValueObjectError};

/// Number of messages kept when no capacity is configured
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Ordered, size-bounded sequence of past messages.
///
/// Holds at most `capacity` messages. Appending beyond that discards the
/// oldest ones, so only the most recent `capacity` remain in append order.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    capacity: usize,
    messages: VecDeque<ChatMessage>,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Result<Self, ValueObjectError> {
        if capacity == 0 {
            return Err(ValueObjectError::InvalidHistoryCapacity(capacity));
        }
        Ok(Self {
            capacity,
            messages: VecDeque::with_capacity(capacity),
        })
    }

    /// Append a message, evicting from the front while over capacity
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push_back(message);
        while self.messages.len() > self.capacity {
            self.messages.pop_front();
        }
    }

    /// All retained messages, oldest first
    pub fn snapshot(&self) -> Vec<ChatMessage> {
        self.messages.iter().cloned().collect()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
            messages: VecDeque::with_capacity(DEFAULT_HISTORY_CAPACITY),
        }
    }
}
