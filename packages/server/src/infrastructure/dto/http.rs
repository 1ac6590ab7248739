//! HTTP API DTOs.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    /// Live WebSocket connections
    pub connections: usize,
    /// Messages currently retained in history
    pub history: usize,
}
