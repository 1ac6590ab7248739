//! Data Transfer Objects for the wire.

pub mod http;
pub mod websocket;
