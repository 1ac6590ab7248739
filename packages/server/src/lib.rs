//! Hiroba: a WebSocket broadcast chat server.
//!
//! Clients connect with a `name` query parameter, receive the recent message
//! history, and every text frame they send is relayed to all connected
//! clients (the sender included).

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
