//! Domain layer: value objects, entities and the room aggregate.
//!
//! Nothing here knows about WebSocket or JSON. Connections are represented by
//! the sending half of an mpsc channel of frames.

pub mod entity;
pub mod error;
pub mod history;
pub mod registry;
pub mod repository;
pub mod room;
pub mod value_object;

pub use entity::{ChatMessage, ClientConnection, ConnectionChannel, Frame};
pub use error::{PushError, ValueObjectError};
pub use history::{DEFAULT_HISTORY_CAPACITY, HistoryBuffer};
pub use registry::ConnectionRegistry;
pub use repository::RoomRepository;
pub use room::{BroadcastReport, JoinReport, Room};
pub use value_object::{ConnectionId, DisplayName, MessageBody, Timestamp};
