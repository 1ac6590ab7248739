//! UseCase layer: one use case per connection lifecycle event.

pub mod connect_client;
pub mod disconnect_client;
pub mod error;
pub mod get_room_state;
pub mod send_message;

pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use error::SendMessageError;
pub use get_room_state::{GetRoomStateUseCase, RoomState};
pub use send_message::SendMessageUseCase;
