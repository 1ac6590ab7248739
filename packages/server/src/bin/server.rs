//! WebSocket broadcast chat server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-server
//! cargo run --bin hiroba-server -- --host 127.0.0.1 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;
use hiroba_server::{
    domain::{DEFAULT_HISTORY_CAPACITY, Room},
    infrastructure::repository::InMemoryRoomRepository,
    ui::Server,
    usecase::{
        ConnectClientUseCase, DisconnectClientUseCase, GetRoomStateUseCase, SendMessageUseCase,
    },
};
use hiroba_shared::{logger::setup_logger, time::SystemClock};
use tokio::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "hiroba-server")]
#[command(about = "WebSocket chat server that relays every message to all clients", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value_t = 9090)]
    port: u16,

    /// Number of recent messages sent to newly joined clients
    #[arg(long, default_value_t = DEFAULT_HISTORY_CAPACITY)]
    history_capacity: usize,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repository
    // 2. UseCases
    // 3. Server

    // 1. Create Repository (in-memory room)
    let room = match Room::new(args.history_capacity) {
        Ok(room) => room,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    let repository = Arc::new(InMemoryRoomRepository::new(Arc::new(Mutex::new(room))));
    tracing::info!("Room created (history capacity: {})", args.history_capacity);

    // 2. Create UseCases
    let connect_client_usecase = Arc::new(ConnectClientUseCase::new(repository.clone()));
    let disconnect_client_usecase = Arc::new(DisconnectClientUseCase::new(repository.clone()));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(
        repository.clone(),
        Arc::new(SystemClock),
    ));
    let get_room_state_usecase = Arc::new(GetRoomStateUseCase::new(repository.clone()));

    // 3. Create and run the server
    let server = Server::new(
        connect_client_usecase,
        disconnect_client_usecase,
        send_message_usecase,
        get_room_state_usecase,
    );
    if let Err(e) = server.run(&args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
