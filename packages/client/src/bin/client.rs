//! WebSocket console client.
//!
//! Sends each line typed on stdin to the server and prints every message the
//! server sends back. Exits when the server closes the connection or stdin
//! reaches end-of-file (Ctrl+D).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin wordgames-client
//! cargo run --bin wordgames-client -- --url ws://127.0.0.1:3000/ws/anagram
//! ```

use std::time::Duration;

use clap::Parser;

use wordgames_client::{ClientConfig, config::DEFAULT_URL, run_client};
use wordgames_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "wordgames-client")]
#[command(about = "Relay stdin lines to a WebSocket endpoint and print what comes back", long_about = None)]
struct Args {
    /// WebSocket endpoint to connect to
    #[arg(short = 'u', long, env = "WORDGAMES_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Seconds to wait for the WebSocket handshake
    #[arg(short = 't', long, default_value = "10")]
    connect_timeout: u64,
}

#[tokio::main]
async fn main() {
    // Initialize tracing; stderr stays quiet unless something goes wrong
    setup_logger(env!("CARGO_PKG_NAME"), "warn");

    let args = Args::parse();

    let config = match ClientConfig::new(args.url) {
        Ok(config) => config.with_connect_timeout(Duration::from_secs(args.connect_timeout)),
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_client(&config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
