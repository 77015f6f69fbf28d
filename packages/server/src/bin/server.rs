//! Chat room relay server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hearth-server -- --addr 127.0.0.1:8080
//! ```

use clap::Parser;
use hearth_server::ServerConfig;
use hearth_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = hearth_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
