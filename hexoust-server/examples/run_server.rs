//! Example to run the HexOust server standalone
//!
//! Run with: cargo run -p hexoust-server --example run_server

use hexoust_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();

    println!("Starting HexOust server on port {}", config.port);
    println!("Static files from: {}", config.static_dir);
    println!("Board radius: {}", config.game.radius);

    run_server(config).await
}
