//! HexOust Server - HTTP API for the board renderer
//!
//! This crate provides the web backend:
//! - REST API for one game session (moves, clicks, restart)
//! - Board geometry for drawing
//! - Static file serving for the renderer

mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use hexoust_core::GameConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;

pub use routes::board::{board_info, BoardInfo, HexInfo};
pub use state::{GameSnapshot, ServerState, StoneView};

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub game: GameConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8002,
            static_dir: "hexoust/renderer".to_string(),
            game: GameConfig::default(),
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Board geometry
        .route("/api/board", get(routes::board::get_board))
        // Game API
        .route("/api/game", get(routes::game::get_game))
        .route("/api/game/move", post(routes::game::make_move))
        .route("/api/game/click", post(routes::game::click))
        .route("/api/game/restart", post(routes::game::restart))
        // Shared state
        .with_state(state)
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    config.game.validate()?;

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let state = Arc::new(ServerState::new(config.game));
    let router = create_router(&config, state);

    tracing::info!("HexOust server starting on http://{}", addr);
    tracing::info!("Static files served from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
