mod api;
mod common;
mod config;
mod error;
mod leaderboard;
mod player;
mod routes;
mod stats;
mod views;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::Router;
use axum::response::IntoResponse;
use log::{error, info};
use routing::{RouteRevision, RouteTable};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct LeaderboardServer {
    config: ServerConfig,
    data: LeaderboardAppData,
}

impl LeaderboardServer {
    pub fn new(config: ServerConfig, data: LeaderboardAppData) -> Self {
        LeaderboardServer { config, data }
    }

    /// Full application router with middleware and state applied.
    pub fn app(data: LeaderboardAppData) -> Router {
        ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        )
                            .into_response()
                    })),
            )
            .with_state(data)
    }

    pub async fn run(&self) -> std::io::Result<()> {
        let app = Self::app(self.data.clone());

        let addr = self.config.addr();

        let listener = TcpListener::bind(addr).await.map_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
            e
        })?;

        info!(
            "listen at: http://localhost:{} (routes: {})",
            addr.port(),
            self.data.revision
        );

        axum::serve(listener, app).await.map_err(|e| {
            error!("Server error: {}", e);
            e
        })
    }
}

pub struct LeaderboardAppData {
    pub routes: Arc<RouteTable>,
    pub revision: RouteRevision,
}

impl LeaderboardAppData {
    pub fn new(routes: RouteTable, revision: RouteRevision) -> Self {
        LeaderboardAppData {
            routes: Arc::new(routes),
            revision,
        }
    }
}

impl Clone for LeaderboardAppData {
    fn clone(&self) -> Self {
        LeaderboardAppData {
            routes: Arc::clone(&self.routes),
            revision: self.revision,
        }
    }
}
