//! Web server for plank.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::{AuthConfig, ServerConfig};
use crate::db::Database;
use crate::{PlankError, Result};

use super::handlers::AppState;
use super::middleware::JwtState;
use super::router::create_router;

/// HTTP server wrapping the API router.
pub struct WebServer {
    addr: SocketAddr,
    app_state: Arc<AppState>,
    jwt_state: Arc<JwtState>,
    cors_origins: Vec<String>,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(server: &ServerConfig, auth: &AuthConfig, db: Database) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", server.host, server.port)
            .parse()
            .map_err(|e| PlankError::Config(format!("invalid server address: {e}")))?;

        let app_state = AppState::new(db, &auth.jwt_secret, auth.jwt_access_token_expiry_secs);
        let jwt_state = Arc::new(JwtState::new(&auth.jwt_secret));

        Ok(Self {
            addr,
            app_state: Arc::new(app_state),
            jwt_state,
            cors_origins: server.cors_origins.clone(),
        })
    }

    /// Bind and serve until the process is stopped.
    pub async fn run(self) -> Result<()> {
        let router = create_router(self.app_state, self.jwt_state, &self.cors_origins);

        let listener = TcpListener::bind(self.addr).await?;
        tracing::info!("Web server listening on {}", self.addr);

        axum::serve(listener, router).await?;

        Ok(())
    }
}
