//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::net::IpAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::HeaderName;
use axum::http::header::InvalidHeaderName;
use modeler_core::{AppCore, Repos};
use modeler_db::{CoreFactory, setup_database};

// Path utilities from core
use modeler_core::{data_root, database_path};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 9898;

/// Header carrying the authenticated user id, set by the fronting proxy.
pub const DEFAULT_USER_HEADER: &str = "x-modeler-user";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub bind: IpAddr,
    /// Port for the HTTP server.
    pub port: u16,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Trusted header holding the current user id.
    pub user_header: HeaderName,
}

impl ServerConfig {
    /// Loopback on the default port, all origins allowed.
    pub fn with_defaults() -> Self {
        Self {
            bind: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            cors: CorsConfig::default(),
            user_header: HeaderName::from_static(DEFAULT_USER_HEADER),
        }
    }

    #[must_use]
    pub fn with_bind(mut self, bind: IpAddr) -> Self {
        self.bind = bind;
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Use a different trusted user header.
    ///
    /// Fails when `name` is not a valid HTTP header name. Valid names are
    /// normalized to lowercase.
    pub fn with_user_header(mut self, name: &str) -> Result<Self, InvalidHeaderName> {
        self.user_header = HeaderName::from_bytes(name.as_bytes())?;
        Ok(self)
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
    /// Trusted header holding the current user id.
    pub user_header: HeaderName,
}

impl AxumContext {
    /// Wire a context over already built repositories.
    pub fn from_repos(repos: Repos, config: &ServerConfig) -> Self {
        Self {
            core: Arc::new(AppCore::new(repos)),
            user_header: config.user_header.clone(),
        }
    }
}

/// Bootstrap the Axum server: resolve paths, open the database and build
/// the core facade.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let db_path = database_path()?;
    let data_root_path = data_root()?;

    tracing::info!(
        target: "modeler.paths",
        database_path = %db_path.display(),
        data_root = %data_root_path.display(),
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&db_path).await?;
    Ok(AxumContext::from_repos(CoreFactory::build_repos(pool), config))
}

/// Start the web server with the given configuration.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = std::net::SocketAddr::new(config.bind, config.port);
    let listener = TcpListener::bind(addr).await?;

    info!(
        %addr,
        user_header = %config.user_header,
        "modeler web server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
