//! Axum web adapter for the modeler store.
//!
//! Serves the form picker endpoint (`GET /rest/form-models`) and a small
//! read-only view over the rest of the model repository.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for unit tests
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod auth;
pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use auth::CurrentUser;
pub use bootstrap::{
    AxumContext, CorsConfig, DEFAULT_PORT, DEFAULT_USER_HEADER, ServerConfig, bootstrap,
    start_server,
};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
