//! `SQLite` persistence for modeler.
//!
//! Implements the `ModelRepository` port from `modeler-core` with sqlx and
//! owns the schema. Adapters obtain repositories through [`CoreFactory`].
#![deny(unsafe_code)]

// Linked for its bundled SQLite build; sqlx uses it transitively.
use libsqlite3_sys as _;

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

// Re-export repository implementations
pub use repositories::SqliteModelRepository;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
