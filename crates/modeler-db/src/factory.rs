//! Composition utilities for wiring `SQLite` repositories into `Repos`.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use modeler_core::Repos;

use crate::repositories::SqliteModelRepository;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// Returns a `Repos` struct from `modeler-core` containing
    /// trait-object-wrapped repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(Arc::new(SqliteModelRepository::new(pool)))
    }

    /// Create a model repository from a pool.
    pub fn model_repository(pool: SqlitePool) -> Arc<SqliteModelRepository> {
        Arc::new(SqliteModelRepository::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a model repository using this test database.
    pub fn model_repository(&self) -> SqliteModelRepository {
        SqliteModelRepository::new(self.pool.clone())
    }

    /// Repositories wired the same way as production.
    pub fn repos(&self) -> Repos {
        CoreFactory::build_repos(self.pool.clone())
    }
}
