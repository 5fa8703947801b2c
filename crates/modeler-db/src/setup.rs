//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for initializing
//! the `SQLite` database with full schema. Entry points call this with the
//! resolved database path.

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::path::Path;

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// This function:
/// 1. Creates the parent directory and database file if they don't exist
/// 2. Opens a pool with foreign keys enforced
/// 3. Creates all tables and indexes
///
/// # Example
///
/// ```rust,no_run
/// use modeler_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let db_path = Path::new("/path/to/modeler.db");
/// let pool = setup_database(db_path).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .foreign_keys(true),
    )
    .await?;

    create_schema(&pool).await?;

    tracing::debug!(path = %db_path.display(), "Database schema ready");
    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// The pool is capped at one connection: every new connection to
/// `sqlite::memory:` would otherwise open a separate empty database.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    use sqlx::sqlite::SqlitePoolOptions;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(
            SqliteConnectOptions::new()
                .in_memory(true)
                .foreign_keys(true),
        )
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// Safe to call multiple times as all statements use IF NOT EXISTS.
pub(crate) async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS models (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            model_key TEXT NOT NULL,
            description TEXT,
            model_comment TEXT,
            created TEXT NOT NULL,
            created_by TEXT NOT NULL,
            last_updated TEXT NOT NULL,
            last_updated_by TEXT NOT NULL,
            version INTEGER NOT NULL DEFAULT 1,
            model_type INTEGER,
            reference_id INTEGER
        )
        ",
    )
    .execute(pool)
    .await?;

    // Owner lookups back the "created by" queries
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_models_created_by ON models(created_by, model_type)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_models_reference ON models(reference_id, model_type)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS model_relations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            parent_model_id INTEGER NOT NULL,
            model_id INTEGER NOT NULL,
            relation_type TEXT,
            FOREIGN KEY (parent_model_id) REFERENCES models(id) ON DELETE CASCADE,
            FOREIGN KEY (model_id) REFERENCES models(id) ON DELETE CASCADE
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_model_relations_parent ON model_relations(parent_model_id)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_model_relations_child ON model_relations(model_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
