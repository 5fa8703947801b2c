//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - One repository method per query shape

pub mod model_repository;

use std::sync::Arc;
use thiserror::Error;

pub use model_repository::ModelRepository;

/// Container for all repository trait objects.
///
/// Lives in `modeler-core` so that `AppCore` can accept it without
/// depending on `modeler-db`.
///
/// # Example
///
/// ```ignore
/// // In modeler-db factory:
/// pub fn build_repos(pool: SqlitePool) -> Repos { ... }
///
/// // In adapter bootstrap:
/// let repos = modeler_db::CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos);
/// ```
#[derive(Clone)]
pub struct Repos {
    /// Model store.
    pub models: Arc<dyn ModelRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(models: Arc<dyn ModelRepository>) -> Self {
        Self { models }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored value could not be decoded into a domain type.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}
