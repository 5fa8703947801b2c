//! Core domain types, ports and services for modeler.
//!
//! This crate has no knowledge of storage or transport. `modeler-db`
//! implements the [`ModelRepository`] port and `modeler-axum` exposes the
//! services over HTTP.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod query;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    Model, ModelRelation, ModelSummary, ModelType, ModelTypeError, NewModel, NewModelRelation,
};
pub use ports::{CoreError, ModelRepository, Repos, RepositoryError};
pub use query::{Direction, FilterText, MIN_FILTER_LENGTH, Sort, SortField};
pub use services::{AppCore, FormService, ModelService};

// Re-export path utilities
pub use paths::{PathError, data_root, database_path};

// Dev-dependencies used only by integration tests
#[cfg(test)]
use modeler_db as _;
#[cfg(test)]
use tokio as _;
