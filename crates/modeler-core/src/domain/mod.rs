//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `model` - Model types (`Model`, `NewModel`, `ModelSummary`)
//! - `model_type` - The `ModelType` discriminant
//! - `relation` - Parent/child links (`ModelRelation`, `NewModelRelation`)

mod model;
mod model_type;
mod relation;

pub use model::{Model, ModelSummary, NewModel};
pub use model_type::{ModelType, ModelTypeError};
pub use relation::{ModelRelation, NewModelRelation};
