//! Model repository trait definition.
//!
//! This port defines the query contract of the Model Store.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Model, ModelRelation, ModelSummary, ModelType, NewModel, NewModelRelation};
use crate::query::{FilterText, Sort};

/// Repository for model queries.
///
/// One method per query shape. Methods taking a [`Sort`] honour it;
/// all others return rows in store-default order, which callers must
/// not rely on.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - A `filter`, when present, matches lowercase name OR lowercase description
/// - Merging and re-sorting belongs in `FormService`, not here
#[async_trait]
pub trait ModelRepository: Send + Sync {
    /// Process models created by `user` that are not linked to a reference.
    ///
    /// Process models have a NULL, `Bpmn` or `LegacyProcess` type.
    async fn find_processes_created_by(
        &self,
        user: &str,
        filter: Option<&FilterText>,
        sort: Sort,
    ) -> Result<Vec<Model>, RepositoryError>;

    /// Models of exactly `model_type` created by `user` that are not linked
    /// to a reference.
    async fn find_models_created_by(
        &self,
        user: &str,
        model_type: ModelType,
        filter: Option<&FilterText>,
        sort: Sort,
    ) -> Result<Vec<Model>, RepositoryError>;

    /// All models linked to `reference_id`, of any type.
    async fn find_models_by_reference_id(
        &self,
        reference_id: i64,
    ) -> Result<Vec<Model>, RepositoryError>;

    /// Models of exactly `model_type` linked to `reference_id`.
    async fn find_models_by_model_type_and_reference_id(
        &self,
        model_type: ModelType,
        filter: Option<&FilterText>,
        reference_id: i64,
    ) -> Result<Vec<Model>, RepositoryError>;

    /// Models of exactly `model_type` linked to `reference_id` or to nothing.
    async fn find_models_by_model_type_and_reference_id_or_null_reference_id(
        &self,
        model_type: ModelType,
        reference_id: i64,
    ) -> Result<Vec<Model>, RepositoryError>;

    /// Number of models of `model_type` created by `user`, linked or not.
    async fn count_by_model_type_and_user(
        &self,
        model_type: ModelType,
        user: &str,
    ) -> Result<u64, RepositoryError>;

    /// Child models of `parent_model_id`.
    async fn find_models_by_parent_model_id(
        &self,
        parent_model_id: i64,
    ) -> Result<Vec<Model>, RepositoryError>;

    /// Child models of `parent_model_id` with exactly `model_type`.
    async fn find_models_by_parent_model_id_and_type(
        &self,
        parent_model_id: i64,
        model_type: ModelType,
    ) -> Result<Vec<Model>, RepositoryError>;

    /// Parents of `model_id`, as id/name/type projections.
    async fn find_models_by_child_model_id(
        &self,
        model_id: i64,
    ) -> Result<Vec<ModelSummary>, RepositoryError>;

    /// Get a model by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the model doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Model, RepositoryError>;

    /// Insert a new model and return it with its assigned ID.
    async fn insert(&self, model: &NewModel) -> Result<Model, RepositoryError>;

    /// Link a child model to a parent.
    ///
    /// Returns `Err(RepositoryError::Constraint)` if either model is missing.
    async fn insert_relation(
        &self,
        relation: &NewModelRelation,
    ) -> Result<ModelRelation, RepositoryError>;

    /// Delete a model and every relation it takes part in.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the model doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
