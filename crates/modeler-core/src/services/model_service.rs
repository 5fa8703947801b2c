//! Model service - read access to the model store plus the few writes
//! the CLI needs.

use crate::domain::{Model, ModelRelation, ModelSummary, ModelType, NewModel, NewModelRelation};
use crate::ports::{CoreError, ModelRepository, RepositoryError};
use crate::query::{FilterText, Sort};
use std::sync::Arc;

/// Service for model operations.
///
/// Delegates to the injected `ModelRepository`. It adds no business logic
/// beyond input checks - it's a thin facade.
pub struct ModelService {
    repo: Arc<dyn ModelRepository>,
}

impl ModelService {
    /// Create a new model service with the given repository.
    pub fn new(repo: Arc<dyn ModelRepository>) -> Self {
        Self { repo }
    }

    /// Get a model by its database ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Model>, CoreError> {
        match self.repo.get_by_id(id).await {
            Ok(model) => Ok(Some(model)),
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(CoreError::from(e)),
        }
    }

    /// Get a model by ID. Returns error if not found.
    pub async fn find_by_id(&self, id: i64) -> Result<Model, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Standalone processes owned by `user`.
    pub async fn processes_of(
        &self,
        user: &str,
        filter: Option<&FilterText>,
        sort: Sort,
    ) -> Result<Vec<Model>, CoreError> {
        self.repo
            .find_processes_created_by(user, filter, sort)
            .await
            .map_err(CoreError::from)
    }

    /// Every model linked to `reference_id`.
    pub async fn linked_to(&self, reference_id: i64) -> Result<Vec<Model>, CoreError> {
        self.repo
            .find_models_by_reference_id(reference_id)
            .await
            .map_err(CoreError::from)
    }

    /// Models of one type that are either linked to `reference_id` or unlinked.
    pub async fn available_for(
        &self,
        model_type: ModelType,
        reference_id: i64,
    ) -> Result<Vec<Model>, CoreError> {
        self.repo
            .find_models_by_model_type_and_reference_id_or_null_reference_id(
                model_type,
                reference_id,
            )
            .await
            .map_err(CoreError::from)
    }

    pub async fn count(&self, model_type: ModelType, user: &str) -> Result<u64, CoreError> {
        self.repo
            .count_by_model_type_and_user(model_type, user)
            .await
            .map_err(CoreError::from)
    }

    /// Children of a model, optionally narrowed to one type.
    pub async fn children(
        &self,
        parent_model_id: i64,
        model_type: Option<ModelType>,
    ) -> Result<Vec<Model>, CoreError> {
        let result = match model_type {
            Some(ty) => {
                self.repo
                    .find_models_by_parent_model_id_and_type(parent_model_id, ty)
                    .await
            }
            None => self.repo.find_models_by_parent_model_id(parent_model_id).await,
        };
        result.map_err(CoreError::from)
    }

    /// Parents of a model.
    pub async fn parents(&self, model_id: i64) -> Result<Vec<ModelSummary>, CoreError> {
        self.repo
            .find_models_by_child_model_id(model_id)
            .await
            .map_err(CoreError::from)
    }

    /// Add a new model.
    pub async fn add(&self, model: NewModel) -> Result<Model, CoreError> {
        if model.name.trim().is_empty() {
            return Err(CoreError::Validation("Model name cannot be empty".into()));
        }
        if model.created_by.trim().is_empty() {
            return Err(CoreError::Validation("Model owner cannot be empty".into()));
        }
        self.repo.insert(&model).await.map_err(CoreError::from)
    }

    /// Link `child` under `parent`.
    pub async fn relate(&self, relation: NewModelRelation) -> Result<ModelRelation, CoreError> {
        if relation.parent_model_id == relation.model_id {
            return Err(CoreError::Validation(format!(
                "Model {} cannot be its own parent",
                relation.model_id
            )));
        }
        self.repo
            .insert_relation(&relation)
            .await
            .map_err(CoreError::from)
    }

    /// Delete a model by ID.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete(id).await.map_err(CoreError::from)
    }
}
