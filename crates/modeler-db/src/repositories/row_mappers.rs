//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, Utc};
use modeler_core::{Model, ModelRelation, ModelSummary, ModelType, RepositoryError};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for model queries.
pub const MODEL_SELECT_COLUMNS: &str = "id, name, model_key, description, model_comment, created, created_by, last_updated, last_updated_by, version, model_type, reference_id";

/// Same columns qualified with the `m` alias, for relation joins.
pub const MODEL_SELECT_COLUMNS_M: &str = "m.id AS id, m.name AS name, m.model_key AS model_key, m.description AS description, m.model_comment AS model_comment, m.created AS created, m.created_by AS created_by, m.last_updated AS last_updated, m.last_updated_by AS last_updated_by, m.version AS version, m.model_type AS model_type, m.reference_id AS reference_id";

fn storage(e: &sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

/// Decode a nullable `model_type` column.
pub fn model_type_from_column(code: Option<i64>) -> Result<Option<ModelType>, RepositoryError> {
    code.map(ModelType::try_from)
        .transpose()
        .map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Parse a database row into a Model.
pub fn row_to_model(row: &SqliteRow) -> Result<Model, RepositoryError> {
    let model_type: Option<i64> = row.try_get("model_type").map_err(|e| storage(&e))?;
    let created: DateTime<Utc> = row.try_get("created").map_err(|e| storage(&e))?;
    let last_updated: DateTime<Utc> = row.try_get("last_updated").map_err(|e| storage(&e))?;

    Ok(Model {
        id: row.try_get("id").map_err(|e| storage(&e))?,
        name: row.try_get("name").map_err(|e| storage(&e))?,
        model_key: row.try_get("model_key").map_err(|e| storage(&e))?,
        description: row.try_get("description").map_err(|e| storage(&e))?,
        created_by: row.try_get("created_by").map_err(|e| storage(&e))?,
        created,
        last_updated_by: row.try_get("last_updated_by").map_err(|e| storage(&e))?,
        last_updated,
        version: row.try_get("version").map_err(|e| storage(&e))?,
        model_type: model_type_from_column(model_type)?,
        reference_id: row.try_get("reference_id").map_err(|e| storage(&e))?,
        comment: row.try_get("model_comment").map_err(|e| storage(&e))?,
    })
}

/// Parse an `id, name, model_type` projection row.
pub fn row_to_summary(row: &SqliteRow) -> Result<ModelSummary, RepositoryError> {
    let model_type: Option<i64> = row.try_get("model_type").map_err(|e| storage(&e))?;
    Ok(ModelSummary {
        id: row.try_get("id").map_err(|e| storage(&e))?,
        name: row.try_get("name").map_err(|e| storage(&e))?,
        model_type: model_type_from_column(model_type)?,
    })
}

pub fn row_to_relation(row: &SqliteRow) -> Result<ModelRelation, RepositoryError> {
    Ok(ModelRelation {
        id: row.try_get("id").map_err(|e| storage(&e))?,
        parent_model_id: row.try_get("parent_model_id").map_err(|e| storage(&e))?,
        model_id: row.try_get("model_id").map_err(|e| storage(&e))?,
        relation_type: row.try_get("relation_type").map_err(|e| storage(&e))?,
    })
}
