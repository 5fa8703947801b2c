//! Model-facing response shapes.

use chrono::{DateTime, Utc};
use modeler_core::{Model, ModelSummary, ModelType};
use serde::Serialize;

/// A form as shown in the form picker.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRepresentation {
    pub id: i64,
    pub name: String,
    pub key: String,
    pub description: Option<String>,
    pub version: i32,
    pub last_updated_by: String,
    pub last_updated: DateTime<Utc>,
}

impl From<Model> for FormRepresentation {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            key: model.model_key,
            description: model.description,
            version: model.version,
            last_updated_by: model.last_updated_by,
            last_updated: model.last_updated,
        }
    }
}

/// List envelope. The list is never paginated, so `size` and `total` are
/// both the number of items and `start` is always zero.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultListDataRepresentation<T> {
    pub size: usize,
    pub total: usize,
    pub start: usize,
    pub data: Vec<T>,
}

impl<T> ResultListDataRepresentation<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            size: data.len(),
            total: data.len(),
            start: 0,
            data,
        }
    }
}

impl<T> FromIterator<T> for ResultListDataRepresentation<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Full model view for the `/rest/models` endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRepresentation {
    pub id: i64,
    pub name: String,
    pub key: String,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub version: i32,
    pub model_type: Option<ModelType>,
    pub reference_id: Option<i64>,
    pub created_by: String,
    pub created: DateTime<Utc>,
    pub last_updated_by: String,
    pub last_updated: DateTime<Utc>,
}

impl From<Model> for ModelRepresentation {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            key: model.model_key,
            description: model.description,
            comment: model.comment,
            version: model.version,
            model_type: model.model_type,
            reference_id: model.reference_id,
            created_by: model.created_by,
            created: model.created,
            last_updated_by: model.last_updated_by,
            last_updated: model.last_updated,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummaryDto {
    pub id: i64,
    pub name: String,
    pub model_type: Option<ModelType>,
}

impl From<ModelSummary> for ModelSummaryDto {
    fn from(summary: ModelSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            model_type: summary.model_type,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CountDto {
    pub count: u64,
}
