//! Model domain types.
//!
//! These types represent models in the system, independent of any
//! infrastructure concerns (database, HTTP, etc.).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model_type::ModelType;

// ─────────────────────────────────────────────────────────────────────────────
// Model Types
// ─────────────────────────────────────────────────────────────────────────────

/// A model that exists in the system with a database ID.
///
/// Use `NewModel` for models that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Database ID of the model.
    pub id: i64,
    /// Human-readable name.
    pub name: String,
    /// Stable key used by exports and deployments.
    pub model_key: String,
    /// Free-text description.
    pub description: Option<String>,
    /// User id of the creator.
    pub created_by: String,
    pub created: DateTime<Utc>,
    /// User id of the last editor.
    pub last_updated_by: String,
    pub last_updated: DateTime<Utc>,
    /// Editor revision counter, starts at 1.
    pub version: i32,
    /// `None` when the stored column is NULL.
    pub model_type: Option<ModelType>,
    /// Governing artifact this model is linked to (e.g. an app definition).
    pub reference_id: Option<i64>,
    pub comment: Option<String>,
}

impl Model {
    /// Whether the model is linked to a governing artifact.
    ///
    /// Models without a reference are standalone and owned by their creator.
    pub const fn is_linked(&self) -> bool {
        self.reference_id.is_some()
    }

    /// Whether the process queries consider this model a process.
    pub fn is_process(&self) -> bool {
        self.model_type.is_none_or(ModelType::is_process)
    }
}

/// A model to be inserted into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewModel {
    pub name: String,
    pub model_key: String,
    pub description: Option<String>,
    pub created_by: String,
    pub created: DateTime<Utc>,
    pub model_type: Option<ModelType>,
    pub reference_id: Option<i64>,
    pub comment: Option<String>,
}

impl NewModel {
    /// Create a new unlinked model owned by `created_by`.
    ///
    /// The key defaults to a slug of the name.
    pub fn new(
        name: impl Into<String>,
        created_by: impl Into<String>,
        model_type: Option<ModelType>,
    ) -> Self {
        let name = name.into();
        Self {
            model_key: slugify(&name),
            name,
            description: None,
            created_by: created_by.into(),
            created: Utc::now(),
            model_type,
            reference_id: None,
            comment: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn with_reference_id(mut self, reference_id: i64) -> Self {
        self.reference_id = Some(reference_id);
        self
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.model_key = key.into();
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Partial row returned by the parent-side relation query.
///
/// Only `id`, `name` and `model_type` are selected, so this is kept
/// apart from [`Model`] rather than filling the other fields with defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub id: i64,
    pub name: String,
    pub model_type: Option<ModelType>,
}

impl From<&Model> for ModelSummary {
    fn from(model: &Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            model_type: model.model_type,
        }
    }
}

fn slugify(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            key.extend(c.to_lowercase());
        } else if !key.ends_with('-') && !key.is_empty() {
            key.push('-');
        }
    }
    while key.ends_with('-') {
        key.pop();
    }
    key
}
