//! Parent/child association between models.

use serde::{Deserialize, Serialize};

/// Persisted link from a parent model to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRelation {
    pub id: i64,
    pub parent_model_id: i64,
    pub model_id: i64,
    /// Free-form relation kind, e.g. `form-model` or `decision-table`.
    pub relation_type: Option<String>,
}

/// A relation to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewModelRelation {
    pub parent_model_id: i64,
    pub model_id: i64,
    pub relation_type: Option<String>,
}

impl NewModelRelation {
    pub const fn new(parent_model_id: i64, model_id: i64) -> Self {
        Self {
            parent_model_id,
            model_id,
            relation_type: None,
        }
    }

    #[must_use]
    pub fn with_relation_type(mut self, relation_type: impl Into<String>) -> Self {
        self.relation_type = Some(relation_type.into());
        self
    }
}
