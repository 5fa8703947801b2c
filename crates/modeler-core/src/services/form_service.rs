//! Form listing - merges linked forms with the caller's own forms.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Model, ModelType};
use crate::ports::{CoreError, ModelRepository};
use crate::query::{FilterText, Sort, SortField};

/// Service behind the form picker of the app editor.
pub struct FormService {
    repo: Arc<dyn ModelRepository>,
}

impl FormService {
    pub fn new(repo: Arc<dyn ModelRepository>) -> Self {
        Self { repo }
    }

    /// Forms linked to `reference_id` followed by standalone forms created
    /// by `user`, sorted by name.
    ///
    /// The two store queries run independently and their results are
    /// concatenated without de-duplication. The in-memory sort here is the
    /// only ordering the caller can rely on; the name sort requested from
    /// the creator query is discarded once the lists are merged.
    pub async fn list_forms(
        &self,
        reference_id: i64,
        filter: Option<&FilterText>,
        user: &str,
    ) -> Result<Vec<Model>, CoreError> {
        let mut forms = self
            .repo
            .find_models_by_model_type_and_reference_id(ModelType::Form, filter, reference_id)
            .await?;
        let linked = forms.len();

        let created_by = self
            .repo
            .find_models_created_by(user, ModelType::Form, filter, Sort::asc(SortField::Name))
            .await?;
        let owned = created_by.len();
        forms.extend(created_by);

        sort_by_name(&mut forms);

        debug!(
            reference_id,
            user,
            filter = filter.map(FilterText::as_str),
            linked,
            owned,
            "Listed form models"
        );
        Ok(forms)
    }

    /// Number of forms `user` has created.
    pub async fn count_forms_created_by(&self, user: &str) -> Result<u64, CoreError> {
        self.repo
            .count_by_model_type_and_user(ModelType::Form, user)
            .await
            .map_err(CoreError::from)
    }
}

/// Stable, case-insensitive ascending sort by model name.
fn sort_by_name(models: &mut [Model]) {
    models.sort_by_cached_key(|m| m.name.to_lowercase());
}
