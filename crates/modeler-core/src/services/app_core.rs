//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (CLI, Web)
//! receive an `AppCore` instance and use it to access all functionality.

use crate::ports::Repos;

use super::{FormService, ModelService};

/// The core application facade.
///
/// Constructed at the adapter's composition root (main.rs or bootstrap.rs)
/// with concrete repository implementations.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos);
///
/// let forms = core.forms().list_forms(42, None, "kermit").await?;
/// ```
pub struct AppCore {
    models: ModelService,
    forms: FormService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            models: ModelService::new(repos.models.clone()),
            forms: FormService::new(repos.models),
        }
    }

    /// Access the model service.
    pub const fn models(&self) -> &ModelService {
        &self.models
    }

    /// Access the form listing service.
    pub const fn forms(&self) -> &FormService {
        &self.forms
    }
}
