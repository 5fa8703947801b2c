//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. Command handlers receive the composed `AppCore`
//! and delegate work to it.

use anyhow::Result;
use modeler_core::{AppCore, Repos, database_path};
use modeler_db::{CoreFactory, setup_database};

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
}

impl CliContext {
    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }
}

/// Bootstrap the CLI application.
///
/// Opens the database at the resolved path (creating the schema when
/// needed) and assembles the `AppCore`.
pub async fn bootstrap() -> Result<CliContext> {
    let db_path = database_path()?;
    let pool = setup_database(&db_path).await?;
    let repos = CoreFactory::build_repos(pool);

    tracing::debug!(database_path = %db_path.display(), "CLI bootstrap complete");
    Ok(bootstrap_with(repos))
}

/// Bootstrap with custom repos (for testing).
pub fn bootstrap_with(repos: Repos) -> CliContext {
    CliContext {
        app: AppCore::new(repos),
    }
}
