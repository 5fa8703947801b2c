//! Add command handler.
//!
//! Creates a model in the store.

use anyhow::Result;
use modeler_core::{Model, ModelType, NewModel};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_model_summary;

/// Options collected from `modeler add`.
#[derive(Debug, Clone)]
pub struct AddArgs {
    pub name: String,
    pub user: String,
    pub model_type: ModelType,
    pub reference_id: Option<i64>,
    pub description: Option<String>,
    pub comment: Option<String>,
}

impl AddArgs {
    fn into_new_model(self) -> NewModel {
        let mut model = NewModel::new(self.name, self.user, Some(self.model_type));
        if let Some(reference_id) = self.reference_id {
            model = model.with_reference_id(reference_id);
        }
        if let Some(description) = self.description {
            model = model.with_description(description);
        }
        if let Some(comment) = self.comment {
            model = model.with_comment(comment);
        }
        model
    }
}

/// Insert the model and return the stored row.
pub async fn add(ctx: &CliContext, args: AddArgs) -> Result<Model, CliError> {
    Ok(ctx.app().models().add(args.into_new_model()).await?)
}

/// Execute the add command.
pub async fn execute(ctx: &CliContext, args: AddArgs) -> Result<()> {
    let model = add(ctx, args).await?;
    tracing::info!(id = model.id, name = %model.name, "Model added");
    display_model_summary(&model, Some("Model created:"));
    Ok(())
}
