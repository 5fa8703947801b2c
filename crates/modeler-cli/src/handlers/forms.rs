//! Forms command handler.
//!
//! Shows the same list the form picker endpoint returns.

use anyhow::Result;
use modeler_axum::dto::{FormRepresentation, ResultListDataRepresentation};
use modeler_core::{FilterText, Model};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_model_table;

/// Forms linked to `reference_id` plus `user`'s standalone forms.
pub async fn list(
    ctx: &CliContext,
    reference_id: i64,
    user: &str,
    filter: Option<&str>,
) -> Result<Vec<Model>, CliError> {
    let filter = FilterText::from_optional(filter);
    Ok(ctx
        .app()
        .forms()
        .list_forms(reference_id, filter.as_ref(), user)
        .await?)
}

/// Execute the forms command.
pub async fn execute(
    ctx: &CliContext,
    reference_id: i64,
    user: &str,
    filter: Option<&str>,
    json: bool,
) -> Result<()> {
    let forms = list(ctx, reference_id, user, filter).await?;

    if json {
        let envelope: ResultListDataRepresentation<FormRepresentation> =
            forms.into_iter().map(FormRepresentation::from).collect();
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    if forms.is_empty() {
        println!("No forms found for reference {reference_id}.");
        return Ok(());
    }

    println!("Found {} form(s):\n", forms.len());
    print_model_table(&forms);
    Ok(())
}
