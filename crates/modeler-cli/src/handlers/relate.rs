//! Relate command handler.

use anyhow::Result;
use modeler_core::{ModelRelation, NewModelRelation};

use crate::bootstrap::CliContext;
use crate::error::CliError;

pub async fn relate(
    ctx: &CliContext,
    parent: i64,
    child: i64,
    relation_type: Option<String>,
) -> Result<ModelRelation, CliError> {
    let mut relation = NewModelRelation::new(parent, child);
    if let Some(kind) = relation_type {
        relation = relation.with_relation_type(kind);
    }
    Ok(ctx.app().models().relate(relation).await?)
}

/// Execute the relate command.
pub async fn execute(
    ctx: &CliContext,
    parent: i64,
    child: i64,
    relation_type: Option<String>,
) -> Result<()> {
    let relation = relate(ctx, parent, child, relation_type).await?;
    println!(
        "Linked model {} under {} (relation {})",
        relation.model_id, relation.parent_model_id, relation.id
    );
    Ok(())
}
