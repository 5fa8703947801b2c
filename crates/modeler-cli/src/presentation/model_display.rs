//! Model display utilities for CLI output.

use modeler_core::Model;

use super::tables::{format_optional, print_separator, truncate_string};

const TABLE_WIDTH: usize = 96;

/// Print a model's details under an optional title.
pub fn display_model_summary(model: &Model, title: Option<&str>) {
    if let Some(title) = title {
        println!("{title}");
    }
    println!("  ID: {}", model.id);
    println!("  Name: {}", model.name);
    println!("  Key: {}", model.model_key);
    println!("  Type: {}", format_optional(model.model_type.as_ref(), "--"));
    println!(
        "  Reference: {}",
        format_optional(model.reference_id.as_ref(), "none")
    );
    if let Some(description) = &model.description {
        println!("  Description: {description}");
    }
    println!("  Created by: {}", model.created_by);
}

/// Print models as a table, one row per model.
pub fn print_model_table(models: &[Model]) {
    println!(
        "{:<6} {:<30} {:<20} {:<4} {:<14} Updated",
        "ID", "Name", "Key", "Ver", "Updated by"
    );
    print_separator(TABLE_WIDTH);
    for model in models {
        println!("{}", format_model_row(model));
    }
}

fn format_model_row(model: &Model) -> String {
    format!(
        "{:<6} {:<30} {:<20} {:<4} {:<14} {}",
        model.id,
        truncate_string(&model.name, 29),
        truncate_string(&model.model_key, 19),
        model.version,
        truncate_string(&model.last_updated_by, 13),
        model.last_updated.format("%Y-%m-%d %H:%M")
    )
}
