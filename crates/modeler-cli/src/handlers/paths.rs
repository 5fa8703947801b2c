//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics and debugging.

use anyhow::Result;

use modeler_core::{data_root, database_path};

/// Execute the paths command.
///
/// Prints the data root and database file in `key = value` format.
pub fn execute() -> Result<()> {
    let root = data_root()?;
    let database = database_path()?;
    println!("data_root = {}", root.display());
    println!("database = {}", database.display());
    Ok(())
}
