//! Database path resolution.
//!
//! Provides the canonical path to the modeler `SQLite` database file.

use std::env;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::{data_root, ensure_dir};

/// Environment variable pointing at an explicit database file.
const DATABASE_PATH_ENV: &str = "MODELER_DATABASE_PATH";

pub const DATABASE_FILE_NAME: &str = "modeler.db";

/// Get the path to the modeler database file.
///
/// `MODELER_DATABASE_PATH` wins when set. Otherwise returns
/// `<data_root>/data/modeler.db`, creating the `data/` subdirectory if needed.
pub fn database_path() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATABASE_PATH_ENV) {
        if path.trim().is_empty() {
            return Err(PathError::EmptyPath);
        }
        return Ok(PathBuf::from(path));
    }

    let data_dir = ensure_dir(data_root()?.join("data"))?;
    Ok(data_dir.join(DATABASE_FILE_NAME))
}
