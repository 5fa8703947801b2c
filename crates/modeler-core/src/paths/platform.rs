//! Platform-specific path resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
const DATA_DIR_ENV: &str = "MODELER_DATA_DIR";

/// Get the root directory for application data (database, config).
///
/// Resolution order:
/// 1. `MODELER_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/modeler`)
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        if path.trim().is_empty() {
            return Err(PathError::EmptyPath);
        }
        return ensure_dir(PathBuf::from(path));
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    ensure_dir(data_dir.join("modeler"))
}

pub(super) fn ensure_dir(dir: PathBuf) -> Result<PathBuf, PathError> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(PathError::NotADirectory(dir));
        }
        return Ok(dir);
    }

    fs::create_dir_all(&dir).map_err(|e| PathError::CreateFailed {
        path: dir.clone(),
        reason: e.to_string(),
    })?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_creates_missing_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        let created = ensure_dir(nested.clone()).unwrap();
        assert_eq!(created, nested);
        assert!(nested.is_dir());
    }

    #[test]
    fn ensure_dir_rejects_files() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("not-a-dir");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(
            ensure_dir(file),
            Err(PathError::NotADirectory(_))
        ));
    }
}
