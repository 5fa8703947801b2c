//! Path utilities for modeler data directories.
//!
//! This module provides the canonical path resolution for all modeler components:
//! - Application data root
//! - Database location
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - OS-specific lookup is kept private in `platform`

mod database;
mod error;
mod platform;

pub use database::{DATABASE_FILE_NAME, database_path};
pub use error::PathError;
pub use platform::data_root;
