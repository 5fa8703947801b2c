#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

//! Command-line adapter for the modeler store.

// Used by main.rs binary
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap, bootstrap_with};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
