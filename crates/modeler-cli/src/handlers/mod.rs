//! Command handlers that delegate to `AppCore`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `AppCore` methods
//!   3. Format output for the terminal
//!
//! Handlers should NOT access repositories directly or hold business logic.

pub mod add;
pub mod forms;
pub mod paths;
pub mod relate;
pub mod serve;
