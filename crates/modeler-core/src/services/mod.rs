//! Core services - the application's business logic layer.
//!
//! Services here are pure orchestrators over the ports; they don't
//! know about concrete implementations.

mod app_core;
mod form_service;
mod model_service;

pub use app_core::AppCore;
pub use form_service::FormService;
pub use model_service::ModelService;
