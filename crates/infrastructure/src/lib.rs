//! Infrastructure layer - Adapters for external systems
//!
//! Loads the application configuration, sets up logging, renders the page
//! template and binds the integration crates to the application ports.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use config::{
    AppConfig, BookingConfig, LogFormat, ServerConfig, SessionsConfig, TripsConfig,
};
pub use telemetry::init_tracing;
pub use templates::{TemplateEngine, TemplateError};
