//! Application layer - Use cases and orchestration
//!
//! Draws random trips from the loaded schedules, keeps per-session state and
//! gathers the cultural places shown around a destination. External lookups
//! go through ports implemented in the infrastructure layer.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
