//! Domain layer for Onvaou
//!
//! Contains the schedule tables, trip candidates, cultural places and the
//! per-session state machine. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
