//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod places_port;

pub use places_port::CulturalPlacesPort;
#[cfg(test)]
pub use places_port::MockCulturalPlacesPort;
