//! Application services - Use case implementations

mod destination_service;
mod session_service;
mod trip_service;

pub use destination_service::{DestinationPlaces, DestinationService, PLACES_UNAVAILABLE};
pub use session_service::{SessionLimits, SessionService};
pub use trip_service::{TripService, select_trip};
