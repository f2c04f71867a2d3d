//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod place_category;
mod session_id;
mod transport_mode;

pub use geo_location::GeoLocation;
pub use place_category::PlaceCategory;
pub use session_id::SessionId;
pub use transport_mode::TransportMode;
