//! Domain entities - Objects with identity and lifecycle

mod candidate_trip;
mod cultural_place;
mod schedule;
mod trip_session;

pub use candidate_trip::{CandidateTrip, TripSearch};
pub use cultural_place::{CulturalPlace, ElementKind};
pub use schedule::{Feed, FeedSet, FeedTables, Route, ScheduleTables, Stop, StopTime, Trip};
pub use trip_session::{SessionState, TripOutcome, TripSession};
