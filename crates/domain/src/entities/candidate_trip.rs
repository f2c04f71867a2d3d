//! Candidate trips derived from schedule tables

use serde::{Deserialize, Serialize};

use super::schedule::StopTime;
use crate::value_objects::GeoLocation;

/// One possible (origin, destination) pair taken from a single trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateTrip {
    /// Station text the user searched for
    pub origin_name: String,
    pub destination_stop_id: String,
    pub destination_name: String,
    pub destination: GeoLocation,
    /// Route short name (empty when the route is unknown)
    pub line: String,
    /// Stop-time row at the origin that produced this candidate
    pub departure: StopTime,
}

impl CandidateTrip {
    /// Heading shown above the maps
    #[must_use]
    pub fn headline(&self) -> String {
        format!("{} → {}", self.origin_name, self.destination_name)
    }
}

/// Result of searching the schedule tables for one station and mode
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripSearch {
    pub candidates: Vec<CandidateTrip>,
    /// True when any searched feed had a stop matching the station text
    pub station_found: bool,
    /// Position of the first matching stop of the first matching feed
    pub origin: Option<GeoLocation>,
}

impl TripSearch {
    /// A search that matched no stop at all
    #[must_use]
    pub fn not_found() -> Self {
        Self::default()
    }
}
