//! Per-browser session state
//!
//! A session is either idle or showing a trip. It moves to trip-shown only
//! through a successful trip generation and back to idle only through an
//! explicit reset.

use serde::{Deserialize, Serialize};

use super::candidate_trip::CandidateTrip;
use crate::value_objects::{GeoLocation, SessionId, TransportMode};

/// Current state of a session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// No active trip
    #[default]
    Idle,
    /// A trip has been drawn and is being displayed
    TripShown {
        trip: CandidateTrip,
        /// Origin position, absent when the matched stop had no coordinates
        origin: Option<GeoLocation>,
    },
}

/// Outcome of one trip-generation action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TripOutcome {
    /// No stop of any feed for the mode matched the station text
    StationNotFound { station: String },
    /// The station exists but has no outbound service for the mode
    NoTrips { station: String, mode: TransportMode },
    /// A trip was drawn
    Selected {
        trip: CandidateTrip,
        origin: Option<GeoLocation>,
    },
}

impl TripOutcome {
    /// Whether the outcome moves the session to trip-shown
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        matches!(self, Self::Selected { .. })
    }
}

/// State of one browser session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSession {
    pub id: SessionId,
    state: SessionState,
    /// Informational outcome to show once on the next render
    notice: Option<TripOutcome>,
    /// Last station searched, used to preselect the form
    last_station: Option<String>,
    /// Last mode searched, used to preselect the form
    last_mode: Option<TransportMode>,
}

impl TripSession {
    /// Create an idle session
    #[must_use]
    pub const fn new(id: SessionId) -> Self {
        Self {
            id,
            state: SessionState::Idle,
            notice: None,
            last_station: None,
            last_mode: None,
        }
    }

    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// The displayed trip and origin, if any
    pub fn active_trip(&self) -> Option<(&CandidateTrip, Option<GeoLocation>)> {
        match &self.state {
            SessionState::TripShown { trip, origin } => Some((trip, *origin)),
            SessionState::Idle => None,
        }
    }

    pub const fn is_trip_shown(&self) -> bool {
        matches!(self.state, SessionState::TripShown { .. })
    }

    pub fn last_station(&self) -> Option<&str> {
        self.last_station.as_deref()
    }

    pub const fn last_mode(&self) -> Option<TransportMode> {
        self.last_mode
    }

    /// Apply the outcome of a trip-generation action
    ///
    /// A selected trip replaces whatever is displayed. Any other outcome only
    /// leaves a notice and keeps the current state, including a trip that is
    /// already shown.
    pub fn record_generation(&mut self, station: &str, mode: TransportMode, outcome: TripOutcome) {
        self.last_station = Some(station.to_string());
        self.last_mode = Some(mode);

        match outcome {
            TripOutcome::Selected { trip, origin } => {
                self.state = SessionState::TripShown { trip, origin };
                self.notice = None;
            },
            other => self.notice = Some(other),
        }
    }

    /// Return to idle ("back to the generator")
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.notice = None;
    }

    /// Take the pending notice so it is shown only once
    pub fn take_notice(&mut self) -> Option<TripOutcome> {
        self.notice.take()
    }

    pub const fn notice(&self) -> Option<&TripOutcome> {
        self.notice.as_ref()
    }
}
