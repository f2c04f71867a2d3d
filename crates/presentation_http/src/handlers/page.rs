//! Trip page and its form actions
//!
//! `GET /` renders the session: the generator form, and in trip-shown state the
//! two maps, the place list and the booking links. `POST /trip` and
//! `POST /reset` change the session and redirect back to the page.

use axum::{
    Form,
    extract::State,
    response::{Html, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use domain::{CandidateTrip, GeoLocation, SessionId, TransportMode, TripOutcome, TripSession};
use infrastructure::templates::{
    BookingLinks, ModeOption, PageData, PlaceItem, TripView, escape_text,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::session;
use crate::{error::ApiError, state::AppState};

/// Generator form fields
#[derive(Debug, Deserialize)]
pub struct TripForm {
    pub station: String,
    pub mode: String,
}

/// A point on the maps
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub lat: f64,
    pub lon: f64,
}

impl From<GeoLocation> for MapPoint {
    fn from(location: GeoLocation) -> Self {
        Self {
            lat: location.latitude(),
            lon: location.longitude(),
        }
    }
}

/// A marker with its hover text
///
/// Leaflet renders tooltip strings as HTML, so the text is stored escaped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lon: f64,
    pub tooltip: String,
}

impl MapMarker {
    fn new(location: GeoLocation, tooltip: &str) -> Self {
        Self {
            lat: location.latitude(),
            lon: location.longitude(),
            tooltip: escape_text(tooltip),
        }
    }
}

/// Data read by the map script
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapData {
    /// Overview map center
    pub center: MapPoint,
    pub destination: MapMarker,
    pub origin: Option<MapMarker>,
    pub places: Vec<MapMarker>,
}

impl MapData {
    /// Serialize for embedding in a `<script>` element
    fn to_script_json(&self) -> Result<String, ApiError> {
        serde_json::to_string(self).map_err(|e| ApiError::Internal(format!("Map data serialization failed: {e}")))
    }
}

/// Text shown for a generation that did not select a trip
pub fn notice_text(outcome: &TripOutcome) -> Option<String> {
    match outcome {
        TripOutcome::StationNotFound { station } => Some(format!(
            "La gare '{station}' n'existe pas dans les données."
        )),
        TripOutcome::NoTrips { .. } => Some("Aucun trajet trouvé pour cette gare.".to_string()),
        TripOutcome::Selected { .. } => None,
    }
}

/// Render the trip page for the caller's session
///
/// Requests without a live session render the idle generator; nothing is
/// stored until a trip is generated.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Html<String>, ApiError> {
    let snapshot = session::requested(&jar).map_or_else(
        || TripSession::new(SessionId::new()),
        |id| state.sessions.render_snapshot(id),
    );

    let trip = match snapshot.active_trip() {
        Some((trip, origin)) => Some(trip_view(&state, trip, origin).await?),
        None => None,
    };

    let page = page_data(&state, &snapshot, trip);
    let html = state.templates.render_page(&page)?;
    Ok(Html(html))
}

/// Draw a trip for the submitted station and mode
#[instrument(skip_all)]
pub async fn generate_trip(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<TripForm>,
) -> Result<(CookieJar, Redirect), ApiError> {
    let mode: TransportMode = form
        .mode
        .parse()
        .map_err(|e: domain::DomainError| ApiError::BadRequest(e.to_string()))?;
    let (id, jar) = session::resolve(&state, jar);
    info!(station = %form.station, %mode, "Generating trip");

    let outcome = state.sessions.generate(id, &form.station, mode);
    match &outcome {
        TripOutcome::Selected { trip, .. } => {
            info!(destination = %trip.destination_name, line = %trip.line, "Trip selected");
        },
        other => info!(outcome = ?other, "No trip selected"),
    }

    Ok((jar, Redirect::to("/")))
}

/// Return the session to the generator
pub async fn reset(State(state): State<AppState>, jar: CookieJar) -> Redirect {
    if let Some(id) = session::requested(&jar) {
        state.sessions.reset(id);
    }
    Redirect::to("/")
}

fn page_data(state: &AppState, session: &TripSession, trip: Option<TripView>) -> PageData {
    let modes = TransportMode::ALL
        .into_iter()
        .map(|mode| ModeOption {
            value: mode.label().to_string(),
            label: mode.label().to_string(),
            selected: session.last_mode() == Some(mode),
        })
        .collect();

    PageData {
        stations: state.sessions.trips().station_names(),
        selected_station: session.last_station().unwrap_or_default().to_string(),
        modes,
        load_failures: state.load_failures.as_ref().clone(),
        notice: session.notice().and_then(notice_text),
        trip,
        booking: BookingLinks {
            sncf_connect_url: state.config.booking.sncf_connect_url.clone(),
            trainline_url: state.config.booking.trainline_url.clone(),
        },
    }
}

async fn trip_view(
    state: &AppState,
    trip: &CandidateTrip,
    origin: Option<GeoLocation>,
) -> Result<TripView, ApiError> {
    let places = state.destinations.places_around(trip.destination).await;

    let map = MapData {
        center: origin
            .map_or(trip.destination, |origin| origin.midpoint(&trip.destination))
            .into(),
        destination: MapMarker::new(trip.destination, trip.destination_name.as_str()),
        origin: origin.map(|origin| MapMarker::new(origin, trip.origin_name.as_str())),
        places: places
            .mapped()
            .map(|(place, location)| MapMarker::new(location, place.tooltip()))
            .collect(),
    };

    let items = places
        .named()
        .map(|(place, name)| {
            let category = place.category();
            PlaceItem {
                emoji: category.emoji().to_string(),
                name: name.to_string(),
                label: category.label().to_string(),
            }
        })
        .collect();

    Ok(TripView {
        headline: trip.headline(),
        line: trip.line.clone(),
        places: items,
        places_error: places.error.clone(),
        map_json: map.to_script_json()?,
    })
}
