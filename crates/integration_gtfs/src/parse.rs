//! Station list and GTFS table parsing

use std::collections::HashSet;
use std::io::{Cursor, Read, Seek};

use domain::{GeoLocation, Route, ScheduleTables, Stop, StopTime, Trip};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use zip::ZipArchive;

use crate::error::ScheduleError;

const STATION_LIST_TABLE: &str = "liste des gares";

/// Parse a `;`-delimited station list and return the unique names of `column`
///
/// Names keep their first-occurrence order; blank names are dropped.
pub fn parse_station_list(
    title: &str,
    payload: &[u8],
    column: &str,
) -> Result<Vec<String>, ScheduleError> {
    let parse_error = |reason: String| ScheduleError::Parse {
        title: title.to_string(),
        table: STATION_LIST_TABLE.to_string(),
        reason,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .from_reader(payload);

    let headers = reader.headers().map_err(|e| parse_error(e.to_string()))?;
    let position = headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| parse_error(format!("colonne '{column}' introuvable")))?;

    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| parse_error(e.to_string()))?;
        let Some(name) = record.get(position).filter(|name| !name.is_empty()) else {
            continue;
        };
        if seen.insert(name.to_string()) {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

/// Parse a zipped GTFS bundle into schedule tables
///
/// Tables are looked up at the archive root or one directory down.
pub fn parse_schedule_archive(title: &str, payload: &[u8]) -> Result<ScheduleTables, ScheduleError> {
    let mut archive =
        ZipArchive::new(Cursor::new(payload)).map_err(|e| ScheduleError::InvalidArchive {
            title: title.to_string(),
            reason: e.to_string(),
        })?;

    let trips: Vec<TripRecord> = read_table(&mut archive, title, "trips.txt")?;
    let stop_times: Vec<StopTimeRecord> = read_table(&mut archive, title, "stop_times.txt")?;
    let stops: Vec<StopRecord> = read_table(&mut archive, title, "stops.txt")?;
    let routes: Vec<RouteRecord> = read_table(&mut archive, title, "routes.txt")?;

    Ok(ScheduleTables::new(
        trips.into_iter().map(Trip::from).collect(),
        stop_times.into_iter().map(StopTime::from).collect(),
        stops.into_iter().map(Stop::from).collect(),
        routes.into_iter().map(Route::from).collect(),
    ))
}

/// Locate `table` in the archive and deserialize every row
fn read_table<T, R>(
    archive: &mut ZipArchive<R>,
    title: &str,
    table: &str,
) -> Result<Vec<T>, ScheduleError>
where
    T: DeserializeOwned,
    R: Read + Seek,
{
    let entry = find_entry(archive, table).ok_or_else(|| ScheduleError::MissingTable {
        title: title.to_string(),
        table: table.to_string(),
    })?;

    let parse_error = |reason: String| ScheduleError::Parse {
        title: title.to_string(),
        table: table.to_string(),
        reason,
    };

    let file = archive
        .by_name(&entry)
        .map_err(|e| parse_error(e.to_string()))?;

    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file)
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|e| parse_error(e.to_string()))
}

fn find_entry<R: Read + Seek>(archive: &ZipArchive<R>, table: &str) -> Option<String> {
    let nested = format!("/{table}");
    archive
        .file_names()
        .filter(|name| *name == table || (name.ends_with(&nested) && name.matches('/').count() == 1))
        .min_by_key(|name| name.len())
        .map(str::to_string)
}

// --- Raw GTFS rows ---

#[derive(Debug, Deserialize)]
struct TripRecord {
    trip_id: String,
    route_id: String,
}

impl From<TripRecord> for Trip {
    fn from(rec: TripRecord) -> Self {
        Self {
            trip_id: rec.trip_id,
            route_id: rec.route_id,
        }
    }
}

#[derive(Debug, Deserialize)]
struct StopTimeRecord {
    trip_id: String,
    stop_id: String,
    stop_sequence: u32,
}

impl From<StopTimeRecord> for StopTime {
    fn from(rec: StopTimeRecord) -> Self {
        Self {
            trip_id: rec.trip_id,
            stop_id: rec.stop_id,
            stop_sequence: rec.stop_sequence,
        }
    }
}

#[derive(Debug, Deserialize)]
struct StopRecord {
    stop_id: String,
    #[serde(default)]
    stop_name: String,
    stop_lat: Option<f64>,
    stop_lon: Option<f64>,
}

impl From<StopRecord> for Stop {
    fn from(rec: StopRecord) -> Self {
        let location = match (rec.stop_lat, rec.stop_lon) {
            (Some(lat), Some(lon)) => GeoLocation::new(lat, lon).ok(),
            _ => None,
        };
        Self {
            stop_id: rec.stop_id,
            name: rec.stop_name,
            location,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RouteRecord {
    route_id: String,
    #[serde(default)]
    route_short_name: String,
    #[serde(default)]
    route_long_name: String,
}

impl From<RouteRecord> for Route {
    fn from(rec: RouteRecord) -> Self {
        // Some operators leave the short name empty and only fill the long one
        let short_name = if rec.route_short_name.is_empty() {
            rec.route_long_name
        } else {
            rec.route_short_name
        };
        Self {
            route_id: rec.route_id,
            short_name,
        }
    }
}
