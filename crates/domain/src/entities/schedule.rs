//! Schedule tables loaded from transit feeds
//!
//! A feed is either a plain station list or a full schedule bundle with its
//! four tables. There is no representation for a bundle with some tables
//! missing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// A stop or station from `stops.txt`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub stop_id: String,
    pub name: String,
    /// Absent for generic nodes that carry no position
    pub location: Option<GeoLocation>,
}

impl Stop {
    /// Case-insensitive substring match on the stop name
    ///
    /// `needle_lower` must already be lowercased.
    #[must_use]
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

/// A trip from `trips.txt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub trip_id: String,
    pub route_id: String,
}

/// One scheduled visit of a trip to a stop, from `stop_times.txt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopTime {
    pub trip_id: String,
    pub stop_id: String,
    pub stop_sequence: u32,
}

/// A route from `routes.txt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub route_id: String,
    pub short_name: String,
}

/// The four tables of one schedule bundle, with lookup indexes
#[derive(Debug, Clone, Default)]
pub struct ScheduleTables {
    trips: HashMap<String, Trip>,
    stop_times: Vec<StopTime>,
    stops: Vec<Stop>,
    routes: HashMap<String, Route>,
    stop_positions: HashMap<String, usize>,
    stop_times_by_stop: HashMap<String, Vec<usize>>,
    final_stop_time_by_trip: HashMap<String, usize>,
}

impl ScheduleTables {
    /// Build the tables and their indexes
    ///
    /// Stops keep file order. The final stop-time of a trip is the row with the
    /// greatest `stop_sequence`; among equal sequences the later row wins.
    #[must_use]
    pub fn new(
        trips: Vec<Trip>,
        stop_times: Vec<StopTime>,
        stops: Vec<Stop>,
        routes: Vec<Route>,
    ) -> Self {
        let trips = trips
            .into_iter()
            .map(|trip| (trip.trip_id.clone(), trip))
            .collect();
        let routes = routes
            .into_iter()
            .map(|route| (route.route_id.clone(), route))
            .collect();

        let mut stop_positions = HashMap::with_capacity(stops.len());
        for (idx, stop) in stops.iter().enumerate() {
            stop_positions.entry(stop.stop_id.clone()).or_insert(idx);
        }

        let mut stop_times_by_stop: HashMap<String, Vec<usize>> = HashMap::new();
        let mut final_stop_time_by_trip: HashMap<String, usize> = HashMap::new();
        for (idx, stop_time) in stop_times.iter().enumerate() {
            stop_times_by_stop
                .entry(stop_time.stop_id.clone())
                .or_default()
                .push(idx);

            final_stop_time_by_trip
                .entry(stop_time.trip_id.clone())
                .and_modify(|current| {
                    if stop_time.stop_sequence >= stop_times[*current].stop_sequence {
                        *current = idx;
                    }
                })
                .or_insert(idx);
        }

        Self {
            trips,
            stop_times,
            stops,
            routes,
            stop_positions,
            stop_times_by_stop,
            final_stop_time_by_trip,
        }
    }

    /// All stops, in file order
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Look up a stop by id
    pub fn stop(&self, stop_id: &str) -> Option<&Stop> {
        self.stop_positions
            .get(stop_id)
            .map(|&idx| &self.stops[idx])
    }

    /// Look up a trip by id
    pub fn trip(&self, trip_id: &str) -> Option<&Trip> {
        self.trips.get(trip_id)
    }

    /// Look up a route by id
    pub fn route(&self, route_id: &str) -> Option<&Route> {
        self.routes.get(route_id)
    }

    /// Stop-time rows at a stop, in file order
    pub fn stop_times_at<'a>(
        &'a self,
        stop_id: &str,
    ) -> impl Iterator<Item = &'a StopTime> + use<'a> {
        self.stop_times_by_stop
            .get(stop_id)
            .into_iter()
            .flatten()
            .map(|&idx| &self.stop_times[idx])
    }

    /// Last stop-time row of a trip
    pub fn final_stop_time(&self, trip_id: &str) -> Option<&StopTime> {
        self.final_stop_time_by_trip
            .get(trip_id)
            .map(|&idx| &self.stop_times[idx])
    }

    /// Stops whose name contains `needle` (case-insensitive), in file order
    pub fn stops_matching(&self, needle: &str) -> Vec<&Stop> {
        let needle = needle.to_lowercase();
        self.stops
            .iter()
            .filter(|stop| stop.name_contains(&needle))
            .collect()
    }

    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }

    pub fn stop_time_count(&self) -> usize {
        self.stop_times.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

/// Parsed contents of one feed
#[derive(Debug, Clone)]
pub enum FeedTables {
    /// Plain delimited station list
    StationList(Vec<String>),
    /// Full schedule bundle
    Schedule(ScheduleTables),
}

impl FeedTables {
    /// Schedule tables, if this feed is a bundle
    pub const fn schedule(&self) -> Option<&ScheduleTables> {
        match self {
            Self::Schedule(tables) => Some(tables),
            Self::StationList(_) => None,
        }
    }

    /// Station names, if this feed is a station list
    pub fn station_names(&self) -> Option<&[String]> {
        match self {
            Self::StationList(names) => Some(names.as_slice()),
            Self::Schedule(_) => None,
        }
    }
}

/// One loaded feed
#[derive(Debug, Clone)]
pub struct Feed {
    pub title: String,
    pub tables: FeedTables,
}

/// All loaded feeds, in load order
#[derive(Debug, Clone, Default)]
pub struct FeedSet {
    feeds: Vec<Feed>,
}

impl FeedSet {
    /// Create an empty feed set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a feed; a feed with the same title is replaced in place
    pub fn insert(&mut self, title: impl Into<String>, tables: FeedTables) {
        let title = title.into();
        if let Some(existing) = self.feeds.iter_mut().find(|feed| feed.title == title) {
            existing.tables = tables;
        } else {
            self.feeds.push(Feed { title, tables });
        }
    }

    /// Look up a feed by title
    pub fn get(&self, title: &str) -> Option<&FeedTables> {
        self.feeds
            .iter()
            .find(|feed| feed.title == title)
            .map(|feed| &feed.tables)
    }

    /// Iterate over feeds in load order
    pub fn iter(&self) -> impl Iterator<Item = &Feed> {
        self.feeds.iter()
    }

    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }

    /// Number of feeds holding schedule tables
    pub fn schedule_count(&self) -> usize {
        self.feeds
            .iter()
            .filter(|feed| feed.tables.schedule().is_some())
            .count()
    }

    /// Unique station names across all station-list feeds, first occurrence first
    pub fn station_names(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.feeds
            .iter()
            .filter_map(|feed| feed.tables.station_names())
            .flatten()
            .filter(|name| seen.insert(name.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(id: &str, name: &str) -> Stop {
        Stop {
            stop_id: id.to_string(),
            name: name.to_string(),
            location: Some(GeoLocation::new_unchecked(45.0, 4.0)),
        }
    }

    fn stop_time(trip: &str, stop: &str, seq: u32) -> StopTime {
        StopTime {
            trip_id: trip.to_string(),
            stop_id: stop.to_string(),
            stop_sequence: seq,
        }
    }

    fn tables() -> ScheduleTables {
        ScheduleTables::new(
            vec![Trip {
                trip_id: "T1".to_string(),
                route_id: "R1".to_string(),
            }],
            vec![
                stop_time("T1", "A", 0),
                stop_time("T1", "C", 2),
                stop_time("T1", "B", 1),
            ],
            vec![stop("A", "Lyon Part-Dieu"), stop("B", "Mâcon"), stop("C", "Dijon Ville")],
            vec![Route {
                route_id: "R1".to_string(),
                short_name: "TGV".to_string(),
            }],
        )
    }

    #[test]
    fn final_stop_time_uses_highest_sequence() {
        let t = tables();
        assert_eq!(t.final_stop_time("T1").map(|st| st.stop_id.as_str()), Some("C"));
        assert!(t.final_stop_time("missing").is_none());
    }

    #[test]
    fn final_stop_time_ties_prefer_later_rows() {
        let t = ScheduleTables::new(
            vec![],
            vec![stop_time("T", "A", 1), stop_time("T", "B", 1)],
            vec![],
            vec![],
        );
        assert_eq!(t.final_stop_time("T").map(|st| st.stop_id.as_str()), Some("B"));
    }

    #[test]
    fn stops_matching_is_case_insensitive() {
        let t = tables();
        let matches = t.stops_matching("part-dieu");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].stop_id, "A");
        assert!(t.stops_matching("marseille").is_empty());
    }

    #[test]
    fn lookups() {
        let t = tables();
        assert_eq!(t.stop("B").map(|s| s.name.as_str()), Some("Mâcon"));
        assert_eq!(t.trip("T1").map(|tr| tr.route_id.as_str()), Some("R1"));
        assert_eq!(t.route("R1").map(|r| r.short_name.as_str()), Some("TGV"));
        assert_eq!(t.stop_times_at("A").count(), 1);
        assert_eq!(t.stop_times_at("Z").count(), 0);
        assert_eq!(t.trip_count(), 1);
        assert_eq!(t.stop_time_count(), 3);
        assert_eq!(t.route_count(), 1);
    }

    #[test]
    fn feed_set_keeps_load_order_and_replaces_by_title() {
        let mut feeds = FeedSet::new();
        feeds.insert("Gares", FeedTables::StationList(vec!["A".to_string()]));
        feeds.insert("TGV", FeedTables::Schedule(tables()));
        feeds.insert("Gares", FeedTables::StationList(vec!["B".to_string()]));

        let titles: Vec<&str> = feeds.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, ["Gares", "TGV"]);
        assert_eq!(feeds.len(), 2);
        assert_eq!(feeds.schedule_count(), 1);
        assert_eq!(feeds.station_names(), ["B"]);
        assert!(feeds.get("TGV").and_then(FeedTables::schedule).is_some());
        assert!(feeds.get("missing").is_none());
    }

    #[test]
    fn station_names_are_unique_across_feeds() {
        let mut feeds = FeedSet::new();
        feeds.insert(
            "one",
            FeedTables::StationList(vec!["Lyon".to_string(), "Paris".to_string()]),
        );
        feeds.insert(
            "two",
            FeedTables::StationList(vec!["Paris".to_string(), "Nice".to_string()]),
        );
        assert_eq!(feeds.station_names(), ["Lyon", "Paris", "Nice"]);
    }
}
