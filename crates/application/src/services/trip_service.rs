//! Random trip selection
//!
//! Searches every schedule feed of the chosen transport mode for stops
//! matching the station text, derives one candidate per departure at those
//! stops (destination = the trip's final stop) and draws one at random.

use std::collections::HashSet;
use std::sync::Arc;

use domain::{
    CandidateTrip, FeedSet, ScheduleTables, Stop, TransportMode, TripOutcome, TripSearch,
};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Pick one candidate uniformly at random
///
/// Depends only on the list and the generator state, so a seeded generator
/// always yields the same choice for the same list.
pub fn select_trip<'a, R: Rng + ?Sized>(
    candidates: &'a [CandidateTrip],
    rng: &mut R,
) -> Option<&'a CandidateTrip> {
    candidates.choose(rng)
}

/// Trip selector over the loaded schedules
#[derive(Debug)]
pub struct TripService {
    feeds: Arc<FeedSet>,
    rng: Mutex<StdRng>,
}

impl TripService {
    /// Create a selector; a seed makes the draws reproducible
    pub fn new(feeds: Arc<FeedSet>, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            feeds,
            rng: Mutex::new(rng),
        }
    }

    pub fn feeds(&self) -> &FeedSet {
        &self.feeds
    }

    /// Station names offered by the station selector
    pub fn station_names(&self) -> Vec<String> {
        self.feeds.station_names()
    }

    /// All candidate trips leaving `station` with `mode`
    ///
    /// Only feeds whose title contains the mode label are searched. Station
    /// text matches stop names as a case-insensitive substring. The origin
    /// position comes from the first matching stop of the first feed that
    /// matched at all.
    #[instrument(skip(self))]
    pub fn find_trips(&self, station: &str, mode: TransportMode) -> TripSearch {
        let needle = station.trim();
        if needle.is_empty() {
            return TripSearch::not_found();
        }

        let mut search = TripSearch::default();
        for feed in self.feeds.iter() {
            if !mode.matches_feed(&feed.title) {
                continue;
            }
            let Some(tables) = feed.tables.schedule() else {
                continue;
            };

            let matched = tables.stops_matching(needle);
            let Some(first) = matched.first() else {
                continue;
            };
            if !search.station_found {
                search.station_found = true;
                search.origin = first.location;
            }

            let before = search.candidates.len();
            search
                .candidates
                .extend(candidates_from(tables, &matched, needle));
            debug!(
                feed = %feed.title,
                stops = matched.len(),
                candidates = search.candidates.len() - before,
                "Feed searched"
            );
        }

        search
    }

    /// Search and draw one trip
    #[instrument(skip(self))]
    pub fn draw(&self, station: &str, mode: TransportMode) -> TripOutcome {
        let search = self.find_trips(station, mode);
        if !search.station_found {
            info!("Station not found");
            return TripOutcome::StationNotFound {
                station: station.to_string(),
            };
        }

        let choice = {
            let mut rng = self.rng.lock();
            select_trip(&search.candidates, &mut *rng).cloned()
        };

        match choice {
            Some(trip) => {
                info!(
                    destination = %trip.destination_name,
                    line = %trip.line,
                    pool = search.candidates.len(),
                    "Trip selected"
                );
                TripOutcome::Selected {
                    trip,
                    origin: search.origin,
                }
            },
            None => {
                info!("No outbound trips");
                TripOutcome::NoTrips {
                    station: station.to_string(),
                    mode,
                }
            },
        }
    }
}

/// Candidates for every departure at the matched stops of one feed
fn candidates_from(
    tables: &ScheduleTables,
    matched: &[&Stop],
    origin_name: &str,
) -> Vec<CandidateTrip> {
    let origin_ids: HashSet<&str> = matched.iter().map(|stop| stop.stop_id.as_str()).collect();
    let mut candidates = Vec::new();

    for stop in matched {
        for departure in tables.stop_times_at(&stop.stop_id) {
            let Some(trip) = tables.trip(&departure.trip_id) else {
                continue;
            };
            let Some(last) = tables.final_stop_time(&trip.trip_id) else {
                continue;
            };
            if origin_ids.contains(last.stop_id.as_str()) {
                continue;
            }
            let Some(destination) = tables.stop(&last.stop_id) else {
                continue;
            };
            let Some(location) = destination.location else {
                continue;
            };

            candidates.push(CandidateTrip {
                origin_name: origin_name.to_string(),
                destination_stop_id: destination.stop_id.clone(),
                destination_name: destination.name.clone(),
                destination: location,
                line: tables
                    .route(&trip.route_id)
                    .map(|route| route.short_name.clone())
                    .unwrap_or_default(),
                departure: departure.clone(),
            });
        }
    }

    candidates
}

#[cfg(test)]
pub(crate) mod fixtures {
    use domain::{FeedTables, GeoLocation, Route, StopTime, Trip};

    use super::*;

    fn stop(id: &str, name: &str, location: Option<(f64, f64)>) -> Stop {
        Stop {
            stop_id: id.to_string(),
            name: name.to_string(),
            location: location.map(|(lat, lon)| GeoLocation::new_unchecked(lat, lon)),
        }
    }

    fn trip(id: &str, route: &str) -> Trip {
        Trip {
            trip_id: id.to_string(),
            route_id: route.to_string(),
        }
    }

    fn call(trip: &str, stop: &str, seq: u32) -> StopTime {
        StopTime {
            trip_id: trip.to_string(),
            stop_id: stop.to_string(),
            stop_sequence: seq,
        }
    }

    /// Small TGV network around Lyon plus a TER feed and a station list
    pub(crate) fn feed_set() -> FeedSet {
        let tgv = ScheduleTables::new(
            vec![
                trip("T1", "R1"),
                trip("T2", "R1"),
                trip("T3", "R2"),
                trip("T4", "R1"),
                trip("T5", "MISSING"),
            ],
            vec![
                // Lyon Part-Dieu -> Paris Gare de Lyon
                call("T1", "LPD", 1),
                call("T1", "PLY", 2),
                // Lyon Part-Dieu -> Marseille
                call("T2", "LPD", 1),
                call("T2", "MSC", 2),
                // Paris -> Lyon Part-Dieu (terminates at the origin)
                call("T3", "PLY", 1),
                call("T3", "LPD", 2),
                // Lyon Part-Dieu -> a node without coordinates
                call("T4", "LPD", 1),
                call("T4", "NOPOS", 2),
                // Lyon Perrache -> Dijon, route unknown
                call("T5", "LPR", 1),
                call("T5", "DIJ", 2),
                // Departure of a trip that is not in trips.txt
                call("GHOST", "LPD", 1),
            ],
            vec![
                stop("LPD", "Lyon Part-Dieu", Some((45.760_585, 4.859_435))),
                stop("PLY", "Paris Gare de Lyon", Some((48.844_304, 2.374_377))),
                stop("MSC", "Marseille Saint-Charles", Some((43.302_666, 5.380_407))),
                stop("NOPOS", "Lyon Dépôt", None),
                stop("LPR", "Lyon Perrache", Some((45.748_47, 4.825_77))),
                stop("DIJ", "Dijon Ville", Some((47.323_4, 5.027_3))),
                stop("VAL", "Valence TGV", Some((44.991_1, 4.978_6))),
            ],
            vec![
                Route {
                    route_id: "R1".to_string(),
                    short_name: "TGV INOUI".to_string(),
                },
                Route {
                    route_id: "R2".to_string(),
                    short_name: "OUIGO".to_string(),
                },
            ],
        );

        let ter = ScheduleTables::new(
            vec![trip("E1", "TR1")],
            vec![call("E1", "ANN", 1), call("E1", "CHY", 2)],
            vec![
                stop("ANN", "Annecy", Some((45.901_9, 6.121_9))),
                stop("CHY", "Chambéry", Some((45.571_1, 5.919_6))),
            ],
            vec![Route {
                route_id: "TR1".to_string(),
                short_name: "K1".to_string(),
            }],
        );

        let mut feeds = FeedSet::new();
        feeds.insert(
            "Gares de voyageurs du réseau ferré national",
            FeedTables::StationList(vec!["Lyon Part-Dieu".to_string(), "Annecy".to_string()]),
        );
        feeds.insert("Réseau national TER SNCF", FeedTables::Schedule(ter));
        feeds.insert("Réseau national TGV SNCF", FeedTables::Schedule(tgv));
        feeds
    }

    pub(crate) fn service(seed: u64) -> TripService {
        TripService::new(Arc::new(feed_set()), Some(seed))
    }
}
