//! Schedule feed integration for Onvaou
//!
//! Downloads the published schedule feeds and parses them into
//! [`domain::FeedSet`]. Two formats are understood: a `;`-delimited station
//! list and zipped GTFS bundles, of which only `trips.txt`, `stop_times.txt`,
//! `stops.txt` and `routes.txt` are read.
//!
//! # Architecture
//!
//! [`FeedSource`] abstracts the download, implemented by [`HttpFeedSource`].
//! [`ScheduleStore`] walks the configured resources one after another and
//! collects a [`ScheduleError`] for every resource it had to skip.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_gtfs::{HttpFeedSource, ScheduleConfig, ScheduleStore};
//!
//! let config = ScheduleConfig::default();
//! let store = ScheduleStore::new(HttpFeedSource::new(&config)?, &config);
//!
//! let load = store.load(&config.resources).await;
//! for failure in &load.failures {
//!     eprintln!("{failure}");
//! }
//! ```

mod config;
mod error;
mod parse;
mod source;
mod store;

pub use config::{FeedFormat, ResourceDescriptor, ScheduleConfig};
pub use error::ScheduleError;
pub use parse::{parse_schedule_archive, parse_station_list};
pub use source::{FeedPayload, FeedSource, HttpFeedSource};
pub use store::{ScheduleLoad, ScheduleStore};
