//! Sequential loading of all configured feeds

use domain::{FeedSet, FeedTables};
use tracing::{info, instrument, warn};

use crate::config::{FeedFormat, ResourceDescriptor, ScheduleConfig};
use crate::error::ScheduleError;
use crate::parse::{parse_schedule_archive, parse_station_list};
use crate::source::FeedSource;

/// Result of loading a list of resources
///
/// A failed resource never prevents the others from loading.
#[derive(Debug, Default)]
pub struct ScheduleLoad {
    pub feeds: FeedSet,
    /// One entry per skipped resource, in resource order
    pub failures: Vec<ScheduleError>,
}

impl ScheduleLoad {
    /// User-facing messages for the skipped resources
    #[must_use]
    pub fn failure_messages(&self) -> Vec<String> {
        self.failures.iter().map(ToString::to_string).collect()
    }
}

/// Downloads and parses schedule resources
#[derive(Debug)]
pub struct ScheduleStore<S> {
    source: S,
    station_column: String,
    require_zip_content_type: bool,
}

impl<S: FeedSource> ScheduleStore<S> {
    pub fn new(source: S, config: &ScheduleConfig) -> Self {
        Self {
            source,
            station_column: config.station_column.clone(),
            require_zip_content_type: config.require_zip_content_type,
        }
    }

    /// Load every resource, one after another
    #[instrument(skip(self, resources), fields(count = resources.len()))]
    pub async fn load(&self, resources: &[ResourceDescriptor]) -> ScheduleLoad {
        let mut load = ScheduleLoad::default();

        for resource in resources {
            match self.load_resource(resource).await {
                Ok(tables) => {
                    info!(title = %resource.title, "Feed loaded");
                    load.feeds.insert(resource.title.clone(), tables);
                },
                Err(e) => {
                    warn!(title = %resource.title, error = %e, "Skipping feed");
                    load.failures.push(e);
                },
            }
        }

        info!(
            loaded = load.feeds.len(),
            schedules = load.feeds.schedule_count(),
            failed = load.failures.len(),
            "Schedule loading finished"
        );
        load
    }

    /// Load a single resource
    ///
    /// # Errors
    ///
    /// Returns an error if the format is unsupported, the download fails or
    /// the payload cannot be parsed.
    pub async fn load_resource(
        &self,
        resource: &ResourceDescriptor,
    ) -> Result<FeedTables, ScheduleError> {
        match resource.feed_format() {
            FeedFormat::Csv => {
                let payload = self.source.fetch(resource).await?;
                parse_station_list(&resource.title, &payload.body, &self.station_column)
                    .map(FeedTables::StationList)
            },
            FeedFormat::Gtfs => {
                let payload = self.source.fetch(resource).await?;
                if self.require_zip_content_type && !payload.is_zip() {
                    return Err(ScheduleError::ContentTypeMismatch {
                        title: resource.title.clone(),
                        content_type: payload.content_type.unwrap_or_default(),
                    });
                }
                parse_schedule_archive(&resource.title, &payload.body).map(FeedTables::Schedule)
            },
            FeedFormat::Unsupported(label) => Err(ScheduleError::UnsupportedFormat {
                title: resource.title.clone(),
                format: label,
            }),
        }
    }
}
