//! Startup schedule loading

use integration_gtfs::{HttpFeedSource, ScheduleConfig, ScheduleLoad, ScheduleStore};
use tracing::{error, info, instrument};

/// Download and parse every configured schedule resource
///
/// Never fails: a client that cannot be built is reported like a failed
/// resource and yields an empty feed set.
#[instrument(skip(config), fields(resources = config.resources.len()))]
pub async fn load_schedules(config: &ScheduleConfig) -> ScheduleLoad {
    let source = match HttpFeedSource::new(config) {
        Ok(source) => source,
        Err(e) => {
            error!(error = %e, "Cannot build schedule HTTP client");
            return ScheduleLoad {
                failures: vec![e],
                ..ScheduleLoad::default()
            };
        },
    };

    info!("Loading schedule feeds");
    ScheduleStore::new(source, config)
        .load(&config.resources)
        .await
}
