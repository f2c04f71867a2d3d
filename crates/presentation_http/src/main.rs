//! Onvaou HTTP Server
//!
//! Loads the schedule feeds, then serves the trip page.

use std::{sync::Arc, time::Duration};

use application::{DestinationService, SessionService, TripService};
use infrastructure::{AppConfig, OverpassPlacesAdapter, TemplateEngine, init_tracing};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before logging so the log format applies
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(config.server.log_format)?;

    if let Some(e) = config_error {
        warn!("Failed to load config, using defaults: {}", e);
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!("🚂 Onvaou v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        resources = config.schedule.resources.len(),
        "Configuration loaded"
    );

    // Download schedules once, before binding
    let load = infrastructure::load_schedules(&config.schedule).await;
    let load_failures = load.failure_messages();
    info!(
        feeds = load.feeds.len(),
        schedules = load.feeds.schedule_count(),
        failures = load_failures.len(),
        "Schedule feeds loaded"
    );

    // Initialize services
    let trips = Arc::new(TripService::new(
        Arc::new(load.feeds),
        config.trips.random_seed,
    ));
    let places = OverpassPlacesAdapter::from_config(&config.overpass)
        .map_err(|e| anyhow::anyhow!("Failed to initialize Overpass client: {e}"))?;

    let config = Arc::new(config);
    let state = AppState {
        sessions: Arc::new(SessionService::with_limits(
            trips,
            config.sessions.limits(),
        )),
        destinations: Arc::new(DestinationService::new(Arc::new(places))),
        templates: TemplateEngine::new()?,
        load_failures: Arc::new(load_failures),
        config: Arc::clone(&config),
    };

    // Build router
    let app =
        routes::create_router(state).layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout =
        Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
}
