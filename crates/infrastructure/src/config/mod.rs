//! Application configuration
//!
//! Values come from built-in defaults, then an optional `config.toml` in the
//! working directory, then `ONVAOU_*` environment variables
//! (e.g. `ONVAOU_SERVER_PORT=9000`).

mod server;

use std::collections::HashMap;
use std::time::Duration;

use application::SessionLimits;
use integration_gtfs::ScheduleConfig;
use integration_overpass::OverpassConfig;
use serde::{Deserialize, Serialize};

pub use server::{LogFormat, ServerConfig};

/// Trip drawing settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripsConfig {
    /// Fixed seed for reproducible draws; random when absent
    #[serde(default)]
    pub random_seed: Option<u64>,
}

/// Session registry bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionsConfig {
    /// Maximum number of stored sessions
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,

    /// Idle time before a session is dropped, in seconds (default: 24 hours)
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
}

const fn default_max_sessions() -> u64 {
    10_000
}

const fn default_idle_timeout() -> u64 {
    24 * 60 * 60
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            idle_timeout_secs: default_idle_timeout(),
        }
    }
}

impl SessionsConfig {
    #[must_use]
    pub const fn limits(&self) -> SessionLimits {
        SessionLimits {
            max_sessions: self.max_sessions,
            idle_timeout: Duration::from_secs(self.idle_timeout_secs),
        }
    }
}

/// Booking links shown under a trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    #[serde(default = "default_sncf_connect_url")]
    pub sncf_connect_url: String,

    #[serde(default = "default_trainline_url")]
    pub trainline_url: String,
}

fn default_sncf_connect_url() -> String {
    "https://www.sncf-connect.com/app/home/search/od".to_string()
}

fn default_trainline_url() -> String {
    "https://www.thetrainline.com/fr".to_string()
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            sncf_connect_url: default_sncf_connect_url(),
            trainline_url: default_trainline_url(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Schedule feeds to load at startup
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Cultural places lookup
    #[serde(default)]
    pub overpass: OverpassConfig,

    #[serde(default)]
    pub trips: TripsConfig,

    #[serde(default)]
    pub sessions: SessionsConfig,

    #[serde(default)]
    pub booking: BookingConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_builder(
            config::Config::builder()
                // Load from file if exists
                .add_source(config::File::with_name("config").required(false)),
            None,
        )
    }

    /// Load configuration from a TOML string, still honouring the environment
    pub fn from_toml(toml: &str) -> Result<Self, config::ConfigError> {
        Self::from_toml_with_env(toml, None)
    }

    /// Load configuration from a TOML string and the given variables instead
    /// of the process environment when `env` is set
    pub fn from_toml_with_env(
        toml: &str,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::from_str(toml, config::FileFormat::Toml)),
            env,
        )
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let config = builder
            // Override with environment variables (e.g., ONVAOU_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix("ONVAOU")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;
        config.try_deserialize()
    }

    /// Validate all sections
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting, prefixed with its section.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.host.trim().is_empty() {
            return Err("server: host must not be empty".to_string());
        }
        if self.sessions.max_sessions == 0 {
            return Err("sessions: max_sessions must be greater than 0".to_string());
        }
        self.schedule
            .validate()
            .map_err(|e| format!("schedule: {e}"))?;
        self.overpass
            .validate()
            .map_err(|e| format!("overpass: {e}"))?;
        Ok(())
    }
}
