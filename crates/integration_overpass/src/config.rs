//! Overpass service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Overpass interpreter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassConfig {
    /// Interpreter endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Search radius around the destination, in meters
    #[serde(default = "default_radius_m")]
    pub radius_m: u32,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "http://overpass-api.de/api/interpreter".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_radius_m() -> u32 {
    1000
}

fn default_user_agent() -> String {
    format!("Onvaou/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            radius_m: default_radius_m(),
            user_agent: default_user_agent(),
        }
    }
}

impl OverpassConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.radius_m == 0 {
            return Err("radius_m must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OverpassConfig::default();
        assert_eq!(config.base_url, "http://overpass-api.de/api/interpreter");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.radius_m, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_radius() {
        let config = OverpassConfig {
            radius_m: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: OverpassConfig = serde_json::from_str(r#"{"radius_m": 500}"#).unwrap();
        assert_eq!(config.radius_m, 500);
        assert_eq!(config.timeout_secs, 30);
    }
}
