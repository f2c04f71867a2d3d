//! Schedule feed configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared format of a schedule resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedFormat {
    /// `;`-delimited station list
    Csv,
    /// Zipped GTFS bundle
    Gtfs,
    /// Anything else; such resources are reported and skipped
    Unsupported(String),
}

impl FeedFormat {
    /// Parse a declared format label (case-insensitive)
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "csv" => Self::Csv,
            "gtfs" => Self::Gtfs,
            _ => Self::Unsupported(label.to_string()),
        }
    }
}

impl fmt::Display for FeedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Gtfs => write!(f, "gtfs"),
            Self::Unsupported(label) => write!(f, "{label}"),
        }
    }
}

/// One schedule feed to download
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Feed title; also matched against transport mode labels
    pub title: String,
    pub url: String,
    /// Declared format label, e.g. `csv`, `gtfs` or `GTFS`
    pub format: String,
}

impl ResourceDescriptor {
    pub fn new(title: impl Into<String>, url: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            format: format.into(),
        }
    }

    /// Parsed declared format
    #[must_use]
    pub fn feed_format(&self) -> FeedFormat {
        FeedFormat::parse(&self.format)
    }
}

/// Configuration for schedule loading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Feeds to load, in order
    #[serde(default = "default_resources")]
    pub resources: Vec<ResourceDescriptor>,

    /// Download timeout in seconds (bundles are large)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Column of the station list holding station names
    #[serde(default = "default_station_column")]
    pub station_column: String,

    /// Reject GTFS resources whose content type does not mention zip
    #[serde(default = "default_true")]
    pub require_zip_content_type: bool,

    /// User agent sent with downloads
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_resources() -> Vec<ResourceDescriptor> {
    vec![
        ResourceDescriptor::new(
            "Gares de voyageurs du réseau ferré national",
            "https://www.data.gouv.fr/fr/datasets/r/cbacca02-6925-4a46-aab6-7194debbb9b7",
            "csv",
        ),
        ResourceDescriptor::new(
            "Réseau national TER SNCF",
            "https://eu.ftp.opendatasoft.com/sncf/gtfs/export-ter-gtfs-last.zip",
            "GTFS",
        ),
        ResourceDescriptor::new(
            "Réseau national TGV SNCF",
            "https://eu.ftp.opendatasoft.com/sncf/gtfs/export_gtfs_voyages.zip",
            "GTFS",
        ),
        ResourceDescriptor::new(
            "RENFE",
            "https://www.data.gouv.fr/fr/datasets/r/eae0fa46-087a-4018-ada9-d8add124e635",
            "gtfs",
        ),
        ResourceDescriptor::new(
            "Eurostar",
            "https://www.data.gouv.fr/fr/datasets/r/9089b550-696e-4ae0-87b5-40ea55a14292",
            "gtfs",
        ),
    ]
}

const fn default_timeout_secs() -> u64 {
    300
}

fn default_station_column() -> String {
    "Nom".to_string()
}

const fn default_true() -> bool {
    true
}

fn default_user_agent() -> String {
    format!("Onvaou/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            resources: default_resources(),
            timeout_secs: default_timeout_secs(),
            station_column: default_station_column(),
            require_zip_content_type: true,
            user_agent: default_user_agent(),
        }
    }
}

impl ScheduleConfig {
    /// Create a configuration suitable for testing (no resources)
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            resources: Vec::new(),
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
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.station_column.trim().is_empty() {
            return Err("station_column must not be empty".to_string());
        }

        for resource in &self.resources {
            if resource.title.trim().is_empty() {
                return Err("resource title must not be empty".to_string());
            }
            if resource.url.trim().is_empty() {
                return Err(format!("resource '{}' has an empty url", resource.title));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_format_parse() {
        assert_eq!(FeedFormat::parse("csv"), FeedFormat::Csv);
        assert_eq!(FeedFormat::parse("CSV"), FeedFormat::Csv);
        assert_eq!(FeedFormat::parse("gtfs"), FeedFormat::Gtfs);
        assert_eq!(FeedFormat::parse("GTFS"), FeedFormat::Gtfs);
        assert_eq!(
            FeedFormat::parse("netex"),
            FeedFormat::Unsupported("netex".to_string())
        );
    }

    #[test]
    fn test_default_config() {
        let config = ScheduleConfig::default();
        assert_eq!(config.resources.len(), 5);
        assert_eq!(config.resources[0].feed_format(), FeedFormat::Csv);
        assert!(
            config.resources[1..]
                .iter()
                .all(|r| r.feed_format() == FeedFormat::Gtfs)
        );
        assert_eq!(config.timeout_secs, 300);
        assert_eq!(config.station_column, "Nom");
        assert!(config.require_zip_content_type);
        assert!(config.user_agent.starts_with("Onvaou/"));
    }

    #[test]
    fn test_testing_config() {
        let config = ScheduleConfig::for_testing();
        assert!(config.resources.is_empty());
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_validation_success() {
        assert!(ScheduleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = ScheduleConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_url() {
        let config = ScheduleConfig {
            resources: vec![ResourceDescriptor::new("TGV", "", "gtfs")],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("TGV"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ScheduleConfig = serde_json::from_str(r#"{"timeout_secs": 60}"#).unwrap();
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.resources.len(), 5);
    }
}
