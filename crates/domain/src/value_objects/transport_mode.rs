//! Transport mode offered in the mode selector
//!
//! A mode selects schedule feeds by title: a feed is searched when its title
//! contains the mode label. The match is a plain substring test, so a label can
//! select several feeds (or none, e.g. "Intercité" with the default feeds).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Transport mode chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportMode {
    /// High-speed lines
    #[serde(rename = "TGV")]
    Tgv,
    /// Regional lines
    #[serde(rename = "TER")]
    Ter,
    /// Intercity lines
    #[serde(rename = "Intercité")]
    Intercite,
    /// Spanish national operator
    #[serde(rename = "RENFE")]
    Renfe,
    /// Cross-channel services
    #[serde(rename = "Eurostar")]
    Eurostar,
}

impl TransportMode {
    /// All modes, in selector order
    pub const ALL: [Self; 5] = [
        Self::Tgv,
        Self::Ter,
        Self::Intercite,
        Self::Renfe,
        Self::Eurostar,
    ];

    /// Label shown in the selector and matched against feed titles
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Tgv => "TGV",
            Self::Ter => "TER",
            Self::Intercite => "Intercité",
            Self::Renfe => "RENFE",
            Self::Eurostar => "Eurostar",
        }
    }

    /// Whether a feed with this title serves the mode (case-sensitive substring)
    #[must_use]
    pub fn matches_feed(&self, feed_title: &str) -> bool {
        feed_title.contains(self.label())
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for TransportMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(s))
            .or_else(|| match s.to_lowercase().as_str() {
                "intercite" | "intercités" | "intercites" => Some(Self::Intercite),
                _ => None,
            })
            .ok_or_else(|| DomainError::UnknownTransportMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_in_selector_order() {
        let labels: Vec<&str> = TransportMode::ALL.iter().map(TransportMode::label).collect();
        assert_eq!(labels, ["TGV", "TER", "Intercité", "RENFE", "Eurostar"]);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("tgv".parse::<TransportMode>().unwrap(), TransportMode::Tgv);
        assert_eq!("Ter".parse::<TransportMode>().unwrap(), TransportMode::Ter);
        assert_eq!(
            "Intercité".parse::<TransportMode>().unwrap(),
            TransportMode::Intercite
        );
        assert_eq!(
            "intercite".parse::<TransportMode>().unwrap(),
            TransportMode::Intercite
        );
    }

    #[test]
    fn parse_unknown_mode_fails() {
        let err = "Bus".parse::<TransportMode>().unwrap_err();
        assert!(err.to_string().contains("Bus"));
    }

    #[test]
    fn feed_matching_is_substring_and_case_sensitive() {
        assert!(TransportMode::Tgv.matches_feed("Réseau national TGV SNCF"));
        assert!(TransportMode::Renfe.matches_feed("RENFE"));
        assert!(!TransportMode::Renfe.matches_feed("Renfe cercanías"));
        assert!(!TransportMode::Intercite.matches_feed("Réseau national TER SNCF"));
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&TransportMode::Intercite).unwrap();
        assert_eq!(json, "\"Intercité\"");
        let mode: TransportMode = serde_json::from_str("\"TGV\"").unwrap();
        assert_eq!(mode, TransportMode::Tgv);
    }
}
