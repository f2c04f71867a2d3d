//! Overpass response models

use std::collections::BTreeMap;

use domain::{CulturalPlace, ElementKind, GeoLocation};
use serde::{Deserialize, Serialize};

/// Top-level interpreter response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// Computed center of a way or relation (`out center`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverpassCenter {
    pub lat: f64,
    pub lon: f64,
}

/// One element of the `elements` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<OverpassCenter>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    /// Member node ids, present on ways
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<i64>,
}

impl OverpassElement {
    /// Node position, else the computed center
    #[must_use]
    pub fn location(&self) -> Option<GeoLocation> {
        match (self.lat, self.lon, self.center) {
            (Some(lat), Some(lon), _) => GeoLocation::new(lat, lon).ok(),
            (_, _, Some(center)) => GeoLocation::new(center.lat, center.lon).ok(),
            _ => None,
        }
    }
}

impl From<OverpassElement> for CulturalPlace {
    fn from(element: OverpassElement) -> Self {
        Self {
            kind: element.kind,
            id: element.id,
            location: element.location(),
            tags: element.tags,
        }
    }
}
