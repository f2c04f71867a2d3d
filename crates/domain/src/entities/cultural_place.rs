//! Cultural places returned by the geographic query service

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, PlaceCategory};

/// OpenStreetMap element kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
    Relation,
}

/// A tagged point of interest near a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalPlace {
    pub kind: ElementKind,
    pub id: i64,
    /// Node position, or the computed center of a way or relation
    pub location: Option<GeoLocation>,
    pub tags: BTreeMap<String, String>,
}

impl CulturalPlace {
    /// Value of the `name` tag, if any
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.tags
            .get("name")
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
    }

    /// Category derived from the tags
    #[must_use]
    pub fn category(&self) -> PlaceCategory {
        PlaceCategory::from_tags(&self.tags)
    }

    /// Tooltip for a map marker
    #[must_use]
    pub fn tooltip(&self) -> &str {
        self.name().unwrap_or("Inconnu")
    }
}
