//! Category of a cultural place, derived from its OpenStreetMap tags

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of cultural venue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    /// `amenity=museum` or `tourism=museum`
    Museum,
    /// `amenity=theatre`
    Theatre,
    /// `tourism=art_gallery`
    ArtGallery,
    /// `historic=castle`
    Castle,
    /// Anything else the query service returned
    Other,
}

impl PlaceCategory {
    /// Classify a place from its tags
    ///
    /// Tags are checked in a fixed order, so a castle that also hosts a museum
    /// is reported as a museum.
    #[must_use]
    pub fn from_tags(tags: &BTreeMap<String, String>) -> Self {
        let tag = |key: &str| tags.get(key).map(String::as_str);

        if tag("amenity") == Some("museum") || tag("tourism") == Some("museum") {
            Self::Museum
        } else if tag("amenity") == Some("theatre") {
            Self::Theatre
        } else if tag("tourism") == Some("art_gallery") {
            Self::ArtGallery
        } else if tag("historic") == Some("castle") {
            Self::Castle
        } else {
            Self::Other
        }
    }

    /// Emoji shown in the venue list
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Museum => "🏛️",
            Self::Theatre => "🎭",
            Self::ArtGallery => "🎨",
            Self::Castle => "🏰",
            Self::Other => "⭐",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Museum => "musée",
            Self::Theatre => "théâtre",
            Self::ArtGallery => "galerie d'art",
            Self::Castle => "château",
            Self::Other => "lieu culturel",
        }
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn classifies_each_category() {
        assert_eq!(
            PlaceCategory::from_tags(&tags(&[("amenity", "museum")])),
            PlaceCategory::Museum
        );
        assert_eq!(
            PlaceCategory::from_tags(&tags(&[("tourism", "museum")])),
            PlaceCategory::Museum
        );
        assert_eq!(
            PlaceCategory::from_tags(&tags(&[("amenity", "theatre")])),
            PlaceCategory::Theatre
        );
        assert_eq!(
            PlaceCategory::from_tags(&tags(&[("tourism", "art_gallery")])),
            PlaceCategory::ArtGallery
        );
        assert_eq!(
            PlaceCategory::from_tags(&tags(&[("historic", "castle")])),
            PlaceCategory::Castle
        );
        assert_eq!(PlaceCategory::from_tags(&tags(&[])), PlaceCategory::Other);
    }

    #[test]
    fn museum_wins_over_castle() {
        let t = tags(&[("historic", "castle"), ("tourism", "museum")]);
        assert_eq!(PlaceCategory::from_tags(&t), PlaceCategory::Museum);
    }

    #[test]
    fn emoji_per_category() {
        assert_eq!(PlaceCategory::Theatre.emoji(), "🎭");
        assert_eq!(PlaceCategory::Castle.emoji(), "🏰");
        assert_eq!(PlaceCategory::Other.emoji(), "⭐");
    }
}
