//! Map coordinates of stops and places

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// A WGS84 point, as found in `stops.txt` and Overpass elements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

impl GeoLocation {
    /// Checked constructor for coordinates read from feeds
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCoordinates`] when latitude is outside
    /// [-90, 90] or longitude outside [-180, 180]. NaN never fits.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        let in_range =
            (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
        if !in_range {
            return Err(DomainError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self::new_unchecked(latitude, longitude))
    }

    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Arithmetic midpoint, used to center the overview map
    ///
    /// Not the great-circle midpoint; at country scale the two are close.
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new_unchecked(
            (self.latitude + other.latitude) / 2.0,
            (self.longitude + other.longitude) / 2.0,
        )
    }

    /// Paris, Gare de Lyon
    #[must_use]
    pub const fn paris_gare_de_lyon() -> Self {
        Self::new_unchecked(48.844_304, 2.374_377)
    }

    /// Lyon Part-Dieu
    #[must_use]
    pub const fn lyon_part_dieu() -> Self {
        Self::new_unchecked(45.760_585, 4.859_435)
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.latitude, self.longitude)
    }
}
