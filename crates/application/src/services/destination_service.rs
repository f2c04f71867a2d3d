//! Cultural places around a destination
//!
//! A failed lookup never fails the page: it becomes a visible message and an
//! empty list for that render.

use std::sync::Arc;

use domain::{CulturalPlace, GeoLocation};
use serde::Serialize;
use tracing::{instrument, warn};

use crate::error::ApplicationError;
use crate::ports::CulturalPlacesPort;

/// Message shown when the lookup fails
pub const PLACES_UNAVAILABLE: &str =
    "Erreur lors de la récupération des données depuis l'API Overpass.";

/// Places to render around one destination
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DestinationPlaces {
    pub places: Vec<CulturalPlace>,
    /// Set when the lookup failed
    pub error: Option<String>,
}

impl DestinationPlaces {
    /// Places that can be put on the map
    pub fn mapped(&self) -> impl Iterator<Item = (&CulturalPlace, GeoLocation)> {
        self.places
            .iter()
            .filter_map(|place| place.location.map(|location| (place, location)))
    }

    /// Places that can be listed by name
    pub fn named(&self) -> impl Iterator<Item = (&CulturalPlace, &str)> {
        self.places
            .iter()
            .filter_map(|place| place.name().map(|name| (place, name)))
    }
}

/// Looks up cultural places through the places port
#[derive(Clone)]
pub struct DestinationService {
    places: Arc<dyn CulturalPlacesPort>,
}

impl std::fmt::Debug for DestinationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DestinationService").finish_non_exhaustive()
    }
}

impl DestinationService {
    pub fn new(places: Arc<dyn CulturalPlacesPort>) -> Self {
        Self { places }
    }

    /// Cultural places around `location`, with any failure folded in
    #[instrument(skip(self))]
    pub async fn places_around(&self, location: GeoLocation) -> DestinationPlaces {
        match self.places.find_cultural_places(location).await {
            Ok(places) => DestinationPlaces {
                places,
                error: None,
            },
            Err(e) => {
                warn!(error = %e, "Cultural places lookup failed");
                DestinationPlaces {
                    places: Vec::new(),
                    error: Some(PLACES_UNAVAILABLE.to_string()),
                }
            },
        }
    }

    /// Node ids along a way connecting two map nodes
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails or no way connects the nodes.
    #[instrument(skip(self))]
    pub async fn route(
        &self,
        start_node_id: i64,
        end_node_id: i64,
    ) -> Result<Vec<i64>, ApplicationError> {
        self.places.find_route(start_node_id, end_node_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use domain::{ElementKind, PlaceCategory};

    use super::*;
    use crate::ports::MockCulturalPlacesPort;

    fn place(id: i64, name: Option<&str>, located: bool) -> CulturalPlace {
        let mut tags = BTreeMap::from([("tourism".to_string(), "museum".to_string())]);
        if let Some(name) = name {
            tags.insert("name".to_string(), name.to_string());
        }
        CulturalPlace {
            kind: ElementKind::Node,
            id,
            location: located.then(GeoLocation::paris_gare_de_lyon),
            tags,
        }
    }

    #[tokio::test]
    async fn places_are_returned() {
        let mut mock = MockCulturalPlacesPort::new();
        mock.expect_find_cultural_places()
            .returning(|_| Ok(vec![place(1, Some("Louvre"), true), place(2, None, true)]));

        let result = DestinationService::new(Arc::new(mock))
            .places_around(GeoLocation::paris_gare_de_lyon())
            .await;

        assert!(result.error.is_none());
        assert_eq!(result.mapped().count(), 2);
        let named: Vec<&str> = result.named().map(|(_, name)| name).collect();
        assert_eq!(named, ["Louvre"]);
        assert_eq!(result.places[0].category(), PlaceCategory::Museum);
    }

    #[tokio::test]
    async fn empty_result_is_not_an_error() {
        let mut mock = MockCulturalPlacesPort::new();
        mock.expect_find_cultural_places().returning(|_| Ok(vec![]));

        let result = DestinationService::new(Arc::new(mock))
            .places_around(GeoLocation::lyon_part_dieu())
            .await;

        assert_eq!(result, DestinationPlaces::default());
    }

    #[tokio::test]
    async fn failure_becomes_message() {
        let mut mock = MockCulturalPlacesPort::new();
        mock.expect_find_cultural_places()
            .returning(|_| Err(ApplicationError::ExternalService("HTTP 504".to_string())));

        let result = DestinationService::new(Arc::new(mock))
            .places_around(GeoLocation::lyon_part_dieu())
            .await;

        assert!(result.places.is_empty());
        assert_eq!(result.error.as_deref(), Some(PLACES_UNAVAILABLE));
    }

    #[tokio::test]
    async fn unlocated_places_are_not_mapped() {
        let mut mock = MockCulturalPlacesPort::new();
        mock.expect_find_cultural_places()
            .returning(|_| Ok(vec![place(1, Some("Hidden"), false)]));

        let result = DestinationService::new(Arc::new(mock))
            .places_around(GeoLocation::lyon_part_dieu())
            .await;

        assert_eq!(result.mapped().count(), 0);
        assert_eq!(result.named().count(), 1);
    }

    #[tokio::test]
    async fn route_is_forwarded() {
        let mut mock = MockCulturalPlacesPort::new();
        mock.expect_find_route()
            .withf(|from, to| *from == 1 && *to == 2)
            .returning(|_, _| Ok(vec![1, 5, 2]));

        let nodes = DestinationService::new(Arc::new(mock))
            .route(1, 2)
            .await
            .unwrap();
        assert_eq!(nodes, [1, 5, 2]);
    }
}
