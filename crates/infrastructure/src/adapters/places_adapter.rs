//! Places adapter - Implements CulturalPlacesPort using integration_overpass

use application::error::ApplicationError;
use application::ports::CulturalPlacesPort;
use async_trait::async_trait;
use domain::{CulturalPlace, GeoLocation};
use integration_overpass::{CulturalPlacesClient, OverpassClient, OverpassConfig, OverpassError};
use tracing::{debug, instrument, warn};

/// Adapter for cultural place lookups through the Overpass API
#[derive(Debug)]
pub struct OverpassPlacesAdapter<C = OverpassClient> {
    client: C,
}

impl OverpassPlacesAdapter<OverpassClient> {
    /// Create an adapter with an HTTP client built from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: &OverpassConfig) -> Result<Self, ApplicationError> {
        let client = OverpassClient::new(config).map_err(|e| {
            ApplicationError::Configuration(format!("Overpass client: {e}"))
        })?;
        Ok(Self::new(client))
    }
}

impl<C: CulturalPlacesClient> OverpassPlacesAdapter<C> {
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    fn map_error(e: OverpassError) -> ApplicationError {
        match e {
            OverpassError::RouteNotFound { .. } => ApplicationError::NotFound(e.to_string()),
            other => ApplicationError::ExternalService(format!("Overpass: {other}")),
        }
    }
}

#[async_trait]
impl<C: CulturalPlacesClient> CulturalPlacesPort for OverpassPlacesAdapter<C> {
    #[instrument(skip(self))]
    async fn find_cultural_places(
        &self,
        location: GeoLocation,
    ) -> Result<Vec<CulturalPlace>, ApplicationError> {
        let places = self
            .client
            .fetch_cultural_places(location.latitude(), location.longitude())
            .await
            .map_err(|e| {
                warn!(error = %e, "Cultural places lookup failed");
                Self::map_error(e)
            })?;

        debug!(count = places.len(), "Cultural places fetched");
        Ok(places)
    }

    #[instrument(skip(self))]
    async fn find_route(
        &self,
        start_node_id: i64,
        end_node_id: i64,
    ) -> Result<Vec<i64>, ApplicationError> {
        self.client
            .fetch_route(start_node_id, end_node_id)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn adapter_for(server: &MockServer) -> OverpassPlacesAdapter {
        let config = OverpassConfig {
            base_url: format!("{}/api/interpreter", server.uri()),
            ..OverpassConfig::for_testing()
        };
        OverpassPlacesAdapter::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn places_are_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/interpreter"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"elements": [{"type": "node", "id": 1, "lat": 45.0, "lon": 4.0,
                    "tags": {"name": "Théâtre des Célestins", "amenity": "theatre"}}]}"#,
            ))
            .mount(&server)
            .await;

        let places = adapter_for(&server)
            .find_cultural_places(GeoLocation::lyon_part_dieu())
            .await
            .unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name(), Some("Théâtre des Célestins"));
    }

    #[tokio::test]
    async fn server_error_is_external() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let err = adapter_for(&server)
            .find_cultural_places(GeoLocation::lyon_part_dieu())
            .await
            .unwrap_err();
        assert!(err.is_external());
    }

    #[tokio::test]
    async fn missing_route_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"elements": []}"#))
            .mount(&server)
            .await;

        let err = adapter_for(&server).find_route(1, 2).await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)));
    }
}
