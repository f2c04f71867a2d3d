//! Overpass interpreter client

use std::time::Duration;

use async_trait::async_trait;
use domain::{CulturalPlace, ElementKind};
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::OverpassConfig;
use crate::error::OverpassError;
use crate::models::OverpassResponse;
use crate::query;

/// Trait for cultural place lookups
#[async_trait]
pub trait CulturalPlacesClient: Send + Sync {
    /// Cultural places around a point
    async fn fetch_cultural_places(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<CulturalPlace>, OverpassError>;

    /// Node ids of the first way connecting two nodes
    async fn fetch_route(
        &self,
        start_node_id: i64,
        end_node_id: i64,
    ) -> Result<Vec<i64>, OverpassError>;
}

/// Client for the Overpass interpreter endpoint
#[derive(Debug)]
pub struct OverpassClient {
    client: Client,
    config: OverpassConfig,
}

impl OverpassClient {
    /// Create a new Overpass client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &OverpassConfig) -> Result<Self, OverpassError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| OverpassError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Send a query and decode the `elements` response
    async fn execute(&self, query: &str) -> Result<OverpassResponse, OverpassError> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("data", query)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OverpassError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    OverpassError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(OverpassError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| OverpassError::ParseError(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| OverpassError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl CulturalPlacesClient for OverpassClient {
    #[instrument(skip(self))]
    async fn fetch_cultural_places(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<CulturalPlace>, OverpassError> {
        let query = query::cultural_places(latitude, longitude, self.config.radius_m);
        debug!(radius_m = self.config.radius_m, "Querying cultural places");

        let response = self.execute(&query).await?;
        let places: Vec<CulturalPlace> = response.elements.into_iter().map(Into::into).collect();

        debug!(count = places.len(), "Cultural places found");
        Ok(places)
    }

    #[instrument(skip(self))]
    async fn fetch_route(
        &self,
        start_node_id: i64,
        end_node_id: i64,
    ) -> Result<Vec<i64>, OverpassError> {
        let query = query::connecting_way(start_node_id, end_node_id);
        let response = self.execute(&query).await?;

        response
            .elements
            .into_iter()
            .find(|element| element.kind == ElementKind::Way)
            .map(|way| way.nodes)
            .ok_or_else(|| {
                warn!("No connecting way");
                OverpassError::RouteNotFound {
                    from: start_node_id,
                    to: end_node_id,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(OverpassClient::new(&OverpassConfig::for_testing()).is_ok());
    }
}
