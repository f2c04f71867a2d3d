//! Cultural places port
//!
//! Defines how the application looks up points of interest around a
//! destination. Adapters in the infrastructure layer implement this port
//! using a geographic query service.

use async_trait::async_trait;
use domain::{CulturalPlace, GeoLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for cultural place lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CulturalPlacesPort: Send + Sync {
    /// Cultural places near a location
    async fn find_cultural_places(
        &self,
        location: GeoLocation,
    ) -> Result<Vec<CulturalPlace>, ApplicationError>;

    /// Node ids along the first way connecting two map nodes
    async fn find_route(
        &self,
        start_node_id: i64,
        end_node_id: i64,
    ) -> Result<Vec<i64>, ApplicationError>;
}
