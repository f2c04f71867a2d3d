//! Overpass integration for Onvaou
//!
//! Looks up cultural points of interest (museums, theatres, art galleries,
//! castles) around a destination using the public
//! [Overpass API](https://wiki.openstreetmap.org/wiki/Overpass_API).
//!
//! # Architecture
//!
//! [`CulturalPlacesClient`] defines the interface, implemented by
//! [`OverpassClient`]. Queries are built by the functions in [`query`] and
//! sent as the `data` parameter of a GET to the interpreter endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_overpass::{CulturalPlacesClient, OverpassClient, OverpassConfig};
//!
//! let client = OverpassClient::new(&OverpassConfig::default())?;
//! let places = client.fetch_cultural_places(48.8443, 2.3744).await?;
//! ```

mod client;
mod config;
mod error;
mod models;
pub mod query;

pub use client::{CulturalPlacesClient, OverpassClient};
pub use config::OverpassConfig;
pub use error::OverpassError;
pub use models::{OverpassCenter, OverpassElement, OverpassResponse};
