//! Template engine module for rendering the trip page
//!
//! Uses Tera with the page template embedded at compile time. HTML templates
//! are auto-escaped; the map payload is inserted pre-serialized.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::{PageData, TemplateEngine};
//!
//! let engine = TemplateEngine::new()?;
//! let html = engine.render_page(&page)?;
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use thiserror::Error;

/// Name of the trip page template
pub const INDEX_TEMPLATE: &str = "index.html";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(format!("{e}: {}", error_chain(&e))),
        }
    }
}

/// Tera keeps the useful part of a render error in its source chain
fn error_chain(e: &tera::Error) -> String {
    let mut causes = Vec::new();
    let mut source = std::error::Error::source(e);
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }
    causes.join(": ")
}

/// One entry of the transport mode selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// One named place in the list next to the detail map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceItem {
    pub emoji: String,
    pub name: String,
    /// Category label
    pub label: String,
}

/// Booking links under a trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingLinks {
    pub sncf_connect_url: String,
    pub trainline_url: String,
}

/// Trip section of the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripView {
    /// "origin → destination"
    pub headline: String,
    pub line: String,
    pub places: Vec<PlaceItem>,
    pub places_error: Option<String>,
    /// Marker data for both maps, already JSON
    pub map_json: String,
}

/// Everything the trip page renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    pub stations: Vec<String>,
    pub selected_station: String,
    pub modes: Vec<ModeOption>,
    /// Schedule resources that failed to load
    pub load_failures: Vec<String>,
    pub notice: Option<String>,
    pub trip: Option<TripView>,
    pub booking: BookingLinks,
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const INDEX: &str = include_str!("index.html");
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine").finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a template engine with the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html", ".htm", ".xml"]);
        tera.add_raw_template(INDEX_TEMPLATE, embedded::INDEX)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render the trip page
    pub fn render_page(&self, page: &PageData) -> Result<String, TemplateError> {
        let context =
            Context::from_serialize(page).map_err(|e| TemplateError::Render(e.to_string()))?;
        self.tera
            .render(INDEX_TEMPLATE, &context)
            .map_err(TemplateError::from)
    }
}

/// Escape text for contexts that Tera does not reach, such as map tooltips
#[must_use]
pub fn escape_text(text: &str) -> String {
    tera::escape_html(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle_page() -> PageData {
        PageData {
            stations: vec!["Lyon Part-Dieu".to_string(), "Annecy".to_string()],
            selected_station: "Annecy".to_string(),
            modes: vec![
                ModeOption {
                    value: "TGV".to_string(),
                    label: "TGV".to_string(),
                    selected: false,
                },
                ModeOption {
                    value: "TER".to_string(),
                    label: "TER".to_string(),
                    selected: true,
                },
            ],
            load_failures: vec![],
            notice: None,
            trip: None,
            booking: BookingLinks {
                sncf_connect_url: "https://www.sncf-connect.com/".to_string(),
                trainline_url: "https://www.thetrainline.com/fr".to_string(),
            },
        }
    }

    fn trip_view() -> TripView {
        TripView {
            headline: "Lyon Part-Dieu → Paris Gare de Lyon".to_string(),
            line: "TGV INOUI".to_string(),
            places: vec![PlaceItem {
                emoji: "🏛️".to_string(),
                name: "Musée d'Orsay".to_string(),
                label: "musée".to_string(),
            }],
            places_error: None,
            map_json: r#"{"places":[]}"#.to_string(),
        }
    }

    #[test]
    fn test_template_engine_creation() {
        let engine = TemplateEngine::new().unwrap();
        assert!(engine.tera.get_template_names().any(|n| n == INDEX_TEMPLATE));
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(
            escape_text(r#"<img src=x onerror="alert(1)">"#),
            "&lt;img src=x onerror=&quot;alert(1)&quot;&gt;"
        );
        assert_eq!(escape_text("Musée des Confluences"), "Musée des Confluences");
    }

    #[test]
    fn test_idle_page() {
        let html = TemplateEngine::new().unwrap().render_page(&idle_page()).unwrap();
        assert!(html.contains("Générer un trajet"));
        assert!(html.contains(r#"<option value="Annecy" selected>"#));
        assert!(html.contains(r#"<option value="TER" selected>"#));
        assert!(!html.contains("overview-map"));
    }

    #[test]
    fn test_notice_and_failures() {
        let mut page = idle_page();
        page.notice = Some("Aucun trajet trouvé pour cette gare.".to_string());
        page.load_failures = vec!["Erreur lors du téléchargement de RENFE".to_string()];

        let html = TemplateEngine::new().unwrap().render_page(&page).unwrap();
        assert!(html.contains("Aucun trajet trouvé pour cette gare."));
        assert!(html.contains("Erreur lors du téléchargement de RENFE"));
    }

    #[test]
    fn test_trip_page() {
        let mut page = idle_page();
        page.trip = Some(trip_view());

        let html = TemplateEngine::new().unwrap().render_page(&page).unwrap();
        assert!(html.contains("Lyon Part-Dieu → Paris Gare de Lyon"));
        assert!(html.contains("(TGV INOUI)"));
        assert!(html.contains("overview-map"));
        assert!(html.contains("detail-map"));
        assert!(html.contains("🏛️ Musée d&#x27;Orsay (musée)"));
        assert!(html.contains(r#"{"places":[]}"#));
        assert!(html.contains("Retour au générateur"));
        assert!(html.contains("www.thetrainline.com"));
    }

    #[test]
    fn test_places_error_is_shown() {
        let mut page = idle_page();
        let mut trip = trip_view();
        trip.places = vec![];
        trip.places_error = Some("Erreur Overpass".to_string());
        page.trip = Some(trip);

        let html = TemplateEngine::new().unwrap().render_page(&page).unwrap();
        assert!(html.contains("Erreur Overpass"));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn test_station_names_are_escaped() {
        let mut page = idle_page();
        page.stations = vec!["<script>".to_string()];
        let html = TemplateEngine::new().unwrap().render_page(&page).unwrap();
        assert!(html.contains("&lt;script&gt;"));
    }
}
