//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod places_adapter;
mod schedule_loader;

pub use places_adapter::OverpassPlacesAdapter;
pub use schedule_loader::load_schedules;
