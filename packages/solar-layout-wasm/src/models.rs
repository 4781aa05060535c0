// This is the models module containing the data structures shared between
// the core algorithms and the JS <-> Rust boundary.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::analysis::SolarAssumptions;

/// A WGS84-style coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }
}

/// Axis-aligned bounding box of a ring, in the ring's angular units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl RingBounds {
    pub fn width(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn mean_lat(&self) -> f64 {
        (self.min_lat + self.max_lat) / 2.0
    }
}

/// Physical footprint and rated capacity of one panel model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSpec {
    pub width_meters: f64,
    pub height_meters: f64,
    pub capacity_kw: f64,
}

impl PanelSpec {
    pub fn footprint_m2(&self) -> f64 {
        self.width_meters * self.height_meters
    }
}

/// Catalog of selectable panel models, keyed by size name.
pub type PanelCatalog = HashMap<String, PanelSpec>;

/// The built-in catalog: small 300W, standard 400W, large 500W.
pub fn default_panel_catalog() -> PanelCatalog {
    let mut catalog = PanelCatalog::new();
    catalog.insert(
        "small".to_string(),
        PanelSpec { width_meters: 1.2, height_meters: 0.8, capacity_kw: 0.3 },
    );
    catalog.insert(
        "standard".to_string(),
        PanelSpec { width_meters: 1.6, height_meters: 1.0, capacity_kw: 0.4 },
    );
    catalog.insert(
        "large".to_string(),
        PanelSpec { width_meters: 2.0, height_meters: 1.0, capacity_kw: 0.5 },
    );
    catalog
}

/// One accepted grid cell. Produced only by the packer, never mutated after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedPanel {
    pub center_lat: f64,
    pub center_lng: f64,
    pub footprint: Vec<GeoPoint>,
}

/// Area and perimeter figures derived from the current boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurements {
    pub total_area_m2: f64,
    pub obstacle_area_m2: f64,
    pub usable_area_m2: f64,
    pub perimeter_m: f64,
}

/// Capacity and generation summary for one packed layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarAnalysis {
    pub panel_count: usize,
    pub total_capacity_kw: f64,
    pub estimated_generation_kwh_year: f64,
    pub efficiency_percent: f64,
}

/// Full result of one layout computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarLayout {
    pub measurements: Measurements,
    pub panels: Vec<PlacedPanel>,
    pub analysis: SolarAnalysis,
}

/// Input for the stateless measurement entry point.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureInput {
    pub rooftop: Vec<GeoPoint>,
    #[serde(default)]
    pub obstacles: Vec<Vec<GeoPoint>>,
}

/// Input for the stateless layout entry point. Catalog and assumptions fall
/// back to the built-in defaults when absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutInput {
    pub rooftop: Vec<GeoPoint>,
    #[serde(default)]
    pub obstacles: Vec<Vec<GeoPoint>>,
    pub panel_size: String,
    #[serde(default)]
    pub catalog: Option<PanelCatalog>,
    #[serde(default)]
    pub assumptions: Option<SolarAssumptions>,
}

/// Structured layout response. User-facing conditions (no rooftop, panel too
/// large for the usable area) come back as success=false with a message
/// instead of a thrown error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub measurements: Option<Measurements>,
    pub panels: Vec<PlacedPanel>,
    pub analysis: Option<SolarAnalysis>,
}
