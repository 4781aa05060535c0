use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

// Console module for logging
pub mod console;
// Error taxonomy for boundary and layout input problems
pub mod errors;
// Shared data structures
pub mod models;
// Spherical measurement and degree<->meter conversion
pub mod geo_math;
// Planar polygon helpers: bounds, containment, rectangle corners
pub mod polygon;
// Obstacle overlap testing
pub mod obstacles;
// Panel grid packing
pub mod packer;
// Measurement aggregation and capacity summaries
pub mod analysis;
// Caller-owned analysis session
pub mod session;

pub use errors::LayoutError;
pub use session::AnalysisSession;

// Enable better panic messages in console during development
#[cfg(feature = "console_error_panic_hook")]
pub use console_error_panic_hook::set_once as set_panic_hook;

// Use the macro from our console module
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => ($crate::console::log(&format!($($t)*)))
}

use std::sync::Once;
static INIT: Once = Once::new();

// This sets up the wasm_bindgen start functionality
#[wasm_bindgen(start)]
pub fn start() {
    INIT.call_once(|| {
        // Set the panic hook for better error messages
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        console_log!("Solar layout WASM module initialized");
    });
}

fn parse_ring(ring_json: &str) -> Result<Vec<models::GeoPoint>, JsValue> {
    serde_json::from_str(ring_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse ring: {}", e)))
}

// Wraps a user-facing condition in a success=false response instead of a
// thrown error, so the caller always gets either a panel list or a reason.
fn respond_condition(err: LayoutError) -> Result<JsValue, JsValue> {
    console_log!("Layout skipped: {}", err);
    Ok(to_value(&models::LayoutResponse {
        success: false,
        message: Some(err.to_string()),
        measurements: None,
        panels: Vec::new(),
        analysis: None,
    })?)
}

fn respond_layout(layout: models::SolarLayout) -> Result<JsValue, JsValue> {
    Ok(to_value(&models::LayoutResponse {
        success: true,
        message: None,
        measurements: Some(layout.measurements),
        panels: layout.panels,
        analysis: Some(layout.analysis),
    })?)
}

/// Stateless measurement of a rooftop + obstacles payload.
#[wasm_bindgen]
pub fn measure_boundaries(input_json: &str) -> Result<JsValue, JsValue> {
    let input: models::MeasureInput = serde_json::from_str(input_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse input: {}", e)))?;

    let measurements = analysis::measure(&input.rooftop, &input.obstacles)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(to_value(&measurements)?)
}

/// Stateless full pipeline: validate, measure, gate, pack, summarize.
#[wasm_bindgen]
pub fn compute_panel_layout(input_json: &str) -> Result<JsValue, JsValue> {
    console_log!("Starting panel layout computation");

    let input: models::LayoutInput = serde_json::from_str(input_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse input: {}", e)))?;

    let catalog = input.catalog.unwrap_or_else(models::default_panel_catalog);
    let assumptions = input.assumptions.unwrap_or_default();

    let spec = match catalog.get(&input.panel_size) {
        Some(spec) => *spec,
        None => return respond_condition(LayoutError::UnknownPanelSize(input.panel_size)),
    };

    match analysis::compute_layout(&input.rooftop, &input.obstacles, &spec, &assumptions) {
        Ok(layout) => {
            console_log!("Placed {} panels", layout.panels.len());
            respond_layout(layout)
        }
        Err(err) if err.is_user_condition() => respond_condition(err),
        Err(err) => Err(JsValue::from_str(&err.to_string())),
    }
}

/// The built-in panel catalog (small/standard/large).
#[wasm_bindgen]
pub fn default_panel_catalog() -> Result<JsValue, JsValue> {
    Ok(to_value(&models::default_panel_catalog())?)
}

/// Formats an area for display, switching to km2 above one million m2.
#[wasm_bindgen]
pub fn format_area(area_m2: f64) -> String {
    if area_m2 > 1_000_000.0 {
        format!("{:.2} km²", area_m2 / 1_000_000.0)
    } else {
        format!("{:.2} m²", area_m2)
    }
}

/// Formats a perimeter for display, switching to km above 1000 m.
#[wasm_bindgen]
pub fn format_perimeter(perimeter_m: f64) -> String {
    if perimeter_m > 1000.0 {
        format!("{:.2} km", perimeter_m / 1000.0)
    } else {
        format!("{:.2} m", perimeter_m)
    }
}

/// JS-facing wrapper around [`AnalysisSession`]. The drawing collaborator
/// owns one of these per analysis session and feeds it rings as the user
/// draws.
#[wasm_bindgen]
pub struct SolarSession {
    inner: AnalysisSession,
}

impl Default for SolarSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl SolarSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SolarSession {
        SolarSession { inner: AnalysisSession::new() }
    }

    /// Builds a session with a caller-supplied catalog and assumptions.
    pub fn with_config(catalog_json: &str, assumptions_json: &str) -> Result<SolarSession, JsValue> {
        let catalog: models::PanelCatalog = serde_json::from_str(catalog_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse catalog: {}", e)))?;
        let assumptions: analysis::SolarAssumptions = serde_json::from_str(assumptions_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse assumptions: {}", e)))?;
        Ok(SolarSession { inner: AnalysisSession::with_config(catalog, assumptions) })
    }

    pub fn set_rooftop(&mut self, ring_json: &str) -> Result<(), JsValue> {
        let ring = parse_ring(ring_json)?;
        self.inner
            .set_rooftop(ring)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn add_obstacle(&mut self, ring_json: &str) -> Result<(), JsValue> {
        let ring = parse_ring(ring_json)?;
        self.inner.add_obstacle(ring).map_err(|e| match e {
            LayoutError::NoRooftop => {
                JsValue::from_str("Please draw a rooftop first before adding obstacles.")
            }
            other => JsValue::from_str(&other.to_string()),
        })
    }

    pub fn has_rooftop(&self) -> bool {
        self.inner.has_rooftop()
    }

    pub fn obstacle_count(&self) -> usize {
        self.inner.obstacle_count()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn measure(&self) -> Result<JsValue, JsValue> {
        match self.inner.measure() {
            Ok(measurements) => Ok(to_value(&measurements)?),
            Err(err) => Err(JsValue::from_str(&err.to_string())),
        }
    }

    pub fn optimize(&self, panel_size: &str) -> Result<JsValue, JsValue> {
        match self.inner.optimize(panel_size) {
            Ok(layout) => {
                console_log!("Placed {} panels", layout.panels.len());
                respond_layout(layout)
            }
            Err(err) if err.is_user_condition() => respond_condition(err),
            Err(err) => Err(JsValue::from_str(&err.to_string())),
        }
    }
}
