// Measurement aggregation and capacity/generation summaries.

use serde::{Deserialize, Serialize};

use crate::errors::{BoundaryKind, LayoutError};
use crate::geo_math;
use crate::models::{GeoPoint, Measurements, PanelSpec, PlacedPanel, SolarAnalysis, SolarLayout};
use crate::packer;
use crate::polygon::validate_ring;

/// Rough annual yield per installed kilowatt, in kWh/kW/year. Not a
/// physical irradiance model; override via [`SolarAssumptions`].
pub const ANNUAL_YIELD_KWH_PER_KW: f64 = 1500.0;

/// Reference capacity density (kW per m2 of rooftop) that the efficiency
/// percentage compares against. A layout matching this density scores 100.
pub const REFERENCE_DENSITY_KW_PER_M2: f64 = 0.15;

/// Tunable constants behind the generation and efficiency figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolarAssumptions {
    pub annual_yield_kwh_per_kw: f64,
    pub reference_density_kw_per_m2: f64,
}

impl Default for SolarAssumptions {
    fn default() -> Self {
        SolarAssumptions {
            annual_yield_kwh_per_kw: ANNUAL_YIELD_KWH_PER_KW,
            reference_density_kw_per_m2: REFERENCE_DENSITY_KW_PER_M2,
        }
    }
}

/// Computes total/obstacle/usable area and rooftop perimeter. Usable area is
/// clamped at zero when obstacles overlap each other or exceed the rooftop;
/// obstacle perimeters are not included.
pub fn measure(
    rooftop: &[GeoPoint],
    obstacles: &[Vec<GeoPoint>],
) -> Result<Measurements, LayoutError> {
    validate_ring(rooftop, BoundaryKind::Rooftop)?;
    for ring in obstacles {
        validate_ring(ring, BoundaryKind::Obstacle)?;
    }

    let total_area_m2 = geo_math::ring_area_m2(rooftop);
    let obstacle_area_m2: f64 = obstacles.iter().map(|ring| geo_math::ring_area_m2(ring)).sum();

    Ok(Measurements {
        total_area_m2,
        obstacle_area_m2,
        usable_area_m2: (total_area_m2 - obstacle_area_m2).max(0.0),
        perimeter_m: geo_math::ring_perimeter_m(rooftop),
    })
}

/// Derives the capacity/generation summary from a packed panel list.
pub fn summarize(
    panels: &[PlacedPanel],
    spec: &PanelSpec,
    measurements: &Measurements,
    assumptions: &SolarAssumptions,
) -> SolarAnalysis {
    let panel_count = panels.len();
    let total_capacity_kw = panel_count as f64 * spec.capacity_kw;

    let efficiency_percent = if measurements.total_area_m2 > 0.0 {
        total_capacity_kw / (measurements.total_area_m2 * assumptions.reference_density_kw_per_m2)
            * 100.0
    } else {
        0.0
    };

    SolarAnalysis {
        panel_count,
        total_capacity_kw,
        estimated_generation_kwh_year: total_capacity_kw * assumptions.annual_yield_kwh_per_kw,
        efficiency_percent,
    }
}

/// Full pipeline: validate, measure, gate on usable area, pack, summarize.
/// The gate runs before packing so an undersized rooftop reports the
/// too-small condition instead of an empty grid run.
pub fn compute_layout(
    rooftop: &[GeoPoint],
    obstacles: &[Vec<GeoPoint>],
    spec: &PanelSpec,
    assumptions: &SolarAssumptions,
) -> Result<SolarLayout, LayoutError> {
    let measurements = measure(rooftop, obstacles)?;

    if measurements.usable_area_m2 < spec.footprint_m2() {
        return Err(LayoutError::PanelTooLarge {
            usable_area_m2: measurements.usable_area_m2,
            panel_area_m2: spec.footprint_m2(),
        });
    }

    let panels = packer::pack(rooftop, obstacles, spec)?;
    let analysis = summarize(&panels, spec, &measurements, assumptions);

    Ok(SolarLayout { measurements, panels, analysis })
}
