// Grid packing of panel footprints across the rooftop bounding box.

use crate::errors::{BoundaryKind, LayoutError};
use crate::geo_math;
use crate::models::{GeoPoint, PanelSpec, PlacedPanel};
use crate::obstacles;
use crate::polygon::{self, validate_ring};

/// Tiles the rooftop bounding box with non-overlapping panel cells and
/// keeps the candidates whose center lies inside the rooftop and whose
/// corners avoid every obstacle.
///
/// The grid is anchored at the bounding box's minimum corner; leftover
/// margin is not rebalanced. Results come back in row-major order, which
/// matters only for determinism.
pub fn pack(
    rooftop: &[GeoPoint],
    obstacle_rings: &[Vec<GeoPoint>],
    spec: &PanelSpec,
) -> Result<Vec<PlacedPanel>, LayoutError> {
    validate_ring(rooftop, BoundaryKind::Rooftop)?;
    for ring in obstacle_rings {
        validate_ring(ring, BoundaryKind::Obstacle)?;
    }

    let bounds = polygon::ring_bounds(rooftop);
    let dpm = geo_math::degrees_per_meter(bounds.mean_lat())?;
    let panel_width_deg = spec.width_meters * dpm.d_lng;
    let panel_height_deg = spec.height_meters * dpm.d_lat;

    // Floored to at least one candidate cell: an oversized panel still gets
    // a single candidate, which the containment test then rejects.
    let cols = ((bounds.width() / panel_width_deg).floor() as usize).max(1);
    let rows = ((bounds.height() / panel_height_deg).floor() as usize).max(1);

    let mut panels = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            let center = GeoPoint::new(
                bounds.min_lat + (row as f64 + 0.5) * panel_height_deg,
                bounds.min_lng + (col as f64 + 0.5) * panel_width_deg,
            );

            if !polygon::point_in_ring(&center, rooftop) {
                continue;
            }
            if obstacles::intersects_any(&center, panel_width_deg, panel_height_deg, obstacle_rings)
            {
                continue;
            }

            panels.push(PlacedPanel {
                center_lat: center.lat,
                center_lng: center.lng,
                footprint: polygon::panel_corners(&center, panel_width_deg, panel_height_deg)
                    .to_vec(),
            });
        }
    }

    Ok(panels)
}
