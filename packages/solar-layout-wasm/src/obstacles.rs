// Obstacle overlap testing for candidate panel footprints.

use crate::models::GeoPoint;
use crate::polygon::{panel_corners, point_in_ring};

/// True when any corner of the candidate panel lies inside any obstacle
/// ring. Corner sampling only: a panel body crossing a thin obstacle
/// between two corners is not detected.
pub fn intersects_any(
    center: &GeoPoint,
    width_deg: f64,
    height_deg: f64,
    obstacles: &[Vec<GeoPoint>],
) -> bool {
    let corners = panel_corners(center, width_deg, height_deg);
    obstacles
        .iter()
        .any(|obstacle| corners.iter().any(|corner| point_in_ring(corner, obstacle)))
}
