// Planar polygon helpers operating directly on lat/lng degrees.

use crate::errors::{BoundaryKind, LayoutError};
use crate::models::{GeoPoint, RingBounds};

/// Rejects rings that cannot form a polygon. Self-intersection is not
/// checked; garbage in, garbage out.
pub fn validate_ring(ring: &[GeoPoint], kind: BoundaryKind) -> Result<(), LayoutError> {
    if ring.len() < 3 {
        return Err(LayoutError::InvalidBoundary { kind, points: ring.len() });
    }
    Ok(())
}

/// Axis-aligned bounding box of a ring.
pub fn ring_bounds(ring: &[GeoPoint]) -> RingBounds {
    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    let mut min_lng = f64::INFINITY;
    let mut max_lng = f64::NEG_INFINITY;

    for point in ring {
        min_lat = min_lat.min(point.lat);
        max_lat = max_lat.max(point.lat);
        min_lng = min_lng.min(point.lng);
        max_lng = max_lng.max(point.lng);
    }

    RingBounds { min_lat, max_lat, min_lng, max_lng }
}

/// Ray-casting (even-odd) point-in-polygon test. The ring is implicitly
/// closed. Points exactly on an edge may land on either side.
pub fn point_in_ring(point: &GeoPoint, ring: &[GeoPoint]) -> bool {
    let mut inside = false;
    let n = ring.len();

    for i in 0..n {
        let j = (i + 1) % n;
        let (lat_i, lng_i) = (ring[i].lat, ring[i].lng);
        let (lat_j, lng_j) = (ring[j].lat, ring[j].lng);

        let crosses = ((lat_i > point.lat) != (lat_j > point.lat))
            && (point.lng < (lng_j - lng_i) * (point.lat - lat_i) / (lat_j - lat_i) + lng_i);

        if crosses {
            inside = !inside;
        }
    }

    inside
}

/// Corners of an axis-aligned rectangle around a center, counter-clockwise
/// from the south-west corner. No rotation.
pub fn panel_corners(center: &GeoPoint, width_deg: f64, height_deg: f64) -> [GeoPoint; 4] {
    let half_width = width_deg / 2.0;
    let half_height = height_deg / 2.0;

    [
        GeoPoint::new(center.lat - half_height, center.lng - half_width),
        GeoPoint::new(center.lat - half_height, center.lng + half_width),
        GeoPoint::new(center.lat + half_height, center.lng + half_width),
        GeoPoint::new(center.lat + half_height, center.lng - half_width),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(1.0, 0.0),
        ]
    }

    // L-shape: the unit square with its north-east quadrant cut away.
    fn l_shape() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(0.5, 1.0),
            GeoPoint::new(0.5, 0.5),
            GeoPoint::new(1.0, 0.5),
            GeoPoint::new(1.0, 0.0),
        ]
    }

    #[test]
    fn test_validate_ring() {
        assert!(validate_ring(&unit_square(), BoundaryKind::Rooftop).is_ok());
        let short = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)];
        assert_eq!(
            validate_ring(&short, BoundaryKind::Obstacle),
            Err(LayoutError::InvalidBoundary { kind: BoundaryKind::Obstacle, points: 2 })
        );
    }

    #[test]
    fn test_ring_bounds() {
        let bounds = ring_bounds(&l_shape());
        assert_eq!(bounds.min_lat, 0.0);
        assert_eq!(bounds.max_lat, 1.0);
        assert_eq!(bounds.min_lng, 0.0);
        assert_eq!(bounds.max_lng, 1.0);
        assert_eq!(bounds.width(), 1.0);
        assert_eq!(bounds.height(), 1.0);
        assert_eq!(bounds.mean_lat(), 0.5);
    }

    #[test]
    fn test_point_in_convex_ring() {
        let square = unit_square();
        assert!(point_in_ring(&GeoPoint::new(0.5, 0.5), &square));
        assert!(point_in_ring(&GeoPoint::new(0.01, 0.99), &square));
        assert!(!point_in_ring(&GeoPoint::new(1.5, 0.5), &square));
        assert!(!point_in_ring(&GeoPoint::new(-0.1, 0.5), &square));
    }

    #[test]
    fn test_point_in_concave_ring() {
        let shape = l_shape();
        assert!(point_in_ring(&GeoPoint::new(0.25, 0.25), &shape));
        assert!(point_in_ring(&GeoPoint::new(0.25, 0.75), &shape));
        // The cut-away quadrant is outside even though it is inside the bbox.
        assert!(!point_in_ring(&GeoPoint::new(0.75, 0.75), &shape));
    }

    #[test]
    fn test_panel_corners_layout() {
        let corners = panel_corners(&GeoPoint::new(10.0, 20.0), 0.2, 0.1);
        assert_eq!(corners[0], GeoPoint::new(9.95, 19.9));
        assert_eq!(corners[1], GeoPoint::new(9.95, 20.1));
        assert_eq!(corners[2], GeoPoint::new(10.05, 20.1));
        assert_eq!(corners[3], GeoPoint::new(10.05, 19.9));
    }
}
