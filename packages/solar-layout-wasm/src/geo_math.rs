// Spherical measurement and local degree<->meter conversion.
//
// Reporting (area, perimeter) runs on spherical-earth formulas; grid
// geometry uses the flat-earth degrees-per-meter approximation below. The
// two paths deliberately do not share constants: measurement stays accurate
// while footprint sizing stays cheap.
use geo::{ChamberlainDuquetteArea, Distance, Haversine};
use geo_types::{Coord, LineString, Point, Polygon};

use crate::errors::LayoutError;
use crate::models::GeoPoint;

/// Meters spanned by one degree of latitude in the local planar model.
pub const METERS_PER_DEGREE_LAT: f64 = 111_111.0;

/// Local conversion factors from one meter to angular degrees at a given
/// latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreesPerMeter {
    pub d_lat: f64,
    pub d_lng: f64,
}

fn to_polygon(ring: &[GeoPoint]) -> Polygon<f64> {
    let coords: Vec<Coord<f64>> = ring.iter().map(|p| Coord { x: p.lng, y: p.lat }).collect();
    // Polygon::new closes the exterior ring if the first point is not repeated.
    Polygon::new(LineString::new(coords), vec![])
}

/// Spherical area of a ring in square meters. Degenerate rings measure zero.
pub fn ring_area_m2(ring: &[GeoPoint]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    to_polygon(ring).chamberlain_duquette_unsigned_area()
}

/// Great-circle perimeter of a ring in meters, wrapping last -> first.
pub fn ring_perimeter_m(ring: &[GeoPoint]) -> f64 {
    if ring.len() < 2 {
        return 0.0;
    }
    let mut perimeter = 0.0;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        perimeter += Haversine::distance(Point::new(a.lng, a.lat), Point::new(b.lng, b.lat));
    }
    perimeter
}

/// Degrees of latitude and longitude per meter at the given latitude.
///
/// One degree of latitude is treated as a constant 111,111 m; one degree of
/// longitude shrinks with cos(latitude). The cosine vanishes at the poles,
/// which the rooftop domain never reaches, so that input is rejected
/// outright.
pub fn degrees_per_meter(latitude: f64) -> Result<DegreesPerMeter, LayoutError> {
    if !latitude.is_finite() || latitude.abs() >= 90.0 {
        return Err(LayoutError::LatitudeOutOfRange(latitude));
    }
    let meters_per_degree_lng = METERS_PER_DEGREE_LAT * latitude.to_radians().cos();
    Ok(DegreesPerMeter {
        d_lat: 1.0 / METERS_PER_DEGREE_LAT,
        d_lng: 1.0 / meters_per_degree_lng,
    })
}
