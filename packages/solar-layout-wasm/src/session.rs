// Caller-owned analysis session. Holds the single active rooftop, its
// obstacles, and the panel catalog for the duration of one drawing
// session; the crate keeps no state of its own between calls.

use crate::analysis::{self, SolarAssumptions};
use crate::errors::{BoundaryKind, LayoutError};
use crate::models::{
    default_panel_catalog, GeoPoint, Measurements, PanelCatalog, SolarLayout,
};
use crate::polygon::validate_ring;

#[derive(Debug, Clone)]
pub struct AnalysisSession {
    rooftop: Option<Vec<GeoPoint>>,
    obstacles: Vec<Vec<GeoPoint>>,
    catalog: PanelCatalog,
    assumptions: SolarAssumptions,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::with_config(default_panel_catalog(), SolarAssumptions::default())
    }

    pub fn with_config(catalog: PanelCatalog, assumptions: SolarAssumptions) -> Self {
        AnalysisSession { rooftop: None, obstacles: Vec::new(), catalog, assumptions }
    }

    /// Replaces the active rooftop. Obstacles from the previous rooftop are
    /// discarded; there is only ever one active rooftop.
    pub fn set_rooftop(&mut self, ring: Vec<GeoPoint>) -> Result<(), LayoutError> {
        validate_ring(&ring, BoundaryKind::Rooftop)?;
        self.rooftop = Some(ring);
        self.obstacles.clear();
        Ok(())
    }

    /// Adds an obstacle ring. Obstacles can only be added once a rooftop
    /// exists.
    pub fn add_obstacle(&mut self, ring: Vec<GeoPoint>) -> Result<(), LayoutError> {
        if self.rooftop.is_none() {
            return Err(LayoutError::NoRooftop);
        }
        validate_ring(&ring, BoundaryKind::Obstacle)?;
        self.obstacles.push(ring);
        Ok(())
    }

    /// Drops the rooftop and all obstacles, returning to the empty state.
    pub fn clear(&mut self) {
        self.rooftop = None;
        self.obstacles.clear();
    }

    pub fn has_rooftop(&self) -> bool {
        self.rooftop.is_some()
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Measures the current boundaries. Pure: repeated calls over unchanged
    /// state return identical results.
    pub fn measure(&self) -> Result<Measurements, LayoutError> {
        let rooftop = self.rooftop.as_ref().ok_or(LayoutError::NoRooftop)?;
        analysis::measure(rooftop, &self.obstacles)
    }

    /// Runs the full layout pipeline for the named catalog entry. Each call
    /// recomputes from scratch and returns a fresh panel list.
    pub fn optimize(&self, panel_size: &str) -> Result<SolarLayout, LayoutError> {
        let rooftop = self.rooftop.as_ref().ok_or(LayoutError::NoRooftop)?;
        let spec = self
            .catalog
            .get(panel_size)
            .copied()
            .ok_or_else(|| LayoutError::UnknownPanelSize(panel_size.to_string()))?;
        analysis::compute_layout(rooftop, &self.obstacles, &spec, &self.assumptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_math;

    fn rect_ring(lat: f64, lng: f64, width_m: f64, height_m: f64) -> Vec<GeoPoint> {
        let dpm = geo_math::degrees_per_meter(lat).unwrap();
        let w = width_m * dpm.d_lng;
        let h = height_m * dpm.d_lat;
        vec![
            GeoPoint::new(lat, lng),
            GeoPoint::new(lat, lng + w),
            GeoPoint::new(lat + h, lng + w),
            GeoPoint::new(lat + h, lng),
        ]
    }

    #[test]
    fn test_obstacle_requires_rooftop() {
        let mut session = AnalysisSession::new();
        let ring = rect_ring(0.0, 0.0, 2.0, 2.0);
        assert_eq!(session.add_obstacle(ring), Err(LayoutError::NoRooftop));
    }

    #[test]
    fn test_measure_requires_rooftop() {
        let session = AnalysisSession::new();
        assert_eq!(session.measure(), Err(LayoutError::NoRooftop));
        assert!(matches!(session.optimize("standard"), Err(LayoutError::NoRooftop)));
    }

    #[test]
    fn test_new_rooftop_discards_obstacles() {
        let mut session = AnalysisSession::new();
        session.set_rooftop(rect_ring(0.0, 0.0, 20.0, 10.0)).unwrap();
        session.add_obstacle(rect_ring(0.00001, 0.00001, 2.0, 2.0)).unwrap();
        session.add_obstacle(rect_ring(0.00003, 0.00003, 2.0, 2.0)).unwrap();
        assert_eq!(session.obstacle_count(), 2);

        session.set_rooftop(rect_ring(0.0, 0.0, 30.0, 15.0)).unwrap();
        assert_eq!(session.obstacle_count(), 0);
        assert!(session.has_rooftop());
    }

    #[test]
    fn test_clear_returns_to_empty_state() {
        let mut session = AnalysisSession::new();
        session.set_rooftop(rect_ring(0.0, 0.0, 20.0, 10.0)).unwrap();
        session.add_obstacle(rect_ring(0.00001, 0.00001, 2.0, 2.0)).unwrap();

        session.clear();
        assert!(!session.has_rooftop());
        assert_eq!(session.obstacle_count(), 0);
        assert_eq!(session.measure(), Err(LayoutError::NoRooftop));
    }

    #[test]
    fn test_rejects_short_rooftop() {
        let mut session = AnalysisSession::new();
        let short = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.001)];
        assert_eq!(
            session.set_rooftop(short),
            Err(LayoutError::InvalidBoundary { kind: BoundaryKind::Rooftop, points: 2 })
        );
        assert!(!session.has_rooftop());
    }

    #[test]
    fn test_unknown_panel_size() {
        let mut session = AnalysisSession::new();
        session.set_rooftop(rect_ring(0.0, 0.0, 20.0, 10.0)).unwrap();
        assert_eq!(
            session.optimize("gigantic"),
            Err(LayoutError::UnknownPanelSize("gigantic".to_string()))
        );
    }

    #[test]
    fn test_optimize_is_repeatable() {
        let mut session = AnalysisSession::new();
        session.set_rooftop(rect_ring(40.7, -74.0, 20.0, 10.0)).unwrap();
        session.add_obstacle(rect_ring(40.70001, -73.99998, 3.0, 3.0)).unwrap();

        let first = session.optimize("standard").unwrap();
        let second = session.optimize("standard").unwrap();
        assert_eq!(first, second);
        assert!(!first.panels.is_empty());
        assert_eq!(first.analysis.panel_count, first.panels.len());
    }

    #[test]
    fn test_optimize_reports_panel_too_large() {
        let mut session = AnalysisSession::new();
        session.set_rooftop(rect_ring(0.0, 0.0, 1.0, 1.0)).unwrap();
        let result = session.optimize("large");
        assert!(matches!(result, Err(LayoutError::PanelTooLarge { .. })));
        // Measurements remain available even when packing is skipped.
        assert!(session.measure().is_ok());
    }

    #[test]
    fn test_custom_catalog_injection() {
        let mut catalog = PanelCatalog::new();
        catalog.insert(
            "compact".to_string(),
            crate::models::PanelSpec { width_meters: 1.0, height_meters: 0.5, capacity_kw: 0.2 },
        );
        let mut session = AnalysisSession::with_config(catalog, SolarAssumptions::default());
        session.set_rooftop(rect_ring(0.0, 0.0, 10.0, 5.0)).unwrap();

        assert!(session.optimize("standard").is_err());
        let layout = session.optimize("compact").unwrap();
        assert!(!layout.panels.is_empty());
        assert!(
            (layout.analysis.total_capacity_kw - layout.panels.len() as f64 * 0.2).abs() < 1e-12
        );
    }
}
