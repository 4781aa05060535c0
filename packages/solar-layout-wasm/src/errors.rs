// Error taxonomy for boundary and layout input problems. All validation
// happens before the packer runs, so the packer itself has no recoverable
// error paths once its inputs pass these checks.
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    Rooftop,
    Obstacle,
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryKind::Rooftop => write!(f, "rooftop"),
            BoundaryKind::Obstacle => write!(f, "obstacle"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A ring has fewer than the 3 points needed to form a polygon.
    InvalidBoundary { kind: BoundaryKind, points: usize },
    /// Measurement or packing requested with no rooftop set.
    NoRooftop,
    /// Usable area is smaller than a single panel footprint; packing is
    /// skipped instead of producing an empty grid run.
    PanelTooLarge { usable_area_m2: f64, panel_area_m2: f64 },
    /// Degenerate latitude at the poles where the longitude conversion
    /// factor is undefined. Never produced by rooftop-scale input.
    LatitudeOutOfRange(f64),
    /// Requested panel size is not in the catalog.
    UnknownPanelSize(String),
}

impl LayoutError {
    /// True for conditions meant to be shown to the user as guidance,
    /// false for fatal input-domain violations.
    pub fn is_user_condition(&self) -> bool {
        !matches!(self, LayoutError::LatitudeOutOfRange(_))
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidBoundary { kind, points } => {
                write!(f, "The {} boundary needs at least 3 points, got {}.", kind, points)
            }
            LayoutError::NoRooftop => write!(f, "Please draw a rooftop first."),
            LayoutError::PanelTooLarge { .. } => write!(
                f,
                "The usable area is too small for even one panel of the selected size."
            ),
            LayoutError::LatitudeOutOfRange(lat) => {
                write!(f, "Latitude {} is outside the supported range.", lat)
            }
            LayoutError::UnknownPanelSize(name) => {
                write!(f, "Unknown panel size '{}'.", name)
            }
        }
    }
}

impl Error for LayoutError {}
