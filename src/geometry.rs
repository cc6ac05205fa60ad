//! Polylines, point rounding, and the bounding box handed to renderers.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One continuous stroke: an ordered run of connected points.
/// Emitted polylines always hold at least two points.
pub type Polyline = Vec<DVec2>;

/// Number of decimal digits kept on every emitted point.
pub const PRECISION_DIGITS: i32 = 5;

/// Rounds both coordinates to [`PRECISION_DIGITS`] decimal places.
pub fn round_point(p: DVec2) -> DVec2 {
    DVec2::new(round_coord(p.x), round_coord(p.y))
}

/// Rounds the exact decimal expansion of `v`; 0.123455 is stored as
/// 0.1234549999... and must round down.
fn round_coord(v: f64) -> f64 {
    format!("{:.*}", PRECISION_DIGITS as usize, v)
        .parse()
        .unwrap_or(v)
}

/// Axis-aligned bounding box over a set of polylines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// Min/max over every point of every polyline, or `None` if there are no points.
    pub fn from_polylines(polylines: &[Polyline]) -> Option<Self> {
        let mut points = polylines.iter().flatten();
        let first = *points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }
}

/// The interpreted geometry of an L-System, ready for an external writer
/// (e.g. an SVG viewbox plus one unfilled stroked path per polyline).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    /// Polylines in completion order.
    pub polylines: Vec<Polyline>,

    /// `None` when nothing was drawn.
    pub bounds: Option<Bounds>,
}

impl Drawing {
    pub fn new(polylines: Vec<Polyline>) -> Self {
        let bounds = Bounds::from_polylines(&polylines);
        Self { polylines, bounds }
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }

    /// Total number of points across all polylines.
    pub fn point_count(&self) -> usize {
        self.polylines.iter().map(Vec::len).sum()
    }
}
