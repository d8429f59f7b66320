//! Polar → Cartesian projection of batted balls.

use serde::Serialize;

use super::geometry::FOUL_LINE_ANGLE_DEG;
use crate::events::HitEvent;

// Rounding slack for points computed exactly on a foul line.
const FAIR_EPSILON_DEG: f64 = 1e-9;

/// A point on the field plane. Home plate is the origin and the field extends
/// toward negative `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FieldPoint {
    pub x: f64,
    pub y: f64,
}

impl FieldPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Project a batted ball's landing spot.
    pub fn from_event(event: &HitEvent) -> Self {
        project(event.hit_distance, event.exit_direction)
    }

    pub fn distance_to(&self, other: FieldPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Degrees clockwise from the center axis, in `(-180, 180]`.
    pub fn direction_deg(&self) -> f64 {
        self.x.atan2(-self.y).to_degrees()
    }

    /// Whether the point lies between the foul lines. Home plate counts as fair.
    pub fn is_fair(&self) -> bool {
        if self.x == 0.0 && self.y == 0.0 {
            return true;
        }
        self.direction_deg().abs() <= FOUL_LINE_ANGLE_DEG + FAIR_EPSILON_DEG
    }
}

/// Map `(distance, direction)` to field coordinates.
///
/// `direction` is in degrees clockwise from the center axis. No range checks are
/// applied; directions past the foul lines simply plot outside them.
///
/// # Examples
///
/// ```rust
/// use spray_chart::field::project;
///
/// let p = project(350.0, 0.0);
/// assert!(p.x.abs() < 1e-9);
/// assert!((p.y + 350.0).abs() < 1e-9);
/// ```
pub fn project(distance: f64, direction_deg: f64) -> FieldPoint {
    let angle = direction_deg.to_radians();
    FieldPoint {
        x: distance * angle.sin(),
        y: -distance * angle.cos(),
    }
}

/// Project every event, preserving order.
pub fn project_all(events: &[HitEvent]) -> Vec<FieldPoint> {
    events.iter().map(FieldPoint::from_event).collect()
}
