//! Static field diagram: bases, foul lines and distance arcs.
//!
//! The outfield arcs are *bulging* quadratic curves rather than true circles: both
//! endpoints sit on the foul lines at the arc's radius and the single control point is
//! the chord midpoint pushed outward along the center axis by `ARC_BULGE_FACTOR × r`.

use std::f64::consts::SQRT_2;

use super::projection::{project, FieldPoint};

pub const BASE_PATH_FT: f64 = 90.0;
pub const FOUL_LINE_ANGLE_DEG: f64 = 45.0;
pub const FOUL_LINE_LENGTH_FT: f64 = 320.0;
pub const ARC_RADII_FT: [f64; 2] = [140.0, 325.0];
pub const ARC_BULGE_FACTOR: f64 = 1.0;
/// Added to an arc's radius for its label.
pub const ARC_LABEL_OFFSET_FT: f64 = 75.0;
/// Label sits this far beyond the arc's radius on the center axis.
pub const ARC_LABEL_LIFT: f64 = 48.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Base {
    pub label: &'static str,
    pub position: FieldPoint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoulLine {
    pub start: FieldPoint,
    pub end: FieldPoint,
}

/// A distance-reference arc, drawn as one quadratic curve.
#[derive(Debug, Clone, PartialEq)]
pub struct BulgingArc {
    pub radius: f64,
    pub start: FieldPoint,
    pub control: FieldPoint,
    pub end: FieldPoint,
}

impl BulgingArc {
    pub fn new(radius: f64) -> Self {
        let start = project(radius, -FOUL_LINE_ANGLE_DEG);
        let end = project(radius, FOUL_LINE_ANGLE_DEG);
        let bulge = ARC_BULGE_FACTOR * radius;
        let control = FieldPoint::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0 - bulge);
        Self {
            radius,
            start,
            control,
            end,
        }
    }

    /// SVG path data: `M start Q control end`.
    pub fn path_data(&self) -> String {
        format!(
            "M {:.2} {:.2} Q {:.2} {:.2} {:.2} {:.2}",
            self.start.x, self.start.y, self.control.x, self.control.y, self.end.x, self.end.y
        )
    }

    /// Distance printed on the arc's label.
    pub fn label_distance(&self) -> f64 {
        self.radius + ARC_LABEL_OFFSET_FT
    }

    pub fn label(&self) -> String {
        format!("{} ft", self.label_distance())
    }

    pub fn label_position(&self) -> FieldPoint {
        FieldPoint::new(0.0, -self.radius - ARC_LABEL_LIFT)
    }
}

/// Event-independent description of the field landmarks.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGeometry {
    /// Home, first, second, third.
    pub bases: [Base; 4],
    pub foul_lines: [FoulLine; 2],
    pub arcs: Vec<BulgingArc>,
}

impl FieldGeometry {
    pub fn standard() -> Self {
        let home = FieldPoint::default();
        Self {
            bases: [
                Base {
                    label: "Home",
                    position: home,
                },
                Base {
                    label: "1B",
                    position: project(BASE_PATH_FT, FOUL_LINE_ANGLE_DEG),
                },
                Base {
                    label: "2B",
                    position: project(BASE_PATH_FT * SQRT_2, 0.0),
                },
                Base {
                    label: "3B",
                    position: project(BASE_PATH_FT, -FOUL_LINE_ANGLE_DEG),
                },
            ],
            foul_lines: [
                FoulLine {
                    start: home,
                    end: project(FOUL_LINE_LENGTH_FT, FOUL_LINE_ANGLE_DEG),
                },
                FoulLine {
                    start: home,
                    end: project(FOUL_LINE_LENGTH_FT, -FOUL_LINE_ANGLE_DEG),
                },
            ],
            arcs: ARC_RADII_FT.iter().map(|&r| BulgingArc::new(r)).collect(),
        }
    }

    /// Closed path through the four bases.
    pub fn diamond_path(&self) -> String {
        let mut d = String::new();
        for (i, base) in self.bases.iter().enumerate() {
            let cmd = if i == 0 { "M" } else { " L" };
            d.push_str(&format!(
                "{} {:.2} {:.2}",
                cmd, base.position.x, base.position.y
            ));
        }
        d.push_str(" Z");
        d
    }
}

impl Default for FieldGeometry {
    fn default() -> Self {
        Self::standard()
    }
}
