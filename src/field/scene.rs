//! Declarative scene description.
//!
//! [`build_scene`] is a pure mapping from the field geometry, the projected points and
//! a hover snapshot to a flat list of shapes. It is recomputed on every state change;
//! nothing is mutated in place.

use serde::Serialize;

use super::{
    geometry::FieldGeometry,
    hover::{HoverDetail, HoverSnapshot, PointId},
    projection::FieldPoint,
};
use crate::events::{HitEvent, Outcome};

pub const SCENE_WIDTH: u32 = 1000;
pub const SCENE_HEIGHT: u32 = 900;
/// `min-x min-y width height`
pub const VIEW_BOX: [f64; 4] = [-400.0, -500.0, 800.0, 800.0];

pub const MARKER_RADIUS: f64 = 4.0;
pub const MARKER_RADIUS_ACTIVE: f64 = 6.0;
pub const MARKER_OPACITY: f64 = 0.8;
/// Interaction disc around each marker; wider than the marker to ease targeting.
pub const HIT_AREA_RADIUS: f64 = 10.0;

const BASE_MARKER_SIZE: f64 = 4.0;
const BASE_LABEL_OFFSET: f64 = 5.0;
const FIELD_LABEL_SIZE: f64 = 10.0;

const PANEL_WIDTH: f64 = 200.0;
const PANEL_HEIGHT: f64 = 140.0;
const PANEL_RISE: f64 = 120.0;
const PANEL_CORNER: f64 = 5.0;
const PANEL_PADDING: f64 = 10.0;
const PANEL_LINE_HEIGHT: f64 = 20.0;

const LEGEND_ORIGIN: (f64, f64) = (-380.0, -480.0);
const LEGEND_ROW_HEIGHT: f64 = 20.0;
const LEGEND_SWATCH: f64 = 15.0;
const LEGEND_LABEL_SIZE: f64 = 12.0;

const INK: &str = "#000000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Start,
    Middle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Path {
        d: String,
        stroke: &'static str,
        stroke_width: f64,
        dashed: bool,
    },
    Line {
        from: FieldPoint,
        to: FieldPoint,
        stroke: &'static str,
        stroke_width: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: &'static str,
        stroke: Option<&'static str>,
        corner_radius: f64,
    },
    /// A plotted batted ball. `foul` marks landings outside the foul lines.
    Marker {
        point: PointId,
        center: FieldPoint,
        radius: f64,
        fill: &'static str,
        opacity: f64,
        foul: bool,
    },
    /// Invisible pointer target for a marker.
    HitArea {
        point: PointId,
        center: FieldPoint,
        radius: f64,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        size: Option<f64>,
        anchor: Anchor,
    },
    Group {
        dx: f64,
        dy: f64,
        opacity: f64,
        children: Vec<Shape>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub view_box: [f64; 4],
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Markers in draw order.
    pub fn markers(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::Marker { .. }))
    }
}

fn text(x: f64, y: f64, content: impl Into<String>, size: Option<f64>) -> Shape {
    Shape::Text {
        x,
        y,
        content: content.into(),
        size,
        anchor: Anchor::Start,
    }
}

fn field_shapes(geometry: &FieldGeometry) -> Vec<Shape> {
    let mut shapes = vec![Shape::Path {
        d: geometry.diamond_path(),
        stroke: INK,
        stroke_width: 2.0,
        dashed: false,
    }];

    for arc in &geometry.arcs {
        let label_at = arc.label_position();
        shapes.push(Shape::Path {
            d: arc.path_data(),
            stroke: INK,
            stroke_width: 1.0,
            dashed: true,
        });
        shapes.push(Shape::Text {
            x: label_at.x,
            y: label_at.y,
            content: arc.label(),
            size: Some(FIELD_LABEL_SIZE),
            anchor: Anchor::Middle,
        });
    }

    for line in &geometry.foul_lines {
        shapes.push(Shape::Line {
            from: line.start,
            to: line.end,
            stroke: INK,
            stroke_width: 2.0,
        });
    }

    for base in &geometry.bases {
        let half = BASE_MARKER_SIZE / 2.0;
        shapes.push(Shape::Rect {
            x: base.position.x - half,
            y: base.position.y - half,
            width: BASE_MARKER_SIZE,
            height: BASE_MARKER_SIZE,
            fill: INK,
            stroke: None,
            corner_radius: 0.0,
        });
        shapes.push(text(
            base.position.x + BASE_LABEL_OFFSET,
            base.position.y + BASE_LABEL_OFFSET,
            base.label,
            Some(FIELD_LABEL_SIZE),
        ));
    }

    shapes
}

fn detail_panel(at: FieldPoint, detail: &HoverDetail, opacity: f64) -> Shape {
    let mut children = vec![Shape::Rect {
        x: 0.0,
        y: 0.0,
        width: PANEL_WIDTH,
        height: PANEL_HEIGHT,
        fill: "white",
        stroke: Some("black"),
        corner_radius: PANEL_CORNER,
    }];
    children.extend(detail.lines().into_iter().enumerate().map(|(i, line)| {
        text(
            PANEL_PADDING,
            PANEL_LINE_HEIGHT * (i as f64 + 1.0),
            line,
            None,
        )
    }));

    Shape::Group {
        dx: at.x,
        dy: at.y - PANEL_RISE,
        opacity,
        children,
    }
}

fn legend() -> Shape {
    let rows = Outcome::KNOWN
        .iter()
        .enumerate()
        .map(|(i, outcome)| Shape::Group {
            dx: 0.0,
            dy: i as f64 * LEGEND_ROW_HEIGHT,
            opacity: 1.0,
            children: vec![
                Shape::Rect {
                    x: 0.0,
                    y: 0.0,
                    width: LEGEND_SWATCH,
                    height: LEGEND_SWATCH,
                    fill: outcome.color(),
                    stroke: None,
                    corner_radius: 0.0,
                },
                text(20.0, 12.0, outcome.to_string(), Some(LEGEND_LABEL_SIZE)),
            ],
        })
        .collect();

    Shape::Group {
        dx: LEGEND_ORIGIN.0,
        dy: LEGEND_ORIGIN.1,
        opacity: 1.0,
        children: rows,
    }
}

/// Build the full scene.
///
/// `points[i]` must be the projection of `events[i]`. The detail panel is drawn last
/// so it sits above every marker.
pub fn build_scene(
    geometry: &FieldGeometry,
    events: &[HitEvent],
    points: &[FieldPoint],
    hover: HoverSnapshot,
) -> Scene {
    let mut shapes = field_shapes(geometry);

    for (id, (event, &center)) in events.iter().zip(points).enumerate() {
        let radius = if hover.is_enlarged(id) {
            MARKER_RADIUS_ACTIVE
        } else {
            MARKER_RADIUS
        };
        shapes.push(Shape::Marker {
            point: id,
            center,
            radius,
            fill: event.outcome.color(),
            opacity: MARKER_OPACITY,
            foul: !center.is_fair(),
        });
        shapes.push(Shape::HitArea {
            point: id,
            center,
            radius: HIT_AREA_RADIUS,
        });
    }

    if let Some(id) = hover.active {
        if let (Some(event), Some(&at)) = (events.get(id), points.get(id)) {
            shapes.push(detail_panel(
                at,
                &HoverDetail::from_event(event),
                hover.opacity,
            ));
        }
    }

    shapes.push(legend());

    Scene {
        width: SCENE_WIDTH,
        height: SCENE_HEIGHT,
        view_box: VIEW_BOX,
        shapes,
    }
}
