//! SVG serialization of a [`Scene`].

use std::fmt::Write;

use super::scene::{Anchor, Scene, Shape};

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_shape(out: &mut String, shape: &Shape) {
    // Writing into a String cannot fail.
    let _ = match shape {
        Shape::Path {
            d,
            stroke,
            stroke_width,
            dashed,
        } => {
            let dash = if *dashed {
                r#" stroke-dasharray="5,5""#
            } else {
                ""
            };
            writeln!(
                out,
                r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"{}/>"#,
                d, stroke, stroke_width, dash
            )
        }
        Shape::Line {
            from,
            to,
            stroke,
            stroke_width,
        } => writeln!(
            out,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
            from.x, from.y, to.x, to.y, stroke, stroke_width
        ),
        Shape::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
            corner_radius,
        } => {
            let stroke = stroke.unwrap_or("none");
            writeln!(
                out,
                r#"<rect x="{:.2}" y="{:.2}" width="{}" height="{}" rx="{}" ry="{}" fill="{}" stroke="{}"/>"#,
                x, y, width, height, corner_radius, corner_radius, fill, stroke
            )
        }
        Shape::Marker {
            point,
            center,
            radius,
            fill,
            opacity,
            foul,
        } => {
            let (class, outline) = if *foul {
                ("hit foul", r#" stroke="black" stroke-dasharray="1,1""#)
            } else {
                ("hit", "")
            };
            writeln!(
                out,
                r#"<circle class="{}" data-point="{}" cx="{:.2}" cy="{:.2}" r="{}" fill="{}" opacity="{}"{}/>"#,
                class, point, center.x, center.y, radius, fill, opacity, outline
            )
        }
        Shape::HitArea {
            point,
            center,
            radius,
        } => writeln!(
            out,
            r#"<circle class="hit-area" data-point="{}" cx="{:.2}" cy="{:.2}" r="{}" fill="transparent" style="cursor: pointer"/>"#,
            point, center.x, center.y, radius
        ),
        Shape::Text {
            x,
            y,
            content,
            size,
            anchor,
        } => {
            let anchor = match anchor {
                Anchor::Start => "",
                Anchor::Middle => r#" text-anchor="middle""#,
            };
            let size = size
                .map(|s| format!(r#" font-size="{}px""#, s))
                .unwrap_or_default();
            writeln!(
                out,
                r#"<text x="{:.2}" y="{:.2}" fill="black"{}{}>{}</text>"#,
                x,
                y,
                anchor,
                size,
                escape(content)
            )
        }
        Shape::Group {
            dx,
            dy,
            opacity,
            children,
        } => {
            let _ = writeln!(
                out,
                r#"<g transform="translate({:.2}, {:.2})" opacity="{:.3}">"#,
                dx, dy, opacity
            );
            for child in children {
                write_shape(out, child);
            }
            writeln!(out, "</g>")
        }
    };
}

impl Scene {
    /// Render as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let [min_x, min_y, w, h] = self.view_box;
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\">\n",
            self.width, self.height, min_x, min_y, w, h
        );
        for shape in &self.shapes {
            write_shape(&mut out, shape);
        }
        out.push_str("</svg>\n");
        out
    }
}
