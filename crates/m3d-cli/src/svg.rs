//! Minimal SVG line drawing output

use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;

/// 0xRRGGBB color
pub type Rgb = u32;

/// A 2D point in drawing units
pub type Point = (f32, f32);

/// Drawable primitive
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Plain line segment
    Line { from: Point, to: Point, color: Rgb },
    /// Segment with a dot at the start and an arrow head at the end
    Arrow { from: Point, to: Point, color: Rgb },
    /// Circle outline
    Circle {
        center: Point,
        radius: f32,
        color: Rgb,
    },
}

const MARKER_STYLE: &str = "fill-rule:evenodd;stroke:#000000;stroke-width:1pt;fill:#000000";
const LINE_STYLE: &str = "fill:none;stroke-width:1;stroke-linecap:round;stroke-linejoin:round";
const ARROW_STYLE: &str =
    "stroke-linecap:butt;marker-start:url(#DotStart);marker-end:url(#ArrowEnd)";

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Shape::Line { from, to, color } => write!(
                f,
                r#"<path d="M {:.3},{:.3} {:.3},{:.3}" style="{LINE_STYLE};stroke:#{color:06x}" />"#,
                from.0, from.1, to.0, to.1
            ),
            Shape::Arrow { from, to, color } => write!(
                f,
                r#"<path d="M {:.3},{:.3} {:.3},{:.3}" style="{LINE_STYLE};stroke:#{color:06x};{ARROW_STYLE}" />"#,
                from.0, from.1, to.0, to.1
            ),
            Shape::Circle {
                center,
                radius,
                color,
            } => write!(
                f,
                r#"<circle cx="{:.3}" cy="{:.3}" r="{radius:.3}" style="{LINE_STYLE};stroke:#{color:06x}" />"#,
                center.0, center.1
            ),
        }
    }
}

/// A drawing of `width x height` units made of [`Shape`]s
#[derive(Clone, Debug, Default)]
pub struct Drawing {
    pub width: f32,
    pub height: f32,
    pub shapes: Vec<Shape>,
}

impl Drawing {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
        }
    }

    pub fn line(&mut self, from: Point, to: Point, color: Rgb) {
        self.shapes.push(Shape::Line { from, to, color });
    }

    pub fn arrow(&mut self, from: Point, to: Point, color: Rgb) {
        self.shapes.push(Shape::Arrow { from, to, color });
    }

    pub fn circle(&mut self, center: Point, radius: f32, color: Rgb) {
        self.shapes.push(Shape::Circle {
            center,
            radius,
            color,
        });
    }

    /// Renders the SVG document
    pub fn to_svg(&self) -> String {
        self.to_string()
    }

    /// Writes the SVG document to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_svg())
            .with_context(|| format!("Failed to save: {}", path.display()))
    }
}

impl fmt::Display for Drawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#)?;
        writeln!(
            f,
            r#"<svg viewBox="0,0 {},{}" xmlns="http://www.w3.org/2000/svg">"#,
            self.width, self.height
        )?;
        writeln!(f, "<defs>")?;
        writeln!(
            f,
            r#"  <marker id="ArrowEnd" orient="auto" style="overflow:visible"><path d="M 12.5,0 L 17.5,-5 L 0,0 L 17.5,5 z" style="{MARKER_STYLE}" transform="scale(0.4) rotate(180)" /></marker>"#
        )?;
        writeln!(
            f,
            r#"  <marker id="DotStart" style="overflow:visible"><circle cx="0" cy="0" r="5" style="{MARKER_STYLE}" transform="scale(0.4)" /></marker>"#
        )?;
        writeln!(f, "</defs>")?;
        writeln!(f, r#"<g id="layer1">"#)?;
        for shape in &self.shapes {
            writeln!(f, "{shape}")?;
        }
        writeln!(f, "</g>")?;
        writeln!(f, "</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_document() {
        let mut d = Drawing::new(300.0, 200.0);
        d.line((0.0, 0.0), (10.0, 20.0), 0x000000);
        d.arrow((1.0, 1.0), (5.0, 5.0), 0xff0000);
        d.circle((3.0, 4.0), 2.0, 0x0000ff);

        let svg = d.to_svg();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0,0 300,200""#));
        assert!(svg.contains("M 0.000,0.000 10.000,20.000"));
        assert!(svg.contains("stroke:#ff0000;stroke-linecap:butt"));
        assert!(svg.contains("stroke:#0000ff"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("style=\"fill:none").count(), 3);
    }

    #[test]
    fn test_svg_shape_elements() {
        let line = Shape::Line {
            from: (1.0, 2.0),
            to: (3.0, 4.0),
            color: 0x00ff00,
        };
        assert_eq!(
            line.to_string(),
            format!(
                r#"<path d="M 1.000,2.000 3.000,4.000" style="{LINE_STYLE};stroke:#00ff00" />"#
            )
        );

        let mut d = Drawing::new(50.0, 50.0);
        d.shapes.push(line.clone());
        let svg = d.to_svg();
        assert_eq!(svg, format!("{d}"));
        assert!(svg.contains(&format!("{line}\n</g>")));
    }

    #[test]
    fn test_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        Drawing::new(10.0, 10.0).save(&path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("<svg"));
    }
}
