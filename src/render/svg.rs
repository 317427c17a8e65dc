//! SVG output for rendered scenes.

use std::fmt;

use super::Scene;
use crate::axis::{AxisFormat, AxisOrientation, Line};

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn write_line(f: &mut fmt::Formatter<'_>, line: &Line, class: &str) -> fmt::Result {
    writeln!(
        f,
        r#"    <line class="{class}" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
        line.x1, line.y1, line.x2, line.y2
    )
}

/// Write one axis: line, gridlines, tick labels and the axis label.
fn write_axis(f: &mut fmt::Formatter<'_>, axis: &AxisFormat) -> fmt::Result {
    let side = match axis.orientation {
        AxisOrientation::Bottom => "bottom",
        AxisOrientation::Left => "left",
        AxisOrientation::Depth => "depth",
    };
    writeln!(f, r#"  <g class="axis axis-{side}">"#)?;
    write_line(f, &axis.axis_line, "domain")?;
    for line in &axis.gridlines {
        write_line(f, line, "grid")?;
    }
    for (line, label) in axis.gridlines.iter().zip(&axis.tick_labels) {
        let (x, y, anchor) = match axis.orientation {
            AxisOrientation::Bottom => (line.x1, line.y1 + 16.0, "middle"),
            AxisOrientation::Left => (line.x1 - 8.0, line.y1 + 4.0, "end"),
            AxisOrientation::Depth => (line.x1 - 8.0, line.y1, "end"),
        };
        writeln!(
            f,
            r#"    <text class="tick" x="{x:.2}" y="{y:.2}" text-anchor="{anchor}">{}</text>"#,
            escape_xml(label)
        )?;
    }
    let (lx, ly) = axis.label_anchor;
    writeln!(
        f,
        r#"    <text class="label" x="{lx:.2}" y="{ly:.2}" text-anchor="middle">{}</text>"#,
        escape_xml(&axis.label_text)
    )?;
    f.write_str("  </g>\n")
}

fn open_document(f: &mut fmt::Formatter<'_>, canvas: (f64, f64), origin: (f64, f64)) -> fmt::Result {
    let (w, h) = canvas;
    let (ox, oy) = origin;
    writeln!(
        f,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    )?;
    writeln!(f, r#"<g transform="translate({ox}, {oy})">"#)
}

/// A scene plus hover state, displayed as an SVG document.
struct SvgDocument<'a> {
    scene: &'a Scene,
    hovered: Option<usize>,
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { scene, hovered } = *self;
        let (ox, oy) = scene.origin;
        open_document(f, scene.canvas, scene.origin)?;

        for axis in &scene.axis_formats {
            write_axis(f, axis)?;
        }

        f.write_str("  <g class=\"points\">\n")?;
        for p in &scene.points {
            let index = p.index();
            let class = p.point.classification;
            let mut classes = String::from("point");
            if class.is_best() {
                classes.push_str(" best");
            }
            if class.is_active() {
                classes.push_str(" selected");
            }
            if hovered == Some(index) {
                classes.push_str(" active");
            }
            let r = scene.radius.radius(class, hovered == Some(index));
            writeln!(
                f,
                r#"    <circle class="{classes}" data-index="{index}" cx="{:.2}" cy="{:.2}" r="{r}"/>"#,
                p.position.0, p.position.1
            )?;
        }
        f.write_str("  </g>\n")?;

        let popup = scene.popup_for(hovered);
        let hidden = if popup.visible { "" } else { " hidden" };
        writeln!(
            f,
            r#"  <g id="popup" class="popup{hidden}"><rect x="{:.2}" y="{:.2}" width="{}" height="{}"/></g>"#,
            popup.x - ox,
            popup.y - oy,
            popup.width,
            popup.height
        )?;

        f.write_str("</g>\n</svg>\n")
    }
}

/// Axes plus a centred message, shown before any trial completes.
struct Placeholder<'a> {
    canvas: (f64, f64),
    origin: (f64, f64),
    axes: &'a [AxisFormat],
    message: &'a str,
}

impl fmt::Display for Placeholder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.canvas;
        let (ox, oy) = self.origin;
        open_document(f, self.canvas, self.origin)?;
        for axis in self.axes {
            write_axis(f, axis)?;
        }
        writeln!(
            f,
            r#"  <text class="empty" x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
            (w - ox) / 2.0,
            (h - oy) / 2.0,
            escape_xml(self.message)
        )?;
        f.write_str("</g>\n</svg>\n")
    }
}

/// Render `scene` as a standalone SVG document.
///
/// `hovered` enlarges that point and reveals the popup next to it.
pub fn write_svg(scene: &Scene, hovered: Option<usize>) -> String {
    SvgDocument { scene, hovered }.to_string()
}

/// Render the placeholder shown when no completed trials exist yet.
pub fn write_placeholder_svg(
    canvas: (f64, f64),
    origin: (f64, f64),
    axes: &[AxisFormat],
    message: &str,
) -> String {
    Placeholder { canvas, origin, axes, message }.to_string()
}

impl Scene {
    /// Standalone SVG for this scene; see [`write_svg`].
    pub fn to_svg(&self, hovered: Option<usize>) -> String {
        write_svg(self, hovered)
    }
}
