// File: crates/brushplot-core/src/svg.rs
// Summary: SVG markup writer for the retained scene.

use std::fmt::Write;

use skia_safe as skia;

use crate::chart::RenderOptions;
use crate::scene::{AxisNode, AxisOrientation, Scene};
use crate::types::Viewport;

/// Render the scene as a standalone SVG document. Geometry matches the Skia
/// raster output; text is left to the viewer's font resolution.
pub fn document(scene: &Scene, viewport: &Viewport, opts: &RenderOptions) -> String {
    let width = viewport.width + f64::from(opts.insets.hsum());
    let height = viewport.height + f64::from(opts.insets.vsum());
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#,
    );
    let _ = writeln!(
        out,
        r#"  <rect width="{width}" height="{height}" fill="{}"/>"#,
        hex(opts.theme.background),
    );
    let _ = writeln!(
        out,
        r#"  <g transform="translate({},{})">"#,
        opts.insets.left, opts.insets.top,
    );

    if let Some(axis) = &scene.x_axis {
        write_axis(&mut out, axis, opts);
    }
    if let Some(axis) = &scene.y_axis {
        write_axis(&mut out, axis, opts);
    }

    for path in scene.line.iter().chain(scene.overlays.iter()) {
        let mut d = String::new();
        for run in &path.subpaths {
            for (i, (x, y)) in run.iter().enumerate() {
                let cmd = if i == 0 { 'M' } else { 'L' };
                let _ = write!(d, "{cmd}{x:.2} {y:.2} ");
            }
        }
        let _ = writeln!(
            out,
            r#"    <path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            d.trim_end(),
            hex(opts.theme.line_stroke),
            path.stroke_width,
        );
    }

    for point in &scene.points {
        let color = if point.highlighted {
            opts.theme.point_highlight
        } else {
            opts.theme.point_fill
        };
        let _ = writeln!(
            out,
            r#"    <circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" fill-opacity="{}"/>"#,
            point.cx,
            point.cy,
            point.radius,
            hex(color),
            point.opacity,
        );
    }

    if let Some(brush) = &scene.brush {
        let _ = writeln!(
            out,
            r#"    <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" fill-opacity="{}" stroke="{}"/>"#,
            brush.rect.left,
            brush.rect.top,
            brush.rect.width(),
            brush.rect.height(),
            hex(opts.theme.brush_fill),
            alpha(opts.theme.brush_fill),
            hex(opts.theme.brush_outline),
        );
    }

    if opts.draw_labels {
        if let Some(readout) = &scene.selection_label {
            let _ = writeln!(
                out,
                r#"    <text x="{}" y="{}" font-size="12" fill="{}">{}</text>"#,
                readout.pos.0,
                readout.pos.1,
                hex(opts.theme.readout),
                escape(&readout.text),
            );
        }
    }

    out.push_str("  </g>\n</svg>\n");
    out
}

fn write_axis(out: &mut String, axis: &AxisNode, opts: &RenderOptions) {
    let _ = writeln!(
        out,
        r#"    <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="1.5"/>"#,
        axis.start.0,
        axis.start.1,
        axis.end.0,
        axis.end.1,
        hex(opts.theme.axis_line),
    );
    for tick in &axis.ticks {
        let ((x1, y1), (x2, y2), (tx, ty)) = match axis.orientation {
            AxisOrientation::Bottom => {
                let y = axis.start.1;
                let x = tick.pixel;
                ((x, y), (x, y + 6.0), (x - 10.0, y + 20.0))
            }
            AxisOrientation::Left => {
                let x = axis.start.0;
                let y = tick.pixel;
                ((x, y), (x - 6.0, y), (x - 40.0, y + 4.0))
            }
        };
        let _ = writeln!(
            out,
            r#"    <line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{}"/>"#,
            hex(opts.theme.tick),
        );
        if opts.draw_labels {
            let _ = writeln!(
                out,
                r#"    <text x="{tx:.2}" y="{ty:.2}" font-size="12" fill="{}">{}</text>"#,
                hex(opts.theme.tick),
                escape(&tick.text),
            );
        }
    }
    if opts.draw_labels && !axis.label.is_empty() {
        let _ = writeln!(
            out,
            r#"    <text x="{:.2}" y="{:.2}" font-size="14" fill="{}">{}</text>"#,
            axis.label_pos.0,
            axis.label_pos.1,
            hex(opts.theme.axis_label),
            escape(&axis.label),
        );
    }
}

fn hex(color: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

fn alpha(color: skia::Color) -> f64 {
    f64::from(color.a()) / 255.0
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
