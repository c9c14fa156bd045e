// File: crates/brushplot-core/src/axis.rs
// Summary: Axis widget construction: baseline, tick layout, labels.

use crate::scale::LinearScale;
use crate::scene::{AxisNode, AxisOrientation, Tick};
use crate::types::Viewport;

/// Tick count per axis, endpoints included.
pub const TICK_COUNT: usize = 6;

/// Approximate glyph advance used to turn "label-width units" into pixels.
const APPROX_CHAR_WIDTH: f64 = 7.0;

/// Evenly spaced values from `start` to `end`, endpoints included.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Bottom axis: baseline at `y = height` (translated to the plot's bottom
/// edge), ticks over the full domain, label at the right end.
pub fn x_axis(scale: &LinearScale, viewport: &Viewport, label: &str) -> AxisNode {
    let y = viewport.height;
    AxisNode {
        orientation: AxisOrientation::Bottom,
        start: (scale.range[0], y),
        end: (scale.range[1], y),
        ticks: ticks_for(scale),
        label: label.to_string(),
        label_pos: (scale.range[1], y + 32.0),
    }
}

/// Left axis: baseline at `x = 0`, label near the top, shifted horizontally
/// by `label_offset` label widths.
pub fn y_axis(scale: &LinearScale, label: &str, label_offset: f64) -> AxisNode {
    let shift = label_offset * APPROX_CHAR_WIDTH * label.chars().count().max(1) as f64;
    AxisNode {
        orientation: AxisOrientation::Left,
        start: (0.0, scale.range[1]),
        end: (0.0, scale.range[0]),
        ticks: ticks_for(scale),
        label: label.to_string(),
        label_pos: (shift - 40.0, scale.range[1] + 14.0),
    }
}

fn ticks_for(scale: &LinearScale) -> Vec<Tick> {
    linspace(scale.domain[0], scale.domain[1], TICK_COUNT)
        .into_iter()
        .map(|value| Tick {
            pixel: scale.to_pixel(value),
            value,
            text: tick_label(value),
        })
        .collect()
}

/// Integer-looking values print without decimals, everything else with two.
fn tick_label(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.2}")
    }
}
