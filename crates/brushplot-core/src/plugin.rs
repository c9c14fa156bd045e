// File: crates/brushplot-core/src/plugin.rs
// Summary: Overlay extension point; regression-line hook.

use crate::data::PlotRow;
use crate::scale::LinearScale;
use crate::scene::PathNode;

/// Overlay extension point, invoked by the render pipeline after the base
/// scene is built (only while the `show_reg_line` flag is set). Overlays see
/// the normalized rows and both scales and return extra paths drawn on top.
pub trait Overlay {
    fn id(&self) -> &'static str;
    fn compute(
        &self,
        rows: &[PlotRow],
        x_scale: &LinearScale,
        y_scale: &LinearScale,
    ) -> Vec<PathNode>;
}

/// Hook for the regression-line toggle. Wired through the pipeline, but the
/// fit itself is intentionally not implemented; hosts that want one register
/// their own [`Overlay`] in its place.
pub struct RegressionLineOverlay;

impl Overlay for RegressionLineOverlay {
    fn id(&self) -> &'static str {
        "regression_line"
    }

    fn compute(
        &self,
        _rows: &[PlotRow],
        _x_scale: &LinearScale,
        _y_scale: &LinearScale,
    ) -> Vec<PathNode> {
        Vec::new()
    }
}
