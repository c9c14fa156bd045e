// File: crates/brushplot-core/src/render.rs
// Summary: Render pipeline: scene building, highlight styling, keyed point updates.

use crate::axis;
use crate::brush::BrushController;
use crate::data::{FieldSelection, PlotRow};
use crate::geometry::RectF;
use crate::plugin::{Overlay, RegressionLineOverlay};
use crate::scale::LinearScale;
use crate::scene::{self, BrushNode, PathNode, PointDiff, PointNode, Scene, TextNode};
use crate::settings::RenderSettings;
use crate::types::Viewport;

/// Radius of an unselected point.
pub const POINT_RADIUS: f64 = 4.0;
/// Radius of a point inside the brushed range.
pub const POINT_RADIUS_HIGHLIGHT: f64 = 7.0;
/// Point fill opacity.
pub const POINT_OPACITY: f64 = 0.7;
/// Stroke width of the connecting line.
pub const LINE_STROKE_WIDTH: f64 = 3.0;

/// Builds and retains the [`Scene`]. Point nodes survive across cycles and
/// are updated through the keyed reconciler so unchanged rows keep their
/// nodes; axes, line, brush and labels are rebuilt each pass.
pub struct RenderPipeline {
    scene: Scene,
    overlays: Vec<Box<dyn Overlay>>,
}

impl RenderPipeline {
    pub fn new() -> Self {
        Self {
            scene: Scene::default(),
            overlays: vec![Box::new(RegressionLineOverlay)],
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Register an extra overlay, invoked while `show_reg_line` is set.
    pub fn add_overlay(&mut self, overlay: Box<dyn Overlay>) {
        self.overlays.push(overlay);
    }

    /// One render pass. `scales` is `None` when no finite data exists (empty
    /// dataset or all rows failed coercion); the scene then empties out while
    /// the committed selection lives on in the brush controller.
    pub fn run(
        &mut self,
        rows: &[PlotRow],
        fields: &FieldSelection,
        scales: Option<&(LinearScale, LinearScale)>,
        settings: &RenderSettings,
        brush: &BrushController,
        viewport: &Viewport,
    ) -> PointDiff {
        let Some((x_scale, y_scale)) = scales else {
            let diff = scene::reconcile(&mut self.scene.points, Vec::new());
            self.scene.line = None;
            self.scene.x_axis = None;
            self.scene.y_axis = None;
            self.scene.brush = None;
            self.scene.overlays = Vec::new();
            self.scene.selection_label = None;
            return diff;
        };

        let selection = brush.selection();
        let next: Vec<PointNode> = rows
            .iter()
            .filter(|r| r.is_plottable())
            .map(|r| {
                let highlighted = selection.contains(r.x);
                PointNode {
                    key: r.key,
                    cx: x_scale.to_pixel(r.x),
                    cy: y_scale.to_pixel(r.y),
                    radius: if highlighted { POINT_RADIUS_HIGHLIGHT } else { POINT_RADIUS },
                    opacity: POINT_OPACITY,
                    highlighted,
                }
            })
            .collect();
        let diff = scene::reconcile(&mut self.scene.points, next);
        log::trace!(
            "render: points created={} updated={} removed={} retained={}",
            diff.created.len(),
            diff.updated.len(),
            diff.removed.len(),
            diff.retained.len(),
        );

        self.scene.line = if settings.show_line {
            // Unplottable rows become NaN pixels; the sampler splits there.
            let pts: Vec<(f64, f64)> = rows
                .iter()
                .map(|r| {
                    if r.is_plottable() {
                        (x_scale.to_pixel(r.x), y_scale.to_pixel(r.y))
                    } else {
                        (f64::NAN, f64::NAN)
                    }
                })
                .collect();
            let subpaths = settings.curve.sample(&pts);
            (!subpaths.is_empty()).then_some(PathNode {
                subpaths,
                stroke_width: LINE_STROKE_WIDTH,
            })
        } else {
            None
        };

        self.scene.x_axis = Some(axis::x_axis(x_scale, viewport, &fields.x_key));
        self.scene.y_axis = Some(axis::y_axis(y_scale, &fields.y_key, settings.y_label_offset));

        self.scene.overlays = if settings.show_reg_line {
            self.overlays
                .iter()
                .flat_map(|o| o.compute(rows, x_scale, y_scale))
                .collect()
        } else {
            Vec::new()
        };

        let [x0, x1] = brush.pixel_extent(x_scale);
        self.scene.brush = Some(BrushNode {
            rect: RectF::from_ltrb(x0, 0.0, x1, viewport.height),
        });
        self.scene.selection_label = Some(TextNode {
            text: selection.label(),
            pos: (8.0, 16.0),
        });

        diff
    }
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new()
    }
}
