// File: crates/brushplot-core/src/brush.rs
// Summary: Draggable x-range selection: drag state machine and scale resync.

use crate::scale::LinearScale;

/// Brushed x-range in data-space units, low ≤ high. Stored in data space —
/// never pixels — so the selection survives resizes and dataset swaps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub low: f64,
    pub high: f64,
}

impl Selection {
    /// Build a selection from two bounds in either order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Strict containment: values on the boundary are not selected.
    pub fn contains(&self, x: f64) -> bool {
        self.low < x && x < self.high
    }

    /// Host-facing readout, two decimal places.
    pub fn label(&self) -> String {
        format!("[{:.2}, {:.2}]", self.low, self.high)
    }
}

impl Default for Selection {
    // Initial extent shown before the first user drag.
    fn default() -> Self {
        Self { low: 1.999, high: 2.2 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragState {
    Idle,
    Dragging { origin: f64, current: f64 },
}

/// Owns the shared [`Selection`] and the pointer-drag state machine
/// (`Idle → Dragging → Idle`). Every start/move/end event inverts the pixel
/// extent through the current x scale and, when both bounds are finite,
/// commits it as the new selection.
///
/// `epoch` increments only on user-driven commits. Hosts compare epochs to
/// tell a user drag apart from a programmatic resync; comparing selection
/// values for this would misfire, since every commit builds a fresh value.
pub struct BrushController {
    selection: Selection,
    state: DragState,
    epoch: u64,
}

impl BrushController {
    pub fn new() -> Self {
        Self {
            selection: Selection::default(),
            state: DragState::Idle,
            epoch: 0,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Monotonic counter of user-driven selection commits.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Host-driven (programmatic) selection replacement. Does not bump the
    /// epoch: only pointer interaction counts as a user commit.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Pointer pressed at `px`. Starts a drag with a zero-width extent.
    pub fn pointer_down(&mut self, px: f64, x_scale: &LinearScale) -> bool {
        self.state = DragState::Dragging { origin: px, current: px };
        self.commit(px, px, x_scale)
    }

    /// Pointer moved while dragging. Ignored when idle.
    pub fn pointer_move(&mut self, px: f64, x_scale: &LinearScale) -> bool {
        if let DragState::Dragging { origin, .. } = self.state {
            self.state = DragState::Dragging { origin, current: px };
            self.commit(origin, px, x_scale)
        } else {
            false
        }
    }

    /// Pointer released. Ends the drag and commits the final extent.
    pub fn pointer_up(&mut self, px: f64, x_scale: &LinearScale) -> bool {
        if let DragState::Dragging { origin, .. } = self.state {
            self.state = DragState::Idle;
            self.commit(origin, px, x_scale)
        } else {
            false
        }
    }

    /// Pixel extent for the visual brush widget. While a drag is live this is
    /// the raw drag rectangle; when idle it is recomputed from the committed
    /// selection through the *current* scale, which keeps the widget in sync
    /// after resizes and dataset changes without fighting an active drag.
    pub fn pixel_extent(&self, x_scale: &LinearScale) -> [f64; 2] {
        match self.state {
            DragState::Dragging { origin, current } => {
                [origin.min(current), origin.max(current)]
            }
            DragState::Idle => [
                x_scale.to_pixel(self.selection.low),
                x_scale.to_pixel(self.selection.high),
            ],
        }
    }

    fn commit(&mut self, a_px: f64, b_px: f64, x_scale: &LinearScale) -> bool {
        let lo = x_scale.to_value(a_px.min(b_px));
        let hi = x_scale.to_value(a_px.max(b_px));
        if !lo.is_finite() || !hi.is_finite() {
            return false;
        }
        self.selection = Selection::new(lo, hi);
        self.epoch += 1;
        log::debug!("brush: committed {} (epoch {})", self.selection.label(), self.epoch);
        true
    }
}

impl Default for BrushController {
    fn default() -> Self {
        Self::new()
    }
}
