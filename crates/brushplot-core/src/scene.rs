// File: crates/brushplot-core/src/scene.rs
// Summary: Retained visual tree (points, line, axes, brush) and keyed reconciliation.

use std::collections::HashMap;

use crate::geometry::RectF;

/// One rendered data point. `key` is the source row's dataset index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointNode {
    pub key: usize,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub opacity: f64,
    pub highlighted: bool,
}

/// The connecting line, expanded through the active curve strategy. Subpaths
/// are split where rows failed numeric coercion.
#[derive(Clone, Debug, PartialEq)]
pub struct PathNode {
    pub subpaths: Vec<Vec<(f64, f64)>>,
    pub stroke_width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub pixel: f64,
    pub value: f64,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// An axis widget: baseline, tick marks, and the field-name label.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisNode {
    pub orientation: AxisOrientation,
    pub start: (f64, f64),
    pub end: (f64, f64),
    pub ticks: Vec<Tick>,
    pub label: String,
    pub label_pos: (f64, f64),
}

/// Visual extent of the brush selection, full plot height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushNode {
    pub rect: RectF,
}

/// Free-standing text (the selection readout).
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub text: String,
    pub pos: (f64, f64),
}

/// The full visual tree for one render cycle. Points are retained across
/// cycles and updated through [`reconcile`]; the other nodes are cheap and
/// rebuilt wholesale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub points: Vec<PointNode>,
    pub line: Option<PathNode>,
    pub x_axis: Option<AxisNode>,
    pub y_axis: Option<AxisNode>,
    pub brush: Option<BrushNode>,
    pub overlays: Vec<PathNode>,
    pub selection_label: Option<TextNode>,
}

/// Outcome of one keyed diff, reported as row keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointDiff {
    pub created: Vec<usize>,
    pub updated: Vec<usize>,
    pub removed: Vec<usize>,
    pub retained: Vec<usize>,
}

/// Keyed reconciliation: merge `next` into `prev` in place. Nodes whose key
/// and attributes are unchanged are carried over untouched rather than
/// recreated; everything that changed is reported per key.
pub fn reconcile(prev: &mut Vec<PointNode>, next: Vec<PointNode>) -> PointDiff {
    let mut old: HashMap<usize, PointNode> = prev.drain(..).map(|n| (n.key, n)).collect();
    let mut diff = PointDiff::default();
    let mut merged = Vec::with_capacity(next.len());
    for node in next {
        match old.remove(&node.key) {
            None => {
                diff.created.push(node.key);
                merged.push(node);
            }
            Some(existing) if existing == node => {
                diff.retained.push(node.key);
                merged.push(existing);
            }
            Some(_) => {
                diff.updated.push(node.key);
                merged.push(node);
            }
        }
    }
    diff.removed.extend(old.into_keys());
    diff.removed.sort_unstable();
    *prev = merged;
    diff
}
