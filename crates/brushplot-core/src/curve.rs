// File: crates/brushplot-core/src/curve.rs
// Summary: Named curve-strategy registry and interpolation samplers.

use std::sync::OnceLock;

use crate::error::ChartError;

/// Subdivision steps per curve segment when sampling splines into polylines.
const SEGMENT_STEPS: usize = 16;

/// Curve used when the settings carry no `curve_type` entry.
pub const DEFAULT_CURVE: CurveKind = CurveKind::Basis;

/// A stateless interpolation strategy for the connecting line. Strategies take
/// pixel-space control points and expand them into drawable polylines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveKind {
    /// Straight segments between points.
    Linear,
    /// Uniform cubic B-spline; smooth but does not pass through interior
    /// control points.
    Basis,
    /// Cardinal spline (tension 0); passes through every control point.
    Cardinal,
    /// Alpha-parameterized Catmull-Rom (0.5 = centripetal, 1 = chordal).
    CatmullRom { alpha: f64 },
}

/// Registry entries, keyed by the names the host's settings panel uses.
fn registry() -> &'static [(&'static str, CurveKind)] {
    static REGISTRY: OnceLock<Vec<(&'static str, CurveKind)>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        vec![
            ("CurveBasis", CurveKind::Basis),
            ("CurveCardinal", CurveKind::Cardinal),
            ("CurveLinear", CurveKind::Linear),
            ("CurveCatmullRom (alpha = 0.5)", CurveKind::CatmullRom { alpha: 0.5 }),
            ("CurveCatmullRom (alpha = 1)", CurveKind::CatmullRom { alpha: 1.0 }),
        ]
    })
}

/// Resolve a strategy by its registry name. `curve_type` comes from an
/// enumerated settings source, so an unknown name is a host/engine contract
/// mismatch and fails loudly rather than falling back.
pub fn lookup(name: &str) -> Result<CurveKind, ChartError> {
    registry()
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, kind)| *kind)
        .ok_or_else(|| ChartError::UnknownCurveType(name.to_string()))
}

/// All registered strategy names, in registry order.
pub fn names() -> Vec<&'static str> {
    registry().iter().map(|(n, _)| *n).collect()
}

impl CurveKind {
    /// Expand control points into drawable polylines. Non-finite points split
    /// the input into independent subpaths, so rows that failed numeric
    /// coercion leave a gap in the line instead of a spike. Runs shorter than
    /// two points draw nothing.
    pub fn sample(&self, points: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
        split_finite(points)
            .into_iter()
            .filter(|run| run.len() >= 2)
            .map(|run| self.sample_run(&run))
            .collect()
    }

    fn sample_run(&self, pts: &[(f64, f64)]) -> Vec<(f64, f64)> {
        match *self {
            CurveKind::Linear => pts.to_vec(),
            CurveKind::Basis => sample_basis(pts),
            CurveKind::Cardinal => sample_cardinal(pts, 0.0),
            CurveKind::CatmullRom { alpha } => sample_catmull_rom(pts, alpha),
        }
    }
}

/// Split `points` into maximal runs of finite points.
fn split_finite(points: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for &p in points {
        if p.0.is_finite() && p.1.is_finite() {
            current.push(p);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Uniform cubic B-spline. The polyline starts and ends at the run's actual
/// endpoints; interior control points only attract the curve.
fn sample_basis(pts: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let n = pts.len();
    if n < 3 {
        return pts.to_vec();
    }
    let mut out = vec![pts[0]];
    for i in 0..=n - 3 {
        let (p0, p1, p2, p3) = (pts[i], pts[i + 1], pts[i + 2], pts[(i + 3).min(n - 1)]);
        for j in (if i == 0 { 0 } else { 1 })..=SEGMENT_STEPS {
            let t = j as f64 / SEGMENT_STEPS as f64;
            let t2 = t * t;
            let t3 = t2 * t;
            let b0 = (1.0 - t).powi(3);
            let b1 = 3.0 * t3 - 6.0 * t2 + 4.0;
            let b2 = -3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0;
            let b3 = t3;
            out.push((
                (b0 * p0.0 + b1 * p1.0 + b2 * p2.0 + b3 * p3.0) / 6.0,
                (b0 * p0.1 + b1 * p1.1 + b2 * p2.1 + b3 * p3.1) / 6.0,
            ));
        }
    }
    out.push(pts[n - 1]);
    out
}

/// Cardinal spline: cubic Hermite segments whose tangents are scaled central
/// differences. Passes through every control point.
fn sample_cardinal(pts: &[(f64, f64)], tension: f64) -> Vec<(f64, f64)> {
    let n = pts.len();
    if n < 3 {
        return pts.to_vec();
    }
    let k = (1.0 - tension) / 2.0;
    let tangent = |i: usize| -> (f64, f64) {
        let prev = pts[i.saturating_sub(1)];
        let next = pts[(i + 1).min(n - 1)];
        (k * (next.0 - prev.0), k * (next.1 - prev.1))
    };
    let mut out = vec![pts[0]];
    for i in 0..n - 1 {
        sample_hermite(&mut out, pts[i], tangent(i), pts[i + 1], tangent(i + 1));
    }
    out
}

/// Alpha-parameterized Catmull-Rom, evaluated through its cubic Hermite form
/// with knot spacing `|p_{i+1} - p_i|^alpha`. Duplicate control points are
/// guarded with a minimum knot spacing.
fn sample_catmull_rom(pts: &[(f64, f64)], alpha: f64) -> Vec<(f64, f64)> {
    let n = pts.len();
    if n < 3 {
        return pts.to_vec();
    }
    let knot = |a: (f64, f64), b: (f64, f64)| -> f64 {
        let d = ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
        d.powf(alpha).max(1e-6)
    };
    let mut out = vec![pts[0]];
    for i in 0..n - 1 {
        let p0 = pts[i.saturating_sub(1)];
        let p1 = pts[i];
        let p2 = pts[i + 1];
        let p3 = pts[(i + 2).min(n - 1)];
        let d01 = knot(p0, p1);
        let d12 = knot(p1, p2);
        let d23 = knot(p2, p3);

        let m1 = (
            d12 * ((p1.0 - p0.0) / d01 - (p2.0 - p0.0) / (d01 + d12)) + (p2.0 - p1.0),
            d12 * ((p1.1 - p0.1) / d01 - (p2.1 - p0.1) / (d01 + d12)) + (p2.1 - p1.1),
        );
        let m2 = (
            d12 * ((p3.0 - p2.0) / d23 - (p3.0 - p1.0) / (d12 + d23)) + (p2.0 - p1.0),
            d12 * ((p3.1 - p2.1) / d23 - (p3.1 - p1.1) / (d12 + d23)) + (p2.1 - p1.1),
        );
        sample_hermite(&mut out, p1, m1, p2, m2);
    }
    out
}

/// Append one cubic Hermite segment from `p1` to `p2` (excluding `p1`, which
/// the previous segment already emitted).
fn sample_hermite(
    out: &mut Vec<(f64, f64)>,
    p1: (f64, f64),
    m1: (f64, f64),
    p2: (f64, f64),
    m2: (f64, f64),
) {
    for j in 1..=SEGMENT_STEPS {
        let t = j as f64 / SEGMENT_STEPS as f64;
        let t2 = t * t;
        let t3 = t2 * t;
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;
        out.push((
            h00 * p1.0 + h10 * m1.0 + h01 * p2.0 + h11 * m2.0,
            h00 * p1.1 + h10 * m1.1 + h01 * p2.1 + h11 * m2.1,
        ));
    }
}
