// File: crates/brushplot-core/src/data.rs
// Summary: Dataset normalization: field selection, numeric coercion, x-sort.

use serde_json::Value;

/// One host-supplied row: an opaque field-name → value mapping. Values may be
/// mixed numeric/string; coercion happens during normalization.
pub type DataRow = serde_json::Map<String, Value>;

/// Which two dataset fields are plotted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSelection {
    pub x_key: String,
    pub y_key: String,
}

impl FieldSelection {
    pub fn new(x_key: impl Into<String>, y_key: impl Into<String>) -> Self {
        Self { x_key: x_key.into(), y_key: y_key.into() }
    }

    /// Both axes have a field assigned. Nothing is plotted until the host's
    /// data options name an x and a y field.
    pub fn is_complete(&self) -> bool {
        !self.x_key.is_empty() && !self.y_key.is_empty()
    }
}

/// Normalized row. `key` is the row's index in the host-supplied dataset and
/// is the stable identity used for keyed scene reconciliation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRow {
    pub key: usize,
    pub x: f64,
    pub y: f64,
}

impl PlotRow {
    /// Both coordinates finite, i.e. the row can be placed in pixel space.
    pub fn is_plottable(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Coerce one raw field value to f64. JSON numbers pass through, strings are
/// parsed; anything else (bool, null, nested, missing) yields NaN.
pub fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Produce the normalized dataset: each row's active fields coerced to f64,
/// rows ordered ascending by x. The sort is stable, so ties in x keep input
/// order; NaN x sorts after every finite value (`f64::total_cmp`).
///
/// The input is never touched — rows are copied into [`PlotRow`]s, so a host
/// that reuses its row objects cannot observe coerced values.
///
/// Rows that fail coercion are kept with NaN coordinates. Downstream stages
/// skip them when producing points and break the line path around them; the
/// normalized output stays a permutation of the input.
pub fn normalize(dataset: &[DataRow], fields: &FieldSelection) -> Vec<PlotRow> {
    let mut rows: Vec<PlotRow> = dataset
        .iter()
        .enumerate()
        .map(|(key, row)| PlotRow {
            key,
            x: coerce_number(row.get(&fields.x_key)),
            y: coerce_number(row.get(&fields.y_key)),
        })
        .collect();
    rows.sort_by(|a, b| a.x.total_cmp(&b.x));

    let skipped = rows.iter().filter(|r| !r.is_plottable()).count();
    if skipped > 0 {
        log::debug!(
            "normalize: {skipped} of {} rows have non-numeric '{}'/'{}' values",
            rows.len(),
            fields.x_key,
            fields.y_key,
        );
    }
    rows
}
