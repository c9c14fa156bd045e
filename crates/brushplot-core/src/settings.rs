// File: crates/brushplot-core/src/settings.rs
// Summary: Parsing of host settings and data-option descriptor lists.

use serde::Deserialize;
use serde_json::Value;

use crate::curve::{self, CurveKind, DEFAULT_CURVE};
use crate::data::FieldSelection;
use crate::error::ChartError;
use crate::types::DEFAULT_HEIGHT;

/// One entry of the host's settings panel. Panels send extra metadata (name,
/// ranges, option lists); only `id` and `value` matter to the engine, the
/// rest is retained opaquely.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SettingDescriptor {
    pub id: String,
    #[serde(default)]
    pub value: Value,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl SettingDescriptor {
    pub fn new(id: impl Into<String>, value: Value) -> Self {
        Self { id: id.into(), value, extra: serde_json::Map::new() }
    }
}

/// One entry of the host's data-options list, mapping an axis id (`x`/`y`)
/// to a dataset field name.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DataOptionDescriptor {
    pub id: String,
    #[serde(default)]
    pub value: Value,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl DataOptionDescriptor {
    pub fn new(id: impl Into<String>, value: Value) -> Self {
        Self { id: id.into(), value, extra: serde_json::Map::new() }
    }
}

/// Resolved render settings. Every field defaults independently, so a partial
/// settings list only overrides what it names.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub height: f64,
    pub show_line: bool,
    pub show_reg_line: bool,
    pub curve: CurveKind,
    /// Offset applied to the y-axis label, in label-width units.
    pub y_label_offset: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            show_line: true,
            show_reg_line: true,
            curve: DEFAULT_CURVE,
            y_label_offset: 0.0,
        }
    }
}

impl RenderSettings {
    /// Parse the host's settings list. Recognized ids override one field
    /// each; absent or wrongly-typed entries keep their default. A present
    /// but unrecognized `curve_type` value is a contract violation and fails
    /// fast; descriptors with unrecognized ids are ignored.
    pub fn from_descriptors(settings: &[SettingDescriptor]) -> Result<Self, ChartError> {
        let mut out = Self::default();
        for s in settings {
            match s.id.as_str() {
                "height" => {
                    if let Some(v) = as_number(&s.value) {
                        out.height = v;
                    }
                }
                "show_line" => {
                    if let Some(v) = s.value.as_bool() {
                        out.show_line = v;
                    }
                }
                "show_reg_line" => {
                    if let Some(v) = s.value.as_bool() {
                        out.show_reg_line = v;
                    }
                }
                "curve_type" => {
                    if let Some(name) = s.value.as_str() {
                        out.curve = curve::lookup(name)?;
                    }
                }
                "translate_y_label" => {
                    if let Some(v) = as_number(&s.value) {
                        out.y_label_offset = v;
                    }
                }
                other => log::debug!("settings: ignoring descriptor '{other}'"),
            }
        }
        Ok(out)
    }
}

/// Resolve which dataset fields the `x`/`y` data options name. Missing
/// entries leave the corresponding key empty (nothing plotted until both are
/// assigned).
pub fn field_selection(options: &[DataOptionDescriptor]) -> FieldSelection {
    let field = |axis: &str| -> String {
        options
            .iter()
            .find(|o| o.id == axis)
            .and_then(|o| o.value.as_str())
            .unwrap_or_default()
            .to_string()
    };
    FieldSelection { x_key: field("x"), y_key: field("y") }
}

fn as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
