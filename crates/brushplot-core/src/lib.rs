// File: crates/brushplot-core/src/lib.rs
// Summary: Core library entry point; exports the public chart-engine API.

pub mod axis;
pub mod brush;
pub mod chart;
pub mod curve;
pub mod data;
pub mod error;
pub mod geometry;
pub mod plugin;
pub mod render;
pub mod scale;
pub mod scene;
pub mod settings;
pub mod svg;
pub mod theme;
pub mod types;

pub use brush::{BrushController, Selection};
pub use chart::{Chart, RenderOptions};
pub use curve::{CurveKind, DEFAULT_CURVE};
pub use data::{normalize, DataRow, FieldSelection, PlotRow};
pub use error::ChartError;
pub use plugin::{Overlay, RegressionLineOverlay};
pub use render::RenderPipeline;
pub use scale::{extent, LinearScale};
pub use scene::{reconcile, PointDiff, Scene};
pub use settings::{DataOptionDescriptor, RenderSettings, SettingDescriptor};
pub use theme::Theme;
pub use types::{Insets, Viewport};
