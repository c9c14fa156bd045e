// File: crates/brushplot-core/src/error.rs
// Summary: Engine error taxonomy.

use thiserror::Error;

/// Errors surfaced to the host. Only configuration-contract violations end up
/// here; bad rows degrade to skipped visuals instead of failing the cycle.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// `curve_type` was present in the settings but names no registered
    /// strategy. An absent `curve_type` falls back to the default instead.
    #[error("unknown curve type '{0}'")]
    UnknownCurveType(String),
}
