// File: crates/brushplot-core/src/types.rs
// Summary: Shared types and constants (viewport, raster margins).

/// Initial viewport width in pixels, used until the first resize event.
pub const DEFAULT_WIDTH: f64 = 400.0;
/// Initial viewport height in pixels, used until settings provide one.
pub const DEFAULT_HEIGHT: f64 = 400.0;

/// Plot area size in pixels. Width follows container resize events, height
/// follows the `height` setting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// Raster margins around the plot area, in pixels. Tick text and axis labels
/// are drawn inside these margins.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(56, 24, 24, 48)
    }
}
