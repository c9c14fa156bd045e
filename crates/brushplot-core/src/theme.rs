// File: crates/brushplot-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub point_fill: skia::Color,
    pub point_highlight: skia::Color,
    pub line_stroke: skia::Color,
    pub brush_fill: skia::Color,
    pub brush_outline: skia::Color,
    pub readout: skia::Color,
}

impl Theme {
    /// Light theme; point/line colors match the classic blue/red/pink look.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            point_fill: skia::Color::from_argb(255, 40, 80, 220),
            point_highlight: skia::Color::from_argb(255, 220, 40, 40),
            line_stroke: skia::Color::from_argb(255, 240, 130, 170),
            brush_fill: skia::Color::from_argb(48, 80, 80, 100),
            brush_outline: skia::Color::from_argb(160, 80, 80, 100),
            readout: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            point_fill: skia::Color::from_argb(255, 96, 156, 255),
            point_highlight: skia::Color::from_argb(255, 255, 90, 90),
            line_stroke: skia::Color::from_argb(255, 235, 120, 160),
            brush_fill: skia::Color::from_argb(56, 200, 200, 220),
            brush_outline: skia::Color::from_argb(160, 200, 200, 220),
            readout: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
