// File: crates/brushplot-core/src/chart.rs
// Summary: Chart facade: staged reactive recomputation plus headless PNG/SVG output.

use anyhow::Result;
use skia_safe as skia;

use crate::brush::{BrushController, Selection};
use crate::data::{self, DataRow, FieldSelection, PlotRow};
use crate::error::ChartError;
use crate::plugin::Overlay;
use crate::render::RenderPipeline;
use crate::scale::{self, LinearScale};
use crate::scene::{AxisNode, AxisOrientation, Scene};
use crate::settings::{self, DataOptionDescriptor, RenderSettings, SettingDescriptor};
use crate::theme::Theme;
use crate::types::{Insets, Viewport};

pub struct RenderOptions {
    pub insets: Insets,
    pub draw_labels: bool,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            draw_labels: true,
            theme: Theme::light(),
        }
    }
}

/// Which stages must re-run. Input setters mark the coarsest affected stage;
/// `update` cascades downstream in dependency order.
#[derive(Clone, Copy, Debug, Default)]
struct Dirty {
    config: bool,
    data: bool,
    scales: bool,
    scene: bool,
}

impl Dirty {
    fn all() -> Self {
        Self { config: true, data: true, scales: true, scene: true }
    }
}

/// The chart engine. Hosts push inputs (dataset, settings, data options,
/// container width, pointer events) through the setters, then call
/// [`update`](Self::update); each downstream stage re-runs only when one of
/// its declared inputs changed, in fixed order: config → normalize → scales
/// → scene. All work is synchronous — a cycle is atomic from the host's
/// perspective, and a newer input simply supersedes the previous cycle.
pub struct Chart {
    // host inputs
    dataset: Vec<DataRow>,
    settings_in: Vec<SettingDescriptor>,
    data_options_in: Vec<DataOptionDescriptor>,
    viewport: Viewport,
    // stage outputs
    settings: RenderSettings,
    fields: FieldSelection,
    rows: Vec<PlotRow>,
    scales: Option<(LinearScale, LinearScale)>,
    pipeline: RenderPipeline,
    brush: BrushController,
    dirty: Dirty,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            dataset: Vec::new(),
            settings_in: Vec::new(),
            data_options_in: Vec::new(),
            viewport: Viewport::default(),
            settings: RenderSettings::default(),
            fields: FieldSelection::default(),
            rows: Vec::new(),
            scales: None,
            pipeline: RenderPipeline::new(),
            brush: BrushController::new(),
            dirty: Dirty::all(),
        }
    }

    /// Replace the dataset. The host hands over ownership; rows are never
    /// mutated in place by the engine.
    pub fn set_dataset(&mut self, dataset: Vec<DataRow>) {
        self.dataset = dataset;
        self.dirty.data = true;
    }

    /// Replace the settings list. No-op when the list is unchanged, so
    /// settings parsing runs once per identity change.
    pub fn set_settings(&mut self, settings: Vec<SettingDescriptor>) {
        if settings != self.settings_in {
            self.settings_in = settings;
            self.dirty.config = true;
        }
    }

    /// Replace the data-options list (axis field assignments).
    pub fn set_data_options(&mut self, options: Vec<DataOptionDescriptor>) {
        if options != self.data_options_in {
            self.data_options_in = options;
            self.dirty.config = true;
        }
    }

    /// Container resize event. Height is owned by settings; only width comes
    /// from the container.
    pub fn set_viewport_width(&mut self, width: f64) {
        if width != self.viewport.width {
            self.viewport.width = width;
            self.dirty.scales = true;
        }
    }

    /// Programmatic (host-driven) selection replacement.
    pub fn set_selection(&mut self, selection: Selection) {
        self.brush.set_selection(selection);
        self.dirty.scene = true;
    }

    pub fn pointer_down(&mut self, px: f64) {
        if let Some((x_scale, _)) = self.scales {
            if self.brush.pointer_down(px, &x_scale) {
                self.dirty.scene = true;
            }
        }
    }

    pub fn pointer_move(&mut self, px: f64) {
        if let Some((x_scale, _)) = self.scales {
            if self.brush.pointer_move(px, &x_scale) {
                self.dirty.scene = true;
            }
        }
    }

    pub fn pointer_up(&mut self, px: f64) {
        if let Some((x_scale, _)) = self.scales {
            if self.brush.pointer_up(px, &x_scale) {
                self.dirty.scene = true;
            }
        }
    }

    /// Register an overlay, drawn while `show_reg_line` is set.
    pub fn add_overlay(&mut self, overlay: Box<dyn Overlay>) {
        self.pipeline.add_overlay(overlay);
        self.dirty.scene = true;
    }

    /// Current selection, in data-space x units.
    pub fn selection(&self) -> Selection {
        self.brush.selection()
    }

    /// Counter of user-driven brush commits; see [`BrushController::epoch`].
    pub fn selection_epoch(&self) -> u64 {
        self.brush.epoch()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Scales from the last completed update, `(x, y)`.
    pub fn scales(&self) -> Option<(LinearScale, LinearScale)> {
        self.scales
    }

    pub fn scene(&self) -> &Scene {
        self.pipeline.scene()
    }

    /// Run every dirty stage in dependency order and return the resulting
    /// scene. The only error that escapes is a configuration-contract
    /// violation; bad rows never fail a cycle.
    pub fn update(&mut self) -> Result<&Scene, ChartError> {
        if self.dirty.config {
            let parsed = RenderSettings::from_descriptors(&self.settings_in)?;
            let fields = settings::field_selection(&self.data_options_in);
            if parsed.height != self.viewport.height {
                self.viewport.height = parsed.height;
                self.dirty.scales = true;
            }
            if fields != self.fields {
                self.fields = fields;
                self.dirty.data = true;
            }
            if parsed != self.settings {
                self.settings = parsed;
                self.dirty.scene = true;
            }
            self.dirty.config = false;
        }

        if self.dirty.data {
            self.rows = if self.fields.is_complete() {
                data::normalize(&self.dataset, &self.fields)
            } else {
                Vec::new()
            };
            self.dirty.data = false;
            self.dirty.scales = true;
        }

        if self.dirty.scales {
            self.scales = compute_scales(&self.rows, &self.viewport);
            self.dirty.scales = false;
            self.dirty.scene = true;
        }

        if self.dirty.scene {
            self.pipeline.run(
                &self.rows,
                &self.fields,
                self.scales.as_ref(),
                &self.settings,
                &self.brush,
                &self.viewport,
            );
            self.dirty.scene = false;
        }

        Ok(self.pipeline.scene())
    }

    /// Render the current scene to a PNG at `output_png_path` using a CPU
    /// raster surface. Call [`update`](Self::update) first.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// In-memory variant of [`render_to_png`](Self::render_to_png).
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let width = self.viewport.width as i32 + opts.insets.hsum() as i32;
        let height = self.viewport.height as i32 + opts.insets.vsum() as i32;
        let mut surface = skia::surfaces::raster_n32_premul((width.max(1), height.max(1)))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        canvas.clear(opts.theme.background);
        canvas.translate((opts.insets.left as f32, opts.insets.top as f32));
        draw_scene(canvas, self.pipeline.scene(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the current scene as an SVG document.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        output_svg_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let markup = self.svg_document(opts);
        if let Some(parent) = output_svg_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_svg_path, markup)?;
        Ok(())
    }

    /// Raw SVG markup for the current scene.
    pub fn svg_document(&self, opts: &RenderOptions) -> String {
        crate::svg::document(self.pipeline.scene(), &self.viewport, opts)
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

/// Domains from the normalized rows (NaN-ignoring extents), ranges from the
/// viewport: x maps to `[0, width]`, y to `[height, 0]`.
fn compute_scales(rows: &[PlotRow], viewport: &Viewport) -> Option<(LinearScale, LinearScale)> {
    let x_domain = scale::extent(rows.iter().map(|r| r.x))?;
    let y_domain = scale::extent(rows.iter().map(|r| r.y))?;
    Some((
        LinearScale::new(x_domain, [0.0, viewport.width]),
        LinearScale::new(y_domain, [viewport.height, 0.0]),
    ))
}

// ---- Skia drawing -----------------------------------------------------------

const TICK_LEN: f32 = 6.0;
const TEXT_SIZE: f32 = 12.0;

fn draw_scene(canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions) {
    if let Some(axis) = &scene.x_axis {
        draw_axis(canvas, axis, opts);
    }
    if let Some(axis) = &scene.y_axis {
        draw_axis(canvas, axis, opts);
    }
    if let Some(line) = &scene.line {
        draw_path(canvas, &line.subpaths, line.stroke_width, opts.theme.line_stroke);
    }
    for overlay in &scene.overlays {
        draw_path(canvas, &overlay.subpaths, overlay.stroke_width, opts.theme.line_stroke);
    }
    for point in &scene.points {
        let base = if point.highlighted {
            opts.theme.point_highlight
        } else {
            opts.theme.point_fill
        };
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(with_alpha(base, point.opacity));
        canvas.draw_circle(
            (point.cx as f32, point.cy as f32),
            point.radius as f32,
            &paint,
        );
    }
    if let Some(brush) = &scene.brush {
        let rect = skia::Rect::from_ltrb(
            brush.rect.left as f32,
            brush.rect.top as f32,
            brush.rect.right as f32,
            brush.rect.bottom as f32,
        );
        let mut fill = skia::Paint::default();
        fill.set_color(opts.theme.brush_fill);
        canvas.draw_rect(rect, &fill);
        let mut outline = skia::Paint::default();
        outline.set_style(skia::paint::Style::Stroke);
        outline.set_stroke_width(1.0);
        outline.set_color(opts.theme.brush_outline);
        canvas.draw_rect(rect, &outline);
    }
    if opts.draw_labels {
        if let Some(readout) = &scene.selection_label {
            let mut paint = skia::Paint::default();
            paint.set_color(opts.theme.readout);
            let mut font = skia::Font::default();
            font.set_size(TEXT_SIZE);
            canvas.draw_str(
                &readout.text,
                (readout.pos.0 as f32, readout.pos.1 as f32),
                &font,
                &paint,
            );
        }
    }
}

fn draw_axis(canvas: &skia::Canvas, axis: &AxisNode, opts: &RenderOptions) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.5);
    paint.set_color(opts.theme.axis_line);
    canvas.draw_line(
        (axis.start.0 as f32, axis.start.1 as f32),
        (axis.end.0 as f32, axis.end.1 as f32),
        &paint,
    );

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);
    tick_paint.set_color(opts.theme.tick);

    let mut font = skia::Font::default();
    font.set_size(TEXT_SIZE);
    let mut text_paint = skia::Paint::default();
    text_paint.set_color(opts.theme.tick);

    for tick in &axis.ticks {
        let (from, to, text_at) = match axis.orientation {
            AxisOrientation::Bottom => {
                let y = axis.start.1 as f32;
                let x = tick.pixel as f32;
                ((x, y), (x, y + TICK_LEN), (x - 10.0, y + TICK_LEN + 14.0))
            }
            AxisOrientation::Left => {
                let x = axis.start.0 as f32;
                let y = tick.pixel as f32;
                ((x, y), (x - TICK_LEN, y), (x - TICK_LEN - 34.0, y + 4.0))
            }
        };
        canvas.draw_line(from, to, &tick_paint);
        if opts.draw_labels {
            canvas.draw_str(&tick.text, text_at, &font, &text_paint);
        }
    }

    if opts.draw_labels && !axis.label.is_empty() {
        let mut label_paint = skia::Paint::default();
        label_paint.set_color(opts.theme.axis_label);
        let mut label_font = skia::Font::default();
        label_font.set_size(TEXT_SIZE + 2.0);
        canvas.draw_str(
            &axis.label,
            (axis.label_pos.0 as f32, axis.label_pos.1 as f32),
            &label_font,
            &label_paint,
        );
    }
}

fn draw_path(
    canvas: &skia::Canvas,
    subpaths: &[Vec<(f64, f64)>],
    stroke_width: f64,
    color: skia::Color,
) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(stroke_width as f32);
    stroke.set_color(color);

    for run in subpaths {
        if run.len() < 2 {
            continue;
        }
        let mut path = skia::Path::new();
        path.move_to((run[0].0 as f32, run[0].1 as f32));
        for &(x, y) in run.iter().skip(1) {
            path.line_to((x as f32, y as f32));
        }
        canvas.draw_path(&path, &stroke);
    }
}

fn with_alpha(color: skia::Color, opacity: f64) -> skia::Color {
    let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, color.r(), color.g(), color.b())
}
