// File: crates/chart-render/src/figure.rs
// Summary: Figure rendering context and headless PNG pipeline on a Skia CPU raster surface.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::Axis;
use crate::grid::{fmt_tick, linspace};
use crate::series::{LineSeries, Marker};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

const X_TICKS: usize = 6;
const Y_TICKS: usize = 6;

pub struct FigureOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, axis labels and tick labels. Disable for pixel-deterministic
    /// output across platforms with different fonts.
    pub draw_text: bool,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_text: true,
        }
    }
}

impl FigureOptions {
    /// Options for a figure sized in inches at `dpi`, the way plotting
    /// toolkits size figures.
    pub fn with_size_inches(w_in: f64, h_in: f64, dpi: f64) -> Self {
        Self {
            width: (w_in * dpi).round() as i32,
            height: (h_in * dpi).round() as i32,
            ..Self::default()
        }
    }
}

/// An explicitly created rendering context owning one raster surface.
///
/// Replaces any notion of an implicit global "current figure": callers
/// construct a `Figure`, draw into it, and drop it to release the surface.
/// Rendering is fully headless; no display is required.
pub struct Figure {
    surface: skia::Surface,
    opts: FigureOptions,
    title: Option<String>,
    grid_on: bool,
    series: Vec<LineSeries>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Figure {
    pub fn new(opts: FigureOptions) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        Ok(Self {
            surface,
            opts,
            title: None,
            grid_on: false,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        })
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn grid(&mut self, on: bool) {
        self.grid_on = on;
    }

    pub fn add_series(&mut self, series: LineSeries) {
        self.series.push(series);
    }

    /// Fit both axes to the union of all series points, padded by
    /// `margin_frac` of the span on each side. Axis labels are kept.
    pub fn autoscale_axes(&mut self, margin_frac: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &self.series {
            for &(x, y) in &s.points {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return;
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let mx = (x_max - x_min) * margin_frac;
        let my = (y_max - y_min) * margin_frac;
        self.x_axis.min = x_min - mx;
        self.x_axis.max = x_max + mx;
        self.y_axis.min = y_min - my;
        self.y_axis.max = y_max + my;
    }

    fn draw(&mut self) {
        let theme = self.opts.theme;
        let l = self.opts.insets.left as i32;
        let r = self.opts.width - self.opts.insets.right as i32;
        let t = self.opts.insets.top as i32;
        let b = self.opts.height - self.opts.insets.bottom as i32;

        let canvas = self.surface.canvas();
        canvas.clear(theme.background);

        if self.grid_on {
            draw_grid(canvas, l, t, r, b, &self.x_axis, &self.y_axis, &theme);
        }
        draw_frame(canvas, l, t, r, b, &theme);

        for s in &self.series {
            draw_line_series(canvas, l, t, r, b, &self.x_axis, &self.y_axis, s, &theme);
        }

        if self.opts.draw_text {
            let shaper = TextShaper::new();
            draw_tick_labels(canvas, &shaper, l, t, r, b, &self.x_axis, &self.y_axis, &theme);
            draw_axis_labels(canvas, &shaper, l, t, r, b, &self.x_axis, &self.y_axis, &theme);
            if let Some(title) = &self.title {
                shaper.draw_centered(
                    canvas,
                    title,
                    (l + r) as f32 * 0.5,
                    t as f32 - 12.0,
                    15.0,
                    theme.axis_label,
                );
            }
        }
    }

    /// Render and encode the figure as PNG bytes.
    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        self.draw();
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render and write the figure as a PNG at `path`, overwriting any
    /// previous file. The parent directory must already exist and be
    /// writable; missing directories are not created here.
    pub fn save_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Render into an RGBA8 buffer; returns (pixels, width, height, stride).
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize)> {
        self.draw();
        let w = self.opts.width;
        let h = self.opts.height;
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, w, h, stride))
    }
}

// ---- helpers ----------------------------------------------------------------

fn scale_x(l: i32, r: i32, axis: &Axis, x: f64) -> f32 {
    l as f32 + ((x - axis.min) / axis.span()) as f32 * (r - l) as f32
}

fn scale_y(t: i32, b: i32, axis: &Axis, y: f64) -> f32 {
    b as f32 - ((y - axis.min) / axis.span()) as f32 * (b - t) as f32
}

fn draw_grid(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // grid lines sit on tick positions
    for x in linspace(x_axis.min, x_axis.max, X_TICKS) {
        let px = scale_x(l, r, x_axis, x);
        canvas.draw_line((px, t as f32), (px, b as f32), &paint);
    }
    for y in linspace(y_axis.min, y_axis.max, Y_TICKS) {
        let py = scale_y(t, b, y_axis, y);
        canvas.draw_line((l as f32, py), (r as f32, py), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.5);

    let rect = skia::Rect::from_ltrb(l as f32, t as f32, r as f32, b as f32);
    canvas.draw_rect(rect, &paint);
}

fn draw_line_series(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &LineSeries,
    theme: &Theme,
) {
    let data = &series.points;
    if data.is_empty() {
        return;
    }

    if data.len() >= 2 {
        let mut path = skia::Path::new();
        let (x0, y0) = data[0];
        path.move_to((scale_x(l, r, x_axis, x0), scale_y(t, b, y_axis, y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((scale_x(l, r, x_axis, x), scale_y(t, b, y_axis, y)));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);
        stroke.set_color(theme.line_stroke);
        canvas.draw_path(&path, &stroke);
    }

    if series.marker == Marker::Circle {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(theme.marker_fill);
        for &(x, y) in data {
            let px = scale_x(l, r, x_axis, x);
            let py = scale_y(t, b, y_axis, y);
            canvas.draw_circle((px, py), series.marker_radius, &fill);
        }
    }
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
) {
    let size = 10.0;
    for x in linspace(x_axis.min, x_axis.max, X_TICKS) {
        let px = scale_x(l, r, x_axis, x);
        shaper.draw_centered(canvas, &fmt_tick(x), px, b as f32 + 16.0, size, theme.tick);
    }
    for y in linspace(y_axis.min, y_axis.max, Y_TICKS) {
        let py = scale_y(t, b, y_axis, y);
        let label = fmt_tick(y);
        let w = shaper.measure_width(&label, size);
        shaper.draw_left(canvas, &label, l as f32 - w - 6.0, py + 4.0, size, theme.tick);
    }
}

fn draw_axis_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
) {
    let size = 12.0;
    shaper.draw_centered(
        canvas,
        &x_axis.label,
        (l + r) as f32 * 0.5,
        b as f32 + 38.0,
        size,
        theme.axis_label,
    );

    // y label reads bottom-to-top along the left edge
    let pivot = skia::Point::new(16.0, (t + b) as f32 * 0.5);
    canvas.save();
    canvas.rotate(-90.0, Some(pivot));
    shaper.draw_centered(canvas, &y_axis.label, pivot.x, pivot.y, size, theme.axis_label);
    canvas.restore();
}
