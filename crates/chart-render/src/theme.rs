// File: crates/chart-render/src/theme.rs
// Summary: Light/Dark color sets for figure rendering.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub line_stroke: skia::Color,
    pub marker_fill: skia::Color,
}

impl Theme {
    /// White-background palette with the familiar plotting-toolkit blue.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 176, 176, 176),
            axis_line: skia::Color::from_argb(255, 38, 38, 38),
            axis_label: skia::Color::from_argb(255, 20, 20, 20),
            tick: skia::Color::from_argb(255, 90, 90, 90),
            line_stroke: skia::Color::from_argb(255, 31, 119, 180),
            marker_fill: skia::Color::from_argb(255, 31, 119, 180),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            marker_fill: skia::Color::from_argb(255, 64, 160, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}
