// File: crates/chart-render/src/types.rs
// Summary: Shared types and constants (figure size, dpi, paddings).

/// Raster resolution in pixels per logical inch.
pub const DPI: f64 = 100.0;
/// Default surface width in pixels (6 in at 100 dpi).
pub const WIDTH: i32 = 600;
/// Default surface height in pixels (4 in at 100 dpi).
pub const HEIGHT: i32 = 400;

/// Margins around the plot area, in pixels.
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
        // Room for y tick labels and a rotated axis label on the left,
        // the title above, tick labels and the x label below.
        Self::new(60, 16, 36, 48)
    }
}
