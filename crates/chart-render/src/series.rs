// File: crates/chart-render/src/series.rs
// Summary: Line series model with per-point marker styling.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
}

#[derive(Clone)]
pub struct LineSeries {
    pub points: Vec<(f64, f64)>,
    pub marker: Marker,
    pub marker_radius: f32,
}

impl LineSeries {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points, marker: Marker::None, marker_radius: 4.0 }
    }

    /// Build a series from parallel x and y slices.
    /// Invariant: both slices have the same length.
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Result<Self, &'static str> {
        if xs.len() != ys.len() { return Err("x and y lengths differ"); }
        Ok(Self::new(xs.iter().copied().zip(ys.iter().copied()).collect()))
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_marker_radius(mut self, radius: f32) -> Self {
        self.marker_radius = radius.max(0.5);
        self
    }
}
