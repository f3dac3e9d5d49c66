// File: crates/chart-render/src/axis.rs
// Summary: Axis model with label and visible range.

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 1.0)
    }

    /// Visible span, floored to stay usable as a divisor.
    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }
}
