// File: crates/chart-render/src/lib.rs
// Summary: Library entry point; exports the figure construction and rendering API.

pub mod axis;
pub mod figure;
pub mod grid;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use figure::{Figure, FigureOptions};
pub use series::{LineSeries, Marker};
pub use text::TextShaper;
pub use theme::Theme;
pub use types::{Insets, DPI, HEIGHT, WIDTH};
