// File: crates/chart-gen/src/generator.rs
// Summary: The chart-generation operation: fixed series, fixed styling, one PNG.

use anyhow::Context;
use chart_render::{Axis, Figure, FigureOptions, LineSeries, Marker, DPI};

use crate::error::ChartGenError;
use crate::storage::StorageProvider;

/// Output file name inside the writable directory. Stable across calls,
/// so every invocation overwrites the previous chart.
pub const CHART_FILE_NAME: &str = "chart.png";

const SAMPLE_X: [f64; 9] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
const SAMPLE_Y: [f64; 9] = [10.0, 20.0, 30.0, 26.0, 50.0, 34.0, 25.0, 66.0, 58.0];

const TITLE: &str = "Simple Line Chart";
const X_LABEL: &str = "X Axis";
const Y_LABEL: &str = "Y Axis";

/// Figure size in inches, rendered at the default dpi.
const FIG_W_IN: f64 = 6.0;
const FIG_H_IN: f64 = 4.0;

/// Render the fixed sample series as a line chart with circular markers
/// and write it to `<files_dir>/chart.png`, returning the absolute path
/// for the host to load and display.
///
/// Synchronous and unguarded: concurrent callers race on the same file,
/// last writer wins.
pub fn create_chart(storage: &dyn StorageProvider) -> Result<String, ChartGenError> {
    Ok(generate(storage)?)
}

fn generate(storage: &dyn StorageProvider) -> anyhow::Result<String> {
    let files_dir = storage
        .files_dir()
        .context("writable directory lookup failed")?;
    // Never write to a relative or arbitrary location.
    if !files_dir.is_absolute() {
        anyhow::bail!("writable directory is not absolute: {}", files_dir.display());
    }

    let mut figure = Figure::new(FigureOptions::with_size_inches(FIG_W_IN, FIG_H_IN, DPI))?;
    figure.x_axis = Axis::new(X_LABEL, 0.0, 1.0);
    figure.y_axis = Axis::new(Y_LABEL, 0.0, 1.0);
    figure.add_series(
        LineSeries::from_xy(&SAMPLE_X, &SAMPLE_Y)
            .map_err(anyhow::Error::msg)?
            .with_marker(Marker::Circle),
    );
    figure.autoscale_axes(0.05);
    figure.set_title(TITLE);
    figure.grid(true);

    let chart_path = files_dir.join(CHART_FILE_NAME);
    figure
        .save_png(&chart_path)
        .with_context(|| format!("failed to write '{}'", chart_path.display()))?;

    Ok(chart_path.to_string_lossy().into_owned())
}
