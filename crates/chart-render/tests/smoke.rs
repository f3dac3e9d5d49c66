// File: crates/chart-render/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_render::{Axis, Figure, FigureOptions, LineSeries, Marker};

#[test]
fn render_smoke_png() {
    // Minimal data: tiny line series
    let mut fig = Figure::new(FigureOptions::default()).expect("surface");
    fig.x_axis = Axis::new("X", 0.0, 4.0);
    fig.y_axis = Axis::new("Y", 0.0, 4.0);
    fig.add_series(
        LineSeries::new(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)])
            .with_marker(Marker::Circle),
    );
    fig.grid(true);
    fig.set_title("Smoke");

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    fig.save_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = fig.to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
