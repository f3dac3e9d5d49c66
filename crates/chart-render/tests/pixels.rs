// File: crates/chart-render/tests/pixels.rs
// Purpose: Decode rendered output and validate dimensions, background, grid
// and line-stroke colors. Text is disabled to avoid font variance.

use chart_render::{Axis, Figure, FigureOptions, LineSeries, Marker, DPI};

fn render_fixture() -> image::RgbaImage {
    let mut opts = FigureOptions::with_size_inches(6.0, 4.0, DPI);
    opts.draw_text = false;
    let mut fig = Figure::new(opts).expect("surface");
    fig.x_axis = Axis::new("X", 0.0, 9.0);
    fig.y_axis = Axis::new("Y", 0.0, 70.0);
    fig.add_series(
        LineSeries::new(vec![
            (1.0, 10.0),
            (2.0, 20.0),
            (3.0, 30.0),
            (4.0, 26.0),
            (5.0, 50.0),
            (6.0, 34.0),
            (7.0, 25.0),
            (8.0, 66.0),
            (9.0, 58.0),
        ])
        .with_marker(Marker::Circle),
    );
    fig.grid(true);

    let bytes = fig.to_png_bytes().expect("render bytes");
    image::load_from_memory(&bytes).expect("decode png").to_rgba8()
}

fn count_near(img: &image::RgbaImage, rgb: [u8; 3], tol: i32) -> usize {
    img.pixels()
        .filter(|p| {
            let [r, g, b, a] = p.0;
            a == 255
                && (r as i32 - rgb[0] as i32).abs() <= tol
                && (g as i32 - rgb[1] as i32).abs() <= tol
                && (b as i32 - rgb[2] as i32).abs() <= tol
        })
        .count()
}

#[test]
fn dimensions_match_figure_size() {
    let img = render_fixture();
    assert_eq!(img.dimensions(), (600, 400));
}

#[test]
fn background_grid_and_line_are_visible() {
    let img = render_fixture();

    // corner pixel lies outside the plot area: pure background
    let corner = img.get_pixel(1, 1);
    assert_eq!(corner.0, [255, 255, 255, 255]);

    // the stroked polyline and filled markers leave saturated core pixels
    let line = count_near(&img, [31, 119, 180], 40);
    assert!(line > 50, "expected line-stroke pixels, found {line}");

    // grid lines blend with the background but stay close to their color
    let grid = count_near(&img, [176, 176, 176], 60);
    assert!(grid > 200, "expected grid pixels, found {grid}");
}

#[test]
fn rgba_buffer_shape() {
    let mut opts = FigureOptions::default();
    opts.draw_text = false;
    let mut fig = Figure::new(opts).expect("surface");
    fig.x_axis = Axis::new("X", 0.0, 4.0);
    fig.y_axis = Axis::new("Y", 0.0, 4.0);
    fig.add_series(LineSeries::new(vec![(0.0, 0.0), (4.0, 4.0)]));

    let (px, w, h, stride) = fig.to_rgba8().expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, w as usize * 4);

    // Check background alpha in top-left pixel (RGBA)
    let a = px[3];
    assert_eq!(a, 255);
}
