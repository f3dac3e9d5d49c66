// File: crates/chart-render/tests/model.rs
// Purpose: Series invariants and tick-layout helpers.

use chart_render::grid::{fmt_tick, linspace};
use chart_render::{LineSeries, Marker};

#[test]
fn from_xy_zips_parallel_slices() {
    let s = LineSeries::from_xy(&[1.0, 2.0, 3.0], &[10.0, 20.0, 30.0]).expect("equal lengths");
    assert_eq!(s.points, vec![(1.0, 10.0), (2.0, 20.0), (3.0, 30.0)]);
    assert_eq!(s.marker, Marker::None);
}

#[test]
fn from_xy_rejects_length_mismatch() {
    let err = LineSeries::from_xy(&[1.0, 2.0], &[10.0]).unwrap_err();
    assert_eq!(err, "x and y lengths differ");
}

#[test]
fn linspace_endpoints_and_count() {
    let ticks = linspace(0.0, 10.0, 6);
    assert_eq!(ticks.len(), 6);
    assert_eq!(ticks[0], 0.0);
    assert_eq!(ticks[5], 10.0);
    assert!((ticks[1] - 2.0).abs() < 1e-12);
}

#[test]
fn fmt_tick_trims_whole_numbers() {
    assert_eq!(fmt_tick(4.0), "4");
    assert_eq!(fmt_tick(-2.0), "-2");
    assert_eq!(fmt_tick(2.5), "2.50");
}
