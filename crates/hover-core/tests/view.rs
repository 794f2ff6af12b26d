// File: crates/hover-core/tests/view.rs
// Purpose: Data extents and pixel to data-space mapping.

use hover_core::{stack, Insets, Series, ViewState};

#[test]
fn empty_series_fall_back_to_unit_range() {
    let v = ViewState::from_series(&[]);
    assert_eq!((v.x_min, v.x_max, v.y_min, v.y_max), (0.0, 1.0, 0.0, 1.0));
}

#[test]
fn extents_include_stacked_tops() {
    let mut series = vec![
        Series::with_data("a", "#f00", vec![(0.0, 2.0), (10.0, 3.0)]).stacked(true),
        Series::with_data("b", "#0f0", vec![(0.0, 4.0), (10.0, 5.0)]).stacked(true),
    ];
    stack::apply(&mut series);
    let v = ViewState::from_series(&series);
    assert_eq!((v.x_min, v.x_max), (0.0, 10.0));
    assert_eq!((v.y_min, v.y_max), (2.0, 8.0));
}

#[test]
fn pixels_map_into_plot_area() {
    let v = ViewState { x_min: 0.0, x_max: 100.0, y_min: 0.0, y_max: 10.0 };
    let insets = Insets::new(20, 20, 10, 10);
    let p = v.to_data(120.0, 10.0, 240, 120, &insets);
    assert!((p.x - 50.0).abs() < 1e-9);
    assert!((p.y - 10.0).abs() < 1e-9);
    let bottom_left = v.to_data(20.0, 110.0, 240, 120, &insets);
    assert!(bottom_left.x.abs() < 1e-9 && bottom_left.y.abs() < 1e-9);
}

#[test]
fn selection_is_ordered() {
    let v = ViewState { x_min: 0.0, x_max: 100.0, y_min: 0.0, y_max: 1.0 };
    let insets = Insets::new(0, 0, 0, 0);
    let (from, to) = v.select_x(150.0, 50.0, 200, 100, &insets);
    assert!((from - 25.0).abs() < 1e-9);
    assert!((to - 75.0).abs() < 1e-9);
}
