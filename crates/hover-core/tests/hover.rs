// File: crates/hover-core/tests/hover.rs
// Purpose: Hover aggregation (nearest point, representative time, stacked totals).

use hover_core::{resolve, stack, Geometry, HoverOptions, Position, Series};

fn at(x: f64) -> Position {
    Position::new(x, 0.0)
}

fn stacked_pair() -> Vec<Series> {
    let mut series = vec![
        Series::with_data("a", "#f00", vec![(0.0, 3.0), (10.0, 1.0)]).stacked(true),
        Series::with_data("b", "#0f0", vec![(0.0, 4.0), (10.0, 2.0)]).stacked(true),
    ];
    stack::apply(&mut series);
    series
}

#[test]
fn single_series_scenario() {
    let series = vec![Series::with_data("temp", "#2196f3", vec![(0.0, 10.0), (10.0, 20.0), (20.0, 15.0)])];
    let info = resolve(&series, at(12.0), HoverOptions::default());
    assert_eq!(info.series_hover.len(), 1);
    let h = &info.series_hover[0];
    assert_eq!(h.point_index, 1);
    assert_eq!(h.time, 10.0);
    assert_eq!(h.value, 20.0);
    assert_eq!(h.distance, 2.0);
    assert_eq!(h.label, "temp");
    assert_eq!(h.color, "#2196f3");
    assert_eq!(info.time, Some(10.0));
}

#[test]
fn empty_input_has_no_time() {
    let info = resolve(&[], at(5.0), HoverOptions::default());
    assert!(info.is_empty());
    assert_eq!(info.time, None);
}

#[test]
fn empty_series_are_skipped() {
    let series = vec![
        Series::new("empty", "#000"),
        Series::with_data("b", "#111", vec![(1.0, 2.0)]),
    ];
    let info = resolve(&series, at(5.0), HoverOptions::default());
    assert_eq!(info.series_hover.len(), 1);
    assert_eq!(info.series_hover[0].series_index, 1);
}

#[test]
fn cumulative_sums_stacked_values() {
    let series = stacked_pair();
    let opts = HoverOptions { cumulative: true, individual: false };
    let values: Vec<f64> = resolve(&series, at(0.0), opts).series_hover.iter().map(|h| h.value).collect();
    assert_eq!(values, vec![3.0, 7.0]);

    // The accumulator starts over on every call.
    let again: Vec<f64> = resolve(&series, at(0.0), opts).series_hover.iter().map(|h| h.value).collect();
    assert_eq!(again, vec![3.0, 7.0]);
}

#[test]
fn raw_values_without_cumulative_or_in_individual_mode() {
    let series = stacked_pair();
    let off = resolve(&series, at(0.0), HoverOptions::default());
    assert_eq!(off.series_hover[1].value, 4.0);
    let individual = resolve(&series, at(0.0), HoverOptions { cumulative: true, individual: true });
    assert_eq!(individual.series_hover[1].value, 4.0);
}

#[test]
fn unstacked_series_do_not_accumulate() {
    let mut series = vec![
        Series::with_data("a", "#f00", vec![(0.0, 3.0)]).stacked(true),
        Series::with_data("plain", "#00f", vec![(0.0, 100.0)]),
        Series::with_data("b", "#0f0", vec![(0.0, 4.0)]).stacked(true),
    ];
    stack::apply(&mut series);
    let info = resolve(&series, at(0.0), HoverOptions { cumulative: true, individual: false });
    let values: Vec<f64> = info.series_hover.iter().map(|h| h.value).collect();
    assert_eq!(values, vec![3.0, 100.0, 7.0]);
}

#[test]
fn tie_prefers_non_negative_distance() {
    // `after` sits 2 past the cursor (distance -2) and comes first in order.
    let series = vec![
        Series::with_data("after", "#f00", vec![(12.0, 1.0)]),
        Series::with_data("before", "#0f0", vec![(8.0, 1.0)]),
    ];
    let info = resolve(&series, at(10.0), HoverOptions::default());
    assert_eq!(info.series_hover[0].distance, -2.0);
    assert_eq!(info.series_hover[1].distance, 2.0);
    assert_eq!(info.time, Some(8.0));

    let reversed: Vec<Series> = series.into_iter().rev().collect();
    assert_eq!(resolve(&reversed, at(10.0), HoverOptions::default()).time, Some(8.0));
}

#[test]
fn smallest_distance_wins() {
    let series = vec![
        Series::with_data("far", "#f00", vec![(0.0, 1.0)]),
        Series::with_data("near", "#0f0", vec![(0.0, 1.0), (9.0, 2.0)]),
        Series::with_data("ahead", "#00f", vec![(10.5, 1.0)]),
    ];
    let info = resolve(&series, at(10.0), HoverOptions::default());
    assert_eq!(info.time, Some(10.5));
}

#[test]
fn query_before_all_data_clamps_to_first_point() {
    let series = vec![
        Series::with_data("a", "#f00", vec![(100.0, 1.0), (200.0, 2.0)]),
        Series::with_data("b", "#0f0", vec![(150.0, 5.0), (250.0, 6.0), (300.0, 7.0)]),
    ];
    let info = resolve(&series, at(-1.0e9), HoverOptions::default());
    assert!(info.series_hover.iter().all(|h| h.point_index == 0));
    assert_eq!(info.time, Some(100.0));
}

#[test]
fn resolution_is_repeatable() {
    let series = stacked_pair();
    let opts = HoverOptions { cumulative: true, individual: false };
    assert_eq!(resolve(&series, at(7.0), opts), resolve(&series, at(7.0), opts));
}

#[test]
fn stacked_step_series_report_geometry_index() {
    let mut series = vec![Series::with_data("s", "#f00", vec![(0.0, 1.0), (10.0, 2.0), (20.0, 3.0)])
        .stacked(true)
        .with_steps(true)];
    stack::apply(&mut series);
    // Samples: 0, 10 (step), 10, 20 (step), 20.
    assert_eq!(series[0].geometry.len(), 5);
    let info = resolve(&series, at(12.0), HoverOptions::default());
    assert_eq!(info.series_hover[0].point_index, 2);
    assert_eq!(series[0].geometry.y_at(2), Some(2.0));
    // Time and value still come from raw data.
    assert_eq!(info.series_hover[0].time, 10.0);
    assert_eq!(info.series_hover[0].value, 2.0);
}

#[test]
fn display_sort_puts_largest_first_and_nan_last() {
    let series = vec![
        Series::with_data("low", "#f00", vec![(0.0, 1.0)]),
        Series::with_data("gap", "#0f0", vec![(0.0, f64::NAN)]),
        Series::with_data("high", "#00f", vec![(0.0, 5.0)]),
    ];
    let mut info = resolve(&series, at(0.0), HoverOptions::default());
    info.sort_by_value_desc();
    let labels: Vec<&str> = info.series_hover.iter().map(|h| h.label.as_str()).collect();
    assert_eq!(labels, vec!["high", "low", "gap"]);
    assert_eq!(info.highlights(), vec![(2, 0), (0, 0), (1, 0)]);
}

#[test]
fn renderer_supplied_geometry_is_scanned() {
    let geometry = Geometry::new(
        vec![Some(0.0), Some(1.0), Some(5.0), Some(1.0), Some(9.0), Some(1.0)],
        2,
    );
    let series = vec![Series::with_data("s", "#f00", vec![(0.0, 1.0), (10.0, 1.0)])
        .stacked(true)
        .with_geometry(geometry)];
    assert!(!series[0].is_empty());
    let info = resolve(&series, at(7.0), HoverOptions::default());
    assert_eq!(info.series_hover[0].point_index, 1);
    assert_eq!(info.series_hover[0].time, 0.0);
}
