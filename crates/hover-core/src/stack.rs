// File: crates/hover-core/src/stack.rs
// Summary: Rendered geometry builder; stacks series on top of each other and expands step series.
// Notes:
// - Plain series produce (x, y) samples, stacked series produce (x, top, bottom).
// - A NaN value in raw data becomes a gap (all coordinates `None`).

use crate::locate::find_index_in_data;
use crate::series::{Geometry, Series};

/// Samples per point for unstacked geometry.
pub const PLAIN_POINT_SIZE: usize = 2;
/// Samples per point for stacked geometry.
pub const STACKED_POINT_SIZE: usize = 3;

/// Unstacked geometry: one (x, y) sample per data point.
pub fn plain_geometry(data: &[(f64, f64)]) -> Geometry {
    let mut points = Vec::with_capacity(data.len() * PLAIN_POINT_SIZE);
    for &(t, v) in data {
        if v.is_nan() {
            points.extend([None, None]);
        } else {
            points.extend([Some(t), Some(v)]);
        }
    }
    Geometry::new(points, PLAIN_POINT_SIZE)
}

/// Stack `data` on top of `below` (time, top) pairs.
///
/// Returns the geometry and this series' own (time, top) pairs, which become
/// `below` for the next stacked series.
pub fn stacked_geometry(data: &[(f64, f64)], steps: bool, below: &[(f64, f64)]) -> (Geometry, Vec<(f64, f64)>) {
    let mut points = Vec::with_capacity(data.len() * STACKED_POINT_SIZE * if steps { 2 } else { 1 });
    let mut tops = Vec::with_capacity(data.len());
    let mut prev: Option<(f64, f64)> = None; // (top, bottom) of the previous defined sample

    for &(t, v) in data {
        let bottom = bottom_at(below, t);
        if v.is_nan() {
            points.extend([None, None, None]);
            tops.push((t, bottom));
            prev = None;
            continue;
        }
        let top = v + bottom;
        if steps {
            if let Some((ptop, pbottom)) = prev {
                points.extend([Some(t), Some(ptop), Some(pbottom)]);
            }
        }
        points.extend([Some(t), Some(top), Some(bottom)]);
        tops.push((t, top));
        prev = Some((top, bottom));
    }
    (Geometry::new(points, STACKED_POINT_SIZE), tops)
}

/// Rebuild the geometry of every series; stacked series stack in slice order.
pub fn apply(series: &mut [Series]) {
    let mut below: Vec<(f64, f64)> = Vec::new();
    let mut stacked = 0usize;
    for s in series.iter_mut() {
        if s.stacked {
            let (geometry, tops) = stacked_geometry(&s.data, s.steps, &below);
            s.geometry = geometry;
            // An empty stacked series leaves the stack below it untouched.
            if !s.data.is_empty() {
                below = tops;
            }
            stacked += 1;
        } else {
            s.geometry = plain_geometry(&s.data);
        }
    }
    tracing::debug!(series = series.len(), stacked, "rebuilt rendered geometry");
}

fn bottom_at(below: &[(f64, f64)], t: f64) -> f64 {
    match below.first() {
        Some(&(t0, _)) if t >= t0 => {
            let b = below[find_index_in_data(below, t)].1;
            if b.is_nan() { 0.0 } else { b }
        }
        _ => 0.0,
    }
}
