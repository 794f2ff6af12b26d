// File: crates/hover-core/src/locate.rs
// Summary: Point lookup for a cursor x: binary search over raw data, linear scan over rendered geometry.

use crate::series::Geometry;

/// Index of the point at or immediately before `x` in time-sorted `data`.
///
/// Exact matches return their own index. Queries before the first point
/// clamp to 0 and queries past the last point return the last index, so the
/// result is always a valid index for non-empty input (0 for empty input).
pub fn find_index_in_data(data: &[(f64, f64)], x: f64) -> usize {
    let mut lower: isize = 0;
    let mut upper: isize = data.len() as isize - 1;
    while lower <= upper {
        let middle = (lower + upper) / 2;
        let t = data[middle as usize].0;
        if t == x {
            return middle as usize;
        } else if t < x {
            lower = middle + 1;
        } else {
            upper = middle - 1;
        }
    }
    upper.max(0) as usize
}

/// Sample index in `geometry` at or immediately before `x`, scanning forward from `start`.
///
/// The scan stops at the first sample whose x exceeds the query, or, for
/// non-step series, at the first gap when the start sample was defined.
/// Running off the end yields the last sample.
pub fn find_index_in_geometry(geometry: &Geometry, x: f64, start: usize, steps: bool) -> usize {
    let len = geometry.len();
    if len == 0 {
        return 0;
    }
    let start_defined = geometry.x_at(start).is_some();
    for j in start..len {
        let xj = geometry.x_at(j);
        let gap = !steps && start_defined && xj.is_none();
        if gap || xj.is_some_and(|v| v > x) {
            return j.saturating_sub(1);
        }
    }
    len - 1
}
