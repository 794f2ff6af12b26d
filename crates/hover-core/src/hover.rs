// File: crates/hover-core/src/hover.rs
// Summary: Hover aggregation; nearest point per series, stacked accumulation, representative time.

use std::cmp::Ordering;

use crate::locate::{find_index_in_data, find_index_in_geometry};
use crate::series::Series;
use crate::types::Position;

/// Chart-wide display flags that affect resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverOptions {
    /// Report running totals for stacked series.
    pub cumulative: bool,
    /// Tooltip shows only the series under the cursor. Disables cumulative values.
    pub individual: bool,
}

impl HoverOptions {
    pub fn cumulative_effective(&self) -> bool {
        self.cumulative && !self.individual
    }
}

/// One series' contribution to a hover result.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesHover {
    pub series_index: usize,
    pub value: f64,
    pub time: f64,
    pub color: String,
    pub label: String,
    /// Index into `data` for plain series, into the rendered geometry for stacked ones.
    pub point_index: usize,
    /// Query x minus point time.
    pub distance: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverInfo {
    pub series_hover: Vec<SeriesHover>,
    /// Time of the point nearest the cursor across all series.
    pub time: Option<f64>,
}

impl HoverInfo {
    pub fn is_empty(&self) -> bool { self.series_hover.is_empty() }

    /// Display ordering: largest value first, NaN values last. Stable for equal values.
    pub fn sort_by_value_desc(&mut self) {
        self.series_hover.sort_by(|a, b| match (a.value.is_nan(), b.value.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal),
        });
    }

    /// (series index, point index) pairs for point highlighting.
    pub fn highlights(&self) -> Vec<(usize, usize)> {
        self.series_hover.iter().map(|h| (h.series_index, h.point_index)).collect()
    }
}

/// Resolve the hover result for `pos` over `series`.
///
/// Entries keep series order; empty series are skipped.
pub fn resolve(series: &[Series], pos: Position, opts: HoverOptions) -> HoverInfo {
    let cumulative = opts.cumulative_effective();
    let mut running = 0.0f64;
    let mut min_distance: Option<f64> = None;
    let mut info = HoverInfo::default();

    for (i, s) in series.iter().enumerate() {
        if s.data.is_empty() {
            continue;
        }
        let mut index = find_index_in_data(&s.data, pos.x);
        let (time, raw) = s.data[index];
        let distance = pos.x - time;

        if closer(distance, min_distance) {
            min_distance = Some(distance);
            info.time = Some(time);
        }

        let value = if s.stacked && cumulative {
            if !raw.is_nan() {
                running += raw;
            }
            running
        } else {
            raw
        };

        if s.stacked && !s.geometry.is_empty() {
            index = find_index_in_geometry(&s.geometry, pos.x, index, s.steps);
        }

        info.series_hover.push(SeriesHover {
            series_index: i,
            value,
            time,
            color: s.color.clone(),
            label: s.label.clone(),
            point_index: index,
            distance,
        });
    }

    tracing::trace!(x = pos.x, entries = info.series_hover.len(), time = ?info.time, "resolved hover");
    info
}

// Smaller magnitude wins; on equal magnitude a non-negative distance beats a negative one.
fn closer(distance: f64, current: Option<f64>) -> bool {
    match current {
        None => true,
        Some(m) => {
            let (a, b) = (distance.abs(), m.abs());
            a < b || (a == b && distance >= 0.0 && m < 0.0)
        }
    }
}
