// File: crates/hover-core/src/series.rs
// Summary: Series model (raw time/value data, display metadata, rendered geometry).
// Notes:
// - `data` is the raw input, sorted ascending by time.
// - `geometry` is what the chart actually draws; for stacked or stepped
//   series it does not index-align with `data`.

use crate::stack;

/// Packed rendered samples: `point_size` numbers per sample, `None` marks a gap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    pub points: Vec<Option<f64>>,
    pub point_size: usize,
}

impl Geometry {
    pub fn new(points: Vec<Option<f64>>, point_size: usize) -> Self {
        Self { points, point_size: point_size.max(1) }
    }

    /// Number of whole samples in the buffer.
    pub fn len(&self) -> usize {
        if self.point_size == 0 { 0 } else { self.points.len() / self.point_size }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// X coordinate of sample `index`, `None` for gaps or out-of-range.
    pub fn x_at(&self, index: usize) -> Option<f64> {
        self.points.get(index * self.point_size).copied().flatten()
    }

    /// Y coordinate (top of the stack for stacked series) of sample `index`.
    pub fn y_at(&self, index: usize) -> Option<f64> {
        if self.point_size < 2 { return None; }
        self.points.get(index * self.point_size + 1).copied().flatten()
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub color: String,
    pub data: Vec<(f64, f64)>,
    pub stacked: bool,
    pub steps: bool,
    pub geometry: Geometry,
}

impl Series {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            data: Vec::new(),
            stacked: false,
            steps: false,
            geometry: Geometry::default(),
        }
    }

    /// Build a plain series and derive its unstacked geometry.
    pub fn with_data(label: impl Into<String>, color: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        let mut s = Self::new(label, color);
        s.data = data;
        s.geometry = stack::plain_geometry(&s.data);
        s
    }

    /// Mark as stacked. Geometry is rebuilt by [`stack::apply`] once all series are known.
    pub fn stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    pub fn with_steps(mut self, steps: bool) -> Self {
        self.steps = steps;
        self
    }

    /// Replace the rendered geometry, e.g. with a buffer produced by an external renderer.
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }
}
