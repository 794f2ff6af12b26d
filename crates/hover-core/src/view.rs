// File: crates/hover-core/src/view.rs
// Visible data ranges and pixel <-> data-space conversion for cursor handling.

use crate::series::Series;
use crate::types::{Insets, Position};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Data extents over all series, stacked tops included. Falls back to 0..1 when empty.
    pub fn from_series(series: &[Series]) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in series {
            for &(x, y) in &s.data {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                if !y.is_nan() {
                    y_min = y_min.min(y);
                    y_max = y_max.max(y);
                }
            }
            if s.stacked {
                for i in 0..s.geometry.len() {
                    if let Some(top) = s.geometry.y_at(i) {
                        y_min = y_min.min(top);
                        y_max = y_max.max(top);
                    }
                }
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        Self { x_min, x_max, y_min, y_max }
    }

    /// Map a pixel cursor position inside a `width` x `height` surface to data space.
    /// Positions outside the plot area extrapolate linearly.
    pub fn to_data(&self, px: f64, py: f64, width: i32, height: i32, insets: &Insets) -> Position {
        let l = insets.left as f64;
        let t = insets.top as f64;
        let plot_w = (width as f64 - insets.hsum() as f64).max(1.0);
        let plot_h = (height as f64 - insets.vsum() as f64).max(1.0);
        let x = self.x_min + (px - l) / plot_w * (self.x_max - self.x_min);
        let y = self.y_max - (py - t) / plot_h * (self.y_max - self.y_min);
        Position::new(x, y)
    }

    /// Convert a horizontal pixel drag into an ordered (from, to) time range.
    pub fn select_x(&self, px0: f64, px1: f64, width: i32, height: i32, insets: &Insets) -> (f64, f64) {
        let a = self.to_data(px0, 0.0, width, height, insets).x;
        let b = self.to_data(px1, 0.0, width, height, insets).x;
        if a <= b { (a, b) } else { (b, a) }
    }
}
