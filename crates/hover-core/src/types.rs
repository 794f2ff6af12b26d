// File: crates/hover-core/src/types.rs
// Summary: Shared types (cursor position, plot insets).

/// Cursor position in chart data space (x is a timestamp in epoch millis).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Gap between the surface edge and the plot area, in pixels.
/// Cursor mapping in `ViewState` measures from the inner edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Pixels lost horizontally to the margins.
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Pixels lost vertically to the margins.
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    // Room for a value axis on the left and a time axis below.
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}
