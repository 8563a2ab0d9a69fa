// File: crates/linechart-core/src/types.rs
// Summary: Shared types and constants (default sizes, margins).

/// Default viewport width in pixels.
pub const WIDTH: f64 = 1024.0;
/// Default viewport height in pixels.
pub const HEIGHT: f64 = 640.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 {
        self.left + self.right
    }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(23.0, 15.0, 15.0, 15.0)
    }
}
