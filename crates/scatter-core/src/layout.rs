// File: crates/scatter-core/src/layout.rs
// Summary: Margin and plot dimension math (outer size, bounded drawing area).

use crate::error::{ChartError, Result};

/// Margins around the bounded drawing area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 {
        self.left + self.right
    }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(10.0, 10.0, 50.0, 50.0)
    }
}

/// Outer chart size plus the margins that carve out the bounded area.
/// Invariant: bounded width and height are positive (checked at construction).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Dimensions {
    /// Square chart sized to 90% of the smaller viewport edge, with the
    /// default margins.
    pub fn from_viewport(viewport_width: f64, viewport_height: f64) -> Result<Self> {
        let outer = viewport_width.min(viewport_height) * 0.9;
        Self::with_margin(outer, outer, Margin::default())
    }

    /// Explicit outer size and margins.
    ///
    /// Fails with `InvalidLayout` when the margins leave no positive drawing
    /// area, so callers reject the configuration before any drawing happens.
    pub fn with_margin(width: f64, height: f64, margin: Margin) -> Result<Self> {
        let dims = Self { width, height, margin };
        if !(dims.bounded_width() > 0.0 && dims.bounded_height() > 0.0) {
            return Err(ChartError::InvalidLayout { width, height });
        }
        Ok(dims)
    }

    /// Width of the drawing region inside the margins.
    pub fn bounded_width(&self) -> f64 {
        self.width - self.margin.hsum()
    }

    /// Height of the drawing region inside the margins.
    pub fn bounded_height(&self) -> f64 {
        self.height - self.margin.vsum()
    }
}
