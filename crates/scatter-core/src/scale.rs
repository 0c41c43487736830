// File: crates/scatter-core/src/scale.rs
// Summary: Extent computation and linear domain-to-pixel scales with nice rounding.

use tracing::debug;

use crate::color::SequentialScale;
use crate::error::{ChartError, Result};
use crate::layout::Dimensions;
use crate::record::{Channels, Field, WeatherRecord};

/// Target number of tick intervals; `nice` and `ticks` share it so tested
/// domain boundaries stay stable.
pub const TICK_COUNT: usize = 10;

/// Minimum and maximum of `field` across the dataset.
///
/// Non-finite values are ignored. Fails with `EmptyDataset` when no usable
/// value exists.
pub fn extent(records: &[WeatherRecord], field: Field) -> Result<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for r in records {
        let v = field.value(r);
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        return Err(ChartError::EmptyDataset);
    }
    Ok((min, max))
}

/// Linear mapping from a numeric domain onto a pixel range.
///
/// The range may run backwards (`r0 > r1`) for inverted axes. A degenerate
/// domain (min == max) maps every input to the range midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span.abs() < f64::EPSILON {
            return (self.r0 + self.r1) * 0.5;
        }
        self.r0 + (v - self.d0) / span * (self.r1 - self.r0)
    }

    /// Expand the domain outward to the nearest multiples of a 1/2/5 step.
    ///
    /// The step targets roughly `count` intervals across the domain. The
    /// niced domain always covers the original one; bounds already sitting
    /// on a step boundary are left unchanged.
    pub fn nice(mut self, count: usize) -> Self {
        let step = tick_step(self.d0, self.d1, count);
        if step > 0.0 {
            self.d0 = (self.d0 / step).floor() * step;
            self.d1 = (self.d1 / step).ceil() * step;
        }
        self
    }

    /// Tick positions across the domain, using the same stepping as `nice`
    /// so a niced domain starts and ends on a tick.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let step = tick_step(self.d0, self.d1, count);
        if step <= 0.0 {
            return vec![self.d0];
        }
        let start = (self.d0 / step).ceil() as i64;
        let end = (self.d1 / step).floor() as i64;
        (start..=end).map(|i| i as f64 * step).collect()
    }
}

/// Step size covering `[lo, hi]` with roughly `count` intervals, snapped
/// outward to the nearest 1/2/5 x 10^k value.
fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let span = hi - lo;
    if !(span > 0.0) || count == 0 {
        return 0.0;
    }
    let raw = span / count as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// The three per-render scales derived from one dataset.
#[derive(Clone, Copy, Debug)]
pub struct Scales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub color: SequentialScale,
}

/// Derive x/y/color scales from the full dataset.
///
/// x maps onto `[0, bounded_width]`; y maps onto `[bounded_height, 0]` so
/// larger values plot higher; color maps onto the sequential ramp. The
/// positional domains are niced outward, the color domain keeps its raw
/// extent.
pub fn build_scales(
    records: &[WeatherRecord],
    channels: Channels,
    dims: &Dimensions,
) -> Result<Scales> {
    let (x0, x1) = extent(records, channels.x)?;
    let (y0, y1) = extent(records, channels.y)?;
    let (c0, c1) = extent(records, channels.color)?;

    let x = LinearScale::new((x0, x1), (0.0, dims.bounded_width())).nice(TICK_COUNT);
    let y = LinearScale::new((y0, y1), (dims.bounded_height(), 0.0)).nice(TICK_COUNT);
    let color = SequentialScale::new(c0, c1);
    debug!(?x, ?y, "built scales");
    Ok(Scales { x, y, color })
}
