// File: crates/linechart-core/src/scale.rs
// Summary: Linear domain<->range mapping with "nice" 1/2/5/10 tick generation.

/// Continuous affine mapping between a data-space `domain` and an
/// output-space `range`.
///
/// Both pairs may be ascending, descending, or degenerate (equal endpoints).
/// A degenerate source interval maps every input to the first endpoint of the
/// destination instead of dividing by zero.
///
/// Scales are cheap value types rebuilt wholesale on every layout pass; the
/// mapping methods never mutate the scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: [f64; 2],
    pub range: [f64; 2],
}

impl Default for LinearScale {
    fn default() -> Self {
        Self { domain: [0.0, 1.0], range: [0.0, 1.0] }
    }
}

/// Interpolation factor of `v` within `[a, b]`, or 0 when the interval is
/// empty. The zero branch is explicit so a collapsed interval degrades to a
/// constant mapping rather than propagating NaN.
#[inline]
fn uninterpolate(v: f64, a: f64, b: f64) -> f64 {
    let diff = b - a;
    if diff == 0.0 { 0.0 } else { (v - a) / diff }
}

#[inline]
fn interpolate(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Forward mapping: data value -> range value.
    #[inline]
    pub fn scale(&self, x: f64) -> f64 {
        let t = uninterpolate(x, self.domain[0], self.domain[1]);
        interpolate(t, self.range[0], self.range[1])
    }

    /// Inverse mapping: range value -> data value.
    ///
    /// `invert(scale(x))` recovers `x` (within float tolerance) whenever both
    /// intervals are non-degenerate.
    #[inline]
    pub fn invert(&self, y: f64) -> f64 {
        let t = uninterpolate(y, self.range[0], self.range[1]);
        interpolate(t, self.domain[0], self.domain[1])
    }

    /// "Nice" tick range for roughly `m` ticks across the domain.
    ///
    /// The step is the power of ten nearest an even `m`-way division of the
    /// span, refined once by 2/5/10 so ticks land on human-friendly values.
    /// The domain may be given in either order.
    ///
    /// Preconditions (guaranteed by the chart layer's extent clamp): the
    /// domain span is non-zero and `m >= 1`.
    pub fn ticks(&self, m: usize) -> TickRange {
        let [lo, hi] = extent(self.domain);
        let span = hi - lo;
        let mut step = 10f64.powf((span / m as f64).log10().floor());
        let err = m as f64 / span * step;

        // Refine toward the requested count: 1/2/5/10 per decade.
        if err <= 0.15 {
            step *= 10.0;
        } else if err <= 0.35 {
            step *= 5.0;
        } else if err <= 0.75 {
            step *= 2.0;
        }

        let start = (lo / step).ceil() * step;
        // Stop sits half a step past the last exact multiple so an inclusive
        // stride still emits the final tick despite floating-point rounding.
        // Intentional quirk; without it the last grid line and label are
        // silently dropped.
        let stop = (hi / step).floor() * step + step * 0.5;

        TickRange { start, stop, step }
    }
}

/// Order-normalized copy of a two-element interval.
fn extent(domain: [f64; 2]) -> [f64; 2] {
    if domain[0] < domain[1] { domain } else { [domain[1], domain[0]] }
}

/// Arithmetic tick sequence `start, start+step, ..` up to and including
/// `stop`.
///
/// `stop` carries the half-step inclusivity bias from [`LinearScale::ticks`]
/// and is a bound, not a tick value; iterate via [`TickRange::iter`] instead
/// of treating `stop` as the last tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickRange {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl TickRange {
    /// Inclusive stride over the tick values.
    pub fn iter(&self) -> Ticks {
        Ticks { start: self.start, stop: self.stop, step: self.step, k: 0 }
    }

    /// Number of ticks the stride will emit.
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

impl IntoIterator for TickRange {
    type Item = f64;
    type IntoIter = Ticks;
    fn into_iter(self) -> Ticks {
        self.iter()
    }
}

/// Iterator over a [`TickRange`] stride.
///
/// Values are computed as `start + k * step` rather than accumulated, so the
/// inclusive upper bound is not eroded by additive drift.
#[derive(Clone, Debug)]
pub struct Ticks {
    start: f64,
    stop: f64,
    step: f64,
    k: u32,
}

impl Iterator for Ticks {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.step <= 0.0 {
            return None;
        }
        let v = self.start + f64::from(self.k) * self.step;
        if v > self.stop {
            return None;
        }
        self.k += 1;
        Some(v)
    }
}
