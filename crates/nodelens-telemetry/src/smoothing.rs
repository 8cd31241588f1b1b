//! Exponential smoothing of noisy frame deltas.

/// First-order low-pass filter producing a display-stable frame time.
///
/// Raw per-frame deltas jitter far too much to print directly; the overlay
/// shows the smoothed value instead. The filter bootstraps on its first
/// sample so the display never ramps up from zero.
#[derive(Debug, Clone)]
pub struct DeltaSmoother {
    factor: f32,
    soft_delta: f64,
}

impl DeltaSmoother {
    /// Default smoothing factor, in seconds. Roughly the time for the
    /// smoothed value to cover 63% of a step change.
    pub const DEFAULT_FACTOR: f32 = 0.15;

    /// Creates a smoother with the given factor in seconds.
    pub fn new(factor: f32) -> Self {
        Self {
            factor,
            soft_delta: 0.0,
        }
    }

    /// One smoothing step.
    ///
    /// On the very first observation (`previous == 0.0`) the output equals
    /// `raw` directly. Thereafter the output moves a fraction of the way
    /// from `previous` toward `raw`, with `alpha = 1 - exp(-dt / factor)`;
    /// alpha stays in (0, 1) for positive inputs, so convergence toward a
    /// constant raw value is monotone and never overshoots.
    pub fn smooth(previous: f64, raw: f64, dt: f32, factor: f32) -> f64 {
        if previous == 0.0 {
            return raw;
        }
        let alpha = 1.0 - (-f64::from(dt) / f64::from(factor)).exp();
        previous + (raw - previous) * alpha
    }

    /// Feeds one raw delta (ms) observed over `dt` seconds of simulation
    /// time; returns the updated smoothed delta.
    pub fn push(&mut self, raw_delta_ms: f64, dt: f32) -> f64 {
        self.soft_delta = Self::smooth(self.soft_delta, raw_delta_ms, dt, self.factor);
        self.soft_delta
    }

    /// Current smoothed frame delta in milliseconds.
    pub fn soft_delta_ms(&self) -> f64 {
        self.soft_delta
    }

    /// Smoothed frame rate in frames per second, or 0 before any sample.
    pub fn smoothed_fps(&self) -> f64 {
        if self.soft_delta == 0.0 {
            0.0
        } else {
            1000.0 / self.soft_delta
        }
    }
}

impl Default for DeltaSmoother {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FACTOR)
    }
}

/// Instantaneous frame rate for a raw delta in milliseconds.
///
/// A zero delta is a caller contract violation: consecutive frames are
/// expected to carry distinct start timestamps.
#[inline]
pub fn fps(delta_ms: f64) -> f64 {
    1000.0 / delta_ms
}
