mod timing;

pub use timing::TimingFunction;

use std::time::Duration;

/// An infinitely repeating one-way sweep, like a CSS keyframe animation with
/// `animation-iteration-count: infinite`.
#[derive(Clone, Debug)]
pub struct Sweep {
    /// Length of one cycle
    pub period: Duration,
    /// Curve applied within each cycle
    pub timing: TimingFunction,
}

impl Sweep {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            timing: TimingFunction::default(),
        }
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// Eased progress through the current cycle, in `0.0..=1.0`.
    ///
    /// A zero period never advances.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let period = self.period.as_secs_f64();
        if period <= 0.0 {
            return 0.0;
        }
        let t = (elapsed.as_secs_f64() % period / period) as f32;
        self.timing.evaluate(t)
    }

    /// Horizontal shift of a band `width` wide, moving from `-width` to `+width`.
    pub fn offset(&self, width: f32, elapsed: Duration) -> f32 {
        width * (2.0 * self.progress(elapsed) - 1.0)
    }
}
