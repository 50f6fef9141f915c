use crate::constants::MAX_FRAME_DT_MS;

/// Simulation clock driven by host timestamps (milliseconds).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Clock {
    /// Accumulated simulation time.
    pub t: f64,
    /// Timestamp of the previous frame (or of the last resume).
    pub last: f64,
}

impl Clock {
    pub fn new(now: f64) -> Self {
        Self { t: 0.0, last: now }
    }

    /// Advance to `now` and return the clamped frame delta in milliseconds.
    /// Timestamps that run backwards yield a zero step.
    pub fn advance(&mut self, now: f64, time_scale_ms: f64) -> f64 {
        let dt = (now - self.last).clamp(0.0, MAX_FRAME_DT_MS);
        self.last = now;
        self.t += dt / time_scale_ms;
        dt
    }

    pub fn reset(&mut self, now: f64) {
        self.last = now;
    }
}
