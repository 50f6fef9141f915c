use crate::lifecycle::{Backdrop, FrameOutcome};
use crate::surface::{Surface, SurfaceError};

/// Stand-in for a display loop: delivers refresh callbacks at a fixed
/// interval, but only while the controller has a frame request outstanding.
#[derive(Clone, Debug)]
pub struct FixedTickDriver {
    pub interval_ms: f64,
    pub now: f64,
}

impl FixedTickDriver {
    pub fn new(start_ms: f64, interval_ms: f64) -> Self {
        Self {
            interval_ms,
            now: start_ms,
        }
    }

    /// Move the clock without delivering a callback (e.g. while hidden).
    pub fn skip(&mut self, ms: f64) {
        self.now += ms;
    }

    /// Deliver up to `max_frames` callbacks; returns how many frames painted.
    pub fn run<S: Surface>(
        &mut self,
        backdrop: &mut Backdrop<S>,
        max_frames: usize,
    ) -> Result<usize, SurfaceError> {
        let mut painted = 0;
        while painted < max_frames && backdrop.frame_pending() {
            self.now += self.interval_ms;
            match backdrop.step_frame(self.now)? {
                FrameOutcome::RequestNext => painted += 1,
                FrameOutcome::Stop => break,
            }
        }
        Ok(painted)
    }
}
