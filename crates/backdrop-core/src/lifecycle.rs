//! The animation controller: owns all mutable backdrop state and decides
//! when frames are produced.
//!
//! The host calls [`Backdrop::step_frame`] from its per-refresh callback and
//! only schedules another callback when told to. At most one request is
//! outstanding at a time; pausing simply makes the next callback decline.

use crate::clock::Clock;
use crate::config::Config;
use crate::scene::Scene;
use crate::surface::{Surface, SurfaceError};
use crate::viewport::Viewport;
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A frame was painted; schedule the next callback.
    RequestNext,
    /// Paused; do not schedule a successor.
    Stop,
}

pub struct Backdrop<S: Surface> {
    surface: S,
    viewport: Viewport,
    scene: Scene,
    clock: Clock,
    rng: StdRng,
    state: RunState,
    frame_pending: bool,
    respect_reduce_motion: bool,
}

impl<S: Surface> Backdrop<S> {
    /// Size the surface, seed the entities and pick the initial run state.
    /// `reduced_motion` is the preference as read once at startup.
    pub fn new(
        mut surface: S,
        viewport: Viewport,
        config: Config,
        reduced_motion: bool,
        mut rng: StdRng,
        now: f64,
    ) -> Result<Self, SurfaceError> {
        viewport.apply(&mut surface)?;
        let respect_reduce_motion = config.respect_reduce_motion;
        let state = if respect_reduce_motion && reduced_motion {
            RunState::Paused
        } else {
            RunState::Running
        };
        let scene = Scene::new(config, &viewport, &mut rng);
        log::info!(
            "[lifecycle] backdrop ready {}x{} dpr={} state={:?}",
            viewport.width,
            viewport.height,
            viewport.dpr,
            state
        );
        Ok(Self {
            surface,
            viewport,
            scene,
            clock: Clock::new(now),
            rng,
            state,
            frame_pending: false,
            respect_reduce_motion,
        })
    }

    /// Returns true when the host should request the first frame.
    pub fn start(&mut self, now: f64) -> bool {
        if self.state == RunState::Paused {
            log::info!("[lifecycle] reduced motion preferred; staying paused");
            return false;
        }
        self.clock.reset(now);
        self.claim_request()
    }

    pub fn pause(&mut self) {
        if self.state == RunState::Running {
            log::debug!("[lifecycle] paused");
        }
        self.state = RunState::Paused;
    }

    /// Returns true when the host should request a frame.
    pub fn resume(&mut self, now: f64) -> bool {
        if self.state == RunState::Running {
            return false;
        }
        log::debug!("[lifecycle] resumed");
        self.state = RunState::Running;
        self.clock.reset(now);
        self.claim_request()
    }

    /// Visible pages, or configs that ignore the motion preference, run.
    /// Returns true when the host should request a frame.
    pub fn visibility_changed(&mut self, visible: bool, now: f64) -> bool {
        if visible || !self.respect_reduce_motion {
            self.resume(now)
        } else {
            self.pause();
            false
        }
    }

    pub fn resize(&mut self, viewport: Viewport) -> Result<(), SurfaceError> {
        viewport.apply(&mut self.surface)?;
        self.viewport = viewport;
        Ok(())
    }

    /// One host refresh callback.
    pub fn step_frame(&mut self, now: f64) -> Result<FrameOutcome, SurfaceError> {
        self.frame_pending = false;
        if self.state == RunState::Paused {
            return Ok(FrameOutcome::Stop);
        }
        let dt = self.clock.advance(now, self.scene.config.time_scale_ms());
        self.scene.render(
            self.clock.t,
            dt,
            &self.viewport,
            &mut self.surface,
            &mut self.rng,
        )?;
        self.frame_pending = true;
        Ok(FrameOutcome::RequestNext)
    }

    fn claim_request(&mut self) -> bool {
        if self.frame_pending {
            false
        } else {
            self.frame_pending = true;
            true
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
