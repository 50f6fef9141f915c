//! Blobs and flow particles, and the factory that seeds them from a config.

use crate::config::Config;
use crate::constants::*;
use crate::viewport::Viewport;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// Soft radial disc orbiting the viewport center. Every field is fixed at
/// creation; the on-screen center is derived from the clock each frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Blob {
    pub radius: f64,
    pub hue: f64,
    pub speed: DVec2,
    pub phase: DVec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlowParticle {
    pub pos: DVec2,
    /// Velocity magnitude; direction comes from the field.
    pub v: f64,
    /// Stroke width.
    pub w: f64,
    pub life: f64,
    pub hue: f64,
}

impl FlowParticle {
    pub fn is_alive(&self, viewport: &Viewport) -> bool {
        self.life >= 0.0 && viewport.contains_with_margin(self.pos, FLOW_RESPAWN_MARGIN)
    }

    /// Fresh position and life; hue carries over.
    pub fn respawn<R: Rng + ?Sized>(&mut self, viewport: &Viewport, rng: &mut R) {
        self.pos = random_position(viewport, rng);
        self.life = uniform(rng, FLOW_LIFE.0, FLOW_LIFE.1);
    }
}

pub fn create_blobs<R: Rng + ?Sized>(
    config: &Config,
    viewport: &Viewport,
    rng: &mut R,
) -> Vec<Blob> {
    let m = viewport.extent_min();
    let teal_max = config.hue_teal_max();
    (0..config.blob_count)
        .map(|_| {
            let hue = if rng.gen_bool(0.5) {
                uniform(rng, HUE_PEACH, HUE_PEACH_MAX)
            } else {
                uniform(rng, teal_max - TEAL_BAND_WIDTH, teal_max)
            };
            Blob {
                radius: uniform(rng, BLOB_RADIUS_MIN, BLOB_RADIUS_MAX) * m,
                hue,
                speed: DVec2::new(
                    uniform(rng, BLOB_SPEED_X.0, BLOB_SPEED_X.1) * config.intensity,
                    uniform(rng, BLOB_SPEED_Y.0, BLOB_SPEED_Y.1) * config.intensity,
                ),
                phase: DVec2::new(uniform(rng, 0.0, TAU), uniform(rng, 0.0, TAU)),
            }
        })
        .collect()
}

pub fn create_flow_particles<R: Rng + ?Sized>(
    config: &Config,
    viewport: &Viewport,
    rng: &mut R,
) -> Vec<FlowParticle> {
    let teal_max = config.hue_teal_max();
    let width_scale = FLOW_WIDTH_BASE + FLOW_WIDTH_PER_INTENSITY * config.intensity;
    (0..config.flow_particle_count())
        .map(|_| FlowParticle {
            pos: random_position(viewport, rng),
            v: uniform(rng, FLOW_SPEED.0, FLOW_SPEED.1) * config.intensity,
            w: uniform(rng, FLOW_WIDTH.0, FLOW_WIDTH.1) * width_scale,
            life: uniform(rng, FLOW_LIFE.0, FLOW_LIFE.1),
            hue: uniform(rng, HUE_PEACH, teal_max),
        })
        .collect()
}

fn random_position<R: Rng + ?Sized>(viewport: &Viewport, rng: &mut R) -> DVec2 {
    DVec2::new(
        uniform(rng, 0.0, viewport.width),
        uniform(rng, 0.0, viewport.height),
    )
}

// `gen_range` panics on empty ranges (zero-sized viewports), this does not.
#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * rng.gen::<f64>()
}
