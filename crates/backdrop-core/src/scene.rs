//! Per-frame simulation and compositing.
//!
//! Layer order is fixed: trail fade (source-over), blobs (screen), flow
//! lines (lighter). Swapping the order or the composite modes changes how
//! colors mix on screen.

use crate::color::{Hsla, FADE_WHITE};
use crate::config::Config;
use crate::constants::*;
use crate::entities::{create_blobs, create_flow_particles, Blob, FlowParticle};
use crate::field::field;
use crate::surface::{ColorStop, CompositeMode, Paint, Surface, SurfaceError};
use crate::viewport::Viewport;
use glam::DVec2;
use rand::Rng;

pub struct Scene {
    pub config: Config,
    pub blobs: Vec<Blob>,
    pub particles: Vec<FlowParticle>,
    hue_teal_max: f64,
}

impl Scene {
    pub fn new<R: Rng + ?Sized>(config: Config, viewport: &Viewport, rng: &mut R) -> Self {
        let blobs = create_blobs(&config, viewport, rng);
        let particles = create_flow_particles(&config, viewport, rng);
        let hue_teal_max = config.hue_teal_max();
        log::debug!(
            "[scene] blobs={} particles={} teal_max={}",
            blobs.len(),
            particles.len(),
            hue_teal_max
        );
        Self {
            config,
            blobs,
            particles,
            hue_teal_max,
        }
    }

    pub fn hue_teal_max(&self) -> f64 {
        self.hue_teal_max
    }

    /// Paint one frame at simulation time `t`, stepping particles by `dt` ms.
    pub fn render<S, R>(
        &mut self,
        t: f64,
        dt: f64,
        viewport: &Viewport,
        surface: &mut S,
        rng: &mut R,
    ) -> Result<(), SurfaceError>
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        surface.set_composite(CompositeMode::SourceOver)?;
        surface.fill_rect(
            DVec2::ZERO,
            DVec2::new(viewport.width, viewport.height),
            &Paint::Solid(FADE_WHITE),
        )?;

        surface.set_composite(CompositeMode::Screen)?;
        for blob in &self.blobs {
            let center = blob_center(blob, t, viewport);
            let color = Hsla::new(blob.hue, BLOB_SATURATION, BLOB_LIGHTNESS, self.config.blob_alpha);
            let paint = Paint::Radial {
                center,
                inner: 0.0,
                outer: blob.radius,
                stops: vec![
                    ColorStop { offset: 0.0, color },
                    ColorStop {
                        offset: 1.0,
                        color: color.with_alpha(0.0),
                    },
                ],
            };
            surface.fill_disc(center, blob.radius, &paint)?;
        }

        if self.config.show_flow {
            surface.set_composite(CompositeMode::Lighter)?;
            for p in self.particles.iter_mut() {
                let angle = field(p.pos.x, p.pos.y, t, self.config.intensity);
                let vel = DVec2::new(angle.cos(), angle.sin()) * p.v;
                let next = p.pos + vel * dt * FLOW_STEP_SCALE;
                surface.stroke_segment(
                    p.pos,
                    next,
                    p.w,
                    Hsla::new(p.hue, FLOW_SATURATION, FLOW_LIGHTNESS, FLOW_ALPHA),
                )?;
                p.pos = next;
                advance_particle(p, self.hue_teal_max);
                if !p.is_alive(viewport) {
                    p.respawn(viewport, rng);
                }
            }
        }
        Ok(())
    }
}

/// Orbital center of `blob` at simulation time `t`.
pub fn blob_center(blob: &Blob, t: f64, viewport: &Viewport) -> DVec2 {
    let c = viewport.center();
    let ax = t * BLOB_ORBIT_RATE * blob.speed.x + blob.phase.x;
    let ay = t * BLOB_ORBIT_RATE * blob.speed.y + blob.phase.y;
    DVec2::new(
        c.x + ax.cos() * viewport.width * BLOB_ORBIT_EXTENT,
        c.y + ay.sin() * viewport.height * BLOB_ORBIT_EXTENT,
    )
}

/// Hue drift and life countdown for a single frame.
#[inline]
pub fn advance_particle(p: &mut FlowParticle, hue_teal_max: f64) {
    p.hue += FLOW_HUE_STEP;
    if p.hue > hue_teal_max {
        p.hue = HUE_PEACH;
    }
    p.life -= FLOW_LIFE_STEP;
}
