//! CSS-pixel viewport plus the capped device-scale factor.

use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::surface::{Surface, SurfaceError};
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    /// `device_pixel_ratio` is capped at 2; unusable ratios fall back to 1.
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(MAX_DEVICE_PIXEL_RATIO)
        } else {
            1.0
        };
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            dpr,
        }
    }

    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).floor() as u32,
            (self.height * self.dpr).floor() as u32,
        )
    }

    pub fn extent_min(&self) -> f64 {
        self.width.min(self.height)
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// True while `pos` lies within the viewport grown by `margin` on every side.
    pub fn contains_with_margin(&self, pos: DVec2, margin: f64) -> bool {
        pos.x >= -margin
            && pos.x <= self.width + margin
            && pos.y >= -margin
            && pos.y <= self.height + margin
    }

    /// Size the backing store, the displayed box and the drawing transform so
    /// later calls can draw in CSS pixels.
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        let (bw, bh) = self.backing_size();
        surface.set_backing_size(bw, bh)?;
        surface.set_display_size(self.width, self.height)?;
        surface.set_scale(self.dpr)
    }
}
