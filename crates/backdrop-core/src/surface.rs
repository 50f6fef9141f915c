//! The slice of a 2D drawing API the backdrop consumes.
//!
//! The browser front-end implements [`Surface`] over a canvas 2D context;
//! [`RecordingSurface`] keeps every call in memory for tests and headless runs.

use crate::color::Hsla;
use glam::DVec2;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("drawing context unavailable: {0}")]
    Unavailable(String),
    #[error("{op} failed: {detail}")]
    Call { op: &'static str, detail: String },
}

impl SurfaceError {
    pub fn call(op: &'static str, detail: impl Into<String>) -> Self {
        Self::Call {
            op,
            detail: detail.into(),
        }
    }
}

/// How newly drawn pixels combine with what is already on the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositeMode {
    SourceOver,
    Screen,
    Lighter,
}

impl CompositeMode {
    /// Name used by `globalCompositeOperation`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompositeMode::SourceOver => "source-over",
            CompositeMode::Screen => "screen",
            CompositeMode::Lighter => "lighter",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Hsla,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Hsla),
    /// Concentric radial gradient from `inner` to `outer` radius around `center`.
    Radial {
        center: DVec2,
        inner: f64,
        outer: f64,
        stops: Vec<ColorStop>,
    },
}

pub trait Surface {
    fn set_backing_size(&mut self, width: u32, height: u32) -> Result<(), SurfaceError>;
    fn set_display_size(&mut self, width: f64, height: f64) -> Result<(), SurfaceError>;
    /// Replace the current transform with a uniform scale.
    fn set_scale(&mut self, scale: f64) -> Result<(), SurfaceError>;
    fn set_composite(&mut self, mode: CompositeMode) -> Result<(), SurfaceError>;
    fn fill_rect(
        &mut self,
        origin: DVec2,
        size: DVec2,
        paint: &Paint,
    ) -> Result<(), SurfaceError>;
    fn fill_disc(&mut self, center: DVec2, radius: f64, paint: &Paint)
        -> Result<(), SurfaceError>;
    fn stroke_segment(
        &mut self,
        from: DVec2,
        to: DVec2,
        width: f64,
        color: Hsla,
    ) -> Result<(), SurfaceError>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    BackingSize(u32, u32),
    DisplaySize(f64, f64),
    Scale(f64),
    Composite(CompositeMode),
    FillRect {
        origin: DVec2,
        size: DVec2,
        paint: Paint,
    },
    FillDisc {
        center: DVec2,
        radius: f64,
        paint: Paint,
    },
    Stroke {
        from: DVec2,
        to: DVec2,
        width: f64,
        color: Hsla,
    },
}

/// Surface that records calls instead of drawing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    pub backing: (u32, u32),
    pub display: (f64, f64),
    pub scale: f64,
    pub composite: Option<CompositeMode>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            ..Self::default()
        }
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn fill_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect { .. }))
            .count()
    }

    pub fn fill_disc_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillDisc { .. }))
            .count()
    }

    pub fn stroke_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Stroke { .. }))
            .count()
    }

    pub fn composites(&self) -> Vec<CompositeMode> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Composite(m) => Some(*m),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn set_backing_size(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        self.backing = (width, height);
        self.calls.push(DrawCall::BackingSize(width, height));
        Ok(())
    }

    fn set_display_size(&mut self, width: f64, height: f64) -> Result<(), SurfaceError> {
        self.display = (width, height);
        self.calls.push(DrawCall::DisplaySize(width, height));
        Ok(())
    }

    fn set_scale(&mut self, scale: f64) -> Result<(), SurfaceError> {
        self.scale = scale;
        self.calls.push(DrawCall::Scale(scale));
        Ok(())
    }

    fn set_composite(&mut self, mode: CompositeMode) -> Result<(), SurfaceError> {
        self.composite = Some(mode);
        self.calls.push(DrawCall::Composite(mode));
        Ok(())
    }

    fn fill_rect(
        &mut self,
        origin: DVec2,
        size: DVec2,
        paint: &Paint,
    ) -> Result<(), SurfaceError> {
        self.calls.push(DrawCall::FillRect {
            origin,
            size,
            paint: paint.clone(),
        });
        Ok(())
    }

    fn fill_disc(
        &mut self,
        center: DVec2,
        radius: f64,
        paint: &Paint,
    ) -> Result<(), SurfaceError> {
        self.calls.push(DrawCall::FillDisc {
            center,
            radius,
            paint: paint.clone(),
        });
        Ok(())
    }

    fn stroke_segment(
        &mut self,
        from: DVec2,
        to: DVec2,
        width: f64,
        color: Hsla,
    ) -> Result<(), SurfaceError> {
        self.calls.push(DrawCall::Stroke {
            from,
            to,
            width,
            color,
        });
        Ok(())
    }
}
