//! Guarded startup. The backdrop is optional decoration, so setup never
//! fails outward: it either yields a ready controller or an inert outcome.

use crate::config::{Config, ConfigError};
use crate::lifecycle::Backdrop;
use crate::surface::{Surface, SurfaceError};
use crate::viewport::Viewport;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SetupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("surface: {0}")]
    Surface(#[from] SurfaceError),
    #[error("host: {0}")]
    Host(String),
}

/// What the core needs from the embedding environment at startup.
pub trait Host {
    type Surface: Surface;

    /// Global kill switch, checked once.
    fn disabled(&self) -> bool;
    /// `Ok(None)` when the well-known surface element is absent.
    fn acquire_surface(&mut self) -> Result<Option<Self::Surface>, SetupError>;
    fn viewport(&self) -> Result<Viewport, SetupError>;
    fn prefers_reduced_motion(&self) -> bool;
    fn config_value(&self, key: &str) -> Option<String>;
    /// Monotonic milliseconds, same timebase as frame timestamps.
    fn now(&self) -> f64;

    fn rng(&mut self) -> StdRng {
        StdRng::from_entropy()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InertReason {
    DisabledByFlag,
    SurfaceMissing,
    Failed(SetupError),
}

pub enum Setup<T> {
    Ready(T),
    Inert(InertReason),
}

impl<T> Setup<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Setup::Ready(_))
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Setup::Ready(t) => Some(t),
            Setup::Inert(_) => None,
        }
    }

    pub fn inert_reason(&self) -> Option<&InertReason> {
        match self {
            Setup::Ready(_) => None,
            Setup::Inert(r) => Some(r),
        }
    }
}

pub fn bootstrap<H: Host>(host: &mut H) -> Setup<Backdrop<H::Surface>> {
    if host.disabled() {
        log::debug!("[setup] disabled by flag");
        return Setup::Inert(InertReason::DisabledByFlag);
    }
    match try_bootstrap(host) {
        Ok(Some(backdrop)) => Setup::Ready(backdrop),
        Ok(None) => {
            log::debug!("[setup] no surface element; nothing to do");
            Setup::Inert(InertReason::SurfaceMissing)
        }
        Err(e) => {
            log::warn!("[setup] ambient backdrop disabled: {e}");
            Setup::Inert(InertReason::Failed(e))
        }
    }
}

fn try_bootstrap<H: Host>(host: &mut H) -> Result<Option<Backdrop<H::Surface>>, SetupError> {
    let Some(surface) = host.acquire_surface()? else {
        return Ok(None);
    };
    let config = Config::from_lookup(|key| host.config_value(key))?;
    let viewport = host.viewport()?;
    let reduced_motion = host.prefers_reduced_motion();
    let rng = host.rng();
    let backdrop = Backdrop::new(surface, viewport, config, reduced_motion, rng, host.now())?;
    Ok(Some(backdrop))
}
