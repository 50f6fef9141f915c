//! Startup configuration for the backdrop.
//!
//! A `Config` is read once when the system boots and is never mutated
//! afterwards. Front-ends supply overrides as string key/value pairs (the web
//! crate reads them from `data-*` attributes on the canvas).

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("intensity must lie in (0, {max}], got {0}", max = MAX_INTENSITY)]
    Intensity(f64),
    #[error("blob count must lie in [1, {max}], got {count}", max = MAX_BLOB_COUNT)]
    BlobCount { count: usize },
    #[error("{name} must lie in [0, 1], got {value}")]
    UnitRange { name: &'static str, value: f64 },
    #[error("invalid value {value:?} for `{key}`")]
    Parse { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub respect_reduce_motion: bool,
    /// Global speed/density multiplier.
    pub intensity: f64,
    pub blob_count: usize,
    pub blob_alpha: f64,
    /// Skews the upper hue cluster towards higher hues as it approaches 1.
    pub teal_bias: f64,
    pub show_flow: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            respect_reduce_motion: true,
            intensity: 1.0,
            blob_count: 5,
            blob_alpha: 0.55,
            teal_bias: 0.5,
            show_flow: true,
        }
    }
}

/// Override keys understood by [`Config::from_lookup`].
pub const CONFIG_KEYS: [&str; 6] = [
    "intensity",
    "blob-count",
    "blob-alpha",
    "teal-bias",
    "show-flow",
    "respect-reduced-motion",
];

impl Config {
    /// Build a config from defaults plus whatever overrides `lookup` yields.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup("intensity") {
            cfg.intensity = parse_f64("intensity", &v)?;
        }
        if let Some(v) = lookup("blob-count") {
            cfg.blob_count = v.trim().parse().map_err(|_| ConfigError::Parse {
                key: "blob-count",
                value: v.clone(),
            })?;
        }
        if let Some(v) = lookup("blob-alpha") {
            cfg.blob_alpha = parse_f64("blob-alpha", &v)?;
        }
        if let Some(v) = lookup("teal-bias") {
            cfg.teal_bias = parse_f64("teal-bias", &v)?;
        }
        if let Some(v) = lookup("show-flow") {
            cfg.show_flow = parse_bool("show-flow", &v)?;
        }
        if let Some(v) = lookup("respect-reduced-motion") {
            cfg.respect_reduce_motion = parse_bool("respect-reduced-motion", &v)?;
        }
        cfg.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        // NaN fails both comparisons, so test for the accepted range.
        if !(self.intensity > 0.0 && self.intensity <= MAX_INTENSITY) {
            return Err(ConfigError::Intensity(self.intensity));
        }
        if !(1..=MAX_BLOB_COUNT).contains(&self.blob_count) {
            return Err(ConfigError::BlobCount {
                count: self.blob_count,
            });
        }
        unit_range("blob alpha", self.blob_alpha)?;
        unit_range("teal bias", self.teal_bias)?;
        Ok(self)
    }

    /// Upper (exclusive) bound of the teal hue cluster.
    pub fn hue_teal_max(&self) -> f64 {
        (HUE_PEACH + HUE_SPAN * (TEAL_BIAS_BASE + TEAL_BIAS_SPAN * self.teal_bias)).round()
    }

    pub fn flow_particle_count(&self) -> usize {
        if !self.show_flow {
            return 0;
        }
        (FLOW_PARTICLES_PER_INTENSITY * self.intensity).round() as usize
    }

    /// Milliseconds of wall time per unit of simulation time.
    pub fn time_scale_ms(&self) -> f64 {
        TIME_BASE_MS / self.intensity
    }
}

fn parse_f64(key: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Parse {
        key,
        value: raw.to_string(),
    })
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" | "" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::Parse {
            key,
            value: raw.to_string(),
        }),
    }
}

fn unit_range(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::UnitRange { name, value })
    }
}
