//! Simulation and compositing tuning constants.
//!
//! Values here shape the look of the backdrop; the frame renderer and entity
//! factory read them instead of carrying magic numbers inline.

// Config limits; keep entity lists small enough to allocate per page
pub const MAX_INTENSITY: f64 = 10.0; // at most 1400 flow particles
pub const MAX_BLOB_COUNT: usize = 64;

// Clock
pub const MAX_FRAME_DT_MS: f64 = 50.0; // cap on a single frame step (tab resume)
pub const TIME_BASE_MS: f64 = 6000.0; // ms of wall time per unit of `t` at intensity 1

// Viewport
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Trail fade layer
pub const FADE_ALPHA: f64 = 0.06;

// Blobs
pub const BLOB_RADIUS_MIN: f64 = 0.32; // fraction of min(viewport w, h)
pub const BLOB_RADIUS_MAX: f64 = 0.50;
pub const BLOB_SPEED_X: (f64, f64) = (0.12, 0.30);
pub const BLOB_SPEED_Y: (f64, f64) = (0.10, 0.26);
pub const BLOB_ORBIT_RATE: f64 = 8.0; // angular multiplier on t * speed
pub const BLOB_ORBIT_EXTENT: f64 = 0.28; // orbit half-extent as fraction of viewport
pub const BLOB_SATURATION: f64 = 85.0;
pub const BLOB_LIGHTNESS: f64 = 62.0;

// Hue clusters (degrees)
pub const HUE_PEACH: f64 = 18.0;
pub const HUE_PEACH_MAX: f64 = 33.0;
pub const HUE_SPAN: f64 = 160.0;
pub const TEAL_BAND_WIDTH: f64 = 15.0;
pub const TEAL_BIAS_BASE: f64 = 0.35;
pub const TEAL_BIAS_SPAN: f64 = 0.65;

// Flow particles
pub const FLOW_PARTICLES_PER_INTENSITY: f64 = 140.0;
pub const FLOW_SPEED: (f64, f64) = (0.7, 2.0);
pub const FLOW_WIDTH: (f64, f64) = (1.0, 2.8);
pub const FLOW_WIDTH_BASE: f64 = 0.9;
pub const FLOW_WIDTH_PER_INTENSITY: f64 = 0.3;
pub const FLOW_LIFE: (f64, f64) = (70.0, 210.0);
pub const FLOW_STEP_SCALE: f64 = 0.09; // px per (v * ms)
pub const FLOW_ALPHA: f64 = 0.22;
pub const FLOW_HUE_STEP: f64 = 0.22;
pub const FLOW_LIFE_STEP: f64 = 1.0;
pub const FLOW_RESPAWN_MARGIN: f64 = 160.0;
pub const FLOW_SATURATION: f64 = 90.0;
pub const FLOW_LIGHTNESS: f64 = 66.0;

// Vector field
pub const FIELD_SCALE: f64 = 0.0014;
pub const FIELD_SCALE_BASE: f64 = 0.9;
pub const FIELD_SCALE_PER_INTENSITY: f64 = 0.25;
pub const FIELD_TIME_A: f64 = 0.85;
pub const FIELD_TIME_B: f64 = 0.45;
pub const FIELD_CROSS_STRETCH: f64 = 1.05;
