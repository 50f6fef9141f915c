use crate::constants::*;

/// Spatial frequency of the steering field at a given intensity.
#[inline]
pub fn field_scale(intensity: f64) -> f64 {
    FIELD_SCALE * (FIELD_SCALE_BASE + FIELD_SCALE_PER_INTENSITY * intensity)
}

/// Steering angle (radians) at `(x, y)` and simulation time `t`.
///
/// Sum of one sine and one cosine term, so the result stays within `[-2, 2]`.
#[inline]
pub fn field(x: f64, y: f64, t: f64, intensity: f64) -> f64 {
    let s = field_scale(intensity);
    ((x + y) * s + t * FIELD_TIME_A).sin()
        + ((x - y) * s * FIELD_CROSS_STRETCH - t * FIELD_TIME_B).cos()
}
