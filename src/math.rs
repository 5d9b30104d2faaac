// Math utilities shared by the input pipeline

use glam::Vec2;

/// Clamp a value to the unit range [-1, 1]
pub fn clamp_unit(value: f32) -> f32 {
    value.clamp(-1.0, 1.0)
}

/// Scale a vector down to length 1 if it is longer, keeping its direction
pub fn limit_length(v: Vec2) -> Vec2 {
    let len = v.length();
    if len > 1.0 {
        v / len
    } else {
        v
    }
}

/// Map a magnitude from [threshold, 1] onto [0, 1]
///
/// Magnitudes below the threshold map to 0. `threshold` must be in [0, 1).
pub fn rescale_from(magnitude: f32, threshold: f32) -> f32 {
    if magnitude < threshold {
        0.0
    } else {
        ((magnitude - threshold) / (1.0 - threshold)).clamp(0.0, 1.0)
    }
}
