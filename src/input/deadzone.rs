// Deadzone shaping for analog values

use crate::math::rescale_from;
use glam::Vec2;

/// How a 2D deadzone is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeadzoneShape {
    /// Measure the whole vector's length
    #[default]
    Circular,
    /// Treat each axis independently
    Square,
}

/// Shape a 1D value: zero inside the deadzone, then rescale the remaining
/// range linearly onto [0, 1] keeping the sign
pub fn shape_axis(value: f32, deadzone: f32) -> f32 {
    value.signum() * rescale_from(value.abs(), deadzone)
}

/// Shape a 2D value with the given deadzone shape
pub fn shape(value: Vec2, deadzone: f32, shape: DeadzoneShape) -> Vec2 {
    match shape {
        DeadzoneShape::Circular => {
            let len = value.length();
            let scaled = rescale_from(len, deadzone);
            if scaled == 0.0 {
                Vec2::ZERO
            } else {
                value * (scaled / len)
            }
        }
        DeadzoneShape::Square => Vec2::new(
            shape_axis(value.x, deadzone),
            shape_axis(value.y, deadzone),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_axis_inside_deadzone_is_zero() {
        assert_eq!(shape_axis(0.3, 0.5), 0.0);
        assert_eq!(shape_axis(-0.49, 0.5), 0.0);
        assert_eq!(shape_axis(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_axis_rescales_outside_deadzone() {
        assert_abs_diff_eq!(shape_axis(0.75, 0.5), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(shape_axis(-0.75, 0.5), -0.5, epsilon = 1e-6);
        assert_eq!(shape_axis(1.0, 0.5), 1.0);
        assert_eq!(shape_axis(-1.0, 0.2), -1.0);
        assert_eq!(shape_axis(0.5, 0.5), 0.0);
    }

    #[test]
    fn test_zero_deadzone_is_identity() {
        assert_abs_diff_eq!(shape_axis(0.3, 0.0), 0.3, epsilon = 1e-6);
        let v = Vec2::new(0.1, -0.2);
        assert_abs_diff_eq!(shape(v, 0.0, DeadzoneShape::Circular).x, v.x, epsilon = 1e-6);
        assert_abs_diff_eq!(shape(v, 0.0, DeadzoneShape::Circular).y, v.y, epsilon = 1e-6);
    }

    #[test]
    fn test_circular_zeroes_short_vectors() {
        let v = Vec2::new(0.3, 0.3); // length ~0.42
        assert_eq!(shape(v, 0.5, DeadzoneShape::Circular), Vec2::ZERO);
    }

    #[test]
    fn test_circular_preserves_direction() {
        let deadzone = 0.2;
        for &(x, y) in &[(0.6, 0.0), (0.3, 0.4), (-0.5, 0.5), (0.0, -0.9), (-0.6, -0.8)] {
            let raw = Vec2::new(x, y);
            let shaped = shape(raw, deadzone, DeadzoneShape::Circular);
            let expected_len = (raw.length() - deadzone) / (1.0 - deadzone);

            assert_abs_diff_eq!(shaped.length(), expected_len, epsilon = 1e-5);
            let angle = shaped.normalize().dot(raw.normalize());
            assert_abs_diff_eq!(angle, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_circular_keeps_diagonal_that_square_drops() {
        // Each axis is under the deadzone but the vector as a whole is not
        let v = Vec2::new(0.45, 0.45);
        assert_ne!(shape(v, 0.5, DeadzoneShape::Circular), Vec2::ZERO);
        assert_eq!(shape(v, 0.5, DeadzoneShape::Square), Vec2::ZERO);
    }

    #[test]
    fn test_square_shapes_axes_independently() {
        let shaped = shape(Vec2::new(0.75, 0.25), 0.5, DeadzoneShape::Square);
        assert_abs_diff_eq!(shaped.x, 0.5, epsilon = 1e-6);
        assert_eq!(shaped.y, 0.0);

        let shaped = shape(Vec2::new(-1.0, 0.9), 0.5, DeadzoneShape::Square);
        assert_eq!(shaped.x, -1.0);
        assert_abs_diff_eq!(shaped.y, 0.8, epsilon = 1e-6);
    }
}
