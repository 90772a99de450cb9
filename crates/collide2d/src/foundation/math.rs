//! Math utilities and types
//!
//! Provides the 2D vector type and the handful of scalar helpers the
//! intersection tests are written against. Everything is `f32`.

/// 2D vector type
pub type Vec2 = nalgebra::Vector2<f32>;

/// Math constants
pub mod constants {
    /// Absolute slack for point-on-segment tests (pixel-scale worlds)
    pub const LINE_TOLERANCE: f32 = 0.01;

    /// Machine epsilon for `f32`
    pub const EPSILON: f32 = f32::EPSILON;
}

/// Math utility functions
pub mod utils {
    use super::Vec2;

    /// Clamp a value between min and max
    ///
    /// Unlike [`f32::clamp`] this never panics: inverted or NaN bounds just
    /// fall through the comparisons.
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }

    /// Squared euclidean distance between two points
    pub fn distance_squared(a: Vec2, b: Vec2) -> f32 {
        (a - b).magnitude_squared()
    }

    /// Euclidean distance between two points
    pub fn distance(a: Vec2, b: Vec2) -> f32 {
        (a - b).magnitude()
    }

    /// Translate a local offset by a world position
    #[inline]
    pub fn world(offset_x: f32, offset_y: f32, x: f32, y: f32) -> Vec2 {
        Vec2::new(offset_x + x, offset_y + y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp() {
        assert_eq!(utils::clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(utils::clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(utils::clamp(11.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_does_not_panic_on_nan_bounds() {
        let v = utils::clamp(3.0, f32::NAN, f32::NAN);
        assert_eq!(v, 3.0);
    }

    #[test]
    fn test_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_relative_eq!(utils::distance(a, b), 5.0);
        assert_relative_eq!(utils::distance_squared(a, b), 25.0);
    }

    #[test]
    fn test_world_adds_offset() {
        assert_eq!(utils::world(1.0, 2.0, 10.0, 20.0), Vec2::new(11.0, 22.0));
    }
}
