//! Numeric tolerances used by the intersection tests

use serde::{Deserialize, Serialize};

use super::Config;
use crate::foundation::math::constants::{EPSILON, LINE_TOLERANCE};

/// Tolerances for the pairwise intersection formulas
///
/// The defaults reproduce the stock behavior of every test. They are exposed
/// so a game working at a very different coordinate scale can widen or
/// tighten them without forking the formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Max per-axis difference for two points to count as coincident
    pub point_epsilon: f32,
    /// Absolute slack for the point-on-segment length comparison
    pub line_tolerance: f32,
    /// Segment pairs whose determinant is below this are treated as parallel
    pub parallel_epsilon: f32,
}

impl Tolerances {
    /// Stock tolerances used by [`Shape::intersects`](crate::physics::collision::Shape::intersects)
    pub const DEFAULT: Self = Self {
        point_epsilon: EPSILON,
        line_tolerance: LINE_TOLERANCE,
        parallel_epsilon: EPSILON,
    };

    /// Replace negative or NaN fields with their defaults
    #[must_use]
    pub fn sanitized(self) -> Self {
        fn pick(value: f32, fallback: f32) -> f32 {
            if value >= 0.0 { value } else { fallback }
        }

        Self {
            point_epsilon: pick(self.point_epsilon, Self::DEFAULT.point_epsilon),
            line_tolerance: pick(self.line_tolerance, Self::DEFAULT.line_tolerance),
            parallel_epsilon: pick(self.parallel_epsilon, Self::DEFAULT.parallel_epsilon),
        }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Config for Tolerances {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let tol = Tolerances::default();
        assert_eq!(tol.line_tolerance, 0.01);
        assert_eq!(tol.point_epsilon, f32::EPSILON);
        assert_eq!(tol.parallel_epsilon, f32::EPSILON);
    }

    #[test]
    fn test_sanitized_replaces_negative_and_nan() {
        let tol = Tolerances {
            point_epsilon: -1.0,
            line_tolerance: f32::NAN,
            parallel_epsilon: 0.5,
        }
        .sanitized();

        assert_eq!(tol.point_epsilon, Tolerances::DEFAULT.point_epsilon);
        assert_eq!(tol.line_tolerance, Tolerances::DEFAULT.line_tolerance);
        assert_eq!(tol.parallel_epsilon, 0.5);
    }

    #[test]
    fn test_toml_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tolerances.toml");
        let tol = Tolerances { line_tolerance: 0.25, ..Tolerances::default() };

        tol.save_to_file(&path).unwrap();
        let loaded = Tolerances::load_from_file(&path).unwrap();
        assert_eq!(loaded, tol);
    }

    #[test]
    fn test_partial_ron_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tolerances.ron");
        std::fs::write(&path, "(line_tolerance: 0.5)").unwrap();

        let loaded = Tolerances::load_from_file(&path).unwrap();
        assert_eq!(loaded.line_tolerance, 0.5);
        assert_eq!(loaded.point_epsilon, Tolerances::DEFAULT.point_epsilon);
    }
}
