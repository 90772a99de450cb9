//! Circle collision shape
//!
//! The circle owns every pairing it takes part in. All tests compare squared
//! distances so no square roots are taken.

use super::{Line, Point, Rectangle, Shape};
use crate::config::Tolerances;
use crate::foundation::math::{utils, Vec2};

/// A circle centered on its offset
///
/// The radius is never negative; constructors and setters clamp negative
/// (or NaN) values to zero. A zero-radius circle behaves as a point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    offset_x: f32,
    offset_y: f32,
    radius: f32,
}

impl Circle {
    /// Creates a circle centered at the given offset
    pub fn new(offset_x: f32, offset_y: f32, radius: f32) -> Self {
        Self { offset_x, offset_y, radius: radius.max(0.0) }
    }

    /// Local offset (center)
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }

    /// Moves the center relative to the owning entity
    pub fn set_offset(&mut self, offset_x: f32, offset_y: f32) {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
    }

    /// Radius, never negative
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Replaces the radius, clamping negatives to zero
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(0.0);
    }

    /// Center in world space for an entity at `position`
    pub fn world_center(&self, position: Vec2) -> Vec2 {
        utils::world(self.offset_x, self.offset_y, position.x, position.y)
    }

    fn radius_squared(&self) -> f32 {
        self.radius * self.radius
    }

    /// Routes to the test matching the kind of `other`
    pub fn intersects_shape(&self, other: &Shape, this: Vec2, at: Vec2, tol: &Tolerances) -> bool {
        match other {
            Shape::Point(p) => self.intersects_point(p, this, at, tol),
            Shape::Line(l) => self.intersects_line(l, this, at, tol),
            Shape::Rectangle(r) => self.intersects_rectangle(r, this, at, tol),
            Shape::Circle(c) => self.intersects_circle(c, this, at, tol),
        }
    }

    /// Circle vs point
    pub fn intersects_point(&self, other: &Point, this: Vec2, at: Vec2, _tol: &Tolerances) -> bool {
        point_circle(other, at, self, this)
    }

    /// Circle vs line
    pub fn intersects_line(&self, other: &Line, this: Vec2, at: Vec2, _tol: &Tolerances) -> bool {
        line_circle(other, at, self, this)
    }

    /// Circle vs rectangle
    pub fn intersects_rectangle(&self, other: &Rectangle, this: Vec2, at: Vec2, _tol: &Tolerances) -> bool {
        rectangle_circle(other, at, self, this)
    }

    /// Circle vs circle
    pub fn intersects_circle(&self, other: &Circle, this: Vec2, at: Vec2, _tol: &Tolerances) -> bool {
        circle_circle(self, this, other, at)
    }
}

pub(crate) fn point_circle(point: &Point, point_pos: Vec2, circle: &Circle, circle_pos: Vec2) -> bool {
    let d2 = utils::distance_squared(circle.world_center(circle_pos), point.world_position(point_pos));
    d2 <= circle.radius_squared()
}

/// Distance from the center to the closest point on the segment.
///
/// The center is projected onto the infinite line and the parameter clamped
/// to `[0, 1]`. A zero-length segment uses its start point.
pub(crate) fn line_circle(line: &Line, line_pos: Vec2, circle: &Circle, circle_pos: Vec2) -> bool {
    let (start, end) = line.world_endpoints(line_pos);
    let center = circle.world_center(circle_pos);

    let dir = end - start;
    let len2 = dir.magnitude_squared();
    let t = if len2 > 0.0 {
        utils::clamp((center - start).dot(&dir) / len2, 0.0, 1.0)
    } else {
        0.0
    };

    let closest = start + dir * t;
    utils::distance_squared(closest, center) <= circle.radius_squared()
}

/// Clamping the center into the box gives the closest point on or inside it,
/// which covers the inside, edge and corner cases with one comparison.
pub(crate) fn rectangle_circle(rect: &Rectangle, rect_pos: Vec2, circle: &Circle, circle_pos: Vec2) -> bool {
    let (min, max) = rect.world_corners(rect_pos);
    let center = circle.world_center(circle_pos);

    let closest = Vec2::new(
        utils::clamp(center.x, min.x, max.x),
        utils::clamp(center.y, min.y, max.y),
    );
    utils::distance_squared(closest, center) <= circle.radius_squared()
}

pub(crate) fn circle_circle(a: &Circle, a_pos: Vec2, b: &Circle, b_pos: Vec2) -> bool {
    let reach = a.radius + b.radius;
    utils::distance_squared(a.world_center(a_pos), b.world_center(b_pos)) <= reach * reach
}
