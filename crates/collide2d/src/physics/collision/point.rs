//! Point collision shape
//!
//! A point has no extent. It owns only the point/point formula; every other
//! pairing is answered by the partner shape.

use approx::abs_diff_eq;

use super::{circle, line, rectangle, Circle, Line, Rectangle, Shape};
use crate::config::Tolerances;
use crate::foundation::math::{utils, Vec2};

/// A zero-area location, offset from its owning entity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    offset_x: f32,
    offset_y: f32,
}

impl Point {
    /// Creates a point at the given offset
    pub const fn new(offset_x: f32, offset_y: f32) -> Self {
        Self { offset_x, offset_y }
    }

    /// Local offset from the owning entity
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }

    /// Moves the point relative to its owning entity
    pub fn set_offset(&mut self, offset_x: f32, offset_y: f32) {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
    }

    /// Location of the point when its entity sits at `position`
    pub fn world_position(&self, position: Vec2) -> Vec2 {
        utils::world(self.offset_x, self.offset_y, position.x, position.y)
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

    /// Point vs point
    pub fn intersects_point(&self, other: &Point, this: Vec2, at: Vec2, tol: &Tolerances) -> bool {
        point_point(self, this, other, at, tol)
    }

    /// Point vs line, answered by the line
    pub fn intersects_line(&self, other: &Line, this: Vec2, at: Vec2, tol: &Tolerances) -> bool {
        line::point_line(self, this, other, at, tol)
    }

    /// Point vs rectangle, answered by the rectangle
    pub fn intersects_rectangle(&self, other: &Rectangle, this: Vec2, at: Vec2, _tol: &Tolerances) -> bool {
        rectangle::point_rectangle(self, this, other, at)
    }

    /// Point vs circle, answered by the circle
    pub fn intersects_circle(&self, other: &Circle, this: Vec2, at: Vec2, _tol: &Tolerances) -> bool {
        circle::point_circle(self, this, other, at)
    }
}

/// Two points coincide when their world coordinates agree within
/// `point_epsilon` on both axes.
pub(crate) fn point_point(a: &Point, a_pos: Vec2, b: &Point, b_pos: Vec2, tol: &Tolerances) -> bool {
    abs_diff_eq!(a.world_position(a_pos), b.world_position(b_pos), epsilon = tol.point_epsilon)
}
