//! Axis-aligned rectangle collision shape
//!
//! Owns the point/rectangle, line/rectangle and rectangle/rectangle
//! formulas. The circle pairing is answered by the circle.
//!
//! Y grows downward: the offset is the top-left corner and `top <= bottom`.

use super::line::segments_intersect;
use super::{circle, Circle, Line, Point, Shape};
use crate::config::Tolerances;
use crate::foundation::math::{utils, Vec2};

/// An axis-aligned box
///
/// Width and height are never negative; constructors and setters clamp
/// negative (or NaN) values to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    offset_x: f32,
    offset_y: f32,
    width: f32,
    height: f32,
}

impl Rectangle {
    /// Creates a rectangle with its top-left corner at the given offset
    pub fn new(offset_x: f32, offset_y: f32, width: f32, height: f32) -> Self {
        Self {
            offset_x,
            offset_y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Local offset (top-left corner)
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }

    /// Moves the rectangle relative to its owning entity
    pub fn set_offset(&mut self, offset_x: f32, offset_y: f32) {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
    }

    /// Width, never negative
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height, never negative
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Replaces size, clamping negatives to zero
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Replaces offset and size
    pub fn set_bounds(&mut self, offset_x: f32, offset_y: f32, width: f32, height: f32) {
        *self = Self::new(offset_x, offset_y, width, height);
    }

    /// World x of the left edge
    pub fn left(&self, position: Vec2) -> f32 {
        self.offset_x + position.x
    }

    /// World x of the right edge
    pub fn right(&self, position: Vec2) -> f32 {
        self.left(position) + self.width
    }

    /// World y of the top edge
    pub fn top(&self, position: Vec2) -> f32 {
        self.offset_y + position.y
    }

    /// World y of the bottom edge
    pub fn bottom(&self, position: Vec2) -> f32 {
        self.top(position) + self.height
    }

    /// Top-left and bottom-right corners in world space
    pub fn world_corners(&self, position: Vec2) -> (Vec2, Vec2) {
        let min = utils::world(self.offset_x, self.offset_y, position.x, position.y);
        (min, min + Vec2::new(self.width, self.height))
    }

    /// Inclusive containment of a world-space point
    pub fn contains(&self, position: Vec2, p: Vec2) -> bool {
        let (min, max) = self.world_corners(position);
        min.x <= p.x && p.x <= max.x && min.y <= p.y && p.y <= max.y
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

    /// Rectangle vs point
    pub fn intersects_point(&self, other: &Point, this: Vec2, at: Vec2, _tol: &Tolerances) -> bool {
        point_rectangle(other, at, self, this)
    }

    /// Rectangle vs line
    pub fn intersects_line(&self, other: &Line, this: Vec2, at: Vec2, tol: &Tolerances) -> bool {
        line_rectangle(other, at, self, this, tol)
    }

    /// Rectangle vs rectangle
    pub fn intersects_rectangle(&self, other: &Rectangle, this: Vec2, at: Vec2, _tol: &Tolerances) -> bool {
        rectangle_rectangle(self, this, other, at)
    }

    /// Rectangle vs circle, answered by the circle
    pub fn intersects_circle(&self, other: &Circle, this: Vec2, at: Vec2, _tol: &Tolerances) -> bool {
        circle::rectangle_circle(self, this, other, at)
    }
}

pub(crate) fn point_rectangle(point: &Point, point_pos: Vec2, rect: &Rectangle, rect_pos: Vec2) -> bool {
    rect.contains(rect_pos, point.world_position(point_pos))
}

/// A segment hits a rectangle if either endpoint is inside it or the segment
/// crosses one of the four edges.
pub(crate) fn line_rectangle(line: &Line, line_pos: Vec2, rect: &Rectangle, rect_pos: Vec2, tol: &Tolerances) -> bool {
    let (start, end) = line.world_endpoints(line_pos);
    if rect.contains(rect_pos, start) || rect.contains(rect_pos, end) {
        return true;
    }

    let (min, max) = rect.world_corners(rect_pos);
    let top_right = Vec2::new(max.x, min.y);
    let bottom_left = Vec2::new(min.x, max.y);
    let edges = [
        (min, top_right),
        (top_right, max),
        (max, bottom_left),
        (bottom_left, min),
    ];

    edges
        .iter()
        .any(|&(a, b)| segments_intersect(start, end, a, b, tol.parallel_epsilon))
}

/// Inclusive AABB overlap; boxes sharing an edge intersect.
pub(crate) fn rectangle_rectangle(a: &Rectangle, a_pos: Vec2, b: &Rectangle, b_pos: Vec2) -> bool {
    let (a_min, a_max) = a.world_corners(a_pos);
    let (b_min, b_max) = b.world_corners(b_pos);

    !(a_max.x < b_min.x || a_min.x > b_max.x || a_max.y < b_min.y || a_min.y > b_max.y)
}
