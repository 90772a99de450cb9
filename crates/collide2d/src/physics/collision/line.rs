//! Line segment collision shape
//!
//! Owns the point/line and line/line formulas. Rectangle and circle pairings
//! are answered by those shapes.

use super::{circle, rectangle, Circle, Point, Rectangle, Shape};
use crate::config::Tolerances;
use crate::foundation::math::{utils, Vec2};

/// A line segment
///
/// The offset is the start point; `x2`/`y2` is the end point. Both are
/// relative to the owning entity, so moving the offset does not move the end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    offset_x: f32,
    offset_y: f32,
    x2: f32,
    y2: f32,
}

impl Line {
    /// Creates a segment from `(x1, y1)` to `(x2, y2)`
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { offset_x: x1, offset_y: y1, x2, y2 }
    }

    /// Local offset (start point)
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }

    /// Moves the start point; the end point stays where it is
    pub fn set_offset(&mut self, offset_x: f32, offset_y: f32) {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
    }

    /// Local end point, x component
    pub const fn x2(&self) -> f32 {
        self.x2
    }

    /// Local end point, y component
    pub const fn y2(&self) -> f32 {
        self.y2
    }

    /// Local end point
    pub fn end(&self) -> Vec2 {
        Vec2::new(self.x2, self.y2)
    }

    /// Replaces both endpoints
    pub fn set_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        *self = Self::new(x1, y1, x2, y2);
    }

    /// Moves only the end point
    pub fn set_end(&mut self, x2: f32, y2: f32) {
        self.x2 = x2;
        self.y2 = y2;
    }

    /// Segment length
    pub fn length(&self) -> f32 {
        utils::distance(self.offset(), self.end())
    }

    /// Start and end in world space for an entity at `position`
    pub fn world_endpoints(&self, position: Vec2) -> (Vec2, Vec2) {
        (
            utils::world(self.offset_x, self.offset_y, position.x, position.y),
            utils::world(self.x2, self.y2, position.x, position.y),
        )
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

    /// Line vs point
    pub fn intersects_point(&self, other: &Point, this: Vec2, at: Vec2, tol: &Tolerances) -> bool {
        point_line(other, at, self, this, tol)
    }

    /// Line vs line
    pub fn intersects_line(&self, other: &Line, this: Vec2, at: Vec2, tol: &Tolerances) -> bool {
        line_line(self, this, other, at, tol)
    }

    /// Line vs rectangle, answered by the rectangle
    pub fn intersects_rectangle(&self, other: &Rectangle, this: Vec2, at: Vec2, tol: &Tolerances) -> bool {
        rectangle::line_rectangle(self, this, other, at, tol)
    }

    /// Line vs circle, answered by the circle
    pub fn intersects_circle(&self, other: &Circle, this: Vec2, at: Vec2, _tol: &Tolerances) -> bool {
        circle::line_circle(self, this, other, at)
    }
}

/// A point lies on a segment when the detour through it is no longer than
/// the segment itself, within `line_tolerance`.
///
/// The tolerance is absolute, so accuracy degrades for very long segments
/// and very large coordinates.
pub(crate) fn point_line(point: &Point, point_pos: Vec2, line: &Line, line_pos: Vec2, tol: &Tolerances) -> bool {
    let p = point.world_position(point_pos);
    let (start, end) = line.world_endpoints(line_pos);

    let detour = utils::distance(start, p) + utils::distance(p, end);
    (detour - utils::distance(start, end)).abs() <= tol.line_tolerance
}

pub(crate) fn line_line(a: &Line, a_pos: Vec2, b: &Line, b_pos: Vec2, tol: &Tolerances) -> bool {
    let (p1, p2) = a.world_endpoints(a_pos);
    let (p3, p4) = b.world_endpoints(b_pos);
    segments_intersect(p1, p2, p3, p4, tol.parallel_epsilon)
}

/// Parametric segment/segment test for `p1-p2` against `p3-p4`
///
/// Endpoints count as intersecting. Parallel segments never intersect, which
/// includes collinear segments that overlap.
pub(crate) fn segments_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2, parallel_epsilon: f32) -> bool {
    let denom = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if denom.abs() < parallel_epsilon {
        return false;
    }

    let t = ((p1.x - p3.x) * (p3.y - p4.y) - (p1.y - p3.y) * (p3.x - p4.x)) / denom;
    let u = -((p1.x - p2.x) * (p1.y - p3.y) - (p1.y - p2.y) * (p1.x - p3.x)) / denom;

    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: Tolerances = Tolerances::DEFAULT;

    fn origin() -> Vec2 {
        Vec2::zeros()
    }

    #[test]
    fn test_crossing_segments() {
        let a = Line::new(0.0, 0.0, 10.0, 10.0);
        let b = Line::new(0.0, 10.0, 10.0, 0.0);
        assert!(a.intersects_line(&b, origin(), origin(), &TOL));
    }

    #[test]
    fn test_parallel_segments_do_not_intersect() {
        let a = Line::new(0.0, 0.0, 10.0, 0.0);
        let b = Line::new(0.0, 5.0, 10.0, 5.0);
        assert!(!a.intersects_line(&b, origin(), origin(), &TOL));
    }

    #[test]
    fn test_collinear_overlap_reports_no_intersection() {
        let a = Line::new(0.0, 0.0, 10.0, 0.0);
        let b = Line::new(5.0, 0.0, 15.0, 0.0);
        assert!(!a.intersects_line(&b, origin(), origin(), &TOL));
    }

    #[test]
    fn test_touching_endpoints_intersect() {
        let a = Line::new(0.0, 0.0, 5.0, 5.0);
        let b = Line::new(5.0, 5.0, 10.0, 0.0);
        assert!(a.intersects_line(&b, origin(), origin(), &TOL));
    }

    #[test]
    fn test_segments_short_of_each_other() {
        // The infinite lines cross at (5, 5) but the first segment stops at (4, 4).
        let a = Line::new(0.0, 0.0, 4.0, 4.0);
        let b = Line::new(0.0, 10.0, 10.0, 0.0);
        assert!(!a.intersects_line(&b, origin(), origin(), &TOL));
    }

    #[test]
    fn test_world_positions_are_applied() {
        let a = Line::new(0.0, 0.0, 10.0, 10.0);
        let b = Line::new(0.0, 10.0, 10.0, 0.0);
        assert!(!a.intersects_line(&b, origin(), Vec2::new(100.0, 0.0), &TOL));
        assert!(a.intersects_line(&b, Vec2::new(100.0, 0.0), Vec2::new(100.0, 0.0), &TOL));
    }

    #[test]
    fn test_point_on_segment() {
        let line = Line::new(0.0, 0.0, 10.0, 0.0);
        let on = Point::new(5.0, 0.0);
        let endpoint = Point::new(10.0, 0.0);
        let off = Point::new(5.0, 1.0);

        assert!(line.intersects_point(&on, origin(), origin(), &TOL));
        assert!(line.intersects_point(&endpoint, origin(), origin(), &TOL));
        assert!(!line.intersects_point(&off, origin(), origin(), &TOL));
    }

    #[test]
    fn test_point_beyond_segment_end() {
        let line = Line::new(0.0, 0.0, 10.0, 0.0);
        let beyond = Point::new(10.5, 0.0);
        assert!(!line.intersects_point(&beyond, origin(), origin(), &TOL));
    }

    #[test]
    fn test_zero_length_segment_acts_like_point() {
        let line = Line::new(3.0, 3.0, 3.0, 3.0);
        assert_relative_eq!(line.length(), 0.0);

        assert!(line.intersects_point(&Point::new(3.0, 3.0), origin(), origin(), &TOL));
        assert!(!line.intersects_point(&Point::new(4.0, 3.0), origin(), origin(), &TOL));
    }

    #[test]
    fn test_looser_tolerance_accepts_near_miss() {
        let line = Line::new(0.0, 0.0, 10.0, 0.0);
        let near = Point::new(5.0, 0.5);
        let loose = Tolerances { line_tolerance: 0.1, ..Tolerances::DEFAULT };

        assert!(!line.intersects_point(&near, origin(), origin(), &TOL));
        assert!(line.intersects_point(&near, origin(), origin(), &loose));
    }

    #[test]
    fn test_setters() {
        let mut line = Line::new(0.0, 0.0, 1.0, 1.0);
        line.set_offset(2.0, 2.0);
        assert_eq!(line.end(), Vec2::new(1.0, 1.0));

        line.set_line(0.0, 0.0, 3.0, 4.0);
        assert_relative_eq!(line.length(), 5.0);

        line.set_end(0.0, 4.0);
        assert_eq!((line.x2(), line.y2()), (0.0, 4.0));
    }
}
