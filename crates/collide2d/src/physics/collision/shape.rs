//! The closed set of collision shapes and the intersection entry point
//!
//! Intersection is a double dispatch: [`Shape::intersects`] matches on its
//! own kind, and the variant matches on the partner's kind. Each of the ten
//! distinct pairings is written once, as a free function in the module of the
//! shape that owns it; the mirrored cell calls the same function with the
//! arguments swapped. That keeps the test symmetric:
//!
//! ```text
//! a.intersects(&b, ax, ay, bx, by) == b.intersects(&a, bx, by, ax, ay)
//! ```
//!
//! | owner     | pairings                                 |
//! |-----------|------------------------------------------|
//! | point     | point                                    |
//! | line      | point, line                              |
//! | rectangle | point, line, rectangle                   |
//! | circle    | point, line, rectangle, circle           |
//!
//! Shapes are plain `Copy` data. A shape can be queried from several threads
//! at once, but mutating one while another thread tests it is up to the
//! caller to prevent.

use std::fmt;

use super::{Circle, Line, Point, Rectangle};
use crate::config::Tolerances;
use crate::foundation::math::Vec2;

/// Discriminant of a [`Shape`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// [`Point`]
    Point,
    /// [`Line`]
    Line,
    /// [`Rectangle`]
    Rectangle,
    /// [`Circle`]
    Circle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Point => "point",
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
        };
        f.write_str(name)
    }
}

/// A collision shape, stored relative to the entity that owns it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A single location
    Point(Point),
    /// A line segment
    Line(Line),
    /// An axis-aligned box
    Rectangle(Rectangle),
    /// A circle
    Circle(Circle),
}

impl Shape {
    /// Point shape at the given offset
    pub const fn point(offset_x: f32, offset_y: f32) -> Self {
        Self::Point(Point::new(offset_x, offset_y))
    }

    /// Segment from `(x1, y1)` to `(x2, y2)`
    pub const fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::Line(Line::new(x1, y1, x2, y2))
    }

    /// Rectangle with its top-left corner at the given offset
    pub fn rectangle(offset_x: f32, offset_y: f32, width: f32, height: f32) -> Self {
        Self::Rectangle(Rectangle::new(offset_x, offset_y, width, height))
    }

    /// Circle centered at the given offset
    pub fn circle(offset_x: f32, offset_y: f32, radius: f32) -> Self {
        Self::Circle(Circle::new(offset_x, offset_y, radius))
    }

    /// Which variant this is
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Point(_) => ShapeKind::Point,
            Self::Line(_) => ShapeKind::Line,
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Local offset from the owning entity
    pub fn offset(&self) -> Vec2 {
        match self {
            Self::Point(p) => p.offset(),
            Self::Line(l) => l.offset(),
            Self::Rectangle(r) => r.offset(),
            Self::Circle(c) => c.offset(),
        }
    }

    /// Moves the shape's anchor relative to its owning entity
    pub fn set_offset(&mut self, offset_x: f32, offset_y: f32) {
        match self {
            Self::Point(p) => p.set_offset(offset_x, offset_y),
            Self::Line(l) => l.set_offset(offset_x, offset_y),
            Self::Rectangle(r) => r.set_offset(offset_x, offset_y),
            Self::Circle(c) => c.set_offset(offset_x, offset_y),
        }
    }

    /// Tests this shape, owned by an entity at `(this_x, this_y)`, against
    /// `other`, owned by an entity at `(other_x, other_y)`.
    ///
    /// Uses [`Tolerances::DEFAULT`].
    pub fn intersects(&self, other: &Self, this_x: f32, this_y: f32, other_x: f32, other_y: f32) -> bool {
        self.intersects_with(other, this_x, this_y, other_x, other_y, &Tolerances::DEFAULT)
    }

    /// Same as [`Shape::intersects`] with explicit tolerances
    ///
    /// Negative or NaN fields of `tol` fall back to their defaults, see
    /// [`Tolerances::sanitized`].
    pub fn intersects_with(
        &self,
        other: &Self,
        this_x: f32,
        this_y: f32,
        other_x: f32,
        other_y: f32,
        tol: &Tolerances,
    ) -> bool {
        let tol = &tol.sanitized();
        let this = Vec2::new(this_x, this_y);
        let at = Vec2::new(other_x, other_y);
        match self {
            Self::Point(p) => p.intersects_shape(other, this, at, tol),
            Self::Line(l) => l.intersects_shape(other, this, at, tol),
            Self::Rectangle(r) => r.intersects_shape(other, this, at, tol),
            Self::Circle(c) => c.intersects_shape(other, this, at, tol),
        }
    }

    /// Smallest axis-aligned box containing the shape when its entity sits
    /// at `(x, y)`, returned in world coordinates (zero world position)
    pub fn bounds(&self, x: f32, y: f32) -> Rectangle {
        let position = Vec2::new(x, y);
        match self {
            Self::Point(p) => {
                let at = p.world_position(position);
                Rectangle::new(at.x, at.y, 0.0, 0.0)
            }
            Self::Line(l) => {
                let (a, b) = l.world_endpoints(position);
                let min = a.inf(&b);
                let max = a.sup(&b);
                Rectangle::new(min.x, min.y, max.x - min.x, max.y - min.y)
            }
            Self::Rectangle(r) => {
                let (min, _) = r.world_corners(position);
                Rectangle::new(min.x, min.y, r.width(), r.height())
            }
            Self::Circle(c) => {
                let center = c.world_center(position);
                let r = c.radius();
                Rectangle::new(center.x - r, center.y - r, r * 2.0, r * 2.0)
            }
        }
    }
}

impl From<Point> for Shape {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Self::Rectangle(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}
