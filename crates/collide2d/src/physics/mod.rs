//! Physics module for 2D collision detection
//!
//! Provides the primitive shapes and their pairwise intersection tests, plus
//! a small collider component with layer filtering. Deciding which pairs to
//! test and what to do about a hit is left to the caller.

pub mod collider;
pub mod collision;
pub mod collision_layers;

#[cfg(test)]
mod tests;

pub use collider::Collider;
pub use collision::{Circle, Line, Point, Rectangle, Shape, ShapeKind};
pub use collision_layers::CollisionLayers;
