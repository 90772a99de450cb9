//! # collide2d
//!
//! Primitive 2D collision shapes and the pairwise intersection tests between
//! every combination of them.
//!
//! ## Features
//!
//! - **Four shape kinds**: point, line segment, axis-aligned rectangle, circle
//! - **Offset-based shapes**: a shape stores its anchor relative to the entity
//!   that owns it, so one shape value can be tested at any world position
//! - **Symmetric dispatch**: `a.intersects(&b, pa, pb) == b.intersects(&a, pb, pa)`
//! - **Colliders and layers**: optional layer/mask filtering on top of shapes
//!
//! ## Quick Start
//!
//! ```rust
//! use collide2d::prelude::*;
//!
//! let ship = Shape::circle(0.0, 0.0, 1.0);
//! let wall = Shape::rectangle(0.0, 0.0, 10.0, 10.0);
//!
//! // Ship entity at (11, 11), wall entity at the origin.
//! assert!(!ship.intersects(&wall, 11.0, 11.0, 0.0, 0.0));
//! assert!(ship.intersects(&wall, 10.5, 10.5, 0.0, 0.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod physics;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, Tolerances},
        foundation::math::Vec2,
        physics::{
            collision::{Circle, Line, Point, Rectangle, Shape, ShapeKind},
            Collider, CollisionLayers,
        },
    };
}
