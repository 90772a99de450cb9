//! Narrow-phase collision shapes
//!
//! # Architecture
//!
//! - **Offset storage**: every shape stores its geometry relative to the
//!   entity that owns it
//! - **On-demand translation**: world positions are supplied per query and
//!   added to the offsets inside each test
//! - **One formula per pairing**: see [`shape`] for which shape owns which
//!   pairwise test
//!
//! # Module Organization
//!
//! - [`shape`] - The [`Shape`] enum and the dispatch entry point
//! - [`point`], [`line`], [`rectangle`], [`circle`] - The variants and the
//!   formulas they own

pub mod circle;
pub mod line;
pub mod point;
pub mod rectangle;
pub mod shape;

// Re-export commonly used types
pub use circle::Circle;
pub use line::Line;
pub use point::Point;
pub use rectangle::Rectangle;
pub use shape::{Shape, ShapeKind};
