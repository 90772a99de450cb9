//! Collider component
//!
//! Pairs a [`Shape`] with layer filtering and an enable switch, the way an
//! entity carries its collision data. The entity's world position is still
//! supplied per query.

use super::collision::Shape;
use super::collision_layers::CollisionLayers;
use crate::config::Tolerances;
use crate::foundation::math::Vec2;

/// Collision data attached to an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// The collision shape, relative to the entity
    pub shape: Shape,

    /// Layers this collider sits on
    pub layer: CollisionLayers,

    /// Layers this collider collides with
    pub mask: CollisionLayers,

    /// Disabled colliders never report a collision
    pub enabled: bool,
}

impl Collider {
    /// Create a new collider on every layer, colliding with every layer
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            layer: CollisionLayers::all(),
            mask: CollisionLayers::all(),
            enabled: true,
        }
    }

    /// Create a collider with specific layer and mask
    #[must_use]
    pub fn with_layers(mut self, layer: CollisionLayers, mask: CollisionLayers) -> Self {
        self.layer = layer;
        self.mask = mask;
        self
    }

    /// Enable or disable the collider
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether layer filtering lets this pair be tested at all
    pub fn accepts(&self, other: &Self) -> bool {
        self.enabled
            && other.enabled
            && CollisionLayers::should_collide(self.layer, self.mask, other.layer, other.mask)
    }

    /// Test this collider at `position` against `other` at `other_position`
    pub fn collides_with(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        self.collides_with_tolerances(position, other, other_position, &Tolerances::DEFAULT)
    }

    /// Same as [`Collider::collides_with`] with explicit tolerances
    pub fn collides_with_tolerances(
        &self,
        position: Vec2,
        other: &Self,
        other_position: Vec2,
        tol: &Tolerances,
    ) -> bool {
        if !self.accepts(other) {
            log::trace!(
                "Skipping {} vs {}: filtered by layers or disabled",
                self.shape.kind(),
                other.shape.kind()
            );
            return false;
        }

        let hit = self.shape.intersects_with(
            &other.shape,
            position.x,
            position.y,
            other_position.x,
            other_position.y,
            tol,
        );
        log::trace!(
            "{} at ({}, {}) vs {} at ({}, {}): {}",
            self.shape.kind(),
            position.x,
            position.y,
            other.shape.kind(),
            other_position.x,
            other_position.y,
            hit
        );
        hit
    }
}

impl From<Shape> for Collider {
    fn from(shape: Shape) -> Self {
        Self::new(shape)
    }
}
