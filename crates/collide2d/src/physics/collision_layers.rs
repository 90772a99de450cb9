//! Collision layer system for filtering collision detection
//!
//! Each collider sits on one or more layers and carries a mask of the layers
//! it is willing to touch. A pair is tested only when each side's mask
//! accepts the other's layer.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Collision layer bits
    ///
    /// Bits 0-7 are the stock game layers; bits 8-31 are free for the game
    /// to assign with [`CollisionLayers::custom`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct CollisionLayers: u32 {
        /// Player character layer
        const PLAYER = 1 << 0;
        /// Enemy character layer
        const ENEMY = 1 << 1;
        /// Projectiles (bullets, missiles, etc.)
        const PROJECTILE = 1 << 2;
        /// Static environment geometry
        const ENVIRONMENT = 1 << 3;
        /// Trigger volumes
        const TRIGGER = 1 << 4;
        /// Debris and small props
        const DEBRIS = 1 << 5;
        /// Vehicles
        const VEHICLE = 1 << 6;
        /// Pickups and collectibles
        const PICKUP = 1 << 7;

        // Keep the high bits as known flags so `all()` covers custom layers.
        const _ = !0;
    }
}

impl CollisionLayers {
    /// First bit available for game-defined layers
    pub const FIRST_CUSTOM_BIT: u32 = 8;

    /// A game-defined layer, `bit` in `8..32`
    ///
    /// Returns `None` for bits outside that range.
    pub fn custom(bit: u32) -> Option<Self> {
        if bit >= Self::FIRST_CUSTOM_BIT && bit < 32 {
            Some(Self::from_bits_retain(1 << bit))
        } else {
            None
        }
    }

    /// Check if two colliders should be tested against each other
    ///
    /// # Arguments
    /// * `layer_a` - Collider A's layers
    /// * `mask_a` - Layers collider A collides with
    /// * `layer_b` - Collider B's layers
    /// * `mask_b` - Layers collider B collides with
    ///
    /// # Example
    /// ```
    /// use collide2d::physics::CollisionLayers;
    ///
    /// assert!(CollisionLayers::should_collide(
    ///     CollisionLayers::PLAYER, CollisionLayers::ENEMY,
    ///     CollisionLayers::ENEMY, CollisionLayers::PLAYER,
    /// ));
    /// assert!(!CollisionLayers::should_collide(
    ///     CollisionLayers::PLAYER, CollisionLayers::ENEMY,
    ///     CollisionLayers::PICKUP, CollisionLayers::all(),
    /// ));
    /// ```
    pub fn should_collide(layer_a: Self, mask_a: Self, layer_b: Self, mask_b: Self) -> bool {
        mask_a.intersects(layer_b) && mask_b.intersects(layer_a)
    }
}

impl Default for CollisionLayers {
    fn default() -> Self {
        Self::all()
    }
}
