use super::broad::{self, WorldAccel};
use super::types::{ColliderId, StaticShape};
use crate::layers::LayerMask;

/// A static collider: a shape plus the layers it belongs to.
#[derive(Clone, Copy, Debug)]
pub struct StaticCollider {
    pub shape: StaticShape,
    pub layers: LayerMask,
}

impl StaticCollider {
    /// Collider on the default layer set (matched by every query).
    #[inline]
    pub fn new(shape: StaticShape) -> Self {
        Self {
            shape,
            layers: LayerMask::ALL,
        }
    }

    #[inline]
    pub fn with_layers(shape: StaticShape, layers: LayerMask) -> Self {
        Self { shape, layers }
    }
}

/// Immutable scene geometry with a prebuilt broad-phase accelerator.
///
/// Built once at scene load; every body/solver query borrows it read-only.
/// Changing the scene means building a new world, which keeps query results
/// trivially consistent within a tick.
pub struct CollisionWorld {
    colliders: Vec<StaticCollider>,
    accel: WorldAccel,
}

impl CollisionWorld {
    pub fn new(colliders: Vec<StaticCollider>) -> Self {
        let accel = broad::build_world_accel(&colliders);
        Self { colliders, accel }
    }

    /// World with no geometry; every cast misses.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[inline]
    pub fn colliders(&self) -> &[StaticCollider] {
        &self.colliders
    }

    #[inline]
    pub fn get(&self, id: ColliderId) -> Option<&StaticCollider> {
        self.colliders.get(id.0)
    }

    #[inline]
    pub fn accel(&self) -> &WorldAccel {
        &self.accel
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colliders.len()
    }
}
