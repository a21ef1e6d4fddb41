/*!
Collision root module.

This module re-exports submodules that implement the collision queries behind
the collide-and-slide solver, using parry2d for narrow-phase queries and a
simple broad-phase for static world acceleration. The code is split for
clarity:

- types:        shared data types (Transform, StaticShape, CastHit, etc.)
- settings:     solver and tolerance constants
- broad:        broad-phase helpers (swept AABBs, candidate queries)
- narrow_phase: thin wrappers over parry2d queries (shape casts, overlaps)
- world:        immutable collider set plus its prebuilt accelerator
*/

pub mod broad;
pub mod narrow_phase;
pub mod settings;
pub mod types;
pub mod world;

// Re-export commonly used types and functions.
pub use types::{CastHit, ColliderId, Iso, Rot, StaticShape, Transform, Vec2};
pub use world::{CollisionWorld, StaticCollider};

/// Convenience: build a `StaticShape::Plane` from a surface point and its
/// outward normal:
/// - dist = dot(normal, point)
#[inline]
pub fn plane_through_point(normal: Vec2, point: Vec2) -> StaticShape {
    StaticShape::Plane {
        normal,
        dist: normal.dot(&point),
    }
}

/// Convenience: build a `StaticShape::Cuboid` with given half extents and pose.
#[inline]
pub fn cuboid_from_pose(half_extents: Vec2, translation: Vec2, rotation: Rot) -> StaticShape {
    StaticShape::Cuboid {
        half_extents,
        transform: Transform {
            translation,
            rotation,
        },
    }
}
