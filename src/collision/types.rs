/*!
Core collision types and math aliases shared by the collision submodules.

This module intentionally contains no algorithms. It defines the data types
exchanged between:
- broad (static world acceleration structure and candidate queries)
- narrow_phase (parry2d shape-cast and contact queries)
- the kinematic body and the collide-and-slide solver

Notes on lifetimes:
- `CastHit`s are transient per-query values. They are written into a
  caller-owned scratch buffer that is cleared and refilled on every cast,
  so a hit must be consumed before the next cast is issued.
*/

use nalgebra as na;

/// Common math aliases for clarity and consistency.
pub type Vec2 = na::Vector2<f32>;
pub type Rot = na::UnitComplex<f32>;
pub type Iso = na::Isometry2<f32>;

/// A rigid transform (isometry) in world space.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    pub translation: Vec2,
    pub rotation: Rot,
}

impl Transform {
    #[inline]
    pub fn new(translation: Vec2, rotation: Rot) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Axis-aligned placement at `translation` with no rotation.
    #[inline]
    pub fn from_translation(translation: Vec2) -> Self {
        Self {
            translation,
            rotation: Rot::identity(),
        }
    }

    /// Convert to nalgebra `Isometry2` for use with parry2d queries.
    #[inline]
    pub fn iso(&self) -> Iso {
        Iso::from_parts(na::Translation2::from(self.translation), self.rotation)
    }
}

/// Static collision shapes supported by the world.
///
/// - Plane: infinite line in world space represented by its normal and offset
///          (dist) satisfying: normal ⋅ x = dist.
/// - Cuboid: oriented rectangle with half-extents in local space, placed by
///           `transform`.
#[derive(Clone, Copy, Debug)]
pub enum StaticShape {
    Plane {
        /// World-space unit normal of the plane.
        normal: Vec2,
        /// Plane offset along the normal, i.e., normal ⋅ x = dist.
        dist: f32,
    },
    Cuboid {
        /// Local-space half-extents (hx, hy).
        half_extents: Vec2,
        /// World-space pose of the cuboid.
        transform: Transform,
    },
    Ball {
        /// Radius in meters.
        radius: f32,
        /// World-space pose (translation used; rotation irrelevant).
        transform: Transform,
    },
    Capsule {
        /// Radius of the end caps and the segment thickness.
        radius: f32,
        /// Half of the segment length along the local +Y axis.
        half_height: f32,
        /// World-space pose of the capsule.
        transform: Transform,
    },
}

/// Stable handle to a collider inside a [`CollisionWorld`](crate::CollisionWorld).
///
/// The handle is an index into the world's collider list; it stays valid for
/// the lifetime of the world (worlds are immutable once built).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColliderId(pub usize);

/// A single sweep contact produced by the body's cast operation.
///
/// Hits are intended to be used right away: the scratch buffer holding them
/// is reused, so any subsequent cast invalidates previous results.
#[derive(Clone, Copy, Debug)]
pub struct CastHit {
    /// World-space contact point on the moving body at the time of impact.
    pub point: Vec2,
    /// World-space contact normal on the moving body, opposing the motion.
    pub normal: Vec2,
    /// Travel distance (meters) along the cast direction until contact.
    pub distance: f32,
    /// The collider that was hit.
    pub collider: ColliderId,
}
