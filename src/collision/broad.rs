use nalgebra as na;
use parry2d::{
    bounding_volume::Aabb,
    partitioning::{Bvh, BvhBuildStrategy},
    shape as pshape,
};

use super::types::{StaticShape, Transform, Vec2};
use super::world::StaticCollider;

/// Acceleration structure for broad-phase queries over immutable world statics.
///
/// Notes:
/// - Finite shapes (Cuboid, Ball, Capsule) are stored as world-space AABBs in
///   a BVH used to generate candidates. Planes are handled separately because
///   they are infinite.
/// - `finite_indices` maps each stored AABB back to its index in the original
///   collider slice.
/// - `plane_indices` stores indices of planes in the original collider slice.
pub struct WorldAccel {
    /// BVH over finite static shapes (AABBs).
    pub bvh: Bvh,
    /// Indices into the original collider slice for the AABBs above.
    pub finite_indices: Vec<usize>,
    /// Indices into the original collider slice for planes.
    pub plane_indices: Vec<usize>,
}

impl WorldAccel {
    /// Return true if this accelerator has no finite entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.finite_indices.is_empty()
    }

    /// Number of finite entries (AABBs) in this accelerator.
    #[inline]
    pub fn len(&self) -> usize {
        self.finite_indices.len()
    }
}

/// Build a broad-phase accelerator over immutable world statics.
///
/// - Finite shapes get a world-space AABB and are indexed in the BVH.
/// - Infinite shapes (Plane) are kept in `plane_indices` and must be tested
///   separately during queries.
pub fn build_world_accel(colliders: &[StaticCollider]) -> WorldAccel {
    let mut aabbs: Vec<Aabb> = Vec::new();
    let mut finite_indices: Vec<usize> = Vec::new();
    let mut plane_indices: Vec<usize> = Vec::new();

    for (i, c) in colliders.iter().enumerate() {
        match c.shape {
            StaticShape::Plane { .. } => {
                plane_indices.push(i);
            }
            StaticShape::Cuboid {
                half_extents,
                transform,
            } => {
                aabbs.push(cuboid_aabb_world(half_extents, transform));
                finite_indices.push(i);
            }
            StaticShape::Ball { radius, transform } => {
                aabbs.push(ball_aabb_world(radius, transform));
                finite_indices.push(i);
            }
            StaticShape::Capsule {
                radius,
                half_height,
                transform,
            } => {
                aabbs.push(capsule_aabb_world(radius, half_height, transform));
                finite_indices.push(i);
            }
        }
    }

    WorldAccel {
        bvh: Bvh::from_leaves(BvhBuildStrategy::Binned, &aabbs),
        finite_indices,
        plane_indices,
    }
}

/// Compute the world-space AABB for a posed cuboid.
fn cuboid_aabb_world(half_extents: Vec2, transform: Transform) -> Aabb {
    let cuboid = pshape::Cuboid::new(half_extents);
    cuboid.aabb(&transform.iso())
}

fn ball_aabb_world(radius: f32, transform: Transform) -> Aabb {
    let ball = pshape::Ball::new(radius);
    // Rotation is irrelevant for a ball.
    let iso = super::types::Iso::translation(transform.translation.x, transform.translation.y);
    ball.aabb(&iso)
}

fn capsule_aabb_world(radius: f32, half_height: f32, transform: Transform) -> Aabb {
    let capsule = pshape::Capsule::new_y(half_height, radius);
    capsule.aabb(&transform.iso())
}

/// Compute a swept AABB for an axis-aligned box moving from `start_pos` to
/// `start_pos + desired`.
///
/// The resulting AABB is inflated by `skin` to conservatively include near
/// misses.
pub fn swept_box_aabb(half_extents: Vec2, start_pos: Vec2, desired: Vec2, skin: f32) -> Aabb {
    let cuboid = pshape::Cuboid::new(half_extents);

    let iso_start = super::types::Iso::translation(start_pos.x, start_pos.y);
    let end_pos = start_pos + desired;
    let iso_end = super::types::Iso::translation(end_pos.x, end_pos.y);

    let aabb_start = cuboid.aabb(&iso_start);
    let aabb_end = cuboid.aabb(&iso_end);

    let mut swept = aabb_union(&aabb_start, &aabb_end);

    if skin > 0.0 {
        swept = aabb_inflate(&swept, skin);
    }

    swept
}

/// Query candidate collider indices whose AABB intersects `swept`.
///
/// Returns indices referencing the original collider slice (not the local
/// AABB array).
pub fn query_candidates(accel: &WorldAccel, swept: &Aabb) -> Vec<usize> {
    accel
        .bvh
        .intersect_aabb(swept)
        .map(|leaf_idx| {
            let i = leaf_idx as usize;
            accel.finite_indices[i]
        })
        .collect()
}

/// Compute the union of two AABBs.
fn aabb_union(a: &Aabb, b: &Aabb) -> Aabb {
    let min = na::Point2::new(a.mins.x.min(b.mins.x), a.mins.y.min(b.mins.y));
    let max = na::Point2::new(a.maxs.x.max(b.maxs.x), a.maxs.y.max(b.maxs.y));
    Aabb {
        mins: min,
        maxs: max,
    }
}

/// Inflate an AABB by `margin` on all sides.
fn aabb_inflate(a: &Aabb, margin: f32) -> Aabb {
    if margin <= 0.0 {
        return *a;
    }
    let delta = na::Vector2::new(margin, margin);
    Aabb {
        mins: a.mins - delta,
        maxs: a.maxs + delta,
    }
}
