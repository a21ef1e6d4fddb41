use nalgebra as na;
use parry2d::{
    query::{self, ShapeCastOptions},
    shape as pshape,
};

use super::types::{Iso, StaticShape, Vec2};

/// Raw narrow-phase sweep result, before it is tagged with a collider handle.
#[derive(Clone, Copy, Debug)]
pub struct SweepHit {
    /// World-space contact point on the moving box at the time of impact.
    pub point: Vec2,
    /// World-space contact normal on the moving box, opposing the motion.
    pub normal: Vec2,
    /// Fraction (0..1) of the tested translation where the hit occurred.
    pub fraction: f32,
}

/// Cast a moving axis-aligned box against a single static shape and return the
/// earliest hit (if any).
///
/// - `box_iso`: the box's starting isometry in world space (identity rotation;
///   the body is never rotated out of axis alignment).
/// - `moving_box`: the box shape being swept.
/// - `vel`: the world-space translation vector for this cast (meters).
/// - `max_toi`: the maximum fraction of `vel` to consider (typically 1.0).
/// - `shape`: the static shape to test against.
pub fn cast_box_against_static(
    box_iso: Iso,
    moving_box: &pshape::Cuboid,
    vel: Vec2,
    max_toi: f32,
    shape: &StaticShape,
) -> Option<SweepHit> {
    match *shape {
        StaticShape::Plane { normal, dist } => {
            // Plane: represent as a parry HalfSpace with world normal,
            // positioned at normal * dist. Plane equation: normal ⋅ x = dist.
            let unit_n = na::Unit::new_normalize(normal);
            let anchor = normal * dist;
            let plane_iso = Iso::translation(anchor.x, anchor.y);
            let plane = pshape::HalfSpace::new(unit_n);
            sweep(box_iso, moving_box, vel, max_toi, plane_iso, &plane)
        }
        StaticShape::Cuboid {
            half_extents,
            transform,
        } => {
            let cuboid = pshape::Cuboid::new(half_extents);
            sweep(box_iso, moving_box, vel, max_toi, transform.iso(), &cuboid)
        }
        StaticShape::Ball { radius, transform } => {
            // Rotation is irrelevant for a ball.
            let ball = pshape::Ball::new(radius);
            let iso = Iso::translation(transform.translation.x, transform.translation.y);
            sweep(box_iso, moving_box, vel, max_toi, iso, &ball)
        }
        StaticShape::Capsule {
            radius,
            half_height,
            transform,
        } => {
            let capsule = pshape::Capsule::new_y(half_height, radius);
            sweep(box_iso, moving_box, vel, max_toi, transform.iso(), &capsule)
        }
    }
}

fn sweep(
    box_iso: Iso,
    moving_box: &pshape::Cuboid,
    vel: Vec2,
    max_toi: f32,
    shape_iso: Iso,
    shape: &dyn pshape::Shape,
) -> Option<SweepHit> {
    let mut opts = ShapeCastOptions::with_max_time_of_impact(max_toi);
    opts.stop_at_penetration = true;
    // Already-penetrating casts must still report a usable normal for the
    // depenetration pass.
    opts.compute_impact_geometry_on_penetration = true;

    if let Ok(Some(hit)) = query::cast_shapes(
        &box_iso,
        &vel,
        moving_box as &dyn pshape::Shape,
        &shape_iso,
        &na::Vector2::zeros(),
        shape,
        opts,
    ) {
        // Use the normal on the moving shape; ensure it opposes the motion.
        // The box's rotation is the identity, so its local frame and the world
        // frame coincide for both the normal and the witness point.
        let mut n = Vec2::new(hit.normal1.into_inner().x, hit.normal1.into_inner().y);
        if n.dot(&vel) > 0.0 {
            n = -n;
        }

        let translation_at_impact = box_iso.translation.vector + vel * hit.time_of_impact;
        let point = translation_at_impact + hit.witness1.coords;

        return Some(SweepHit {
            point,
            normal: n,
            fraction: hit.time_of_impact,
        });
    }
    None
}

/// Penetration contact between a posed axis-aligned box and a single static
/// shape.
///
/// Returns the minimum translation that moves the box out of the shape, or
/// `None` when the two are separated. The contact query itself tolerates a
/// small positive distance; only true penetration produces a push vector.
pub fn overlap_box_with_static(
    box_iso: Iso,
    moving_box: &pshape::Cuboid,
    shape: &StaticShape,
) -> Option<Vec2> {
    let contact = match *shape {
        StaticShape::Plane { normal, dist } => {
            // parry's HalfSpace contact distance is measured against the
            // half-space boundary pose, not the surface gap, so planes are
            // resolved analytically: penetration is how far the deepest box
            // corner sits below the surface normal ⋅ x = dist. The box is
            // never rotated out of axis alignment, so the deepest corner is
            // the support point of the half-extents against the normal.
            let n = na::Unit::new_normalize(normal).into_inner();
            let center = box_iso.translation.vector;
            let he = moving_box.half_extents;
            let deepest = center - Vec2::new(n.x.signum() * he.x, n.y.signum() * he.y);
            let depth = dist - n.dot(&deepest);
            if depth > 0.0 {
                return Some(n * depth);
            }
            return None;
        }
        StaticShape::Cuboid {
            half_extents,
            transform,
        } => {
            let cuboid = pshape::Cuboid::new(half_extents);
            query::contact(&box_iso, moving_box, &transform.iso(), &cuboid, 0.0)
        }
        StaticShape::Ball { radius, transform } => {
            let ball = pshape::Ball::new(radius);
            let iso = Iso::translation(transform.translation.x, transform.translation.y);
            query::contact(&box_iso, moving_box, &iso, &ball, 0.0)
        }
        StaticShape::Capsule {
            radius,
            half_height,
            transform,
        } => {
            let capsule = pshape::Capsule::new_y(half_height, radius);
            query::contact(&box_iso, moving_box, &transform.iso(), &capsule, 0.0)
        }
    };

    if let Ok(Some(contact)) = contact {
        if contact.dist < 0.0 {
            // normal1 points toward the exterior of the box at the contact,
            // so scaling by the (negative) distance moves the box out.
            let n = contact.normal1.into_inner();
            return Some(Vec2::new(n.x, n.y) * contact.dist);
        }
    }
    None
}
