//! Collide-and-slide movement solver.
//!
//! The solver owns a [`KinematicBody`] and turns a desired displacement into
//! a collision-safe one. Each move is decomposed against the body's local
//! axes and resolved per axis with iterative sweeps: advance to contact
//! (minus the skin), classify the surface against the slope threshold, and
//! either redirect the remaining motion along the surface or discard it.
//!
//! The solver never integrates velocity or applies gravity; callers feed it
//! per-tick displacements and read back the resulting contact flags.

use crate::body::KinematicBody;
use crate::collision::settings::{
    DEFAULT_BOUNCINESS, DEFAULT_CONTACT_OFFSET, DEFAULT_FRICTION, DEFAULT_MAX_MOVE_ITERATIONS,
    DEFAULT_MAX_OVERLAP_ITERATIONS, DEFAULT_MAX_SLOPE_ANGLE, DIST_EPS, GRAVITY_MPS2,
    MIN_NORMAL_SQ,
};
use crate::collision::types::{CastHit, ColliderId, Vec2};
use crate::collision::world::CollisionWorld;
use crate::error::{ConfigError, Result};
use crate::flags::CollisionFlags;
use crate::layers::LayerMask;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tuning parameters for a [`CollideAndSlideSolver`].
///
/// Validated once at solver construction (and again on replacement); the
/// solver never re-checks them per move.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverParams {
    /// Cap on correction sweeps per axis per move.
    pub max_move_iterations: u32,
    /// Cap on depenetration passes after each resolved contact.
    pub max_overlap_iterations: u32,
    /// Fraction of the normal-component motion reflected on impact, in
    /// [0, 1]. Zero gives the plain slide response.
    pub bounciness: f32,
    /// Damping of the tangential-component motion on impact, in [-1, 1].
    /// Negative values boost the slide instead of damping it.
    pub friction: f32,
    /// Skin width kept between the body and surfaces (meters).
    pub contact_offset: f32,
    /// Layers the solver's queries collide with.
    pub layer_mask: LayerMask,
    /// Threshold between walkable and too-steep surfaces (degrees between
    /// the surface normal and the body's up axis).
    pub max_slope_angle: f32,
    /// Gravity magnitude for callers integrating velocity (m/s², positive).
    /// Informational; the solver itself never applies it.
    pub gravity: f32,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            max_move_iterations: DEFAULT_MAX_MOVE_ITERATIONS,
            max_overlap_iterations: DEFAULT_MAX_OVERLAP_ITERATIONS,
            bounciness: DEFAULT_BOUNCINESS,
            friction: DEFAULT_FRICTION,
            contact_offset: DEFAULT_CONTACT_OFFSET,
            layer_mask: LayerMask::ALL,
            max_slope_angle: DEFAULT_MAX_SLOPE_ANGLE,
            gravity: GRAVITY_MPS2,
        }
    }
}

impl SolverParams {
    /// Check every field against its documented range.
    pub fn validate(&self) -> Result<()> {
        if self.max_move_iterations == 0 || self.max_overlap_iterations == 0 {
            return Err(ConfigError::NonPositiveIterationCap {
                move_cap: self.max_move_iterations,
                overlap_cap: self.max_overlap_iterations,
            });
        }
        if !(0.0..=1.0).contains(&self.bounciness) {
            return Err(ConfigError::BouncinessOutOfRange(self.bounciness));
        }
        if !(-1.0..=1.0).contains(&self.friction) {
            return Err(ConfigError::FrictionOutOfRange(self.friction));
        }
        if !(self.contact_offset >= 0.0) {
            return Err(ConfigError::NegativeContactOffset(self.contact_offset));
        }
        if !(0.0..=90.0).contains(&self.max_slope_angle) {
            return Err(ConfigError::SlopeAngleOutOfRange(self.max_slope_angle));
        }
        Ok(())
    }
}

/// Query counters for the most recent move.
///
/// Purely observational; resolution never branches on these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveDiagnostics {
    /// Sweep queries issued by the axis passes.
    pub cast_queries: u32,
    /// Overlap queries issued while depenetrating.
    pub overlap_queries: u32,
}

/// Which local axis a resolution pass is sweeping along.
///
/// The two passes invert the slope test: horizontal motion follows walkable
/// surfaces and stops at steep ones, vertical motion rests on walkable
/// surfaces and slides off steep ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MoveAxis {
    Horizontal,
    Vertical,
}

/// Collide-and-slide solver over a single kinematic body.
pub struct CollideAndSlideSolver {
    body: KinematicBody,
    params: SolverParams,
    flags: CollisionFlags,
    hits: Vec<CastHit>,
    diagnostics: MoveDiagnostics,
}

impl CollideAndSlideSolver {
    pub fn new(body: KinematicBody, params: SolverParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            body,
            params,
            flags: CollisionFlags::default(),
            hits: Vec::new(),
            diagnostics: MoveDiagnostics::default(),
        })
    }

    /// Replace the tuning parameters, revalidating them first.
    pub fn with_params(&mut self, params: SolverParams) -> Result<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    #[inline]
    pub fn body(&self) -> &KinematicBody {
        &self.body
    }

    /// Direct body access for teleports and spawn placement. Moves applied
    /// here bypass collision resolution entirely.
    #[inline]
    pub fn body_mut(&mut self) -> &mut KinematicBody {
        &mut self.body
    }

    #[inline]
    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Contact flags from the most recent move.
    #[inline]
    pub fn flags(&self) -> CollisionFlags {
        self.flags
    }

    /// Query counters from the most recent move.
    #[inline]
    pub fn diagnostics(&self) -> MoveDiagnostics {
        self.diagnostics
    }

    /// Reorient the body by flipping its local axes.
    #[inline]
    pub fn flip(&mut self, horizontal: bool, vertical: bool) {
        self.body.flip(horizontal, vertical);
    }

    /// Move the body by `delta`, sliding along whatever it hits.
    ///
    /// The displacement is split against the body's up axis and resolved
    /// horizontal-first, so ground snapping happens after lateral motion.
    /// Returns the contact flags describing how the move ended; the same
    /// flags stay readable through [`flags`](Self::flags).
    ///
    /// An exactly-zero `delta` is a no-op that preserves the previous flags.
    pub fn move_and_slide(&mut self, world: &CollisionWorld, delta: Vec2) -> CollisionFlags {
        if delta == Vec2::zeros() {
            return self.flags;
        }

        log::trace!("move_and_slide: delta=({:.4}, {:.4})", delta.x, delta.y);

        self.diagnostics = MoveDiagnostics::default();
        self.body.set_skin_width(self.params.contact_offset);
        let start = self.body.position();

        let up = self.body.up();
        let vertical = up * delta.dot(&up);
        let horizontal = delta - vertical;

        self.move_along(world, horizontal, MoveAxis::Horizontal);
        self.move_along(world, vertical, MoveAxis::Vertical);

        self.flags = self.body.contact_flags(
            world,
            self.params.contact_offset,
            self.params.max_slope_angle,
            self.params.layer_mask,
        );
        self.body.interpolated_move_to(start, self.body.position());
        self.flags
    }

    /// Resolve one axis component with iterative sweeps.
    fn move_along(&mut self, world: &CollisionWorld, mut delta: Vec2, axis: MoveAxis) {
        let skin = self.params.contact_offset;

        for _ in 0..self.params.max_move_iterations {
            // Exact-equality check: even sub-epsilon components are real
            // motion and must be applied, not silently dropped.
            if delta == Vec2::zeros() {
                return;
            }
            let len = delta.norm();

            self.diagnostics.cast_queries += 1;
            if !self
                .body
                .cast_aabb(world, delta, self.params.layer_mask, &mut self.hits)
            {
                self.body.move_by(delta);
                return;
            }

            let mut closest: Option<CastHit> = None;
            for hit in &self.hits {
                if closest.map_or(true, |c| hit.distance < c.distance) {
                    closest = Some(*hit);
                }
            }
            let Some(hit) = closest else {
                return;
            };

            // Advance to the surface, keeping the skin gap. A penetrating
            // start (distance zero) advances nothing and relies on the
            // push-out below.
            let dir = delta / len;
            let travel = (hit.distance - skin).max(0.0);
            self.body.move_by(dir * travel);

            let angle = self.body.up().angle(&hit.normal).to_degrees();
            let redirects = surface_redirects(axis, angle, self.params.max_slope_angle);

            self.push_out_of(world, hit.collider);

            if !redirects {
                return;
            }
            delta = self.compute_collision_delta(dir * (len - travel).max(0.0), hit.normal);
        }

        log::debug!(
            "sweep cap exhausted after {} iterations; dropping residual motion",
            self.params.max_move_iterations
        );
    }

    /// Split the blocked motion into reflected and tangential parts and
    /// recombine them under the bounce/friction response.
    fn compute_collision_delta(&self, delta: Vec2, normal: Vec2) -> Vec2 {
        let min_len = MIN_NORMAL_SQ.sqrt();
        let Some(normal) = normal.try_normalize(min_len) else {
            return Vec2::zeros();
        };
        let len = delta.norm();
        if len <= DIST_EPS {
            return Vec2::zeros();
        }

        let reflected = delta - normal * (2.0 * delta.dot(&normal));
        let projection = normal * reflected.dot(&normal);
        let tangent = reflected - projection;

        let mut out = Vec2::zeros();
        if let Some(dir) = projection.try_normalize(min_len) {
            out += dir * (self.params.bounciness * len);
        }
        if let Some(dir) = tangent.try_normalize(min_len) {
            out += dir * ((1.0 - self.params.friction) * len);
        }
        out
    }

    /// Resolve any residual overlap with the collider just contacted,
    /// bounded by the overlap iteration cap.
    fn push_out_of(&mut self, world: &CollisionWorld, collider: ColliderId) {
        for _ in 0..self.params.max_overlap_iterations {
            self.diagnostics.overlap_queries += 1;
            match self.body.compute_overlap(world, collider) {
                Some(push) => self.body.move_by(push),
                None => return,
            }
        }
        log::debug!(
            "overlap cap exhausted after {} passes; body may still intersect",
            self.params.max_overlap_iterations
        );
    }
}

/// Does a surface at `angle_deg` from up redirect motion on `axis`, rather
/// than absorbing it?
///
/// Horizontal motion follows surfaces up to and including the threshold;
/// vertical motion is absorbed by them (the body comes to rest) and slides
/// off anything steeper.
fn surface_redirects(axis: MoveAxis, angle_deg: f32, max_slope_angle: f32) -> bool {
    match axis {
        MoveAxis::Horizontal => angle_deg <= max_slope_angle,
        MoveAxis::Vertical => angle_deg > max_slope_angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::types::{StaticShape, Transform};
    use crate::collision::world::StaticCollider;
    use crate::flags::ContactSide;
    use approx::assert_relative_eq;

    fn solver_at(x: f32, y: f32, extents: Vec2, params: SolverParams) -> CollideAndSlideSolver {
        let body = KinematicBody::new(Vec2::new(x, y), extents).unwrap();
        CollideAndSlideSolver::new(body, params).unwrap()
    }

    fn plane(normal: Vec2, dist: f32) -> StaticCollider {
        StaticCollider::new(StaticShape::Plane { normal, dist })
    }

    #[test]
    fn params_validation_rejects_each_bad_field() {
        let base = SolverParams::default();

        let p = SolverParams {
            max_move_iterations: 0,
            ..base
        };
        assert!(matches!(
            p.validate(),
            Err(ConfigError::NonPositiveIterationCap { .. })
        ));

        let p = SolverParams {
            bounciness: 1.5,
            ..base
        };
        assert!(matches!(
            p.validate(),
            Err(ConfigError::BouncinessOutOfRange(_))
        ));

        let p = SolverParams {
            friction: -2.0,
            ..base
        };
        assert!(matches!(
            p.validate(),
            Err(ConfigError::FrictionOutOfRange(_))
        ));

        let p = SolverParams {
            contact_offset: -0.01,
            ..base
        };
        assert!(matches!(
            p.validate(),
            Err(ConfigError::NegativeContactOffset(_))
        ));

        let p = SolverParams {
            max_slope_angle: 120.0,
            ..base
        };
        assert!(matches!(
            p.validate(),
            Err(ConfigError::SlopeAngleOutOfRange(_))
        ));

        assert!(base.validate().is_ok());
    }

    #[test]
    fn horizontal_move_stops_at_a_wall() {
        // Vertical wall surface at x = 3.
        let world = CollisionWorld::new(vec![plane(Vec2::new(-1.0, 0.0), -3.0)]);
        let mut solver = solver_at(0.0, 0.0, Vec2::new(1.0, 1.0), SolverParams::default());

        let flags = solver.move_and_slide(&world, Vec2::new(5.0, 0.0));

        // Right face settles one skin width short of the wall.
        let skin = solver.params().contact_offset;
        assert_relative_eq!(solver.body().position().x, 2.0 - skin, epsilon = 1.0e-3);
        assert_relative_eq!(solver.body().position().y, 0.0, epsilon = 1.0e-4);
        assert!(flags.has(ContactSide::Front));
        assert!(flags.has(ContactSide::SteepSlope));
    }

    #[test]
    fn falling_body_settles_on_the_floor() {
        let world = CollisionWorld::new(vec![plane(Vec2::new(0.0, 1.0), 0.0)]);
        let mut solver = solver_at(0.0, 3.0, Vec2::new(0.5, 0.5), SolverParams::default());

        let flags = solver.move_and_slide(&world, Vec2::new(0.0, -5.0));

        let skin = solver.params().contact_offset;
        assert_relative_eq!(solver.body().position().y, 0.5 + skin, epsilon = 1.0e-3);
        assert!(flags.has(ContactSide::Bottom));
        assert!(!flags.has(ContactSide::Top));

        // Resting on the floor, a further downward move changes nothing.
        let before = solver.body().position();
        let flags = solver.move_and_slide(&world, Vec2::new(0.0, -1.0));
        assert_relative_eq!(solver.body().position().y, before.y, epsilon = 1.0e-3);
        assert!(flags.has(ContactSide::Bottom));
    }

    #[test]
    fn diagonal_move_keeps_lateral_motion_while_landing() {
        // Horizontal-first decomposition: full lateral travel, then the
        // vertical component snaps to the floor.
        let world = CollisionWorld::new(vec![plane(Vec2::new(0.0, 1.0), 0.0)]);
        let mut solver = solver_at(0.0, 3.0, Vec2::new(0.5, 0.5), SolverParams::default());

        let flags = solver.move_and_slide(&world, Vec2::new(3.0, -5.0));

        let skin = solver.params().contact_offset;
        assert_relative_eq!(solver.body().position().x, 3.0, epsilon = 1.0e-4);
        assert_relative_eq!(solver.body().position().y, 0.5 + skin, epsilon = 1.0e-3);
        assert!(flags.has(ContactSide::Bottom));
    }

    #[test]
    fn walkable_ramp_redirects_horizontal_motion_upward() {
        // 30-degree ramp: within the default 45-degree threshold, so lateral
        // motion follows the surface up-slope instead of stopping.
        let normal = Vec2::new(-0.5, 0.866_025_4);
        let world = CollisionWorld::new(vec![plane(normal, -1.0)]);
        let mut solver = solver_at(0.0, 0.0, Vec2::new(0.5, 0.5), SolverParams::default());

        solver.move_and_slide(&world, Vec2::new(3.0, 0.0));

        let pos = solver.body().position();
        assert!(pos.x > 0.5, "ramp must not stop lateral motion, got {pos:?}");
        assert!(pos.y > 0.2, "redirected motion must climb, got {pos:?}");
    }

    #[test]
    fn steep_slope_blocks_horizontal_and_sheds_vertical() {
        // 60-degree surface, above the default threshold.
        let normal = Vec2::new(-0.866_025_4, 0.5);
        let world = CollisionWorld::new(vec![plane(normal, -2.0)]);

        // Lateral motion is absorbed at the contact.
        let mut solver = solver_at(0.0, 0.0, Vec2::new(0.5, 0.5), SolverParams::default());
        let flags = solver.move_and_slide(&world, Vec2::new(10.0, 0.0));
        assert!(solver.body().position().x < 3.0);
        assert_relative_eq!(solver.body().position().y, 0.0, epsilon = 1.0e-4);
        assert!(flags.has(ContactSide::SteepSlope));

        // A fall onto the same surface slides down-slope (toward -x for this
        // normal) instead of coming to rest.
        let mut solver = solver_at(3.0, 5.0, Vec2::new(0.5, 0.5), SolverParams::default());
        solver.move_and_slide(&world, Vec2::new(0.0, -6.0));
        assert!(
            solver.body().position().x < 3.0,
            "vertical motion must shed along the steep surface, got {:?}",
            solver.body().position()
        );
    }

    #[test]
    fn slope_threshold_boundary_is_inclusive_for_walking() {
        // Exactly at the threshold: walkable for lateral motion, restful for
        // vertical motion.
        assert!(surface_redirects(MoveAxis::Horizontal, 45.0, 45.0));
        assert!(!surface_redirects(MoveAxis::Vertical, 45.0, 45.0));

        assert!(!surface_redirects(MoveAxis::Horizontal, 45.01, 45.0));
        assert!(surface_redirects(MoveAxis::Vertical, 45.01, 45.0));

        assert!(surface_redirects(MoveAxis::Horizontal, 0.0, 45.0));
        assert!(!surface_redirects(MoveAxis::Vertical, 0.0, 45.0));
    }

    #[test]
    fn steep_wedge_terminates_at_the_iteration_cap() {
        // A V of two 60-degree steep surfaces meeting below the body. A fall
        // sheds along one wall, immediately closes on the other, and keeps
        // alternating without ever shrinking the remainder, so only the cap
        // ends the vertical pass.
        let world = CollisionWorld::new(vec![
            plane(Vec2::new(-0.866_025_4, 0.5), -2.0),
            plane(Vec2::new(0.866_025_4, 0.5), -2.0),
        ]);
        let params = SolverParams::default();
        let mut solver = solver_at(0.0, 0.0, Vec2::new(0.1, 0.1), params);

        solver.move_and_slide(&world, Vec2::new(0.0, -8.0));

        let diag = solver.diagnostics();
        // Pure vertical move: every cast comes from the vertical pass.
        assert_eq!(diag.cast_queries, params.max_move_iterations);
        assert!(
            diag.cast_queries <= 2 * params.max_move_iterations,
            "per-move casts must stay within the documented bound"
        );
        // The wedge apex is at (0, -4); the body never falls through it.
        let pos = solver.body().position();
        assert!(pos.y > -4.0, "body escaped the wedge: {pos:?}");
        assert!(pos.x.abs() < 1.0);
    }

    #[test]
    fn sub_epsilon_moves_are_not_dropped() {
        // Tiny real displacements accumulate over ticks; the axis loop must
        // apply them exactly rather than treating them as numerical noise.
        let world = CollisionWorld::empty();
        let mut solver = solver_at(0.0, 0.0, Vec2::new(0.5, 0.5), SolverParams::default());

        solver.move_and_slide(&world, Vec2::new(1.0e-7, 0.0));
        assert_eq!(solver.body().position().x, 1.0e-7);

        solver.move_and_slide(&world, Vec2::new(0.0, -1.0e-8));
        assert_eq!(solver.body().position().y, -1.0e-8);
    }

    #[test]
    fn decomposition_recovers_the_exact_delta() {
        // Splitting against the body axes and resolving per axis must add
        // back up to the original displacement exactly when unobstructed,
        // for every axis orientation.
        let world = CollisionWorld::empty();
        let delta = Vec2::new(3.7, -2.3);

        let mut solver = solver_at(0.0, 0.0, Vec2::new(0.5, 0.5), SolverParams::default());
        solver.move_and_slide(&world, delta);
        assert_eq!(solver.body().position(), delta);

        let mut solver = solver_at(0.0, 0.0, Vec2::new(0.5, 0.5), SolverParams::default());
        solver.flip(true, true);
        solver.move_and_slide(&world, delta);
        assert_eq!(solver.body().position(), delta);
    }

    #[test]
    fn friction_damps_the_slide() {
        // Compare the redirected slide up a walkable ramp with and without
        // full friction; friction scales only the tangential remainder.
        let frictionless = SolverParams::default();
        let grippy = SolverParams {
            friction: 1.0,
            ..frictionless
        };

        let normal = Vec2::new(-0.5, 0.866_025_4);
        let ramp = CollisionWorld::new(vec![plane(normal, -1.0)]);

        let mut free = solver_at(0.0, 0.0, Vec2::new(0.5, 0.5), frictionless);
        free.move_and_slide(&ramp, Vec2::new(3.0, 0.0));

        let mut held = solver_at(0.0, 0.0, Vec2::new(0.5, 0.5), grippy);
        held.move_and_slide(&ramp, Vec2::new(3.0, 0.0));

        assert!(
            held.body().position().x < free.body().position().x,
            "full friction must kill the redirected slide: held {:?} vs free {:?}",
            held.body().position(),
            free.body().position()
        );
    }

    #[test]
    fn embedded_start_is_pushed_out() {
        let world = CollisionWorld::new(vec![StaticCollider::new(StaticShape::Cuboid {
            half_extents: Vec2::new(1.0, 1.0),
            transform: Transform::from_translation(Vec2::zeros()),
        })]);
        let mut solver = solver_at(0.9, 0.0, Vec2::new(0.5, 0.5), SolverParams::default());

        solver.move_and_slide(&world, Vec2::new(0.1, 0.0));

        assert!(
            solver
                .body()
                .compute_overlap(&world, ColliderId(0))
                .is_none(),
            "body must end separated, got {:?}",
            solver.body().position()
        );
        assert!(solver.body().position().x >= 1.5 - 1.0e-3);
    }

    #[test]
    fn zero_delta_is_a_no_op_preserving_flags() {
        let world = CollisionWorld::new(vec![plane(Vec2::new(0.0, 1.0), 0.0)]);
        let mut solver = solver_at(0.0, 3.0, Vec2::new(0.5, 0.5), SolverParams::default());

        let landed = solver.move_and_slide(&world, Vec2::new(0.0, -5.0));
        assert!(landed.has(ContactSide::Bottom));
        let pos = solver.body().position();

        let flags = solver.move_and_slide(&world, Vec2::zeros());
        assert_eq!(flags, landed);
        assert_relative_eq!(solver.body().position().y, pos.y);
    }

    #[test]
    fn empty_world_moves_are_unobstructed() {
        let world = CollisionWorld::empty();
        let mut solver = solver_at(0.0, 0.0, Vec2::new(0.5, 0.5), SolverParams::default());

        let flags = solver.move_and_slide(&world, Vec2::new(7.0, -3.0));

        assert!(flags.is_empty());
        assert_relative_eq!(solver.body().position().x, 7.0);
        assert_relative_eq!(solver.body().position().y, -3.0);
        assert_eq!(solver.diagnostics().cast_queries, 2);
    }

    #[test]
    fn flipped_body_decomposes_against_its_own_axes() {
        // After a vertical flip, "up" points down; the same world-space fall
        // still lands on the floor because decomposition uses the body axes
        // only for splitting, not for the world-space geometry.
        let world = CollisionWorld::new(vec![plane(Vec2::new(0.0, 1.0), 0.0)]);
        let mut solver = solver_at(0.0, 3.0, Vec2::new(0.5, 0.5), SolverParams::default());
        solver.flip(false, true);

        let flags = solver.move_and_slide(&world, Vec2::new(0.0, -5.0));

        let skin = solver.params().contact_offset;
        assert_relative_eq!(solver.body().position().y, 0.5 + skin, epsilon = 1.0e-3);
        // With up negated the floor is along +up, so it reads as Top.
        assert!(flags.has(ContactSide::Top));
        assert!(!flags.has(ContactSide::Bottom));
    }

    #[test]
    fn with_params_revalidates() {
        let mut solver = solver_at(0.0, 0.0, Vec2::new(0.5, 0.5), SolverParams::default());

        let bad = SolverParams {
            max_slope_angle: -1.0,
            ..SolverParams::default()
        };
        assert!(solver.with_params(bad).is_err());

        let good = SolverParams {
            max_slope_angle: 60.0,
            ..SolverParams::default()
        };
        assert!(solver.with_params(good).is_ok());
        assert_relative_eq!(solver.params().max_slope_angle, 60.0);
    }
}
