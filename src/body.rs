//! Kinematic body: pose, box shape, and collision queries.
//!
//! The body is the single source of truth for an actor's pose and the only
//! component that issues collision queries or applies position changes. It
//! performs no collision *resolution* itself; the solver decides which moves
//! are safe and drives `move_by`.

use parry2d::shape as pshape;

use crate::collision::broad;
use crate::collision::narrow_phase;
use crate::collision::settings::{DEFAULT_CONTACT_OFFSET, FLAT_ANGLE_EPS, MIN_CONTACT_PROBE};
use crate::collision::types::{CastHit, ColliderId, Iso, Vec2};
use crate::collision::world::CollisionWorld;
use crate::error::{ConfigError, Result};
use crate::flags::{CollisionFlags, ContactSide};
use crate::layers::LayerMask;

/// An upright oriented box owned by a single actor.
///
/// `forward` and `up` are unit-length and mutually orthogonal at all times:
/// they start as the world axes and are only ever negated by [`flip`], so the
/// box never rotates out of axis alignment.
///
/// [`flip`]: KinematicBody::flip
#[derive(Clone, Copy, Debug)]
pub struct KinematicBody {
    position: Vec2,
    forward: Vec2,
    up: Vec2,
    extents: Vec2,
    skin_width: f32,
    previous_position: Vec2,
}

impl KinematicBody {
    /// Construct a body centered at `position` with half-extents `extents`.
    ///
    /// Fails fast on a degenerate shape: a solver built over a zero-area box
    /// cannot produce meaningful casts.
    pub fn new(position: Vec2, extents: Vec2) -> Result<Self> {
        if !(extents.x > 0.0 && extents.y > 0.0) {
            return Err(ConfigError::DegenerateExtents(extents.x, extents.y));
        }
        Ok(Self {
            position,
            forward: Vec2::new(1.0, 0.0),
            up: Vec2::new(0.0, 1.0),
            extents,
            skin_width: DEFAULT_CONTACT_OFFSET,
            previous_position: position,
        })
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn forward(&self) -> Vec2 {
        self.forward
    }

    #[inline]
    pub fn up(&self) -> Vec2 {
        self.up
    }

    #[inline]
    pub fn extents(&self) -> Vec2 {
        self.extents
    }

    #[inline]
    pub fn skin_width(&self) -> f32 {
        self.skin_width
    }

    /// Mirror of the solver's contact offset; the solver sets this at the
    /// start of every move.
    #[inline]
    pub fn set_skin_width(&mut self, skin_width: f32) {
        self.skin_width = skin_width.max(0.0);
    }

    /// Translate by `delta` unconditionally.
    ///
    /// No collision checking happens here; the caller is responsible for
    /// ensuring `delta` is already collision-safe for this step.
    #[inline]
    pub fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Reorient by flipping the sign of the chosen local axes.
    ///
    /// A horizontal flip negates `forward`, a vertical flip negates `up`
    /// (a 180° rotation about the perpendicular axis). Position is untouched
    /// and the axes stay unit-length and orthogonal.
    pub fn flip(&mut self, horizontal: bool, vertical: bool) {
        if horizontal {
            self.forward = -self.forward;
        }
        if vertical {
            self.up = -self.up;
        }
    }

    /// Sweep the body's box along `delta` and collect every intersection with
    /// geometry matching `mask` into the caller-owned scratch buffer.
    ///
    /// The buffer is cleared first; returns `true` if anything was hit.
    /// Results are valid only until the next cast refills the buffer.
    pub fn cast_aabb(
        &self,
        world: &CollisionWorld,
        delta: Vec2,
        mask: LayerMask,
        hits: &mut Vec<CastHit>,
    ) -> bool {
        hits.clear();
        if delta == Vec2::zeros() {
            return false;
        }

        let moving_box = pshape::Cuboid::new(self.extents);
        let box_iso: Iso = Iso::translation(self.position.x, self.position.y);
        let len = delta.norm();

        // Planes are infinite and always tested; they are not in the accel.
        for &idx in &world.accel().plane_indices {
            let collider = &world.colliders()[idx];
            if !collider.layers.intersects(mask) {
                continue;
            }
            if let Some(hit) = narrow_phase::cast_box_against_static(
                box_iso,
                &moving_box,
                delta,
                1.0,
                &collider.shape,
            ) {
                hits.push(CastHit {
                    point: hit.point,
                    normal: hit.normal,
                    distance: hit.fraction * len,
                    collider: ColliderId(idx),
                });
            }
        }

        // Finite shapes come from the broad-phase candidate list.
        let swept = broad::swept_box_aabb(self.extents, self.position, delta, self.skin_width);
        for idx in broad::query_candidates(world.accel(), &swept) {
            let collider = &world.colliders()[idx];
            if !collider.layers.intersects(mask) {
                continue;
            }
            if let Some(hit) = narrow_phase::cast_box_against_static(
                box_iso,
                &moving_box,
                delta,
                1.0,
                &collider.shape,
            ) {
                hits.push(CastHit {
                    point: hit.point,
                    normal: hit.normal,
                    distance: hit.fraction * len,
                    collider: ColliderId(idx),
                });
            }
        }

        !hits.is_empty()
    }

    /// Determine which sides of the body are touching geometry within
    /// `skin_width`, and classify touched surfaces against `max_slope_angle`
    /// (degrees from the up axis; strictly greater counts as steep).
    ///
    /// Does not mutate the body. The probe extends slightly beyond the skin
    /// so a body that settled exactly at skin distance still reports contact.
    pub fn contact_flags(
        &self,
        world: &CollisionWorld,
        skin_width: f32,
        max_slope_angle: f32,
        mask: LayerMask,
    ) -> CollisionFlags {
        let mut flags = CollisionFlags::default();
        let probe_distance = skin_width.max(0.0) + MIN_CONTACT_PROBE;
        let mut probe_hits: Vec<CastHit> = Vec::new();

        let sides = [
            (ContactSide::Front, self.forward),
            (ContactSide::Back, -self.forward),
            (ContactSide::Top, self.up),
            (ContactSide::Bottom, -self.up),
        ];

        for (side, dir) in sides {
            if self.cast_aabb(world, dir * probe_distance, mask, &mut probe_hits) {
                flags.add(side);
                for hit in &probe_hits {
                    let angle = self.up.angle(&hit.normal).to_degrees();
                    if angle > max_slope_angle {
                        flags.add(ContactSide::SteepSlope);
                    } else if angle > FLAT_ANGLE_EPS {
                        flags.add(ContactSide::SlightSlope);
                    }
                }
            }
        }

        flags
    }

    /// Minimum-translation overlap between the body and one specific
    /// collider.
    ///
    /// Returns `None` when separated; otherwise the vector that resolves the
    /// overlap when applied through [`move_by`](Self::move_by).
    pub fn compute_overlap(&self, world: &CollisionWorld, collider: ColliderId) -> Option<Vec2> {
        let collider = world.get(collider)?;
        let moving_box = pshape::Cuboid::new(self.extents);
        let box_iso: Iso = Iso::translation(self.position.x, self.position.y);
        narrow_phase::overlap_box_with_static(box_iso, &moving_box, &collider.shape)
    }

    /// Record the frame's start/end pair for presentation interpolation.
    ///
    /// Purely a rendering concern; the physical position is already `target`.
    #[inline]
    pub fn interpolated_move_to(&mut self, start: Vec2, target: Vec2) {
        self.previous_position = start;
        self.position = target;
    }

    /// Renderer-facing position blended between the last frame pair.
    ///
    /// `alpha` is the fraction of the fixed timestep elapsed since the last
    /// tick, clamped to [0, 1].
    #[inline]
    pub fn render_position(&self, alpha: f32) -> Vec2 {
        self.previous_position
            .lerp(&self.position, alpha.clamp(0.0, 1.0))
    }
}
