/*!
2D collide-and-slide kinematic movement over static geometry.

A [`CollideAndSlideSolver`] owns a [`KinematicBody`] (an axis-aligned box)
and resolves desired per-tick displacements against an immutable
[`CollisionWorld`]: moves are split along the body's local axes, swept with
parry2d shape casts, advanced to contact minus a skin width, and the blocked
remainder is redirected along walkable surfaces or discarded at steep ones.
Each move ends with a fresh set of per-side [`CollisionFlags`].

The crate is deliberately passive: no velocity integration, no gravity, no
scheduling. Callers own the tick loop and feed displacements in.
*/

pub mod bitmask_flags;
pub mod body;
pub mod collision;
pub mod error;
pub mod flags;
pub mod layers;
pub mod solver;

pub use bitmask_flags::{BitmaskFlags, FlagBitmask};
pub use body::KinematicBody;
pub use collision::{
    CastHit, ColliderId, CollisionWorld, StaticCollider, StaticShape, Transform, Vec2,
};
pub use error::ConfigError;
pub use flags::{CollisionFlags, ContactSide};
pub use layers::LayerMask;
pub use solver::{CollideAndSlideSolver, MoveDiagnostics, SolverParams};
