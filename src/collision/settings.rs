/*!
Solver and tolerance defaults.

These constants centralize the parameters used by the collide-and-slide
solver and the body's contact probing. Keeping them together makes tuning
easier and helps ensure deterministic behavior across platforms.

Notes
- Distances are in meters, angles in degrees.
- Favor practical world-space tolerances over machine epsilon for robust
  behavior.
- These are sensible defaults; per-actor customization goes through
  [`SolverParams`](crate::SolverParams).
*/

/// Separation kept from surfaces when advancing to a contact (meters).
/// Too large creates visible gaps; too small risks jitter and tunneling.
pub const DEFAULT_CONTACT_OFFSET: f32 = 0.04;

/// Maximum number of linear correction steps per axis-decomposed move.
/// Higher values help with tight corners at the cost of more queries.
pub const DEFAULT_MAX_MOVE_ITERATIONS: u32 = 10;

/// Maximum number of depenetration passes after each resolved hit.
pub const DEFAULT_MAX_OVERLAP_ITERATIONS: u32 = 2;

/// Default fraction of normal-component velocity reflected on impact.
/// Zero yields the standard "slide along surface" response.
pub const DEFAULT_BOUNCINESS: f32 = 0.0;

/// Default damping of tangential-component velocity on impact.
/// Zero passes the tangential component through untouched.
pub const DEFAULT_FRICTION: f32 = 0.0;

/// Default threshold separating walkable from too-steep surfaces (degrees
/// between the surface normal and the body's up axis).
pub const DEFAULT_MAX_SLOPE_ANGLE: f32 = 45.0;

/// Gravity magnitude in meters per second squared (positive value).
/// Informational: consumed by callers integrating velocity, never applied
/// by the solver itself.
pub const GRAVITY_MPS2: f32 = 9.81;

/// Practical small distance for comparisons (meters).
pub const DIST_EPS: f32 = 1.0e-6;

/// Minimum squared length accepted when normalizing response directions.
/// Anything below collapses to the zero vector instead of amplifying noise.
pub const MIN_NORMAL_SQ: f32 = 1.0e-12;

/// Extra probe distance added to the skin width when testing per-side
/// contacts (meters). A body that settled exactly at skin distance from a
/// surface would otherwise sit on the knife edge of its own probe range.
pub const MIN_CONTACT_PROBE: f32 = 1.0e-4;

/// Angle (degrees) below which a touched surface counts as flat rather
/// than slightly sloped.
pub const FLAT_ANGLE_EPS: f32 = 0.5;
