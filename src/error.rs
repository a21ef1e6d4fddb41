//! Error types for solver and body construction.
//!
//! All of these are fatal configuration errors raised at construction time;
//! a malformed solver cannot safely operate, so nothing here is recoverable.
//! Runtime outcomes (cast misses, cap exhaustion) are ordinary values, never
//! errors.

use thiserror::Error;

/// Fatal configuration errors.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Iteration caps must allow at least one pass.
    #[error("iteration caps must be strictly positive (move: {move_cap}, overlap: {overlap_cap})")]
    NonPositiveIterationCap { move_cap: u32, overlap_cap: u32 },

    /// Bounciness is a reflected fraction.
    #[error("bounciness must be within [0, 1], got {0}")]
    BouncinessOutOfRange(f32),

    /// Friction may damp or boost tangential motion, but only within [-1, 1].
    #[error("friction must be within [-1, 1], got {0}")]
    FrictionOutOfRange(f32),

    /// The skin width cannot be negative.
    #[error("contact offset must be non-negative, got {0}")]
    NegativeContactOffset(f32),

    /// Slope classification is defined against [0, 90] degrees from up.
    #[error("max slope angle must be within [0, 90] degrees, got {0}")]
    SlopeAngleOutOfRange(f32),

    /// A body needs a real box; zero or negative extents cannot collide.
    #[error("body extents must be strictly positive, got ({0}, {1})")]
    DegenerateExtents(f32, f32),
}

/// Result type for construction-time operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
