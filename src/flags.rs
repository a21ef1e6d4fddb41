//! Per-move contact flags.
//!
//! The solver recomputes these fully on every move; nothing carries over
//! between ticks except what the caller retains.

use crate::bitmask_flags::BitmaskFlags;
use crate::define_bitmask_flags;

define_bitmask_flags!(ContactSide, u8, {
    /// Touching geometry along the body's forward axis.
    Front,
    /// Touching geometry opposite the body's forward axis.
    Back,
    /// Touching geometry along the body's up axis.
    Top,
    /// Touching geometry opposite the body's up axis.
    Bottom,
    /// At least one touched surface is steeper than the slope threshold.
    SteepSlope,
    /// At least one touched surface is sloped but still walkable.
    SlightSlope,
});

/// Bitmask of [`ContactSide`] values describing how a move ended.
pub type CollisionFlags = BitmaskFlags<u8>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_occupy_distinct_bits() {
        let sides = [
            ContactSide::Front,
            ContactSide::Back,
            ContactSide::Top,
            ContactSide::Bottom,
            ContactSide::SteepSlope,
            ContactSide::SlightSlope,
        ];
        for (i, a) in sides.iter().enumerate() {
            for b in sides.iter().skip(i + 1) {
                let mut flags = CollisionFlags::default();
                flags.add(*a);
                assert!(!flags.has(*b));
            }
        }
    }

    #[test]
    fn grounded_check_reads_naturally() {
        let mut flags = CollisionFlags::default();
        flags.add(ContactSide::Bottom);
        flags.add(ContactSide::SlightSlope);

        assert!(flags.has(ContactSide::Bottom));
        assert!(flags.has_any(&[ContactSide::SteepSlope, ContactSide::SlightSlope]));
        assert!(!flags.has(ContactSide::SteepSlope));
    }
}
