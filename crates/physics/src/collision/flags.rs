//! Content flags for collision filtering.

use serde::{Deserialize, Serialize};

/// Content flags describe what type of volume a brush is.
///
/// Used to filter ray queries - ground sensing only cares about volumes
/// that block players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ContentFlags(pub u32);

impl ContentFlags {
    /// Empty space - nothing here.
    pub const EMPTY: Self = Self(0);

    /// Solid world geometry - walls, floors, etc.
    pub const SOLID: Self = Self(1 << 0);

    /// Player clip - blocks players but nothing else.
    pub const PLAYER_CLIP: Self = Self(1 << 1);

    /// Trigger volume - activates events when entered.
    pub const TRIGGER: Self = Self(1 << 2);

    /// Standard mask for player ground sensing.
    pub const MASK_PLAYER_SOLID: Self = Self(Self::SOLID.0 | Self::PLAYER_CLIP.0);

    /// Check if these flags contain a specific flag.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check if any of the given flags are set.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }
}

impl std::ops::BitOr for ContentFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_contains_solid() {
        assert!(ContentFlags::MASK_PLAYER_SOLID.contains(ContentFlags::SOLID));
        assert!(ContentFlags::MASK_PLAYER_SOLID.intersects(ContentFlags::PLAYER_CLIP));
        assert!(!ContentFlags::MASK_PLAYER_SOLID.intersects(ContentFlags::TRIGGER));
    }
}
