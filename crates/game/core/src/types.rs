//! Identifiers shared by every subsystem.

use std::fmt;

/// World-space position. Vertical axis is `y`.
pub type Position = glam::Vec3;

/// Generation-checked handle to a live entity.
///
/// The `index` slot may be reused after an entity is destroyed; the
/// `generation` distinguishes the new occupant from stale references, so
/// validity checks never depend on object identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId {
    pub index: u32,
    pub generation: u32,
}

impl EntityId {
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// First-generation handle for `index`.
    pub const fn first(index: u32) -> Self {
        Self::new(index, 0)
    }

    /// Handle for the next occupant of the same slot.
    #[must_use]
    pub const fn next_generation(self) -> Self {
        Self::new(self.index, self.generation.wrapping_add(1))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// Reference to an item definition (weapons, armor, trinkets).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ItemRef(pub u32);

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item:{}", self.0)
    }
}

/// Stat identifier. Games assign their own ids; only [`StatId::LEVEL`] is reserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct StatId(pub u16);

impl StatId {
    /// Character level, read by level-scaled formulas.
    pub const LEVEL: Self = Self(0);
}

impl fmt::Display for StatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stat:{}", self.0)
    }
}
