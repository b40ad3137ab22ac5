//! Goal and perception tracking records.

use crate::entity::EntityId;
use crate::math::Vec3;
use crate::time::Tick;

/// What the bot is currently trying to reach.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GoalTarget {
    /// No goal; the navigation corridor is not refreshed.
    #[default]
    None,
    /// A live entity; its current position is re-resolved every tick.
    Entity(EntityId),
    /// A fixed point in the world.
    Point(Vec3),
}

impl GoalTarget {
    #[inline]
    pub fn is_set(&self) -> bool {
        !matches!(self, GoalTarget::None)
    }

    /// The targeted entity, when the goal is an entity.
    pub fn entity(&self) -> Option<EntityId> {
        match self {
            GoalTarget::Entity(id) => Some(*id),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        *self = GoalTarget::None;
    }
}

/// Best-known enemy with sighting timestamps.
///
/// `found_at` is written when the enemy first appears, `last_seen` when it
/// drops out of sight; steady-state ticks rewrite neither. `in_sight`
/// carries the visibility from the previous tick so those transitions can
/// be detected.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EnemyMemory {
    pub entity: Option<EntityId>,
    pub found_at: Tick,
    pub last_seen: Tick,
    pub in_sight: bool,
}

impl EnemyMemory {
    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.entity.is_some()
    }

    pub fn clear(&mut self) {
        *self = EnemyMemory::default();
    }
}

/// Cached nearest-structure lookup with its distance.
///
/// When no structure qualifies the entity is `None` and the distance zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackedStructure {
    pub entity: Option<EntityId>,
    pub distance: f32,
}

impl TrackedStructure {
    pub fn clear(&mut self) {
        *self = TrackedStructure::default();
    }
}
