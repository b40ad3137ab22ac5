use crate::entity::EntityId;
use crate::math::Vec3;
use crate::team::Team;

/// Narrows a radius query to one class of entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityFilter {
    /// Player-controlled or bot-controlled characters.
    Players,
    /// Buildings and other static structures.
    Structures,
    /// No filtering.
    All,
}

/// Read-only oracle over the game world.
///
/// Queries about entities that no longer exist return `None`/`false`; that
/// is an ordinary outcome for the decision layer, never an error.
pub trait WorldOracle: Send + Sync {
    fn position(&self, entity: EntityId) -> Option<Vec3>;
    fn health(&self, entity: EntityId) -> Option<i32>;
    fn max_health(&self, entity: EntityId) -> Option<i32>;
    fn team_of(&self, entity: EntityId) -> Option<Team>;

    /// Entities of the filtered class within `radius` of `origin`.
    fn entities_in_radius(
        &self,
        origin: Vec3,
        radius: f32,
        filter: EntityFilter,
    ) -> Vec<EntityId>;

    /// Line-of-sight between two entities.
    fn visible(&self, from: EntityId, to: EntityId) -> bool;

    /// Whether the entity carries an unspent self-heal item.
    fn self_heal_available(&self, entity: EntityId) -> bool;

    fn is_alive(&self, entity: EntityId) -> bool {
        self.health(entity).is_some_and(|h| h > 0)
    }

    /// A structure below its full health.
    fn is_damaged(&self, entity: EntityId) -> bool {
        match (self.health(entity), self.max_health(entity)) {
            (Some(health), Some(max)) => health < max,
            _ => false,
        }
    }

    /// Distance between two entities, when both still exist.
    fn distance(&self, a: EntityId, b: EntityId) -> Option<f32> {
        Some(self.position(a)?.distance(self.position(b)?))
    }
}
