//! Evaluation context handed to behavior leaves.

use bot_core::{BotConfig, EntityId, GoalTarget, Tick, Vec3, WorldOracle};

use crate::api::NavService;
use crate::memory::BotMemory;

/// Everything one leaf tick may read or write.
///
/// Leaves mutate the bot's memory (goal, enemy record, scratch command) and
/// query the world oracle and navigation service; the shared tree is not
/// reachable from here and cannot be touched.
///
/// # Lifetime
///
/// Borrowed for the duration of a single `Tree::evaluate` call inside the
/// decision cycle; evaluation is synchronous, so nothing outlives the tick.
pub struct BotContext<'a> {
    /// Entity controlled by the bot.
    pub entity: EntityId,
    /// Server clock for this tick.
    pub now: Tick,
    pub config: &'a BotConfig,
    pub memory: &'a mut BotMemory,
    pub world: &'a dyn WorldOracle,
    pub nav: &'a mut dyn NavService,
}

impl BotContext<'_> {
    /// The bot's own position, when its body still exists.
    pub fn own_position(&self) -> Option<Vec3> {
        self.world.position(self.entity)
    }

    /// Current position of the goal, re-resolving entity goals every tick.
    pub fn goal_position(&self) -> Option<Vec3> {
        match self.memory.goal {
            GoalTarget::None => None,
            GoalTarget::Entity(id) => self.world.position(id),
            GoalTarget::Point(point) => Some(point),
        }
    }
}
