//! Per-bot AI state.

use std::sync::Arc;

use behavior_tree::{RunningPath, Tree};
use bot_core::{
    BotCommand, EnemyMemory, EntityId, GoalTarget, Skill, Team, Tick, TrackedStructure,
};

use crate::behaviors::BotLeaf;

/// All AI state for one controlled entity.
///
/// Owned exclusively by the bot's slot for its entire connected lifetime.
/// The behavior tree is shared and immutable; only the fields here evolve
/// from tick to tick.
#[derive(Clone, Debug, Default)]
pub struct BotMemory {
    pub team: Team,
    pub skill: Skill,

    /// Shared behavior tree driving this bot. `None` only when attachment
    /// failed, in which case every think cycle is skipped with a diagnostic.
    pub behavior: Option<Arc<Tree<BotLeaf>>>,

    /// Composite nodes suspended mid-evaluation at the end of the previous
    /// tick; consulted by the evaluator to resume instead of restarting.
    pub running: RunningPath,

    /// What the bot is currently trying to reach.
    pub goal: GoalTarget,

    /// Best-known enemy with sighting timestamps.
    pub enemy: EnemyMemory,

    /// Perception cache: nearest enemy structure this tick.
    pub nearest_enemy_structure: Option<EntityId>,

    /// Perception cache: nearest damaged friendly structure and distance.
    pub damaged_friendly: TrackedStructure,

    /// The tick's synthesized input command.
    pub cmd: BotCommand,

    /// The corridor update reported straight-line reachability; movement
    /// leaves then steer at the goal instead of the corridor.
    pub direct_path_to_goal: bool,

    /// Aim pacing: next time the view may be re-aimed, and how often.
    pub next_aim_time: Tick,
    pub aim_interval_ms: u64,

    /// Team to join on the next spectator cycle, consumed once.
    pub pending_team: Option<Team>,
}

impl BotMemory {
    /// Fresh memory for a newly added bot.
    pub fn new(team: Team, skill: Skill) -> Self {
        Self {
            team,
            skill,
            aim_interval_ms: skill.aim_interval_ms(),
            pending_team: team.is_playable().then_some(team),
            ..Self::default()
        }
    }

    /// Clears everything that accumulates during play.
    ///
    /// Called on spawn/spectate transitions so the next think cycle starts
    /// from an empty run state; team, skill, and the tree handle persist.
    pub fn reset_run_state(&mut self) {
        self.running.clear();
        self.goal.clear();
        self.enemy.clear();
        self.nearest_enemy_structure = None;
        self.damaged_friendly.clear();
        self.cmd = BotCommand::default();
        self.direct_path_to_goal = false;
        self.next_aim_time = Tick::ZERO;
    }
}
