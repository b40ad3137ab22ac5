//! The leaf vocabulary available to tree authors.

use behavior_tree::{Behavior, Status};
use serde::{Deserialize, Serialize};

use super::{actions, conditions};
use crate::context::BotContext;

/// A concrete perception check or action, dispatched by tag.
///
/// Condition leaves only read; action leaves may write the bot's goal,
/// enemy record, and scratch command. Every variant returns its status
/// within the tick; suspension bookkeeping belongs to the composites.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum BotLeaf {
    // ===== conditions =====
    /// A live enemy is being tracked.
    HasEnemy,
    /// Own health is below the given percentage of maximum.
    HealthBelow(u8),
    /// A damaged friendly structure is in perception range.
    HasDamagedFriendly,
    /// The last corridor update reported straight-line reachability.
    DirectPathToGoal,
    /// A goal is currently set.
    GoalIsSet,

    // ===== actions =====
    /// Makes the tracked enemy the movement goal.
    TargetEnemy,
    /// Makes the nearest damaged friendly structure the goal.
    TargetDamagedFriendly,
    /// Makes the nearest enemy structure the goal.
    TargetEnemyStructure,
    /// Picks a random reachable point as the goal.
    Roam,
    /// Walks the corridor toward the goal; `Running` until arrival.
    MoveToGoal,
    /// Engages the tracked enemy: paced aim, fire when visible, chase when
    /// not.
    Fight,
    /// Works on the damaged friendly structure the goal points at.
    Repair,
}

impl<'a> Behavior<BotContext<'a>> for BotLeaf {
    fn tick(&self, ctx: &mut BotContext<'a>) -> Status {
        match self {
            BotLeaf::HasEnemy => conditions::has_enemy(ctx),
            BotLeaf::HealthBelow(percent) => conditions::health_below(ctx, *percent),
            BotLeaf::HasDamagedFriendly => conditions::has_damaged_friendly(ctx),
            BotLeaf::DirectPathToGoal => conditions::direct_path_to_goal(ctx),
            BotLeaf::GoalIsSet => conditions::goal_is_set(ctx),
            BotLeaf::TargetEnemy => actions::target_enemy(ctx),
            BotLeaf::TargetDamagedFriendly => actions::target_damaged_friendly(ctx),
            BotLeaf::TargetEnemyStructure => actions::target_enemy_structure(ctx),
            BotLeaf::Roam => actions::roam(ctx),
            BotLeaf::MoveToGoal => actions::move_to_goal(ctx),
            BotLeaf::Fight => actions::fight(ctx),
            BotLeaf::Repair => actions::repair(ctx),
        }
    }
}
