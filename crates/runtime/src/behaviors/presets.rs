//! Built-in behaviors.
//!
//! The `"default"` tree is compiled into the binary so a bot can always be
//! fielded even when no behavior files ship with the map. Priorities, top
//! to bottom: fight a known enemy, keep friendly structures repaired, push
//! toward enemy structures, otherwise wander.

use behavior_tree::{Tree, TreeBuilder};

use super::leaf::BotLeaf;

/// The fallback behavior attached when a requested tree cannot be loaded.
pub fn default_tree() -> Tree<BotLeaf> {
    let mut b = TreeBuilder::new();

    let has_enemy = b.leaf(BotLeaf::HasEnemy);
    let target_enemy = b.leaf(BotLeaf::TargetEnemy);
    let fight = b.leaf(BotLeaf::Fight);
    let combat = b.sequence(vec![has_enemy, target_enemy, fight]);

    let has_damaged = b.leaf(BotLeaf::HasDamagedFriendly);
    let target_damaged = b.leaf(BotLeaf::TargetDamagedFriendly);
    let approach = b.leaf(BotLeaf::MoveToGoal);
    let repair = b.leaf(BotLeaf::Repair);
    let maintain = b.sequence(vec![has_damaged, target_damaged, approach, repair]);

    let target_structure = b.leaf(BotLeaf::TargetEnemyStructure);
    let advance = b.leaf(BotLeaf::MoveToGoal);
    let assault = b.sequence(vec![target_structure, advance]);

    let pick_spot = b.leaf(BotLeaf::Roam);
    let wander_move = b.leaf(BotLeaf::MoveToGoal);
    let wander = b.sequence(vec![pick_spot, wander_move]);

    let root = b.selector(vec![combat, maintain, assault, wander]);
    b.build(root)
}
