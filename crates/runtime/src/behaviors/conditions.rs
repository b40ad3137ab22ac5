//! Condition leaves: read-only perception checks.
//!
//! Conditions answer yes/no against the bot's memory and the world oracle.
//! An unmet condition is `Failure`: ordinary control flow for the parent
//! composite, never an error.

use behavior_tree::Status;

use crate::context::BotContext;

fn status(ok: bool) -> Status {
    if ok { Status::Success } else { Status::Failure }
}

pub(super) fn has_enemy(ctx: &mut BotContext) -> Status {
    status(
        ctx.memory
            .enemy
            .entity
            .is_some_and(|enemy| ctx.world.is_alive(enemy)),
    )
}

pub(super) fn health_below(ctx: &mut BotContext, percent: u8) -> Status {
    let (Some(health), Some(max)) = (
        ctx.world.health(ctx.entity),
        ctx.world.max_health(ctx.entity),
    ) else {
        return Status::Failure;
    };
    status(health * 100 < max * i32::from(percent))
}

pub(super) fn has_damaged_friendly(ctx: &mut BotContext) -> Status {
    status(ctx.memory.damaged_friendly.entity.is_some())
}

pub(super) fn direct_path_to_goal(ctx: &mut BotContext) -> Status {
    status(ctx.memory.direct_path_to_goal)
}

pub(super) fn goal_is_set(ctx: &mut BotContext) -> Status {
    status(ctx.memory.goal.is_set())
}
