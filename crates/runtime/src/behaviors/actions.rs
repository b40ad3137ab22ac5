//! Action leaves: goal selection, movement, and combat.
//!
//! Actions write into the bot's memory (the goal, the enemy record, and
//! the scratch command) and consult the navigation service for corridor
//! following. Multi-tick actions return `Running`; the enclosing composites
//! remember where to resume.

use behavior_tree::Status;
use bot_core::{Buttons, GoalTarget};

use crate::context::BotContext;

pub(super) fn target_enemy(ctx: &mut BotContext) -> Status {
    match ctx.memory.enemy.entity {
        Some(enemy) if ctx.world.is_alive(enemy) => {
            ctx.memory.goal = GoalTarget::Entity(enemy);
            Status::Success
        }
        _ => Status::Failure,
    }
}

pub(super) fn target_damaged_friendly(ctx: &mut BotContext) -> Status {
    match ctx.memory.damaged_friendly.entity {
        Some(structure) => {
            ctx.memory.goal = GoalTarget::Entity(structure);
            Status::Success
        }
        None => Status::Failure,
    }
}

pub(super) fn target_enemy_structure(ctx: &mut BotContext) -> Status {
    match ctx.memory.nearest_enemy_structure {
        Some(structure) => {
            ctx.memory.goal = GoalTarget::Entity(structure);
            Status::Success
        }
        None => Status::Failure,
    }
}

pub(super) fn roam(ctx: &mut BotContext) -> Status {
    match ctx
        .nav
        .random_point_near(ctx.entity, ctx.config.roam_radius)
    {
        Some(point) => {
            ctx.memory.goal = GoalTarget::Point(point);
            Status::Success
        }
        None => Status::Failure,
    }
}

pub(super) fn move_to_goal(ctx: &mut BotContext) -> Status {
    let Some(origin) = ctx.own_position() else {
        return Status::Failure;
    };
    let Some(target) = ctx.goal_position() else {
        // An entity goal that no longer exists is dropped here.
        ctx.memory.goal.clear();
        return Status::Failure;
    };

    if origin.distance(target) <= ctx.config.goal_radius {
        return Status::Success;
    }

    let waypoint = if ctx.memory.direct_path_to_goal {
        Some(target)
    } else {
        ctx.nav.next_waypoint(ctx.entity)
    };
    let Some(waypoint) = waypoint else {
        return Status::Failure;
    };

    ctx.memory.cmd.look_at(origin, waypoint);
    ctx.memory.cmd.forward = 127;
    Status::Running
}

pub(super) fn fight(ctx: &mut BotContext) -> Status {
    let Some(enemy) = ctx.memory.enemy.entity else {
        return Status::Failure;
    };

    if !ctx.world.is_alive(enemy) {
        // Enemy down; perception will pick the next one.
        ctx.memory.enemy.clear();
        ctx.memory.goal.clear();
        return Status::Success;
    }

    // Aim corrections are paced by skill, not every tick.
    if ctx.now >= ctx.memory.next_aim_time {
        if let (Some(eye), Some(target)) = (ctx.own_position(), ctx.world.position(enemy)) {
            ctx.memory.cmd.look_at(eye, target);
        }
        ctx.memory.next_aim_time = ctx.now + ctx.memory.aim_interval_ms;
    }

    if ctx.world.visible(ctx.entity, enemy) {
        ctx.memory.cmd.buttons.insert(Buttons::ATTACK);
    } else if let (Some(origin), Some(waypoint)) =
        (ctx.own_position(), ctx.nav.next_waypoint(ctx.entity))
    {
        // Lost sight: close the distance along the corridor.
        ctx.memory.cmd.look_at(origin, waypoint);
        ctx.memory.cmd.forward = 127;
    }

    Status::Running
}

pub(super) fn repair(ctx: &mut BotContext) -> Status {
    let Some(structure) = ctx.memory.damaged_friendly.entity else {
        return Status::Failure;
    };

    if !ctx.world.is_damaged(structure) {
        return Status::Success;
    }

    let Some(distance) = ctx.world.distance(ctx.entity, structure) else {
        return Status::Failure;
    };
    if distance > ctx.config.repair_range {
        return Status::Failure;
    }

    if let (Some(origin), Some(target)) = (
        ctx.own_position(),
        ctx.world.position(structure),
    ) {
        ctx.memory.cmd.look_at(origin, target);
    }
    ctx.memory.cmd.buttons.insert(Buttons::USE);
    Status::Running
}
