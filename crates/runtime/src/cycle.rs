//! Per-bot, per-tick decision cycles.
//!
//! [`think`] runs once per spawned bot per server tick, in a strict step
//! order: drain acknowledgments, reset the scratch command (carrying the
//! one-shot nudge), refresh perception, apply reflexive overrides, refresh
//! the navigation corridor, evaluate the behavior tree, re-apply the nudge,
//! commit. [`spectator_think`] is the simpler cycle for bots that are
//! spectating or waiting in a spawn queue.

use behavior_tree::RunningPath;
use bot_core::{
    BotConfig, ClientId, EnemyMemory, EntityFilter, EntityId, GoalTarget, Tick, WorldOracle,
};
use rand::Rng;

use crate::api::{RouteTarget, Services};
use crate::context::BotContext;
use crate::memory::BotMemory;

/// One full decision cycle for a spawned bot.
pub fn think<R: Rng>(
    memory: &mut BotMemory,
    client: ClientId,
    now: Tick,
    config: &BotConfig,
    world: &dyn WorldOracle,
    services: &mut Services<'_>,
    rng: &mut R,
) {
    // 1. Acknowledgments drain unconditionally, even when the tick is
    //    skipped further down.
    services.commands.drain_acks(client);

    // 2. Neutral command; the nudge impulse is the only carry-over.
    let nudge = memory.cmd.reset_for_tick();

    let entity = services.session.entity_of(client);

    // 3. Perception caches.
    refresh_perception(memory, entity, now, config, world);

    // 4. Reflexive overrides run ahead of the tree and cannot be overridden
    //    by it.
    if world
        .health(entity)
        .is_some_and(|health| health < config.self_heal_health)
        && world.self_heal_available(entity)
    {
        services.inventory.use_self_heal(entity);
    }
    if config.infinite_funds {
        services.inventory.grant_max_funds(entity);
    }
    services.session.set_ping(client, 50 + rng.gen_range(0..50));

    // 5. Corridor refresh; the corridor itself is owned by the navigation
    //    service.
    if memory.goal.is_set() {
        let target = match memory.goal {
            GoalTarget::Entity(id) => RouteTarget::Entity(id),
            GoalTarget::Point(point) => RouteTarget::Point(point),
            GoalTarget::None => unreachable!("goal checked above"),
        };
        let corridor = services.nav.update_corridor(entity, target);
        memory.direct_path_to_goal = corridor.direct;
    }

    // 6. Tree evaluation.
    let Some(tree) = memory.behavior.clone() else {
        tracing::error!("bot {:?} has no behavior tree, skipping tick", client);
        return;
    };

    let mut path = memory.running;
    let result = {
        let mut ctx = BotContext {
            entity,
            now,
            config,
            memory: &mut *memory,
            world,
            nav: &mut *services.nav,
        };
        tree.evaluate(&mut ctx, &mut path)
    };
    match result {
        Ok(_status) => memory.running = path,
        Err(defect) => {
            tracing::error!("bot {:?} behavior tree defect, skipping tick: {}", client, defect);
            memory.running = RunningPath::new();
            return;
        }
    }

    // 7. The nudge survives even if the tree chose to stand still.
    memory.cmd.apply_nudge(nudge);

    // 8. Commit the synthesized input for this tick.
    services.commands.commit(client, &memory.cmd);
}

/// The reduced cycle while spectating or queued to spawn.
pub fn spectator_think<R: Rng>(
    memory: &mut BotMemory,
    client: ClientId,
    services: &mut Services<'_>,
    rng: &mut R,
) {
    services.session.set_ping(client, 50 + rng.gen_range(0..50));

    // Acknowledgments drain here too.
    services.commands.drain_acks(client);

    if services.queues.is_queued(client) {
        // Queued and happy, except a bot must never starve human players
        // waiting behind it.
        if services.queues.humans_behind(client) {
            services.queues.rotate_to_back(client);
        }
        return;
    }

    // About to (re)join: the next think cycle starts from an empty run
    // state.
    memory.reset_run_state();

    if let Some(team) = memory.pending_team.take() {
        services.session.change_team(client, team);
    } else {
        services.queues.enqueue(client, memory.team);
    }
}

/// Refreshes the per-tick perception caches in bot memory.
///
/// Enemy sighting timestamps move only on (dis)appearance transitions; a
/// steady-state tick rewrites neither.
fn refresh_perception(
    memory: &mut BotMemory,
    entity: EntityId,
    now: Tick,
    config: &BotConfig,
    world: &dyn WorldOracle,
) {
    let Some(origin) = world.position(entity) else {
        return;
    };

    // Drop an enemy that died or has been lost for too long.
    if let Some(enemy) = memory.enemy.entity {
        if !world.is_alive(enemy) {
            memory.enemy.clear();
        } else {
            let visible = world.visible(entity, enemy);
            if visible && !memory.enemy.in_sight {
                memory.enemy.in_sight = true;
            } else if !visible && memory.enemy.in_sight {
                memory.enemy.in_sight = false;
                memory.enemy.last_seen = now;
            }
            if !visible && now.since(memory.enemy.last_seen) > config.enemy_forget_ms {
                memory.enemy.clear();
            }
        }
    }

    // Adopt the nearest visible live enemy when none is tracked.
    if memory.enemy.entity.is_none() {
        let mut best: Option<(EntityId, f32)> = None;
        for other in world.entities_in_radius(origin, config.perception_range, EntityFilter::Players)
        {
            if other == entity
                || !world
                    .team_of(other)
                    .is_some_and(|team| memory.team.is_enemy_of(team))
                || !world.is_alive(other)
                || !world.visible(entity, other)
            {
                continue;
            }
            let Some(position) = world.position(other) else {
                continue;
            };
            let distance = origin.distance(position);
            if best.is_none_or(|(_, nearest)| distance < nearest) {
                best = Some((other, distance));
            }
        }
        if let Some((enemy, _)) = best {
            memory.enemy = EnemyMemory {
                entity: Some(enemy),
                found_at: now,
                last_seen: now,
                in_sight: true,
            };
        }
    }

    // Structure caches.
    let mut nearest_enemy: Option<(EntityId, f32)> = None;
    let mut nearest_damaged: Option<(EntityId, f32)> = None;
    for structure in
        world.entities_in_radius(origin, config.structure_scan_range, EntityFilter::Structures)
    {
        let Some(team) = world.team_of(structure) else {
            continue;
        };
        let Some(position) = world.position(structure) else {
            continue;
        };
        let distance = origin.distance(position);

        if memory.team.is_enemy_of(team) && world.is_alive(structure) {
            if nearest_enemy.is_none_or(|(_, nearest)| distance < nearest) {
                nearest_enemy = Some((structure, distance));
            }
        } else if team == memory.team
            && world.is_alive(structure)
            && world.is_damaged(structure)
            && nearest_damaged.is_none_or(|(_, nearest)| distance < nearest)
        {
            nearest_damaged = Some((structure, distance));
        }
    }

    memory.nearest_enemy_structure = nearest_enemy.map(|(structure, _)| structure);
    memory.damaged_friendly.entity = nearest_damaged.map(|(structure, _)| structure);
    memory.damaged_friendly.distance = nearest_damaged.map_or(0.0, |(_, distance)| distance);
}
