//! Lifecycle manager end-to-end: add, remove, rollback, rosters.

mod common;

use std::io::Write;

use bot_core::{BotConfig, ClientId, Skill, Team, Tick};
use runtime::{BotManager, RuntimeError};

use common::{Harness, MockEntity, MockWorld};

fn manager() -> BotManager {
    BotManager::new(BotConfig::default(), None)
}

fn world_with_entities(count: u32) -> MockWorld {
    let mut world = MockWorld::default();
    for id in 0..count {
        world.insert(
            id,
            MockEntity {
                team: Team::Aliens,
                ..MockEntity::default()
            },
        );
    }
    world
}

#[test]
fn add_yields_a_fully_connected_bot() {
    let mut manager = manager();
    let mut harness = Harness::new();
    manager.add_names(Team::Aliens, ["Foo", "Bar"]);

    let client = manager
        .add("*", Team::Aliens, Skill::new(5), "default", &mut harness.services())
        .expect("bot added");

    assert!(manager.is_bot(client));
    assert!(harness.session.connected.contains(&client.index()));
    assert!(harness.session.begun.contains(&client.index()));
    assert_eq!(harness.nav.meshes_set.len(), 1);

    let info = &harness.session.infos[&client.index()];
    assert!(info.name == "Foo" || info.name == "Bar");
    assert_eq!(info.autoname.as_deref(), Some(info.name.as_str()));
    assert_eq!(info.rate, 25_000);
    assert_eq!(info.snaps, 20);

    let memory = manager.memory(client).unwrap();
    assert!(memory.behavior.is_some()); // valid tree attached
    assert_eq!(memory.team, Team::Aliens);
}

#[test]
fn add_reports_missing_navigation_data() {
    let mut manager = manager();
    let mut harness = Harness::new();
    harness.nav.loaded = false;

    let err = manager
        .add("Eve", Team::Aliens, Skill::new(5), "default", &mut harness.services())
        .unwrap_err();

    assert!(matches!(err, RuntimeError::NoNavigationData));
    assert!(harness.session.connected.is_empty());
    assert_eq!(manager.bot_count(), 0);
}

#[test]
fn add_reports_slot_exhaustion() {
    let mut manager = manager();
    let mut harness = Harness::new();
    harness.session.free_slots.clear();

    let err = manager
        .add("Eve", Team::Aliens, Skill::new(5), "default", &mut harness.services())
        .unwrap_err();

    assert!(matches!(err, RuntimeError::NoFreeSlot));
    assert_eq!(manager.bot_count(), 0);
}

#[test]
fn refused_connection_rolls_the_add_back_completely() {
    let mut manager = manager();
    let mut harness = Harness::new();
    harness.session.refuse = Some("team is full".to_owned());
    manager.add_names(Team::Aliens, ["Foo"]);

    let err = manager
        .add("*", Team::Aliens, Skill::new(5), "default", &mut harness.services())
        .unwrap_err();

    assert!(matches!(err, RuntimeError::ConnectionRefused(_)));
    // No trace of a partial bot: slot freed, client dropped, name released.
    assert_eq!(manager.bot_count(), 0);
    assert_eq!(harness.session.dropped.len(), 1);
    assert!(manager.clear_names().is_ok());
}

#[test]
fn broken_default_behavior_fails_the_add() {
    let dir = tempfile::tempdir().unwrap();
    let mut file = std::fs::File::create(dir.path().join("default.ron")).unwrap();
    file.write_all(b"Selector([").unwrap();

    let mut manager = BotManager::new(BotConfig::default(), Some(dir.path().to_owned()));
    let mut harness = Harness::new();

    let err = manager
        .add("Eve", Team::Aliens, Skill::new(5), "custom", &mut harness.services())
        .unwrap_err();

    assert!(matches!(err, RuntimeError::BehaviorUnavailable { .. }));
    assert_eq!(manager.bot_count(), 0);
    assert_eq!(harness.session.dropped.len(), 1); // rolled back
}

#[test]
fn remove_validates_the_slot_is_a_bot() {
    let mut manager = manager();
    let mut harness = Harness::new();

    let err = manager
        .remove(ClientId(3), &mut harness.services())
        .unwrap_err();

    assert!(matches!(err, RuntimeError::NotABot(ClientId(3))));
    assert!(harness.session.dropped.is_empty());
}

#[test]
fn remove_releases_the_reserved_name() {
    let mut manager = manager();
    let mut harness = Harness::new();
    manager.add_names(Team::Aliens, ["Foo"]);

    let client = manager
        .add("*", Team::Aliens, Skill::new(5), "default", &mut harness.services())
        .unwrap();

    // Reserved while the bot lives.
    assert!(matches!(
        manager.clear_names().unwrap_err(),
        RuntimeError::NamesInUse
    ));

    manager.remove(client, &mut harness.services()).unwrap();

    assert!(!manager.is_bot(client));
    assert!(harness.chat.messages.iter().any(|m| m.contains("Foo")));
    assert!(harness.session.dropped.iter().any(|(id, _)| *id == client.index()));
    assert!(manager.clear_names().is_ok());
}

#[test]
fn remove_all_removes_bots_then_clears_the_roster() {
    let mut manager = manager();
    let mut harness = Harness::new();
    manager.add_names(Team::Aliens, ["Foo", "Bar"]);

    manager
        .add("*", Team::Aliens, Skill::new(5), "default", &mut harness.services())
        .unwrap();
    manager
        .add("*", Team::Aliens, Skill::new(5), "default", &mut harness.services())
        .unwrap();
    assert_eq!(manager.bot_count(), 2);

    manager.remove_all(&mut harness.services()).unwrap();

    assert_eq!(manager.bot_count(), 0);
    assert_eq!(manager.name_count(Team::Aliens), 0); // storage released
}

#[test]
fn mid_tick_removal_is_deferred_until_after_the_pass() {
    let world = world_with_entities(2);
    let mut manager = manager();
    let mut harness = Harness::new();

    let client = manager
        .add("Eve", Team::Aliens, Skill::new(5), "default", &mut harness.services())
        .unwrap();
    harness.session.playing.insert(client.index());

    manager.schedule_remove(client);
    manager.think_all(Tick(1000), &world, &mut harness.services());

    // The bot still thought this tick, then the removal was honored.
    assert_eq!(harness.commands.committed.len(), 1);
    assert!(!manager.is_bot(client));
}

#[test]
fn think_all_routes_playing_and_spectating_bots() {
    let world = world_with_entities(2);
    let mut manager = manager();
    let mut harness = Harness::new();

    let playing = manager
        .add("Eve", Team::Aliens, Skill::new(5), "default", &mut harness.services())
        .unwrap();
    let waiting = manager
        .add("Mal", Team::Aliens, Skill::new(5), "default", &mut harness.services())
        .unwrap();
    harness.session.playing.insert(playing.index());

    manager.think_all(Tick(1000), &world, &mut harness.services());

    // The spawned bot committed input; the waiting one went through the
    // spectator cycle and consumed its pending team change.
    assert_eq!(harness.commands.committed.len(), 1);
    assert_eq!(harness.commands.committed[0].0, playing.index());
    assert_eq!(
        harness.session.team_changes,
        vec![(waiting.index(), Team::Aliens)]
    );
    // Acknowledgments drained for both.
    assert_eq!(harness.commands.drains.get(&playing.index()), Some(&1));
    assert_eq!(harness.commands.drains.get(&waiting.index()), Some(&1));
}
