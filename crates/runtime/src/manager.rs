//! Bot lifecycle: slot arena, add/remove, and the per-tick driver.
//!
//! The [`BotManager`] is the explicitly constructed context object that
//! replaces process-wide bot state: it owns the fixed-capacity slot arena,
//! the name roster, and the behavior store, and it is touched only from the
//! server's simulation thread. Lifecycle errors are resolved here, at the
//! call boundary: an `add` either yields a fully connected bot holding a
//! valid tree or leaves no trace.

use std::path::PathBuf;

use bot_core::{BotConfig, ClientId, MAX_CLIENTS, NamePool, Skill, Team, Tick, WorldOracle};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::api::{Result, RuntimeError, Services, UserInfo};
use crate::behaviors::BehaviorStore;
use crate::cycle;
use crate::memory::BotMemory;

/// One occupied bot slot.
#[derive(Debug)]
struct BotSlot {
    memory: BotMemory,
    display_name: String,
    /// Name to return to the roster on removal, when `"*"` resolved one.
    reserved_name: Option<String>,
}

/// Creates, drives, and destroys bot-controlled clients.
pub struct BotManager {
    config: BotConfig,
    behavior_dir: Option<PathBuf>,
    store: BehaviorStore,
    names: NamePool,
    /// Fixed-capacity arena indexed by client slot; never resized.
    slots: Vec<Option<BotSlot>>,
    /// Removals requested mid-tick, honored after the tick's iteration.
    pending_removals: Vec<ClientId>,
    rng: StdRng,
}

impl BotManager {
    /// Creates the manager for a fresh map session.
    ///
    /// `behavior_dir` points at the map's behavior definitions; `None`
    /// restricts bots to the built-in default tree.
    pub fn new(config: BotConfig, behavior_dir: Option<PathBuf>) -> Self {
        Self {
            store: BehaviorStore::new(behavior_dir.clone()),
            behavior_dir,
            config,
            names: NamePool::new(),
            slots: (0..MAX_CLIENTS).map(|_| None).collect(),
            pending_removals: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Adds a bot and connects it like any other client.
    ///
    /// `name` may be `"*"` to pick an unused roster name for the team; an
    /// exhausted roster is tolerated and the bot joins unnamed. On any
    /// failure past slot allocation the add is fully rolled back.
    pub fn add(
        &mut self,
        name: &str,
        team: Team,
        skill: Skill,
        behavior: &str,
        services: &mut Services<'_>,
    ) -> Result<ClientId> {
        if !services.nav.mesh_loaded() {
            return Err(RuntimeError::NoNavigationData);
        }

        let Some(client) = services.session.allocate_slot() else {
            return Err(RuntimeError::NoFreeSlot);
        };

        let (display_name, reserved) = if name == "*" {
            match self.names.select(team, &mut self.rng) {
                Some(picked) => (picked.clone(), Some(picked)),
                None => (String::new(), None),
            }
        } else {
            (name.to_owned(), None)
        };

        let mut memory = BotMemory::new(team, skill);
        let entity = services.session.entity_of(client);
        services.nav.set_navmesh(entity);

        match self.store.load_or_default(behavior) {
            Ok(tree) => memory.behavior = Some(tree),
            Err(source) => {
                self.rollback(client, team, reserved, services);
                return Err(RuntimeError::BehaviorUnavailable {
                    name: behavior.to_owned(),
                    source,
                });
            }
        }

        services.session.set_user_info(
            client,
            UserInfo {
                name: display_name.clone(),
                rate: 25_000,
                snaps: 20,
                autoname: reserved.clone(),
                password: self.config.server_password.clone(),
            },
        );

        if let Err(reason) = services.session.connect(client, team) {
            self.rollback(client, team, reserved, services);
            return Err(RuntimeError::ConnectionRefused(reason));
        }

        services.session.begin(client);
        self.slots[client.index()] = Some(BotSlot {
            memory,
            display_name,
            reserved_name: reserved,
        });
        Ok(client)
    }

    fn rollback(
        &mut self,
        client: ClientId,
        team: Team,
        reserved: Option<String>,
        services: &mut Services<'_>,
    ) {
        if let Some(name) = reserved {
            self.names.release(team, &name);
        }
        services.session.drop_client(client, "failed to initialize");
        self.slots[client.index()] = None;
    }

    /// Disconnects a bot and frees its slot.
    ///
    /// A slot that is not bot-controlled is left alone with a diagnostic.
    pub fn remove(&mut self, client: ClientId, services: &mut Services<'_>) -> Result<()> {
        let occupied = self
            .slots
            .get(client.index())
            .is_some_and(|slot| slot.is_some());
        if !occupied {
            tracing::warn!("client {:?} is not a bot", client);
            return Err(RuntimeError::NotABot(client));
        }

        let slot = self.slots[client.index()].take().expect("checked above");
        if let Some(name) = &slot.reserved_name {
            self.names.release(slot.memory.team, name);
        }
        services
            .chat
            .notify(&format!("{} disconnected", slot.display_name));
        services.session.drop_client(client, "disconnected");
        Ok(())
    }

    /// Removes every bot, then clears the name roster.
    pub fn remove_all(&mut self, services: &mut Services<'_>) -> Result<()> {
        for index in 0..self.slots.len() {
            if self.slots[index].is_some() {
                let _ = self.remove(ClientId(index), services);
            }
        }
        self.clear_names()
    }

    /// Requests a removal from inside the tick loop.
    ///
    /// Safe to call while `think_all` is iterating (including on behalf of
    /// the bot currently thinking); the removal happens after the pass.
    pub fn schedule_remove(&mut self, client: ClientId) {
        if !self.pending_removals.contains(&client) {
            self.pending_removals.push(client);
        }
    }

    /// One decision cycle per connected bot, then deferred removals.
    pub fn think_all(
        &mut self,
        now: Tick,
        world: &dyn WorldOracle,
        services: &mut Services<'_>,
    ) {
        for index in 0..self.slots.len() {
            let client = ClientId(index);
            let Some(slot) = self.slots[index].as_mut() else {
                continue;
            };
            if services.session.is_playing(client) {
                cycle::think(
                    &mut slot.memory,
                    client,
                    now,
                    &self.config,
                    world,
                    services,
                    &mut self.rng,
                );
            } else {
                cycle::spectator_think(&mut slot.memory, client, services, &mut self.rng);
            }
        }

        let pending: Vec<ClientId> = self.pending_removals.drain(..).collect();
        for client in pending {
            let _ = self.remove(client, services);
        }
    }

    /// Tears the subsystem down at map end.
    ///
    /// A full shutdown (`restart == false`) removes every bot and clears the
    /// roster; a map restart keeps them. Either way the behavior store is
    /// rebuilt so the next map loads fresh trees.
    pub fn cleanup(&mut self, restart: bool, services: &mut Services<'_>) {
        if !restart {
            if let Err(err) = self.remove_all(services) {
                tracing::warn!("bot cleanup left roster names behind: {}", err);
            }
        }
        self.store = BehaviorStore::new(self.behavior_dir.clone());
    }

    /// Whether the slot currently holds a bot.
    pub fn is_bot(&self, client: ClientId) -> bool {
        self.slots
            .get(client.index())
            .is_some_and(|slot| slot.is_some())
    }

    /// Number of connected bots.
    pub fn bot_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Read access to a bot's memory, mainly for tests and diagnostics.
    pub fn memory(&self, client: ClientId) -> Option<&BotMemory> {
        self.slots
            .get(client.index())?
            .as_ref()
            .map(|slot| &slot.memory)
    }

    /// Registers roster names for a team.
    pub fn add_names<I>(&mut self, team: Team, names: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.names.add_names(team, names)
    }

    /// Clears the roster; refused while any name is reserved.
    pub fn clear_names(&mut self) -> Result<()> {
        if self.names.clear() {
            Ok(())
        } else {
            Err(RuntimeError::NamesInUse)
        }
    }

    /// Registered names and reservation flags for a team.
    pub fn names(&self, team: Team) -> impl Iterator<Item = (&str, bool)> {
        self.names.names(team)
    }

    /// Number of roster names registered for a team.
    pub fn name_count(&self, team: Team) -> usize {
        self.names.count(team)
    }
}
