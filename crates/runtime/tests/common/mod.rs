//! Shared mock world and services for integration tests.

#![allow(dead_code)] // each test binary exercises a subset of the harness

use std::collections::{HashMap, HashSet};

use bot_core::{BotCommand, ClientId, EntityFilter, EntityId, Team, Vec3, WorldOracle};
use runtime::{
    ChatChannel, CommandChannel, CorridorState, InventoryService, NavService, RouteTarget,
    Services, SessionService, SpawnQueueService, UserInfo,
};

// ============================================================================
// World
// ============================================================================

#[derive(Clone, Debug)]
pub struct MockEntity {
    pub pos: Vec3,
    pub health: i32,
    pub max_health: i32,
    pub team: Team,
    pub structure: bool,
    pub visible: bool,
    pub self_heal: bool,
}

impl Default for MockEntity {
    fn default() -> Self {
        Self {
            pos: Vec3::ZERO,
            health: 100,
            max_health: 100,
            team: Team::None,
            structure: false,
            visible: true,
            self_heal: false,
        }
    }
}

#[derive(Default)]
pub struct MockWorld {
    pub entities: HashMap<u32, MockEntity>,
}

impl MockWorld {
    pub fn insert(&mut self, id: u32, entity: MockEntity) {
        self.entities.insert(id, entity);
    }

    pub fn entity_mut(&mut self, id: u32) -> &mut MockEntity {
        self.entities.get_mut(&id).expect("entity exists")
    }
}

impl WorldOracle for MockWorld {
    fn position(&self, entity: EntityId) -> Option<Vec3> {
        self.entities.get(&entity.0).map(|e| e.pos)
    }

    fn health(&self, entity: EntityId) -> Option<i32> {
        self.entities.get(&entity.0).map(|e| e.health)
    }

    fn max_health(&self, entity: EntityId) -> Option<i32> {
        self.entities.get(&entity.0).map(|e| e.max_health)
    }

    fn team_of(&self, entity: EntityId) -> Option<Team> {
        self.entities.get(&entity.0).map(|e| e.team)
    }

    fn entities_in_radius(
        &self,
        origin: Vec3,
        radius: f32,
        filter: EntityFilter,
    ) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|(_, e)| match filter {
                EntityFilter::Players => !e.structure,
                EntityFilter::Structures => e.structure,
                EntityFilter::All => true,
            })
            .filter(|(_, e)| origin.distance(e.pos) <= radius)
            .map(|(id, _)| EntityId(*id))
            .collect()
    }

    fn visible(&self, _from: EntityId, to: EntityId) -> bool {
        self.entities.get(&to.0).is_some_and(|e| e.visible)
    }

    fn self_heal_available(&self, entity: EntityId) -> bool {
        self.entities.get(&entity.0).is_some_and(|e| e.self_heal)
    }
}

// ============================================================================
// Services
// ============================================================================

pub struct MockNav {
    pub loaded: bool,
    pub direct: bool,
    pub waypoint: Option<Vec3>,
    pub random_point: Option<Vec3>,
    pub random_point_calls: usize,
    pub corridor_updates: Vec<(EntityId, RouteTarget)>,
    pub meshes_set: Vec<EntityId>,
}

impl Default for MockNav {
    fn default() -> Self {
        Self {
            loaded: true,
            direct: false,
            waypoint: None,
            random_point: None,
            random_point_calls: 0,
            corridor_updates: Vec::new(),
            meshes_set: Vec::new(),
        }
    }
}

impl NavService for MockNav {
    fn mesh_loaded(&self) -> bool {
        self.loaded
    }

    fn set_navmesh(&mut self, entity: EntityId) {
        self.meshes_set.push(entity);
    }

    fn update_corridor(&mut self, entity: EntityId, target: RouteTarget) -> CorridorState {
        self.corridor_updates.push((entity, target));
        CorridorState {
            direct: self.direct,
        }
    }

    fn next_waypoint(&mut self, _entity: EntityId) -> Option<Vec3> {
        self.waypoint
    }

    fn random_point_near(&mut self, _entity: EntityId, _radius: f32) -> Option<Vec3> {
        self.random_point_calls += 1;
        self.random_point
    }
}

#[derive(Default)]
pub struct MockSession {
    pub free_slots: Vec<usize>,
    pub infos: HashMap<usize, UserInfo>,
    pub connected: HashSet<usize>,
    pub begun: HashSet<usize>,
    pub dropped: Vec<(usize, String)>,
    pub playing: HashSet<usize>,
    pub refuse: Option<String>,
    pub team_changes: Vec<(usize, Team)>,
    pub pings: HashMap<usize, u32>,
}

impl MockSession {
    pub fn with_slots(count: usize) -> Self {
        Self {
            free_slots: (0..count).collect(),
            ..Self::default()
        }
    }
}

impl SessionService for MockSession {
    fn allocate_slot(&mut self) -> Option<ClientId> {
        if self.free_slots.is_empty() {
            None
        } else {
            Some(ClientId(self.free_slots.remove(0)))
        }
    }

    fn set_user_info(&mut self, client: ClientId, info: UserInfo) {
        self.infos.insert(client.index(), info);
    }

    fn connect(&mut self, client: ClientId, _team: Team) -> Result<(), String> {
        if let Some(reason) = &self.refuse {
            return Err(reason.clone());
        }
        self.connected.insert(client.index());
        Ok(())
    }

    fn begin(&mut self, client: ClientId) {
        self.begun.insert(client.index());
    }

    fn drop_client(&mut self, client: ClientId, reason: &str) {
        self.connected.remove(&client.index());
        self.begun.remove(&client.index());
        self.playing.remove(&client.index());
        self.dropped.push((client.index(), reason.to_owned()));
    }

    fn is_playing(&self, client: ClientId) -> bool {
        self.playing.contains(&client.index())
    }

    fn change_team(&mut self, client: ClientId, team: Team) {
        self.team_changes.push((client.index(), team));
    }

    fn entity_of(&self, client: ClientId) -> EntityId {
        EntityId(client.index() as u32)
    }

    fn set_ping(&mut self, client: ClientId, ping_ms: u32) {
        self.pings.insert(client.index(), ping_ms);
    }
}

#[derive(Default)]
pub struct MockCommands {
    pub drains: HashMap<usize, usize>,
    pub committed: Vec<(usize, BotCommand)>,
}

impl CommandChannel for MockCommands {
    fn drain_acks(&mut self, client: ClientId) {
        *self.drains.entry(client.index()).or_insert(0) += 1;
    }

    fn commit(&mut self, client: ClientId, cmd: &BotCommand) {
        self.committed.push((client.index(), cmd.clone()));
    }
}

#[derive(Default)]
pub struct MockQueues {
    pub queued: HashSet<usize>,
    pub humans_behind: HashSet<usize>,
    pub rotations: Vec<usize>,
    pub enqueued: Vec<(usize, Team)>,
}

impl SpawnQueueService for MockQueues {
    fn is_queued(&self, client: ClientId) -> bool {
        self.queued.contains(&client.index())
    }

    fn humans_behind(&self, client: ClientId) -> bool {
        self.humans_behind.contains(&client.index())
    }

    fn rotate_to_back(&mut self, client: ClientId) {
        self.rotations.push(client.index());
    }

    fn enqueue(&mut self, client: ClientId, team: Team) {
        self.enqueued.push((client.index(), team));
    }
}

#[derive(Default)]
pub struct MockInventory {
    pub heals: Vec<EntityId>,
    pub funds: Vec<EntityId>,
}

impl InventoryService for MockInventory {
    fn use_self_heal(&mut self, entity: EntityId) -> bool {
        self.heals.push(entity);
        true
    }

    fn grant_max_funds(&mut self, entity: EntityId) {
        self.funds.push(entity);
    }
}

#[derive(Default)]
pub struct MockChat {
    pub messages: Vec<String>,
}

impl ChatChannel for MockChat {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

/// All mutable collaborators bundled for one test.
pub struct Harness {
    pub nav: MockNav,
    pub session: MockSession,
    pub commands: MockCommands,
    pub queues: MockQueues,
    pub inventory: MockInventory,
    pub chat: MockChat,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            nav: MockNav::default(),
            session: MockSession::with_slots(4),
            commands: MockCommands::default(),
            queues: MockQueues::default(),
            inventory: MockInventory::default(),
            chat: MockChat::default(),
        }
    }

    pub fn services(&mut self) -> Services<'_> {
        Services {
            nav: &mut self.nav,
            session: &mut self.session,
            commands: &mut self.commands,
            queues: &mut self.queues,
            inventory: &mut self.inventory,
            chat: &mut self.chat,
        }
    }
}
