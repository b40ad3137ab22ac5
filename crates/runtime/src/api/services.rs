//! Mutable collaborator contracts.
//!
//! The read-only world lives behind [`bot_core::WorldOracle`]; everything
//! with side effects (navigation corridors, client sessions, the command
//! channel, spawn queues, inventory, chat) is consumed through the traits
//! below. [`Services`] bundles them so one tick can borrow the whole set
//! without hard coupling to concrete implementations.

use bot_core::{BotCommand, ClientId, EntityId, Team, Vec3};

/// Destination handed to the navigation service when a corridor is
/// recomputed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RouteTarget {
    /// Follow a (possibly moving) entity.
    Entity(EntityId),
    /// Head for a fixed point.
    Point(Vec3),
}

/// Corridor summary surfaced after an update.
///
/// The corridor itself is owned by the navigation service and stays opaque;
/// this core only consumes the straight-line reachability flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CorridorState {
    /// The goal is directly reachable; corridor following can be bypassed.
    pub direct: bool,
}

/// Navigation-mesh pathfinding, consumed but never owned by this core.
pub trait NavService {
    /// Whether navigation data is loaded for the current map.
    fn mesh_loaded(&self) -> bool;

    /// Assigns the entity's navigation mesh.
    fn set_navmesh(&mut self, entity: EntityId);

    /// Recomputes the entity's corridor toward `target`.
    fn update_corridor(&mut self, entity: EntityId, target: RouteTarget) -> CorridorState;

    /// Next corridor waypoint, when a corridor exists for the entity.
    fn next_waypoint(&mut self, entity: EntityId) -> Option<Vec3>;

    /// A random reachable point within `radius` of the entity.
    fn random_point_near(&mut self, entity: EntityId, radius: f32) -> Option<Vec3>;
}

/// User-visible connection fields registered for a bot client.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserInfo {
    pub name: String,
    pub rate: u32,
    pub snaps: u32,
    /// Set when the name came out of the roster, so removal can release it.
    pub autoname: Option<String>,
    /// Forwarded when the server is password protected.
    pub password: Option<String>,
}

/// Client slot allocation and session registration.
pub trait SessionService {
    /// Claims a free client slot, if any remain.
    fn allocate_slot(&mut self) -> Option<ClientId>;

    fn set_user_info(&mut self, client: ClientId, info: UserInfo);

    /// Registers the connection; a refusal carries a human-readable reason.
    fn connect(&mut self, client: ClientId, team: Team) -> std::result::Result<(), String>;

    /// Begins play for a registered client.
    fn begin(&mut self, client: ClientId);

    fn drop_client(&mut self, client: ClientId, reason: &str);

    /// Whether the client currently controls a spawned body (as opposed to
    /// spectating or waiting in a spawn queue).
    fn is_playing(&self, client: ClientId) -> bool;

    fn change_team(&mut self, client: ClientId, team: Team);

    /// World entity controlled by the client slot.
    fn entity_of(&self, client: ClientId) -> EntityId;

    fn set_ping(&mut self, client: ClientId, ping_ms: u32);
}

/// Per-slot command plumbing shared with human clients.
pub trait CommandChannel {
    /// Drains every queued acknowledgment for the slot.
    ///
    /// Must run every tick for every bot, even when the tick is otherwise
    /// skipped; an undrained backlog grows without bound.
    fn drain_acks(&mut self, client: ClientId);

    /// Commits the synthesized command as the client's input for this tick.
    fn commit(&mut self, client: ClientId, cmd: &BotCommand);
}

/// Team spawn-queue bookkeeping, owned by the game layer.
pub trait SpawnQueueService {
    fn is_queued(&self, client: ClientId) -> bool;

    /// Whether any human player waits behind the client in its queue.
    fn humans_behind(&self, client: ClientId) -> bool;

    /// Moves the client to the back of its queue.
    fn rotate_to_back(&mut self, client: ClientId);

    fn enqueue(&mut self, client: ClientId, team: Team);
}

/// Consumable-item effects on the controlled entity.
pub trait InventoryService {
    /// Consumes the entity's self-heal item; `false` when none is carried.
    fn use_self_heal(&mut self, entity: EntityId) -> bool;

    /// Debug aid: tops the entity's funds up to the maximum.
    fn grant_max_funds(&mut self, entity: EntityId);
}

/// The server's existing chat/console notification channel.
pub trait ChatChannel {
    fn notify(&mut self, message: &str);
}

/// Aggregates the mutable collaborators one tick (or one lifecycle call)
/// needs.
pub struct Services<'a> {
    pub nav: &'a mut dyn NavService,
    pub session: &'a mut dyn SessionService,
    pub commands: &'a mut dyn CommandChannel,
    pub queues: &'a mut dyn SpawnQueueService,
    pub inventory: &'a mut dyn InventoryService,
    pub chat: &'a mut dyn ChatChannel,
}
