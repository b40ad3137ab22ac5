//! Orchestration for the bot subsystem.
//!
//! This crate wires the generic `behavior-tree` engine and the `bot-core`
//! data model into a running whole: per-bot memory, the per-tick decision
//! cycle, the named behavior store, lifecycle management, and the admin
//! command surface. The embedding server implements the service traits in
//! [`api`] and drives [`BotManager::think_all`] from its simulation step.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the service contracts and error types embedders see
//! - [`behaviors`] supplies leaves, RON definitions, presets, and the store
//! - [`cycle`] hosts the per-tick decision cycles
//! - [`manager`] owns slots, the name roster, and lifecycle
//! - [`console`] is the chat-reported admin surface
pub mod api;
pub mod behaviors;
pub mod console;
pub mod context;
pub mod cycle;
pub mod manager;
pub mod memory;

pub use api::{
    ChatChannel, CommandChannel, CorridorState, InventoryService, NavService, Result,
    RouteTarget, RuntimeError, Services, SessionService, SpawnQueueService, UserInfo,
};
pub use behaviors::{BehaviorStore, BotLeaf, CompileError, DEFAULT_BEHAVIOR, LoadError, NodeDef};
pub use context::BotContext;
pub use manager::BotManager;
pub use memory::BotMemory;
