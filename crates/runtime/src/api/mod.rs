//! Types downstream embedders interact with.
//!
//! The bot subsystem consumes its collaborators through the service traits
//! defined here and surfaces lifecycle failures as [`RuntimeError`]. The
//! embedding server implements the traits over its own session, command,
//! navigation, and spawn-queue plumbing.
pub mod errors;
pub mod services;

pub use errors::{Result, RuntimeError};
pub use services::{
    ChatChannel, CommandChannel, CorridorState, InventoryService, NavService, RouteTarget,
    Services, SessionService, SpawnQueueService, UserInfo,
};
