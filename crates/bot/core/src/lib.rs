//! Data model and world-query contract for the bot subsystem.
//!
//! `bot-core` defines the types every other layer shares: teams, entity and
//! client-slot handles, the synthesized input command, goal/enemy tracking
//! records, the per-team name roster, and the read-only [`env::WorldOracle`]
//! the decision layer queries. It holds no orchestration logic; the runtime
//! crate owns per-bot memory, the decision cycle, and lifecycle.
pub mod command;
pub mod config;
pub mod entity;
pub mod env;
pub mod math;
pub mod names;
pub mod target;
pub mod team;
pub mod time;

pub use command::{BotCommand, Buttons, Nudge};
pub use config::{BotConfig, MAX_CLIENTS, Skill};
pub use entity::{ClientId, EntityId};
pub use env::{EntityFilter, WorldOracle};
pub use math::Vec3;
pub use names::NamePool;
pub use target::{EnemyMemory, GoalTarget, TrackedStructure};
pub use team::Team;
pub use time::Tick;
