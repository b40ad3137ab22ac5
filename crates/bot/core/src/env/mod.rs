//! Traits describing read-only world data.
//!
//! The decision layer sees the game world exclusively through the
//! [`WorldOracle`]: positions, health, team membership, radius queries, and
//! visibility. Every query is side-effect-free; anything that mutates the
//! world (navigation corridors, connections, inventory use) goes through the
//! runtime's service traits instead.
mod world;

pub use world::{EntityFilter, WorldOracle};
