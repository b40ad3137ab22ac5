//! Unified error types surfaced by lifecycle operations.
//!
//! Everything here is resolved at the `add`/`remove` call boundary and
//! reported to the requester; nothing below the malformed-tree case is ever
//! allowed to surface mid-tick.
use bot_core::ClientId;
use thiserror::Error;

use crate::behaviors::LoadError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// No navigation mesh is available for the current map; bots cannot be
    /// fielded at all.
    #[error("no navigation mesh is available for this map")]
    NoNavigationData,

    /// Every client slot is taken. The server keeps serving existing
    /// clients normally.
    #[error("no more slots for bot")]
    NoFreeSlot,

    /// Neither the requested behavior nor the default could be attached.
    #[error("behavior `{name}` could not be loaded")]
    BehaviorUnavailable {
        name: String,
        #[source]
        source: LoadError,
    },

    /// The slot exists but is not bot-controlled.
    #[error("client {0:?} is not a bot")]
    NotABot(ClientId),

    /// The session layer refused to register the bot.
    #[error("connection refused: {0}")]
    ConnectionRefused(String),

    /// The name roster cannot be cleared while reservations are live.
    #[error("bot name roster still has names in use")]
    NamesInUse,
}
