//! Administrative command surface.
//!
//! Thin wrappers over the lifecycle manager that report success or failure
//! through the server's existing chat/console channel. No new protocol: the
//! returned `bool` is for callers that gate follow-up work, the user-facing
//! result is the notification.

use bot_core::{ClientId, Skill, Team};

use crate::api::Services;
use crate::manager::BotManager;

/// `add-bot <name|"*"> <team> <skill> <behavior>`
pub fn add_bot(
    manager: &mut BotManager,
    name: &str,
    team: Team,
    skill: Skill,
    behavior: &str,
    services: &mut Services<'_>,
) -> bool {
    match manager.add(name, team, skill, behavior, services) {
        Ok(client) => {
            services
                .chat
                .notify(&format!("bot joined in slot {}", client.index()));
            true
        }
        Err(err) => {
            services.chat.notify(&format!("can't add bot: {}", err));
            false
        }
    }
}

/// `remove-bot <client>`
pub fn remove_bot(
    manager: &mut BotManager,
    client: ClientId,
    services: &mut Services<'_>,
) -> bool {
    match manager.remove(client, services) {
        Ok(()) => true,
        Err(err) => {
            services.chat.notify(&format!("can't remove bot: {}", err));
            false
        }
    }
}

/// `remove-all-bots`
pub fn remove_all_bots(manager: &mut BotManager, services: &mut Services<'_>) -> bool {
    match manager.remove_all(services) {
        Ok(()) => true,
        Err(err) => {
            services.chat.notify(&format!("can't clear bot names: {}", err));
            false
        }
    }
}

/// `add-bot-names <team> <name>...`
pub fn add_bot_names<I>(
    manager: &mut BotManager,
    team: Team,
    names: I,
    services: &mut Services<'_>,
) -> usize
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let added = manager.add_names(team, names);
    services
        .chat
        .notify(&format!("added {} bot names for {}", added, team));
    added
}

/// `list-bot-names`: per-team roster with in-use markers.
pub fn list_bot_names(manager: &BotManager, services: &mut Services<'_>) {
    for team in Team::PLAYABLE {
        if manager.name_count(team) == 0 {
            continue;
        }
        services.chat.notify(&format!("{} bot names:", team));
        for (name, in_use) in manager.names(team) {
            services
                .chat
                .notify(&format!("  {} {}", if in_use { "*" } else { " " }, name));
        }
    }
}
