//! Per-team bot name rosters.
//!
//! Names are registered once by admins, reserved while a bot displays them,
//! and released when the bot disconnects. Storage is bounded by the client
//! limit; entries are only freed by a full clear, which is refused while any
//! reservation is live.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::config::MAX_CLIENTS;
use crate::team::Team;

#[derive(Clone, Debug)]
struct NameEntry {
    name: String,
    in_use: bool,
}

/// Reusable display names, one roster per playable team.
#[derive(Clone, Debug, Default)]
pub struct NamePool {
    rosters: [ArrayVec<NameEntry, MAX_CLIENTS>; 2],
}

impl NamePool {
    pub fn new() -> Self {
        Self::default()
    }

    fn roster(&self, team: Team) -> Option<&ArrayVec<NameEntry, MAX_CLIENTS>> {
        team.index().map(|i| &self.rosters[i])
    }

    fn roster_mut(&mut self, team: Team) -> Option<&mut ArrayVec<NameEntry, MAX_CLIENTS>> {
        team.index().map(|i| &mut self.rosters[i])
    }

    fn contains(&self, name: &str) -> bool {
        self.rosters
            .iter()
            .flatten()
            .any(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// Registers names for a team, returning how many were added.
    ///
    /// Names already present in either team's roster are skipped
    /// (case-insensitively); insertion stops when the roster is full.
    pub fn add_names<I>(&mut self, team: Team, names: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        if !team.is_playable() {
            return 0;
        }

        let mut added = 0;
        for name in names {
            let name = name.into();
            if name.is_empty() || self.contains(&name) {
                continue;
            }
            let roster = self
                .roster_mut(team)
                .expect("playable team has a roster");
            if roster.try_push(NameEntry {
                name,
                in_use: false,
            })
            .is_err()
            {
                break;
            }
            added += 1;
        }
        added
    }

    /// Reserves a random unused name for the team.
    ///
    /// Probing starts at a random roster position so bots do not always
    /// claim names in registration order. Returns `None` when the roster is
    /// empty or fully reserved.
    pub fn select<R: Rng + ?Sized>(&mut self, team: Team, rng: &mut R) -> Option<String> {
        let roster = self.roster_mut(team)?;
        if roster.is_empty() {
            return None;
        }

        let mut choice = rng.gen_range(0..roster.len());
        for _ in 0..roster.len() {
            if !roster[choice].in_use {
                roster[choice].in_use = true;
                return Some(roster[choice].name.clone());
            }
            choice = (choice + 1) % roster.len();
        }
        None
    }

    /// Returns a reserved name to the pool (case-insensitive lookup).
    pub fn release(&mut self, team: Team, name: &str) {
        if let Some(roster) = self.roster_mut(team) {
            if let Some(entry) = roster
                .iter_mut()
                .find(|entry| entry.name.eq_ignore_ascii_case(name))
            {
                entry.in_use = false;
            }
        }
    }

    /// Drops every registered name, releasing the storage.
    ///
    /// Refused (returns `false`, pool unchanged) while any name is still
    /// reserved: a live reservation disappearing silently would desync the
    /// bot that holds it.
    pub fn clear(&mut self) -> bool {
        if self.rosters.iter().flatten().any(|entry| entry.in_use) {
            return false;
        }
        for roster in &mut self.rosters {
            roster.clear();
        }
        true
    }

    /// Number of names registered for a team.
    pub fn count(&self, team: Team) -> usize {
        self.roster(team).map_or(0, |roster| roster.len())
    }

    /// Registered names and their reservation state, for listings.
    pub fn names(&self, team: Team) -> impl Iterator<Item = (&str, bool)> {
        self.roster(team)
            .into_iter()
            .flatten()
            .map(|entry| (entry.name.as_str(), entry.in_use))
    }
}
