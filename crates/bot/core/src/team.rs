//! Team identity.

/// Which side a client fights for.
///
/// `None` covers spectators and not-yet-joined clients; only the two
/// playable teams carry name rosters and spawn queues.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Team {
    #[default]
    None,
    Aliens,
    Humans,
}

impl Team {
    /// The teams that can field players, in roster order.
    pub const PLAYABLE: [Team; 2] = [Team::Aliens, Team::Humans];

    pub fn is_playable(self) -> bool {
        !matches!(self, Team::None)
    }

    /// Roster index for playable teams.
    pub fn index(self) -> Option<usize> {
        match self {
            Team::None => None,
            Team::Aliens => Some(0),
            Team::Humans => Some(1),
        }
    }

    /// Two distinct playable teams are hostile to each other.
    pub fn is_enemy_of(self, other: Team) -> bool {
        self.is_playable() && other.is_playable() && self != other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn hostility_requires_two_playable_teams() {
        assert!(Team::Aliens.is_enemy_of(Team::Humans));
        assert!(!Team::Aliens.is_enemy_of(Team::Aliens));
        assert!(!Team::None.is_enemy_of(Team::Humans));
        assert!(!Team::Humans.is_enemy_of(Team::None));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Team::from_str("Aliens").unwrap(), Team::Aliens);
        assert_eq!(Team::from_str("humans").unwrap(), Team::Humans);
        assert!(Team::from_str("robots").is_err());
    }
}
