//! Bot subsystem configuration constants and tunable parameters.

/// Maximum number of client slots on the server. Bots and humans share this
/// pool, so it also bounds the slot arena and each team's name roster.
pub const MAX_CLIENTS: usize = 64;

/// Tunable parameters for bot perception, reflexes, and lifecycle defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BotConfig {
    /// Health below which the reflexive self-heal fires before tree
    /// evaluation.
    pub self_heal_health: i32,
    /// Radius of the per-tick enemy scan.
    pub perception_range: f32,
    /// Radius of the per-tick structure scan.
    pub structure_scan_range: f32,
    /// Distance at which a movement goal counts as reached.
    pub goal_radius: f32,
    /// Distance at which a repair target can be worked on.
    pub repair_range: f32,
    /// An enemy unseen for this long (ms) is dropped from memory.
    pub enemy_forget_ms: u64,
    /// Radius used when picking a roam destination on the nav mesh.
    pub roam_radius: f32,
    /// Behavior attached when none is requested or the requested one fails.
    pub default_behavior: String,
    /// Debug aid: top up the bot's funds every tick.
    pub infinite_funds: bool,
    /// Password forwarded in user info when the server requires one.
    pub server_password: Option<String>,
}

impl BotConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SELF_HEAL_HEALTH: i32 = 50;
    pub const DEFAULT_PERCEPTION_RANGE: f32 = 1024.0;
    pub const DEFAULT_STRUCTURE_SCAN_RANGE: f32 = 2048.0;
    pub const DEFAULT_GOAL_RADIUS: f32 = 70.0;
    pub const DEFAULT_REPAIR_RANGE: f32 = 100.0;
    pub const DEFAULT_ENEMY_FORGET_MS: u64 = 10_000;
    pub const DEFAULT_ROAM_RADIUS: f32 = 2048.0;

    pub fn new() -> Self {
        Self {
            self_heal_health: Self::DEFAULT_SELF_HEAL_HEALTH,
            perception_range: Self::DEFAULT_PERCEPTION_RANGE,
            structure_scan_range: Self::DEFAULT_STRUCTURE_SCAN_RANGE,
            goal_radius: Self::DEFAULT_GOAL_RADIUS,
            repair_range: Self::DEFAULT_REPAIR_RANGE,
            enemy_forget_ms: Self::DEFAULT_ENEMY_FORGET_MS,
            roam_radius: Self::DEFAULT_ROAM_RADIUS,
            default_behavior: "default".to_owned(),
            infinite_funds: false,
            server_password: None,
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Bot skill level, clamped to 1..=9.
///
/// Skill currently scales aim pacing; higher skill re-aims more often.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill(u8);

impl Skill {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 9;

    /// Creates a skill level, clamping out-of-range input.
    pub fn new(level: u8) -> Self {
        Self(level.clamp(Self::MIN, Self::MAX))
    }

    #[inline]
    pub fn level(self) -> u8 {
        self.0
    }

    /// Milliseconds between aim corrections for this skill level.
    pub fn aim_interval_ms(self) -> u64 {
        (1300 - 100 * u64::from(self.0)).max(100)
    }
}

impl Default for Skill {
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_clamps_to_range() {
        assert_eq!(Skill::new(0).level(), 1);
        assert_eq!(Skill::new(5).level(), 5);
        assert_eq!(Skill::new(200).level(), 9);
    }

    #[test]
    fn higher_skill_aims_more_often() {
        assert!(Skill::new(9).aim_interval_ms() < Skill::new(1).aim_interval_ms());
    }
}
