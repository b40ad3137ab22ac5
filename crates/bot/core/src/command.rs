//! The synthesized input command.
//!
//! Bots drive the same per-tick input interface as human clients: a movement
//! triple, view angles, and pressed buttons. The decision cycle neutralizes
//! the scratch command at the start of every tick, tree leaves write into
//! it, and the final command is committed through the command channel.

use bitflags::bitflags;

use crate::math::Vec3;

bitflags! {
    /// Pressed-button state for one tick of input.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u16 {
        const ATTACK = 1 << 0;
        const ATTACK2 = 1 << 1;
        const USE = 1 << 2;
        const GESTURE = 1 << 3;
        const WALKING = 1 << 4;
        const SPRINT = 1 << 5;
    }
}

/// A one-shot movement impulse carried across the per-tick reset.
///
/// Outside systems signal a shove (e.g., spawn unblocking) through the
/// double-tap flag; the impulse observed before the reset is re-applied to
/// the final movement output so it survives even if the tree stands still.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Nudge {
    pub forward: i8,
    pub right: i8,
    pub up: i8,
}

impl Nudge {
    pub fn is_zero(self) -> bool {
        self == Nudge::default()
    }
}

/// One tick of synthesized input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BotCommand {
    pub buttons: Buttons,
    /// Forward/back movement, -127..=127.
    pub forward: i8,
    /// Strafe movement, -127..=127.
    pub right: i8,
    /// Jump/crouch movement, -127..=127.
    pub up: i8,
    /// View angles (yaw, pitch, roll) in degrees.
    pub angles: Vec3,
    /// Double-tap flag observed from the previous tick's command.
    pub double_tap: bool,
}

impl BotCommand {
    /// Starts a new tick: captures the pending nudge, then neutralizes
    /// buttons, movement, and the double-tap flag. View angles persist.
    pub fn reset_for_tick(&mut self) -> Nudge {
        let nudge = if self.double_tap {
            Nudge {
                forward: self.forward,
                right: self.right,
                up: self.up,
            }
        } else {
            Nudge::default()
        };

        self.buttons = Buttons::empty();
        self.forward = 0;
        self.right = 0;
        self.up = 0;
        self.double_tap = false;

        nudge
    }

    /// Adds a nudge to the movement output, saturating at the i8 range.
    pub fn apply_nudge(&mut self, nudge: Nudge) {
        self.forward = self.forward.saturating_add(nudge.forward);
        self.right = self.right.saturating_add(nudge.right);
        self.up = self.up.saturating_add(nudge.up);
    }

    /// Points the view at `target` from `eye`.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3) {
        let (yaw, pitch) = (target - eye).to_angles();
        self.angles = Vec3::new(yaw, pitch, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_captures_nudge_only_on_double_tap() {
        let mut cmd = BotCommand {
            forward: 40,
            right: -10,
            double_tap: true,
            ..BotCommand::default()
        };
        let nudge = cmd.reset_for_tick();
        assert_eq!(nudge.forward, 40);
        assert_eq!(nudge.right, -10);
        assert_eq!(cmd.forward, 0);
        assert!(!cmd.double_tap);

        // No double tap: movement is discarded, not carried.
        let mut cmd = BotCommand {
            forward: 40,
            ..BotCommand::default()
        };
        assert!(cmd.reset_for_tick().is_zero());
    }

    #[test]
    fn reset_preserves_view_angles() {
        let mut cmd = BotCommand {
            angles: Vec3::new(90.0, -10.0, 0.0),
            buttons: Buttons::ATTACK,
            ..BotCommand::default()
        };
        cmd.reset_for_tick();
        assert_eq!(cmd.angles, Vec3::new(90.0, -10.0, 0.0));
        assert!(cmd.buttons.is_empty());
    }

    #[test]
    fn nudge_saturates() {
        let mut cmd = BotCommand {
            forward: 120,
            ..BotCommand::default()
        };
        cmd.apply_nudge(Nudge {
            forward: 100,
            right: 0,
            up: 0,
        });
        assert_eq!(cmd.forward, 127);
    }
}
