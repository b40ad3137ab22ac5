//! Minimal vector math for continuous world space.

use std::ops::{Add, Sub};

/// A point or direction in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance(self, other: Vec3) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the same direction; `ZERO` stays `ZERO`.
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len <= f32::EPSILON {
            Vec3::ZERO
        } else {
            Vec3::new(self.x / len, self.y / len, self.z / len)
        }
    }

    /// View angles (yaw, pitch) in degrees that face along this direction.
    ///
    /// Yaw is measured in the XY plane, pitch is negative upward, matching
    /// the usual first-person view-angle convention.
    pub fn to_angles(self) -> (f32, f32) {
        let yaw = self.y.atan2(self.x).to_degrees();
        let horizontal = (self.x * self.x + self.y * self.y).sqrt();
        let pitch = -self.z.atan2(horizontal).to_degrees();
        (yaw, pitch)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 3.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn angles_face_along_axes() {
        let (yaw, pitch) = Vec3::new(1.0, 0.0, 0.0).to_angles();
        assert!(yaw.abs() < 1e-4);
        assert!(pitch.abs() < 1e-4);

        let (yaw, _) = Vec3::new(0.0, 1.0, 0.0).to_angles();
        assert!((yaw - 90.0).abs() < 1e-4);

        // Looking straight up pitches negative.
        let (_, pitch) = Vec3::new(1.0, 0.0, 1.0).to_angles();
        assert!(pitch < 0.0);
    }

    #[test]
    fn normalizing_zero_stays_zero() {
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    }
}
