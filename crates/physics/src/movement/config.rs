//! Movement tuning constants.
//!
//! All movement parameters are grouped here for easy tuning.

use serde::{Deserialize, Serialize};

/// Configuration for character movement physics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementConfig {
    /// Walking speed (units/second).
    pub walk_speed: f32,

    /// Sprinting speed (units/second).
    pub run_speed: f32,

    /// Vertical impulse applied on jump (units/second).
    pub jump_power: f32,

    /// Ground friction coefficient. Also scales ground acceleration.
    pub ground_friction: f32,

    /// Ground acceleration factor.
    pub acceleration: f32,

    /// Speed floor used by friction: below this, friction keeps biting as
    /// if the body were still moving at this speed, so slow drifts stop
    /// quickly instead of decaying forever.
    pub deceleration: f32,

    /// Air acceleration factor.
    pub side_strafe_accel: f32,

    /// Air target speed (units/second). Small on purpose: it caps the
    /// per-tick gain along the wish direction, so speed in the air builds
    /// only through repeated direction changes.
    pub side_strafe_speed: f32,

    /// Steepest surface angle (degrees from horizontal) accepted as ground.
    pub max_slope_angle: f32,

    /// Walk speed multiplier while crouching.
    pub crouch_speed_scale: f32,

    /// Ground acceleration multiplier while crouching.
    pub crouch_accel_scale: f32,

    /// Small upward offset applied when snapping onto a contact at jump
    /// time, so the proxy never starts a jump embedded in the surface.
    pub snap_nudge: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: 16.0,
            run_speed: 32.0,
            jump_power: 50.0,
            ground_friction: 10.0,
            acceleration: 1.0,
            deceleration: 6.0,
            side_strafe_accel: 100.0,
            side_strafe_speed: 2.0,
            max_slope_angle: 50.0,
            crouch_speed_scale: 0.75,
            crouch_accel_scale: 0.5,
            snap_nudge: 0.2,
        }
    }
}

impl MovementConfig {
    /// Target horizontal speed for the current input modifiers.
    ///
    /// Sprint wins over crouch; with no directional input the target is
    /// zero so only friction applies.
    pub fn target_speed(&self, has_wish: bool, sprint: bool, crouch: bool) -> f32 {
        if !has_wish {
            0.0
        } else if sprint {
            self.run_speed
        } else if crouch {
            self.walk_speed * self.crouch_speed_scale
        } else {
            self.walk_speed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MovementConfig::default();
        assert!(config.walk_speed > 0.0);
        assert!(config.run_speed > config.walk_speed);
        assert!(config.max_slope_angle > 0.0 && config.max_slope_angle < 90.0);
    }

    #[test]
    fn test_target_speed() {
        let config = MovementConfig::default();

        assert_eq!(config.target_speed(false, true, true), 0.0);
        assert_eq!(config.target_speed(true, true, false), config.run_speed);
        assert_eq!(
            config.target_speed(true, false, true),
            config.walk_speed * config.crouch_speed_scale
        );
        assert_eq!(config.target_speed(true, false, false), config.walk_speed);
        // Sprint wins over crouch
        assert_eq!(config.target_speed(true, true, true), config.run_speed);
    }
}
