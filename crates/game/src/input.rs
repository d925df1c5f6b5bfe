//! Raw input handling.
//!
//! Converts raw per-frame key state into the world-space button snapshot
//! the movement model consumes.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use emberfall_physics::ButtonState;

/// Movement key states.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Raw input for a single frame, as delivered by the platform layer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RawInput {
    /// Movement keys pressed.
    pub movement: MovementKeys,

    /// Camera yaw in radians; movement keys are relative to it.
    pub yaw: f32,

    pub jump: bool,
    pub sprint: bool,
    pub crouch: bool,
}

impl RawInput {
    /// Convert to a movement button snapshot.
    ///
    /// The wish direction is built in world space from the camera yaw
    /// and normalized, so diagonal input is no faster than straight.
    pub fn to_buttons(&self) -> ButtonState {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let forward = Vec3::new(cos_yaw, 0.0, sin_yaw);
        let right = Vec3::new(-sin_yaw, 0.0, cos_yaw);

        let mut wish = Vec3::ZERO;
        if self.movement.forward {
            wish += forward;
        }
        if self.movement.backward {
            wish -= forward;
        }
        if self.movement.right {
            wish += right;
        }
        if self.movement.left {
            wish -= right;
        }

        ButtonState {
            wish_dir: wish.normalize_or_zero(),
            jump: self.jump,
            sprint: self.sprint,
            crouch: self.crouch,
        }
    }
}
