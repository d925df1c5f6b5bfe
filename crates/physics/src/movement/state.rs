//! Per-tick input snapshot consumed by the movement controller.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A controller's input for a single simulation tick.
///
/// This is the entire contract between the input layer and movement:
/// a world-space wish direction plus modifier buttons, sampled once per
/// tick before movement runs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ButtonState {
    /// Desired horizontal movement direction in world space. Expected to
    /// be unit-ish; a zero vector means no directional input.
    pub wish_dir: Vec3,

    /// Jump button.
    pub jump: bool,

    /// Sprint modifier.
    pub sprint: bool,

    /// Crouch modifier.
    pub crouch: bool,
}

impl ButtonState {
    /// Whether any directional input is present.
    #[inline]
    pub fn has_wish(&self) -> bool {
        self.wish_dir.length_squared() > 0.0
    }
}
