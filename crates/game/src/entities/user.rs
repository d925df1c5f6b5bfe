//! User capability: a connected controller.

use emberfall_physics::ButtonState;

/// Per-user state. The external input service writes a fresh button
/// snapshot here once per tick; owned characters read it during think.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserState {
    pub buttons: ButtonState,
}
