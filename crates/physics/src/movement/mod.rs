//! Character movement physics.
//!
//! Implements Quake-style movement on top of proxy bodies:
//!
//! - Ground friction and acceleration with a target-speed deficit clamp
//! - Air control with separate strafe tuning
//! - Jump impulses relative to zero, never reduced by downward motion
//! - Slope rejection and one-tick-delayed ground hysteresis
//!
//! The controller is stateless apart from its configuration; per-body
//! state (the remembered ground contact) is owned by the caller so the
//! same controller can drive any number of bodies.

mod config;
mod controller;
mod state;

pub use config::MovementConfig;
pub use controller::{MovementController, MoveResult};
pub use state::ButtonState;
