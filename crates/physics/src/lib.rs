//! Emberfall Physics
//!
//! A deterministic character physics layer for a replicated entity
//! simulation. It is split into two systems:
//!
//! - **Collision**: static brush geometry with downward ray sensing,
//!   used as an opaque "is there ground under this body" query
//! - **Movement**: proxy bodies plus the per-tick acceleration, friction
//!   and jump model that converts player input into new velocity
//!
//! Movement never asks the collision layer to resolve contacts; ground
//! response is owned by the movement controller, which snaps the proxy
//! onto accepted contacts and holds it there with a gravity-cancelling
//! force while grounded. The same inputs always produce the same
//! outputs, so the authoritative and predicting sides can run the exact
//! same code.

pub mod body;
pub mod collision;
pub mod movement;

pub use body::{Body, BodyId, GroundHit, PhysicsWorld};
pub use collision::{CollisionWorld, ContentFlags, RayHit};
pub use movement::{ButtonState, MovementConfig, MovementController, MoveResult};
