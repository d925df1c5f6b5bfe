//! Movement capability: the physical proxy and its per-tick update.
//!
//! The algorithm itself lives in `emberfall_physics::movement`; this
//! part owns the proxy body handle, the one-tick ground memory, and the
//! replicated `origin`/`velocity` derived for observers that do not
//! simulate physics locally.

use glam::Vec3;

use emberfall_physics::{BodyId, ButtonState, MovementConfig, MovementController, PhysicsWorld};
use emberfall_protocol::SchemaRegistry;

use super::EntityCore;

/// Logical bounding extents of a character entity.
pub const ENTITY_SIZE: Vec3 = Vec3::new(2.0, 5.0, 2.0);

/// Half-extents of the physical proxy. Shorter than the logical size;
/// the gap below is the hip height the proxy floats on.
pub const PROXY_HALF_EXTENTS: Vec3 = Vec3::new(1.0, 1.5, 1.0);

/// Where proxies sit, anchored, before the entity is placed in the world.
pub const PARK_POSITION: Vec3 = Vec3::new(0.0, 1000.0, 0.0);

/// Horizontal distance covered on the ground between footsteps.
const FOOTSTEP_STRIDE: f32 = 3.0;

/// Movement state attached to an entity.
#[derive(Debug)]
pub struct MovementState {
    /// Logical bounding extents.
    pub size: Vec3,

    /// The physical proxy, present only on the simulating side.
    pub body: Option<BodyId>,

    /// The movement model and its tuning.
    pub controller: MovementController,

    /// Ground contact accepted on the previous tick. Grounded movement
    /// keys off this, not the current tick's sensor result.
    pub ground_memory: Option<u32>,

    /// Replicated: logical position derived from the proxy.
    pub origin: Vec3,

    /// Replicated: proxy velocity.
    pub velocity: Vec3,

    pub last_footstep_position: Vec3,
    pub last_footstep_time: f32,
}

impl MovementState {
    pub fn new(config: MovementConfig) -> Self {
        Self {
            size: ENTITY_SIZE,
            body: None,
            controller: MovementController::new(config),
            ground_memory: None,
            origin: Vec3::ZERO,
            velocity: Vec3::ZERO,
            last_footstep_position: Vec3::ZERO,
            last_footstep_time: 0.0,
        }
    }

    /// Gap between the proxy's bottom face and the entity's foot line.
    pub fn hip_height(&self, physics: &PhysicsWorld) -> Option<f32> {
        let body = physics.body(self.body?)?;
        Some((self.size.y - body.half_extents.y * 2.0).max(0.0))
    }

    /// Run one movement tick and commit the results into replicated
    /// state. Does nothing when the proxy is missing or anchored.
    pub fn update(
        &mut self,
        core: &mut EntityCore,
        schema: &SchemaRegistry,
        physics: &mut PhysicsWorld,
        buttons: &ButtonState,
        dt: f32,
        now: f32,
    ) {
        let Some(body) = self.body else { return };
        let Some(hip) = self.hip_height(physics) else { return };

        let Some(result) =
            self.controller
                .update(physics, body, &mut self.ground_memory, hip, buttons, dt)
        else {
            return;
        };

        self.origin = result.origin;
        self.velocity = result.velocity;
        core.mark_dirty(schema, "origin");
        core.mark_dirty(schema, "velocity");

        if result.grounded {
            let planar = Vec3::new(
                self.origin.x - self.last_footstep_position.x,
                0.0,
                self.origin.z - self.last_footstep_position.z,
            );
            if planar.length() > FOOTSTEP_STRIDE {
                log::trace!("footstep for {:?} at {:?}", core.id(), self.origin);
                self.last_footstep_position = self.origin;
                self.last_footstep_time = now;
            }
        }
    }
}
