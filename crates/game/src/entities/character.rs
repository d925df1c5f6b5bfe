//! Controllable character: movement + health + an owning user.

use glam::Vec3;

use emberfall_physics::{ButtonState, PhysicsWorld};
use emberfall_protocol::{EntityId, SchemaRegistry};

use super::Entity;
use crate::simulation::Side;

/// Fixed respawn point. No randomization, no collision-safety check;
/// placing the spawn somewhere sensible is the caller's job.
pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 5.0, 1.0);

/// Distance the eyes sit below the top of the head.
const EYE_DROP: f32 = 0.5;

/// Character state attached to an entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterState {
    /// Replicated: id of the owning user entity. `None` while ownership
    /// is handed off; the character idles until it resolves again.
    pub owner: Option<EntityId>,
}

impl Entity {
    /// Set the owning user and mark it for replication.
    pub fn set_owner(&mut self, schema: &SchemaRegistry, owner: Option<EntityId>) {
        let Entity { core, character, .. } = self;
        if let Some(character) = character {
            character.owner = owner;
            core.mark_dirty(schema, "owner");
        }
    }

    /// Per-tick character think: run the movement model against the
    /// owner's current buttons.
    ///
    /// The driver resolves the owner and calls this only on the
    /// controlling side; everything that can still be missing here (no
    /// proxy, anchored proxy) idles quietly - those are steady states,
    /// not errors.
    pub fn think_character(
        &mut self,
        schema: &SchemaRegistry,
        physics: &mut PhysicsWorld,
        buttons: &ButtonState,
        dt: f32,
        now: f32,
    ) {
        let Entity { core, movement, .. } = self;
        if let Some(movement) = movement {
            movement.update(core, schema, physics, buttons, dt, now);
        }
    }

    /// Release the proxy and teleport it to the spawn point.
    pub fn respawn(&mut self, physics: &mut PhysicsWorld) {
        let Some(movement) = &self.movement else { return };
        let Some(body) = movement.body else { return };
        if let Some(b) = physics.body_mut(body) {
            b.anchored = false;
            b.position = SPAWN_POSITION;
            b.velocity = Vec3::ZERO;
        }
    }

    /// Where this character's eyes are.
    ///
    /// The simulating side reads the live proxy; the authoritative side
    /// has no proxy for remote characters and derives the same point
    /// from the last replicated origin instead.
    pub fn view_position(&self, side: Side, physics: &PhysicsWorld) -> Option<Vec3> {
        let movement = self.movement.as_ref()?;
        let offset = Vec3::new(0.0, movement.size.y * 0.5 - EYE_DROP, 0.0);
        match side {
            Side::Server => Some(movement.origin + offset),
            Side::Client => {
                let body = physics.body(movement.body?)?;
                Some(body.position + offset)
            }
        }
    }
}
