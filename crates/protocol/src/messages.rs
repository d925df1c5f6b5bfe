//! Replication message types.
//!
//! Everything the authoritative simulation emits toward observers after
//! a tick: entity spawns, batched field updates, and despawns.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::schema::FieldId;

/// Unique identifier for an entity, issued by the registry and never
/// reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// A replicated field's value on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Bool(bool),
    F32(f32),
    I32(i32),
    U32(u32),
    Vec3(Vec3),
    /// Reference to another entity; `None` during ownership handoff.
    Entity(Option<EntityId>),
}

/// Field values for one entity that changed during a tick.
///
/// An entity's changed fields are always delivered together in one of
/// these; observers never see a partial interleaving of two entities'
/// fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityUpdate {
    pub entity: EntityId,
    pub fields: Vec<(FieldId, FieldValue)>,
}

/// All messages flowing from the simulation to observers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReplicationMessage {
    /// A new entity exists; observers should construct their local view.
    Spawn {
        entity: EntityId,
        classname: String,
    },

    /// Changed replicated fields for one entity.
    Update(EntityUpdate),

    /// The entity was destroyed.
    Despawn { entity: EntityId },
}
