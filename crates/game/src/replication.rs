//! Reading and writing replicated field values.
//!
//! The schema names the fields; this module maps names onto actual
//! entity state, in both directions: `replicated_value` extracts a
//! field for the outbound drain, `apply_update` writes an inbound
//! update into an observer's local entity.

use emberfall_protocol::{EntityUpdate, FieldId, FieldValue, SchemaRegistry};

use crate::entities::Entity;

/// Extract the current value of a replicated field.
///
/// Returns `None` when the entity does not carry the capability the
/// field belongs to; such fields are skipped, not errors.
pub fn replicated_value(entity: &Entity, schema: &SchemaRegistry, field: FieldId) -> Option<FieldValue> {
    match schema.field_name(entity.core.class(), field)? {
        "health" => entity.health.as_ref().map(|h| FieldValue::I32(h.health)),
        "maxhealth" => entity.health.as_ref().map(|h| FieldValue::I32(h.max_health)),
        "origin" => entity.movement.as_ref().map(|m| FieldValue::Vec3(m.origin)),
        "velocity" => entity.movement.as_ref().map(|m| FieldValue::Vec3(m.velocity)),
        "owner" => entity.character.as_ref().map(|c| FieldValue::Entity(c.owner)),
        _ => None,
    }
}

/// Apply a received update to a local entity.
///
/// Values whose field or type does not match the local entity are
/// ignored; replication tolerates version skew rather than failing.
pub fn apply_update(entity: &mut Entity, schema: &SchemaRegistry, update: &EntityUpdate) {
    for (field, value) in &update.fields {
        let Some(name) = schema.field_name(entity.core.class(), *field) else {
            continue;
        };
        match (name, value) {
            ("health", FieldValue::I32(v)) => {
                if let Some(h) = &mut entity.health {
                    h.health = *v;
                }
            }
            ("maxhealth", FieldValue::I32(v)) => {
                if let Some(h) = &mut entity.health {
                    h.max_health = *v;
                }
            }
            ("origin", FieldValue::Vec3(v)) => {
                if let Some(m) = &mut entity.movement {
                    m.origin = *v;
                }
            }
            ("velocity", FieldValue::Vec3(v)) => {
                if let Some(m) = &mut entity.movement {
                    m.velocity = *v;
                }
            }
            ("owner", FieldValue::Entity(v)) => {
                if let Some(c) = &mut entity.character {
                    c.owner = *v;
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Classes, Entity};
    use crate::simulation::Side;
    use emberfall_physics::{MovementConfig, PhysicsWorld};
    use emberfall_protocol::EntityId;
    use glam::Vec3;

    #[test]
    fn test_extract_apply_roundtrip() {
        let mut schema = SchemaRegistry::new();
        let classes = Classes::register(&mut schema);
        let mut physics = PhysicsWorld::new(60.0);

        let mut source = Entity::new_character(
            &classes,
            Side::Client,
            &mut physics,
            MovementConfig::default(),
        );
        source.movement.as_mut().unwrap().origin = Vec3::new(3.0, 2.5, -7.0);
        source.health.as_mut().unwrap().health = 42;
        source.character.as_mut().unwrap().owner = Some(EntityId(5));

        let mut fields = Vec::new();
        for field in 0..schema.field_count(classes.character) {
            if let Some(value) = replicated_value(&source, &schema, field) {
                fields.push((field, value));
            }
        }
        let update = EntityUpdate {
            entity: EntityId(1),
            fields,
        };

        // The receiving side has no proxy; replication still lands
        let mut target = Entity::new_character(
            &classes,
            Side::Server,
            &mut physics,
            MovementConfig::default(),
        );
        apply_update(&mut target, &schema, &update);

        assert_eq!(target.movement.as_ref().unwrap().origin, Vec3::new(3.0, 2.5, -7.0));
        assert_eq!(target.health.as_ref().unwrap().health, 42);
        assert_eq!(target.character.as_ref().unwrap().owner, Some(EntityId(5)));
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut schema = SchemaRegistry::new();
        let classes = Classes::register(&mut schema);

        let mut entity = Entity::new_health(&classes);
        let update = EntityUpdate {
            entity: EntityId(1),
            fields: vec![(99, FieldValue::F32(1.0))],
        };
        apply_update(&mut entity, &schema, &update);
        assert_eq!(entity.health.as_ref().unwrap().health, 100);
    }
}
