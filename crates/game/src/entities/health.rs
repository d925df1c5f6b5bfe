//! Health capability.

use emberfall_protocol::SchemaRegistry;

use super::{Entity, EntityCore};

/// Replicated health state.
#[derive(Debug, Clone, Copy)]
pub struct HealthState {
    pub health: i32,
    pub max_health: i32,
}

impl HealthState {
    pub fn new() -> Self {
        Self {
            health: 100,
            max_health: 100,
        }
    }

    /// Whether the entity is still alive.
    #[inline]
    pub fn alive(&self) -> bool {
        self.health > 0
    }

    /// Take damage.
    ///
    /// Deliberately minimal: damage reduces health, never raises it, and
    /// never drives it below zero. Anything richer (armor, resistances,
    /// death handling) belongs to game rules layered above; crossing
    /// zero is their signal, not ours.
    pub fn take_damage(&mut self, core: &mut EntityCore, schema: &SchemaRegistry, amount: i32) {
        if amount <= 0 {
            return;
        }
        let new = (self.health - amount).max(0);
        if new != self.health {
            self.health = new;
            core.mark_dirty(schema, "health");
        }
    }
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity {
    /// Apply damage intake if this entity carries health.
    pub fn take_damage(&mut self, schema: &SchemaRegistry, amount: i32) {
        let Entity { core, health, .. } = self;
        if let Some(health) = health {
            health.take_damage(core, schema, amount);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Classes;

    fn health_entity() -> (SchemaRegistry, Entity) {
        let mut schema = SchemaRegistry::new();
        let classes = Classes::register(&mut schema);
        (schema, Entity::new_health(&classes))
    }

    #[test]
    fn test_damage_reduces_health() {
        let (schema, mut entity) = health_entity();

        entity.take_damage(&schema, 30);
        assert_eq!(entity.health.unwrap().health, 70);
        assert!(entity.health.unwrap().alive());
    }

    #[test]
    fn test_damage_never_goes_below_zero() {
        let (schema, mut entity) = health_entity();

        for _ in 0..10 {
            entity.take_damage(&schema, 40);
            let h = entity.health.unwrap();
            assert!(h.health >= 0);
        }
        assert_eq!(entity.health.unwrap().health, 0);
        assert!(!entity.health.unwrap().alive());
    }

    #[test]
    fn test_damage_never_raises_health() {
        let (schema, mut entity) = health_entity();

        let before = entity.health.unwrap().health;
        entity.take_damage(&schema, -25);
        entity.take_damage(&schema, 0);
        assert_eq!(entity.health.unwrap().health, before);
    }

    #[test]
    fn test_damage_marks_health_dirty() {
        let (schema, mut entity) = health_entity();

        entity.take_damage(&schema, 1);
        assert_ne!(entity.core.take_dirty(), 0);

        // No-op damage leaves the dirty mask alone
        entity.take_damage(&schema, 0);
        assert_eq!(entity.core.take_dirty(), 0);
    }
}
