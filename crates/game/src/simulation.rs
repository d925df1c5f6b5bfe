//! The simulation driver.
//!
//! Owns the registry, the physics world and the replication schema, and
//! advances everything by one tick at a time: think every live entity,
//! step physics, flush deferred destroys, drain replication updates.
//!
//! Single-threaded and cooperative: no entity's think overlaps another's
//! within a tick, and a tick always runs to completion.

use emberfall_physics::{ButtonState, MovementConfig, PhysicsWorld};
use emberfall_protocol::{
    EntityId, EntityUpdate, ReplicationMessage, SchemaRegistry,
};
use serde::{Deserialize, Serialize};

use crate::entities::{Capabilities, Classes, Entity, Registry};
use crate::replication::replicated_value;

/// Which side of the wire this process is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Authoritative server: no proxy bodies, consumes replicated state.
    Server,
    /// Controlling client: simulates movement against live proxies.
    Client,
}

impl Side {
    #[inline]
    pub fn is_client(self) -> bool {
        matches!(self, Side::Client)
    }

    #[inline]
    pub fn is_server(self) -> bool {
        matches!(self, Side::Server)
    }
}

/// Simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Simulation tick rate (ticks per second).
    pub tick_rate: u32,

    /// Downward gravity magnitude.
    pub gravity: f32,

    /// Movement physics configuration applied to spawned characters.
    pub movement: MovementConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            gravity: 60.0,
            movement: MovementConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Time step per tick in seconds.
    pub fn delta_time(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }
}

/// The main simulation.
pub struct Simulation {
    pub side: Side,
    pub config: SimulationConfig,
    pub physics: PhysicsWorld,
    pub registry: Registry,
    pub schema: SchemaRegistry,
    pub classes: Classes,
    frame: u64,
    time: f32,
    pending_destroy: Vec<EntityId>,
    outbox: Vec<ReplicationMessage>,
}

impl Simulation {
    pub fn new(side: Side, config: SimulationConfig) -> Self {
        let mut schema = SchemaRegistry::new();
        let classes = Classes::register(&mut schema);
        let physics = PhysicsWorld::new(config.gravity);
        Self {
            side,
            config,
            physics,
            registry: Registry::new(),
            schema,
            classes,
            frame: 0,
            time: 0.0,
            pending_destroy: Vec::new(),
            outbox: Vec::new(),
        }
    }

    /// Current tick number.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Accumulated simulation time in seconds.
    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Spawn a connected user entity.
    pub fn spawn_user(&mut self) -> EntityId {
        let entity = Entity::new_user(&self.classes);
        self.announce_spawn(entity)
    }

    /// Spawn a character, optionally owned by a user.
    pub fn spawn_character(&mut self, owner: Option<EntityId>) -> EntityId {
        let mut entity = Entity::new_character(
            &self.classes,
            self.side,
            &mut self.physics,
            self.config.movement.clone(),
        );
        entity.set_owner(&self.schema, owner);
        self.announce_spawn(entity)
    }

    fn announce_spawn(&mut self, entity: Entity) -> EntityId {
        let classname = entity.core.classname;
        let id = self.registry.spawn(entity);
        self.outbox.push(ReplicationMessage::Spawn {
            entity: id,
            classname: classname.to_string(),
        });
        id
    }

    /// Write a user's input snapshot for the coming tick. Ignored if the
    /// entity is missing or not a user.
    pub fn set_buttons(&mut self, user: EntityId, buttons: ButtonState) {
        if let Some(entity) = self.registry.get_mut(user) {
            if let Some(state) = &mut entity.user {
                state.buttons = buttons;
            }
        }
    }

    /// Release a character's proxy at the spawn point.
    pub fn respawn(&mut self, id: EntityId) {
        if let Some(entity) = self.registry.get_mut(id) {
            entity.respawn(&mut self.physics);
        }
    }

    /// Destroy an entity immediately. Safe outside of `tick`; from game
    /// logic running during a tick, use [`Simulation::queue_destroy`].
    pub fn destroy(&mut self, id: EntityId) {
        if self.registry.destroy(id, &mut self.physics) {
            self.outbox.push(ReplicationMessage::Despawn { entity: id });
        }
    }

    /// Queue an entity for destruction at the end of the current tick,
    /// so the registry walk in progress is never corrupted.
    pub fn queue_destroy(&mut self, id: EntityId) {
        self.pending_destroy.push(id);
    }

    /// Advance the simulation by one tick.
    ///
    /// Returns the replication messages produced this tick. Delivery is
    /// the transport's problem; the simulation never waits on it.
    pub fn tick(&mut self, dt: f32) -> Vec<ReplicationMessage> {
        self.time += dt;

        // Characters pull their owner's buttons and run movement. Only
        // the controlling side simulates; a character whose owner is
        // missing, or not actually a user, idles for the tick.
        if self.side.is_client() {
            for i in 0..self.registry.len() {
                let entity = self.registry.at(i);
                if !entity.core.caps.has(Capabilities::CHARACTER) {
                    continue;
                }
                let Some(owner) = entity.character.as_ref().and_then(|c| c.owner) else {
                    continue;
                };
                let Some(buttons) = self
                    .registry
                    .get(owner)
                    .filter(|o| o.core.caps.has(Capabilities::USER))
                    .and_then(|o| o.user.as_ref())
                    .map(|u| u.buttons)
                else {
                    continue;
                };

                let time = self.time;
                self.registry.at_mut(i).think_character(
                    &self.schema,
                    &mut self.physics,
                    &buttons,
                    dt,
                    time,
                );
            }
        }

        self.physics.step(dt);

        for id in std::mem::take(&mut self.pending_destroy) {
            self.destroy(id);
        }

        self.frame += 1;

        let mut messages = std::mem::take(&mut self.outbox);
        self.drain_updates(&mut messages);
        messages
    }

    /// Collect every entity's changed fields into update messages.
    /// Fields of one entity always travel together; ordering across
    /// entities is unspecified.
    fn drain_updates(&mut self, messages: &mut Vec<ReplicationMessage>) {
        for entity in self.registry.iter_mut() {
            let dirty = entity.core.take_dirty();
            if dirty == 0 {
                continue;
            }
            let mut fields = Vec::new();
            for field in 0..self.schema.field_count(entity.core.class()) {
                if dirty & (1 << field) == 0 {
                    continue;
                }
                if let Some(value) = replicated_value(entity, &self.schema, field) {
                    fields.push((field, value));
                }
            }
            if !fields.is_empty() {
                messages.push(ReplicationMessage::Update(EntityUpdate {
                    entity: entity.core.id(),
                    fields,
                }));
            }
        }
    }
}
