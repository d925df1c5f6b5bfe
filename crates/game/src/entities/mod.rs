//! Entity model: registry, capability tagging, lifecycle.
//!
//! An entity is plain data composed from capability parts (health,
//! movement, character, user). Instead of a type hierarchy, each entity
//! carries a capability tag set that grows as parts are layered on and
//! never shrinks, so "is this thing damageable" is a bit test rather
//! than a downcast.
//!
//! The registry owns every live entity, issues process-unique ids, and
//! runs deletion hooks exactly once on destruction. It is owned by the
//! simulation driver; there is no ambient global store.

mod character;
mod health;
mod movement;
mod user;

pub use character::{CharacterState, SPAWN_POSITION};
pub use health::HealthState;
pub use movement::{MovementState, ENTITY_SIZE, PROXY_HALF_EXTENTS};
pub use user::UserState;

use emberfall_physics::{BodyId, MovementConfig, PhysicsWorld};
use emberfall_protocol::{ClassId, SchemaRegistry};

pub use emberfall_protocol::EntityId;

use crate::simulation::Side;

/// Capability tags carried by an entity.
///
/// Tags are additive: once a capability is composed onto an entity its
/// tag is never removed. Stored as a bit set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities(pub u16);

impl Capabilities {
    /// Base entity: identity, replication, lifecycle.
    pub const WORLD: u16 = 1 << 0;

    /// Carries health state and accepts damage.
    pub const HEALTH: u16 = 1 << 1;

    /// Has a physical proxy and runs the movement model.
    pub const MOVEMENT: u16 = 1 << 2;

    /// Player-controllable character.
    pub const CHARACTER: u16 = 1 << 3;

    /// A connected user; the owner side of a character.
    pub const USER: u16 = 1 << 4;

    /// Check if a tag is present.
    #[inline]
    pub fn has(self, cap: u16) -> bool {
        (self.0 & cap) != 0
    }

    /// Add a tag. Tags are never removed.
    #[inline]
    pub fn add(&mut self, cap: u16) {
        self.0 |= cap;
    }
}

/// State shared by every entity regardless of its capabilities.
pub struct EntityCore {
    id: EntityId,
    pub classname: &'static str,
    pub caps: Capabilities,
    class: ClassId,
    dirty: u32,
    attached: Vec<BodyId>,
    on_delete: Vec<Box<dyn FnOnce()>>,
}

impl EntityCore {
    fn new(class: ClassId, classname: &'static str) -> Self {
        let mut caps = Capabilities::default();
        caps.add(Capabilities::WORLD);
        Self {
            id: EntityId(0),
            classname,
            caps,
            class,
            dirty: 0,
            attached: Vec::new(),
            on_delete: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[inline]
    pub fn class(&self) -> ClassId {
        self.class
    }

    /// Mark a replicated field as changed this tick.
    ///
    /// Marking a field the class never declared is a programmer error
    /// and trips a debug assertion.
    pub fn mark_dirty(&mut self, schema: &SchemaRegistry, field: &str) {
        match schema.field_id(self.class, field) {
            Some(id) => self.dirty |= 1 << id,
            None => debug_assert!(
                false,
                "field {field} is not replicated for {}",
                self.classname
            ),
        }
    }

    /// Take and clear the dirty field mask.
    pub fn take_dirty(&mut self) -> u32 {
        std::mem::take(&mut self.dirty)
    }

    /// Bind a physics body's lifetime to this entity: the body is
    /// destroyed when the entity is, and only then.
    pub fn attach(&mut self, body: BodyId) {
        self.attached.push(body);
    }

    /// Register a cleanup hook to run when the entity is destroyed.
    /// Hooks run in registration order, exactly once.
    pub fn on_delete(&mut self, hook: impl FnOnce() + 'static) {
        self.on_delete.push(Box::new(hook));
    }
}

impl std::fmt::Debug for EntityCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityCore")
            .field("id", &self.id)
            .field("classname", &self.classname)
            .field("caps", &self.caps)
            .finish()
    }
}

/// A simulated entity: core identity plus optional capability parts.
#[derive(Debug)]
pub struct Entity {
    pub core: EntityCore,
    pub health: Option<HealthState>,
    pub movement: Option<MovementState>,
    pub character: Option<CharacterState>,
    pub user: Option<UserState>,
}

impl Entity {
    fn base(class: ClassId, classname: &'static str) -> Self {
        Self {
            core: EntityCore::new(class, classname),
            health: None,
            movement: None,
            character: None,
            user: None,
        }
    }

    fn with_health(mut self) -> Self {
        self.health = Some(HealthState::new());
        self.core.caps.add(Capabilities::HEALTH);
        self
    }

    fn with_movement(mut self, side: Side, physics: &mut PhysicsWorld, config: MovementConfig) -> Self {
        let mut movement = MovementState::new(config);
        // The proxy exists only on the side that simulates; it spawns
        // parked and anchored until the character is placed in the world.
        if side.is_client() {
            let body = physics.spawn_body(
                movement::PARK_POSITION,
                PROXY_HALF_EXTENTS,
                1.0,
                true,
            );
            movement.body = Some(body);
            self.core.attach(body);
        }
        self.movement = Some(movement);
        self.core.caps.add(Capabilities::MOVEMENT);
        self
    }

    fn with_character(mut self) -> Self {
        self.character = Some(CharacterState::default());
        self.core.caps.add(Capabilities::CHARACTER);
        self
    }

    fn with_user(mut self) -> Self {
        self.user = Some(UserState::default());
        self.core.caps.add(Capabilities::USER);
        self
    }

    /// A bare world entity.
    pub fn new_world(classes: &Classes) -> Self {
        Self::base(classes.world, "WorldEntity")
    }

    /// An entity that carries health and accepts damage.
    pub fn new_health(classes: &Classes) -> Self {
        Self::base(classes.health, "HealthEntity").with_health()
    }

    /// A connected user; owns a character's input.
    pub fn new_user(classes: &Classes) -> Self {
        Self::base(classes.user, "UserEntity").with_user()
    }

    /// A controllable character: health + movement + owner reference.
    pub fn new_character(
        classes: &Classes,
        side: Side,
        physics: &mut PhysicsWorld,
        config: MovementConfig,
    ) -> Self {
        Self::base(classes.character, "CharacterEntity")
            .with_health()
            .with_movement(side, physics, config)
            .with_character()
    }
}

/// Class ids for every built-in entity class.
///
/// Replicated fields are declared here, once, in composition order; the
/// schema registry rejects duplicates at registration time.
#[derive(Debug, Clone, Copy)]
pub struct Classes {
    pub world: ClassId,
    pub health: ClassId,
    pub character: ClassId,
    pub user: ClassId,
}

impl Classes {
    pub fn register(schema: &mut SchemaRegistry) -> Self {
        Self {
            world: schema.register("WorldEntity", &[]),
            health: schema.register("HealthEntity", &["health", "maxhealth"]),
            character: schema.register(
                "CharacterEntity",
                &["health", "maxhealth", "origin", "velocity", "owner"],
            ),
            user: schema.register("UserEntity", &[]),
        }
    }
}

/// The set of live entities.
pub struct Registry {
    next_id: u32,
    entities: Vec<Entity>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            entities: Vec::new(),
        }
    }

    /// Take ownership of an entity and issue it a fresh unique id.
    pub fn spawn(&mut self, mut entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        entity.core.id = id;
        log::debug!("spawn {} as {:?}", entity.core.classname, id);
        self.entities.push(entity);
        id
    }

    /// Destroy an entity: run its deletion hooks exactly once, release
    /// its attached bodies, drop the id mapping. Destroying an
    /// already-destroyed id is a no-op; destroying an id that was never
    /// issued is a programmer error.
    ///
    /// Returns whether an entity was actually removed.
    pub fn destroy(&mut self, id: EntityId, physics: &mut PhysicsWorld) -> bool {
        assert!(
            id.0 != 0 && id.0 < self.next_id,
            "destroyed an entity id that was never issued: {id:?}"
        );
        let Some(index) = self.entities.iter().position(|e| e.core.id == id) else {
            return false;
        };
        let mut entity = self.entities.remove(index);
        log::debug!("destroy {} ({:?})", entity.core.classname, id);
        for hook in entity.core.on_delete.drain(..) {
            hook();
        }
        for body in entity.core.attached.drain(..) {
            physics.remove_body(body);
        }
        true
    }

    #[inline]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.core.id == id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.core.id == id)
    }

    /// Capability query: does the entity exist and carry this tag?
    pub fn is_a(&self, id: EntityId, cap: u16) -> bool {
        self.get(id).map(|e| e.core.caps.has(cap)).unwrap_or(false)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[inline]
    pub fn at(&self, index: usize) -> &Entity {
        &self.entities[index]
    }

    #[inline]
    pub fn at_mut(&mut self, index: usize) -> &mut Entity {
        &mut self.entities[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }
}
