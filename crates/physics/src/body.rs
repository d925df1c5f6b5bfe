//! Proxy bodies and the physics world they live in.
//!
//! A body is the physical stand-in for a simulated entity: a box with
//! position, velocity and mass. The world integrates gravity for every
//! unanchored body each step; contact response is NOT handled here - the
//! movement controller snaps bodies onto accepted ground contacts and
//! keeps them there with a per-body hold force that cancels gravity.

use glam::Vec3;

use crate::collision::{CollisionWorld, ContentFlags, RayHit};

/// Handle to a proxy body in the physics world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// A ground contact sensed under a body.
#[derive(Debug, Clone, Copy)]
pub struct GroundHit {
    /// World-space contact point.
    pub point: Vec3,
    /// Surface normal at the contact.
    pub normal: Vec3,
    /// Brush the contact belongs to.
    pub brush: u32,
}

/// A physical proxy body.
#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    /// Center position in world space.
    pub position: Vec3,
    /// Linear velocity.
    pub velocity: Vec3,
    /// Half-size in each axis.
    pub half_extents: Vec3,
    pub mass: f32,
    /// An anchored body is pinned in place and skipped by integration.
    pub anchored: bool,
    hold_force: Vec3,
    hold_enabled: bool,
}

/// The physics world: static collision geometry plus proxy bodies.
pub struct PhysicsWorld {
    /// Static brush geometry.
    pub collision: CollisionWorld,
    gravity: f32,
    bodies: Vec<Body>,
    next_body: u32,
}

impl PhysicsWorld {
    /// Create a world with the given downward gravity magnitude.
    pub fn new(gravity: f32) -> Self {
        Self {
            collision: CollisionWorld::new(),
            gravity,
            bodies: Vec::new(),
            next_body: 0,
        }
    }

    /// Downward gravity magnitude.
    #[inline]
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Create a new proxy body.
    pub fn spawn_body(&mut self, position: Vec3, half_extents: Vec3, mass: f32, anchored: bool) -> BodyId {
        let id = BodyId(self.next_body);
        self.next_body += 1;
        self.bodies.push(Body {
            id,
            position,
            velocity: Vec3::ZERO,
            half_extents,
            mass,
            anchored,
            hold_force: Vec3::ZERO,
            hold_enabled: false,
        });
        log::debug!("spawned body {:?} at {:?}", id, position);
        id
    }

    /// Remove a body from the world. Removing an already-removed body is
    /// a no-op.
    pub fn remove_body(&mut self, id: BodyId) {
        self.bodies.retain(|b| b.id != id);
    }

    #[inline]
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    #[inline]
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Set the continuous force applied to a body while enabled.
    ///
    /// The movement controller uses this as a gravity-cancelling hold
    /// while a body is grounded; while disabled, gravity acts freely.
    pub fn set_hold_force(&mut self, id: BodyId, force: Vec3, enabled: bool) {
        if let Some(b) = self.body_mut(id) {
            b.hold_force = force;
            b.hold_enabled = enabled;
        }
    }

    /// Sense for ground under a body.
    ///
    /// Casts a ray from the body center downward, reaching
    /// `search_distance` past the bottom face. Returns the raw geometric
    /// contact; walkability (slope, height) is judged by the caller.
    pub fn sense_ground(&self, id: BodyId, search_distance: f32) -> Option<GroundHit> {
        let body = self.body(id)?;
        let max = body.half_extents.y + search_distance;
        let hit: RayHit =
            self.collision
                .cast_ray_down(body.position, max, ContentFlags::MASK_PLAYER_SOLID)?;
        Some(GroundHit {
            point: hit.point,
            normal: hit.normal,
            brush: hit.brush,
        })
    }

    /// Advance every unanchored body by `dt`.
    pub fn step(&mut self, dt: f32) {
        for body in &mut self.bodies {
            if body.anchored {
                continue;
            }
            let mut accel = Vec3::new(0.0, -self.gravity, 0.0);
            if body.hold_enabled && body.mass > 0.0 {
                accel += body.hold_force / body.mass;
            }
            body.velocity += accel * dt;
            body.position += body.velocity * dt;
        }
    }
}
