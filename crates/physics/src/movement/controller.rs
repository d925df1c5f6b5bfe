//! The per-tick movement model.
//!
//! Converts a [`ButtonState`] into a new velocity and position for a
//! proxy body, once per simulation tick. The model is the classic
//! friction/accelerate split: grounded movement applies friction then
//! accelerates toward the wish direction with a deficit clamp, airborne
//! movement reuses the same acceleration with separate strafe tuning.
//!
//! Ground response works against the remembered contact from the
//! *previous* tick, not the freshly sensed one. A sensor flickering at a
//! ground boundary would otherwise alternate friction on and off every
//! frame; the one-tick lag keeps the response stable. Only the jump
//! check and the end-of-tick memory update look at the current contact.

use glam::Vec3;

use crate::body::{BodyId, GroundHit, PhysicsWorld};

use super::config::MovementConfig;
use super::state::ButtonState;

/// Committed result of one movement tick.
#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    /// Logical origin derived from the proxy: center shifted down by half
    /// the hip height.
    pub origin: Vec3,
    /// Velocity stored back into the proxy.
    pub velocity: Vec3,
    /// Whether this tick ended with an accepted ground contact.
    pub grounded: bool,
}

/// Character movement controller.
///
/// Stateless apart from its configuration. The remembered ground contact
/// lives with the caller (`ground_memory`) so one controller can drive
/// any number of bodies.
#[derive(Debug, Clone, Default)]
pub struct MovementController {
    pub config: MovementConfig,
}

impl MovementController {
    pub fn new(config: MovementConfig) -> Self {
        Self { config }
    }

    /// Accelerate toward `wish_dir` at `wish_speed`, clamped so the speed
    /// along the wish direction never exceeds `wish_speed`.
    ///
    /// Only the component along the wish direction is touched; velocity
    /// perpendicular to it passes through untouched, which is what makes
    /// strafing work. Returns a horizontal vector (y = 0).
    pub fn ground_accelerate(
        &self,
        velocity: Vec3,
        wish_dir: Vec3,
        wish_speed: f32,
        accel: f32,
        dt: f32,
        crouch: bool,
    ) -> Vec3 {
        let horizontal = Vec3::new(velocity.x, 0.0, velocity.z);

        let current_speed = horizontal.dot(wish_dir);
        let add_speed = wish_speed - current_speed;
        if add_speed <= 0.0 {
            return horizontal;
        }

        let friction_scale = self.config.ground_friction * if crouch { self.config.crouch_accel_scale } else { 1.0 };
        let mut accel_speed = accel * dt * wish_speed * friction_scale;
        if accel_speed > add_speed {
            accel_speed = add_speed;
        }

        Vec3::new(
            horizontal.x + accel_speed * wish_dir.x,
            0.0,
            horizontal.z + accel_speed * wish_dir.z,
        )
    }

    /// Apply ground friction to the horizontal velocity.
    ///
    /// Speed decays by `max(speed, deceleration) * ground_friction * dt`,
    /// clamped at zero, applied as a uniform scale so the direction never
    /// changes. Returns a horizontal vector (y = 0).
    pub fn apply_friction(&self, velocity: Vec3, dt: f32) -> Vec3 {
        let horizontal = Vec3::new(velocity.x, 0.0, velocity.z);
        let speed = horizontal.length();

        let control = if speed < self.config.deceleration {
            self.config.deceleration
        } else {
            speed
        };
        let drop = control * self.config.ground_friction * dt;

        let mut new_speed = (speed - drop).max(0.0);
        if speed > 0.0 {
            new_speed /= speed;
        }

        Vec3::new(horizontal.x * new_speed, 0.0, horizontal.z * new_speed)
    }

    /// Run one movement tick for `body`.
    ///
    /// `ground_memory` is the contact accepted on the previous tick;
    /// `hip_height` is the gap between the proxy's bottom face and the
    /// entity's logical foot line. Returns `None` without touching any
    /// state when the body is missing or anchored.
    pub fn update(
        &self,
        world: &mut PhysicsWorld,
        body: BodyId,
        ground_memory: &mut Option<u32>,
        hip_height: f32,
        buttons: &ButtonState,
        dt: f32,
    ) -> Option<MoveResult> {
        let (position, half_extents, mass) = {
            let b = world.body(body)?;
            if b.anchored {
                return None;
            }
            (b.position, b.half_extents, b.mass)
        };

        let hit = world.sense_ground(body, hip_height + 1.0);
        let mut sensed = hit;
        let mut velocity = world.body(body)?.velocity;

        // A contact sensed while the previous tick had no ground may be a
        // false positive under a body that is already falling past it:
        // reject anything below the foot line.
        if let Some(h) = &sensed {
            if ground_memory.is_none() {
                let foot = position.y - half_extents.y - hip_height;
                if h.point.y < foot {
                    sensed = None;
                }
            }
        }

        // Slope rejection: the sensor has no concept of "walkable", so
        // surfaces steeper than the configured limit count as no ground.
        if let Some(h) = &sensed {
            let angle = h.normal.angle_between(Vec3::Y).to_degrees();
            if angle > self.config.max_slope_angle {
                sensed = None;
            }
        }

        // Jumping. The boost is relative to zero: a falling body still
        // gets the full impulse, an ascending one stacks on top of it.
        if buttons.jump {
            if let Some(h) = sensed {
                velocity.y = velocity.y.max(0.0) + self.config.jump_power;

                let b = world.body_mut(body)?;
                b.position.y =
                    h.point.y + hip_height + b.half_extents.y + self.config.snap_nudge;

                // A jump always produces an airborne tick
                sensed = None;
                *ground_memory = None;
            }
        }

        // Ground movement. We must rely on the previous tick's memory to
        // know we are ACTUALLY on the ground.
        if ground_memory.is_some() {
            velocity = self.apply_friction(velocity, dt);
            let wish_speed =
                self.config
                    .target_speed(buttons.has_wish(), buttons.sprint, buttons.crouch);
            velocity = self.ground_accelerate(
                velocity,
                buttons.wish_dir,
                wish_speed,
                self.config.acceleration,
                dt,
                buttons.crouch,
            );

            // Rest exactly on the currently sensed contact height
            if let Some(h) = &hit {
                let b = world.body_mut(body)?;
                b.position.y = h.point.y + hip_height + b.half_extents.y;
            }
        }

        // Air movement: same acceleration model, strafe tuning, vertical
        // velocity preserved unchanged.
        if sensed.is_none() && buttons.has_wish() {
            let vertical = velocity.y;
            velocity = self.ground_accelerate(
                velocity,
                buttons.wish_dir,
                self.config.side_strafe_speed,
                self.config.side_strafe_accel,
                dt,
                false,
            ) + Vec3::new(0.0, vertical, 0.0);
        }

        // Hold the proxy against gravity while grounded so the integrator
        // does not fight the manual height snapping.
        let grounded = sensed.is_some();
        world.set_hold_force(
            body,
            Vec3::new(0.0, mass * world.gravity(), 0.0),
            grounded,
        );

        *ground_memory = sensed.map(|h: GroundHit| h.brush);

        let b = world.body_mut(body)?;
        b.velocity = velocity;
        let origin = b.position - Vec3::new(0.0, hip_height * 0.5, 0.0);

        Some(MoveResult {
            origin,
            velocity,
            grounded,
        })
    }
}
