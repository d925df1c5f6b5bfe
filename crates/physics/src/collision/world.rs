//! Collision world containing static geometry.
//!
//! The collision world stores brushes and answers downward ray queries
//! against them. Ground sensing is deliberately dumb geometry: whether a
//! contact counts as walkable ground is policy owned by the movement
//! controller, not by this layer.

use glam::Vec3;
use parry3d::math::{Isometry, Point, Real, Vector};
use parry3d::query::{Ray, RayCast};
use parry3d::shape::SharedShape;

use super::flags::ContentFlags;

/// A piece of collision geometry in the world.
#[derive(Clone)]
pub struct Brush {
    /// Unique identifier for this brush.
    pub id: u32,
    /// The collision shape.
    pub shape: SharedShape,
    /// Position and orientation in world space.
    pub transform: Isometry<Real>,
    /// Content flags (solid, clip, trigger).
    pub contents: ContentFlags,
}

/// Result of a ray query against the collision world.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// World-space impact point.
    pub point: Vec3,
    /// Surface normal at the impact point, pointing away from the surface.
    pub normal: Vec3,
    /// Distance along the ray to the impact.
    pub distance: f32,
    /// Brush that was hit.
    pub brush: u32,
}

/// The collision world containing all static geometry.
///
/// Immutable after level construction; queries never mutate it.
#[derive(Default, Clone)]
pub struct CollisionWorld {
    brushes: Vec<Brush>,
    next_id: u32,
}

impl CollisionWorld {
    /// Create an empty collision world.
    pub fn new() -> Self {
        Self {
            brushes: Vec::new(),
            next_id: 0,
        }
    }

    /// Add an axis-aligned box to the world.
    ///
    /// # Arguments
    ///
    /// * `center` - Center position of the box in world space
    /// * `half_extents` - Half-size in each axis (x, y, z)
    /// * `contents` - Content flags for collision filtering
    pub fn add_box(&mut self, center: Vec3, half_extents: Vec3, contents: ContentFlags) -> u32 {
        self.push_brush(
            SharedShape::cuboid(half_extents.x, half_extents.y, half_extents.z),
            Isometry::translation(center.x, center.y, center.z),
            contents,
        )
    }

    /// Add a rotated box to the world.
    ///
    /// `axis_angle` is an axis-angle rotation vector (axis scaled by the
    /// angle in radians). Useful for ramps and slopes.
    pub fn add_box_rotated(
        &mut self,
        center: Vec3,
        half_extents: Vec3,
        axis_angle: Vec3,
        contents: ContentFlags,
    ) -> u32 {
        self.push_brush(
            SharedShape::cuboid(half_extents.x, half_extents.y, half_extents.z),
            Isometry::new(
                Vector::new(center.x, center.y, center.z),
                Vector::new(axis_angle.x, axis_angle.y, axis_angle.z),
            ),
            contents,
        )
    }

    fn push_brush(
        &mut self,
        shape: SharedShape,
        transform: Isometry<Real>,
        contents: ContentFlags,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.brushes.push(Brush {
            id,
            shape,
            transform,
            contents,
        });
        id
    }

    /// Number of brushes in the world.
    pub fn len(&self) -> usize {
        self.brushes.len()
    }

    /// Whether the world has no brushes.
    pub fn is_empty(&self) -> bool {
        self.brushes.is_empty()
    }

    /// Cast a ray straight down and return the nearest hit.
    ///
    /// Only brushes whose contents intersect `mask` are considered.
    pub fn cast_ray_down(&self, origin: Vec3, max_distance: f32, mask: ContentFlags) -> Option<RayHit> {
        let ray = Ray::new(
            Point::new(origin.x, origin.y, origin.z),
            Vector::new(0.0, -1.0, 0.0),
        );

        let mut best: Option<RayHit> = None;
        for brush in &self.brushes {
            if !brush.contents.intersects(mask) {
                continue;
            }
            let Some(hit) =
                brush
                    .shape
                    .cast_ray_and_get_normal(&brush.transform, &ray, max_distance, true)
            else {
                continue;
            };
            if best
                .as_ref()
                .map(|b| hit.time_of_impact < b.distance)
                .unwrap_or(true)
            {
                let point = ray.point_at(hit.time_of_impact);
                best = Some(RayHit {
                    point: Vec3::new(point.x, point.y, point.z),
                    normal: Vec3::new(hit.normal.x, hit.normal.y, hit.normal.z),
                    distance: hit.time_of_impact,
                    brush: brush.id,
                });
            }
        }
        best
    }
}
