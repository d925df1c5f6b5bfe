//! Static collision geometry and ray queries.

mod flags;
mod world;

pub use flags::ContentFlags;
pub use world::{Brush, CollisionWorld, RayHit};
