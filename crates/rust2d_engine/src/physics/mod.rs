//! Physics module for collision detection and ray casting
//!
//! Provides collider shapes, an all-pairs collision sweep and finite ray
//! casts over any slice of [`Collidable`] objects.

pub mod collidable;
pub mod collision;
pub mod collision_system;
pub mod ray_cast;

#[cfg(test)]
mod tests;

pub use collidable::{Collidable, Tagged};
pub use collision::{
    Circle,
    FlipDir,
    Ray,
    RayCastHit,
    Rect,
    Shape,
};
pub use collision_system::{collect_collisions, sweep_collisions, CollisionPair, ObjectCollision};
pub use ray_cast::{cast_ray, RayCastResult};
