//! All-pairs collision sweep
//!
//! Tests every unordered pair of a snapshot of scene objects exactly once and
//! reports the colliding ones through a callback. The sweep keeps no state
//! between calls.
//!
//! The snapshot is a slice, so the live collection cannot change while the
//! sweep runs. Callers that want to despawn objects from inside the callback
//! queue them in a side list and apply it after the sweep returns:
//!
//! ```
//! use rust2d_engine::physics::sweep_collisions;
//! use rust2d_engine::scene::{Entity, SceneObject};
//!
//! let mut objects = vec![
//!     SceneObject::collider_circle(Entity::new(1), 0.0, 0.0, 2.0),
//!     SceneObject::collider_circle(Entity::new(2), 3.0, 0.0, 2.0),
//! ];
//!
//! let mut despawn = Vec::new();
//! sweep_collisions(&objects, 0.0, |a, _b, _shrink| despawn.push(a.entity()));
//! objects.retain(|object| !despawn.contains(&object.entity()));
//!
//! assert_eq!(objects.len(), 1);
//! ```

use crate::physics::collidable::{Collidable, Tagged};
use crate::physics::collision::Shape;

/// Two objects found colliding during a sweep
///
/// The order of `entity_a` and `entity_b` follows the sweep order and has no
/// further meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair<H> {
    /// First object involved
    pub entity_a: H,
    /// Second object involved
    pub entity_b: H,
}

impl<H: Copy + Eq> CollisionPair<H> {
    /// Create a new collision pair
    pub fn new(entity_a: H, entity_b: H) -> Self {
        Self { entity_a, entity_b }
    }

    /// Check whether the collision is between the two given objects, in either order
    pub fn is_between(&self, a: H, b: H) -> bool {
        (self.entity_a == a && self.entity_b == b) || (self.entity_a == b && self.entity_b == a)
    }

    /// Check whether the given object takes part in the collision
    pub fn involves(&self, entity: H) -> bool {
        self.entity_a == entity || self.entity_b == entity
    }

    /// Get the other object involved, or `None` if `entity` is not part of the pair
    pub fn other(&self, entity: H) -> Option<H> {
        if self.entity_a == entity {
            Some(self.entity_b)
        } else if self.entity_b == entity {
            Some(self.entity_a)
        } else {
            None
        }
    }
}

/// Borrowed view of two colliding objects, as handed to a sweep callback
///
/// Unlike [`CollisionPair`] it can look at the objects themselves, so
/// collisions can be filtered by tag.
#[derive(Debug)]
pub struct ObjectCollision<'a, E> {
    /// First object involved
    pub a: &'a E,
    /// Second object involved
    pub b: &'a E,
}

impl<E> Clone for ObjectCollision<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ObjectCollision<'_, E> {}

impl<'a, E: Collidable> ObjectCollision<'a, E> {
    /// Wrap two colliding objects
    pub fn new(a: &'a E, b: &'a E) -> Self {
        Self { a, b }
    }

    /// Handles of both objects
    pub fn pair(&self) -> CollisionPair<E::Handle> {
        CollisionPair::new(self.a.handle(), self.b.handle())
    }

    /// Check whether the collision is between the two given objects, in either order
    pub fn is_between(&self, a: E::Handle, b: E::Handle) -> bool {
        self.pair().is_between(a, b)
    }

    /// Check whether the given object takes part in the collision
    pub fn involves(&self, entity: E::Handle) -> bool {
        self.pair().involves(entity)
    }

    /// Get the other object involved, or `None` if `entity` is not part of the pair
    pub fn other(&self, entity: E::Handle) -> Option<&'a E> {
        if self.a.handle() == entity {
            Some(self.b)
        } else if self.b.handle() == entity {
            Some(self.a)
        } else {
            None
        }
    }
}

impl<'a, E: Collidable + Tagged> ObjectCollision<'a, E> {
    /// Check whether either object has `tag`
    pub fn involves_tag(&self, tag: u64) -> bool {
        self.a.has_tag(tag) || self.b.has_tag(tag)
    }

    /// Get the object that has `tag`, checking `a` first
    pub fn by_tag(&self, tag: u64) -> Option<&'a E> {
        if self.a.has_tag(tag) {
            Some(self.a)
        } else if self.b.has_tag(tag) {
            Some(self.b)
        } else {
            None
        }
    }

    /// Get the object opposite the one returned by [`ObjectCollision::by_tag`]
    pub fn other_by_tag(&self, tag: u64) -> Option<&'a E> {
        if self.a.has_tag(tag) {
            Some(self.b)
        } else if self.b.has_tag(tag) {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Test every unordered pair of `entities` for collision
///
/// `on_collision` fires once per colliding pair with both objects and the
/// shrink used. Pairs of an object with itself are never tested. Returns the
/// number of colliding pairs.
pub fn sweep_collisions<E, F>(entities: &[E], shrink: f32, mut on_collision: F) -> usize
where
    E: Collidable,
    F: FnMut(&E, &E, f32),
{
    // World shapes are computed once per object, not once per pair
    let shapes: Vec<Shape> = entities.iter().map(Collidable::world_shape).collect();
    let mut collisions = 0;

    for (i, (first, first_shape)) in entities.iter().zip(&shapes).enumerate() {
        for (second, second_shape) in entities[i + 1..].iter().zip(&shapes[i + 1..]) {
            if first_shape.collides_with(second_shape, shrink) {
                collisions += 1;
                on_collision(first, second, shrink);
            }
        }
    }

    log::trace!(
        "Collision sweep: {} objects, {} colliding pairs (shrink {})",
        entities.len(),
        collisions,
        shrink
    );

    collisions
}

/// Run a sweep and collect the colliding pairs
pub fn collect_collisions<E: Collidable>(entities: &[E], shrink: f32) -> Vec<CollisionPair<E::Handle>> {
    let mut pairs = Vec::new();
    sweep_collisions(entities, shrink, |a, b, _| {
        pairs.push(CollisionPair::new(a.handle(), b.handle()));
    });
    pairs
}
