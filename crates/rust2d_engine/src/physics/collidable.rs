//! Read-only view of a positioned scene object
//!
//! The collision sweep and the ray caster never own or mutate scene objects.
//! They only need a handle to report back, a local-space shape, a position
//! and a flip state, which is exactly what [`Collidable`] exposes. Objects
//! that also carry tag bits implement [`Tagged`] so collisions can be
//! filtered by tag.

use std::fmt::Debug;

use crate::foundation::math::Vec2;
use crate::physics::collision::{FlipDir, Shape};

/// Anything with a collider that can be placed in the world
pub trait Collidable {
    /// Non-owning reference reported in collisions and ray hits
    type Handle: Copy + Eq + Debug;

    /// Handle identifying this object
    fn handle(&self) -> Self::Handle;

    /// Collider in local space (relative to [`Collidable::position`])
    fn local_shape(&self) -> Shape;

    /// World position of the object
    fn position(&self) -> Vec2;

    /// Flip state applied when transforming to world space
    fn flip(&self) -> FlipDir {
        FlipDir::None
    }

    /// Collider in world space
    fn world_shape(&self) -> Shape {
        self.local_shape().to_world(self.position(), self.flip())
    }

    /// Check whether this object collides with another
    fn collides<O: Collidable + ?Sized>(&self, other: &O, shrink: f32) -> bool
    where
        Self: Sized,
    {
        self.world_shape().collides_with(&other.world_shape(), shrink)
    }
}

impl<T: Collidable + ?Sized> Collidable for &T {
    type Handle = T::Handle;

    fn handle(&self) -> Self::Handle {
        (**self).handle()
    }

    fn local_shape(&self) -> Shape {
        (**self).local_shape()
    }

    fn position(&self) -> Vec2 {
        (**self).position()
    }

    fn flip(&self) -> FlipDir {
        (**self).flip()
    }

    fn world_shape(&self) -> Shape {
        (**self).world_shape()
    }
}

/// Objects carrying a set of tag bits
///
/// A tag is a single bit flag; several tags can be combined with `|` in the
/// `*_tags` queries.
pub trait Tagged {
    /// All tag bits
    fn tags(&self) -> u64;

    /// Alias for [`Tagged::has_any_tags`]
    fn has_tag(&self, tag: u64) -> bool {
        self.has_any_tags(tag)
    }

    /// True if every bit of `tags` is set
    fn has_all_tags(&self, tags: u64) -> bool {
        self.tags() & tags == tags
    }

    /// True if at least one bit of `tags` is set
    fn has_any_tags(&self, tags: u64) -> bool {
        self.tags() & tags != 0
    }
}

impl<T: Tagged + ?Sized> Tagged for &T {
    fn tags(&self) -> u64 {
        (**self).tags()
    }
}
