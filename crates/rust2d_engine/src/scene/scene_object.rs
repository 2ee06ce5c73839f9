//! Positioned objects carrying a collider
//!
//! A [`SceneObject`] is plain data: an entity handle, a position, a flip
//! state, a move direction, a local-space collider and a set of tag bits. It
//! implements [`Collidable`] so slices of scene objects can be swept and ray
//! cast directly, and [`Tagged`] for the tag queries.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Vec2, Vec2Ext};
use crate::physics::collidable::{Collidable, Tagged};
use crate::physics::collision::{FlipDir, Shape};
use super::entity::Entity;

/// An object placed in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    entity: Entity,
    position: Vec2,
    #[serde(default)]
    flip: FlipDir,
    #[serde(default)]
    move_direction: Vec2,
    #[serde(default)]
    collider: Shape,
    #[serde(default)]
    tags: u64,
}

impl SceneObject {
    /// Create an object without a collider at `position`
    pub fn new(entity: Entity, position: Vec2) -> Self {
        Self {
            entity,
            position,
            flip: FlipDir::None,
            move_direction: Vec2::zeros(),
            collider: Shape::None,
            tags: 0,
        }
    }

    /// Create an object with the given local-space collider
    pub fn with_collider(entity: Entity, position: Vec2, collider: Shape) -> Self {
        Self { collider, ..Self::new(entity, position) }
    }

    /// Create an object with a circular collider of radius `radius`
    ///
    /// `(x, y)` is the top-left corner of the circle's bounding box, so the
    /// collider is centered at `(radius, radius)` in local space.
    pub fn collider_circle(entity: Entity, x: f32, y: f32, radius: f32) -> Self {
        Self::with_collider(entity, Vec2::new(x, y), Shape::circle(radius, radius, radius))
    }

    /// Create an object with a rectangular collider
    ///
    /// A negative width or height moves `(x, y)` so the object still covers
    /// the same area, and the collider starts at the local origin.
    pub fn collider_rect(entity: Entity, x: f32, y: f32, width: f32, height: f32) -> Self {
        let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
        let (y, height) = if height < 0.0 { (y + height, -height) } else { (y, height) };
        Self::with_collider(entity, Vec2::new(x, y), Shape::rect(0.0, 0.0, width, height))
    }

    /// Get the entity handle
    pub fn entity(&self) -> Entity {
        self.entity
    }

    /// Get the local-space collider
    pub fn collider(&self) -> Shape {
        self.collider
    }

    /// Replace the local-space collider
    pub fn set_collider(&mut self, collider: Shape) {
        self.collider = collider;
    }

    /// Set the position (top-left of the object)
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Move the object by `delta`
    pub fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Get the stored move direction (unit length or zero)
    pub fn move_direction(&self) -> Vec2 {
        self.move_direction
    }

    /// Store a move direction; it is normalized, and a near-zero vector stays as given
    ///
    /// This alone does not move the object, see [`SceneObject::advance`].
    pub fn set_move_direction(&mut self, direction: Vec2) {
        self.move_direction = direction.normalized_guarded();
    }

    /// Move `speed` units along the stored move direction
    pub fn advance(&mut self, speed: f32) {
        self.move_by(self.move_direction * speed);
    }

    /// Set the flip state
    pub fn set_flip(&mut self, flip: FlipDir) {
        self.flip = flip;
    }

    /// Width of the collider
    pub fn width(&self) -> f32 {
        self.collider.width()
    }

    /// Height of the collider
    pub fn height(&self) -> f32 {
        self.collider.height()
    }

    /// Width and height of the collider
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// Position plus half the collider size
    pub fn center(&self) -> Vec2 {
        self.position + self.size() * 0.5
    }

    /// True if this object's center is left of the other's
    pub fn is_left_of(&self, other: &SceneObject) -> bool {
        self.center().x < other.center().x
    }

    /// True if this object's center is right of the other's
    pub fn is_right_of(&self, other: &SceneObject) -> bool {
        other.is_left_of(self)
    }

    /// True if this object's center is above the other's (smaller y)
    pub fn is_above(&self, other: &SceneObject) -> bool {
        self.center().y < other.center().y
    }

    /// True if this object's center is below the other's
    pub fn is_below(&self, other: &SceneObject) -> bool {
        other.is_above(self)
    }

    /// Enable the given tag bits
    pub fn set_tag(&mut self, tag: u64) -> &mut Self {
        self.tags |= tag;
        self
    }

    /// Disable the given tag bits
    pub fn unset_tag(&mut self, tag: u64) -> &mut Self {
        self.tags &= !tag;
        self
    }
}

impl Tagged for SceneObject {
    fn tags(&self) -> u64 {
        self.tags
    }
}

impl Collidable for SceneObject {
    type Handle = Entity;

    fn handle(&self) -> Entity {
        self.entity
    }

    fn local_shape(&self) -> Shape {
        self.collider
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn flip(&self) -> FlipDir {
        self.flip
    }
}
