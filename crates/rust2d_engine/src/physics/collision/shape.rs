//! High-level collision shape abstractions
//!
//! Shapes are stored in local space (relative to the owning object's
//! position) and transformed to world space on demand with
//! [`Shape::to_world`] right before a collision test or ray cast.
//!
//! Every overlap test accepts a *shrink* value: both shapes are inset by that
//! amount on all edges before testing. A small positive shrink stops objects
//! that merely touch from being reported; a negative one expands them.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;
use super::primitives::{Circle, Ray, RayCastHit, RayCrossing, Rect};

/// The direction to flip an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlipDir {
    /// Do not flip
    #[default]
    None,
    /// Mirror along the x axis
    Horizontal,
    /// Mirror along the y axis
    Vertical,
    /// Mirror along both axes
    Both,
}

/// Collision shape types
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Shape {
    /// No geometry; never collides and is never hit by rays
    #[default]
    None,
    /// A circular collision shape
    Circle(Circle),
    /// An axis-aligned rectangular collision shape
    Rect(Rect),
}

impl Shape {
    /// Creates an empty shape
    pub fn none() -> Self {
        Self::None
    }

    /// Creates a circular shape from its center and radius
    pub fn circle(center_x: f32, center_y: f32, radius: f32) -> Self {
        Self::Circle(Circle::new(Vec2::new(center_x, center_y), radius))
    }

    /// Creates a rectangular shape from its top-left corner and size
    ///
    /// A negative width or height is accepted and normalized: the rectangle
    /// then extends left/up from `(x, y)`.
    pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::Rect(Rect::new(x, y, width, height).normalized())
    }

    /// True for the empty shape
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Width of the shape (diameter for circles)
    pub fn width(&self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Circle(circle) => 2.0 * circle.radius,
            Self::Rect(rect) => rect.width,
        }
    }

    /// Height of the shape (diameter for circles)
    pub fn height(&self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Circle(circle) => 2.0 * circle.radius,
            Self::Rect(rect) => rect.height,
        }
    }

    /// Axis-aligned bounding rectangle, `None` for the empty shape
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::None => None,
            Self::Circle(circle) => Some(Rect::new(
                circle.center.x - circle.radius,
                circle.center.y - circle.radius,
                2.0 * circle.radius,
                2.0 * circle.radius,
            )),
            Self::Rect(rect) => Some(*rect),
        }
    }

    /// Transform this shape to world space
    ///
    /// `offset` is the owning object's position. `flip` is part of the
    /// transform so that asymmetric shapes can be mirrored; circles and
    /// axis-aligned rectangles look the same either way.
    pub fn to_world(&self, offset: Vec2, _flip: FlipDir) -> Self {
        match self {
            Self::None => Self::None,
            Self::Circle(circle) => Self::Circle(circle.translated(offset)),
            Self::Rect(rect) => Self::Rect(rect.translated(offset)),
        }
    }

    /// Returns a copy inset by `amount` on every edge (negative grows)
    ///
    /// No clamping happens here; a shrink larger than the shape yields a
    /// negative radius or size, which the overlap tests treat as zero.
    pub fn shrunk(&self, amount: f32) -> Self {
        match self {
            Self::None => Self::None,
            Self::Circle(circle) => Self::Circle(circle.shrunk(amount)),
            Self::Rect(rect) => Self::Rect(rect.shrunk(amount)),
        }
    }

    /// Test if this shape overlaps another after shrinking both by `shrink`
    ///
    /// Shapes that only touch do not collide. The result does not depend on
    /// operand order.
    #[allow(clippy::float_cmp)]
    pub fn collides_with(&self, other: &Shape, shrink: f32) -> bool {
        if self.is_none() || other.is_none() {
            return false;
        }

        let (a, b) = if shrink == 0.0 {
            (*self, *other)
        } else {
            (self.shrunk(shrink), other.shrunk(shrink))
        };

        match (a, b) {
            (Self::Circle(a), Self::Circle(b)) => a.intersects_circle(&b),
            (Self::Rect(a), Self::Rect(b)) => a.intersects_rect(&b),
            (Self::Circle(circle), Self::Rect(rect))
            | (Self::Rect(rect), Self::Circle(circle)) => circle.intersects_rect(&rect),
            (Self::None, _) | (_, Self::None) => false,
        }
    }

    /// Find where a ray crosses this shape's boundary
    pub fn ray_crossing(&self, ray: &Ray) -> RayCrossing {
        match self {
            Self::None => RayCrossing::NONE,
            Self::Circle(circle) => circle.cast_ray(ray),
            Self::Rect(rect) => rect.cast_ray(ray),
        }
    }

    /// Cast a ray against this shape and tag the hits with `entity`
    ///
    /// Returns zero, one or two hits; when there are two, the entering hit
    /// comes first.
    pub fn cast_ray<H: Copy>(&self, ray: &Ray, entity: H) -> Vec<RayCastHit<H>> {
        self.ray_crossing(ray).tagged(entity).collect()
    }
}
