//! Primitive collision shapes and intersection algorithms
//!
//! Provides the 2D primitives (circles, axis-aligned rectangles, finite rays)
//! with their pairwise overlap tests and ray crossing algorithms.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{utils, Vec2, Vec2Ext, NORMALIZE_EPSILON};
use super::geometry::{intersect_segment_segment, point_in_aa_rect};

/// A finite ray (directed line segment) for ray casting
///
/// Unlike a mathematical ray it never extends past `length`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The start point of the ray in world space
    pub origin: Vec2,
    /// The direction of the ray (unit length unless the ray is degenerate)
    pub direction: Vec2,
    /// Distance from the origin to the end point
    pub length: f32,
}

impl Ray {
    /// Creates a ray from an origin, a unit direction and a length
    pub fn new(origin: Vec2, direction: Vec2, length: f32) -> Self {
        Self { origin, direction, length }
    }

    /// Creates the ray running from `start` to `end`
    pub fn between(start: Vec2, end: Vec2) -> Self {
        let mut direction = end - start;
        let length = direction.normalize_guarded();
        Self { origin: start, direction, length }
    }

    /// True if the ray is too short to have a usable direction
    pub fn is_degenerate(&self) -> bool {
        self.length < NORMALIZE_EPSILON
    }

    /// Get the end point of the ray
    pub fn end(&self) -> Vec2 {
        self.point_at(self.length)
    }

    /// Get a point along the ray at distance `offset` from the origin
    pub fn point_at(&self, offset: f32) -> Vec2 {
        self.origin + self.direction * offset
    }

    /// Build a crossing point at `offset`, if it lies on the ray (`[0, length]`)
    fn crossing_at(&self, offset: f32) -> Option<RayPoint> {
        (0.0..=self.length).contains(&offset).then(|| RayPoint {
            offset,
            point: self.point_at(offset),
        })
    }
}

/// A single point where a ray crosses a shape boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayPoint {
    /// Distance from the ray origin, in `[0, ray.length]`
    pub offset: f32,
    /// The crossing point in world space
    pub point: Vec2,
}

/// Boundary crossings of one ray with one shape
///
/// A convex shape is entered at most once and exited at most once by a
/// finite ray, so each slot holds at most one point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RayCrossing {
    /// Where the ray enters the shape
    pub enter: Option<RayPoint>,
    /// Where the ray leaves the shape
    pub exit: Option<RayPoint>,
}

impl RayCrossing {
    /// No crossing at all
    pub const NONE: Self = Self { enter: None, exit: None };

    /// Number of crossings (0, 1 or 2)
    pub fn count(&self) -> usize {
        usize::from(self.enter.is_some()) + usize::from(self.exit.is_some())
    }

    /// True if the ray never crosses the boundary
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Iterate crossings as `(entering, point)`, entry first
    pub fn iter(&self) -> impl Iterator<Item = (bool, RayPoint)> {
        self.enter
            .map(|p| (true, p))
            .into_iter()
            .chain(self.exit.map(|p| (false, p)))
    }

    /// Attach an entity handle to every crossing
    pub fn tagged<H: Copy>(&self, entity: H) -> impl Iterator<Item = RayCastHit<H>> {
        self.iter().map(move |(entering, p)| RayCastHit {
            entity,
            entering,
            hit_point: p.point,
            ray_offset: p.offset,
        })
    }
}

/// Result of a ray intersection test, tagged with the entity that was hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayCastHit<H> {
    /// The entity that was hit
    pub entity: H,
    /// True if the ray enters the shape here, false if it leaves it
    pub entering: bool,
    /// The point of intersection in world space
    pub hit_point: Vec2,
    /// Distance from the ray start to the hit point (not normalized)
    pub ray_offset: f32,
}

/// A circle for collision detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// The center position of the circle
    pub center: Vec2,
    /// The radius of the circle (may be negative after an oversized shrink)
    pub radius: f32,
}

impl Circle {
    /// Creates a new circle with the given center and radius
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Radius used by the intersection tests; negative radii count as zero
    pub fn effective_radius(&self) -> f32 {
        self.radius.max(0.0)
    }

    /// Copy moved by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.center + offset, self.radius)
    }

    /// Copy with the radius reduced by `amount` (negative grows)
    pub fn shrunk(&self, amount: f32) -> Self {
        Self::new(self.center, self.radius - amount)
    }

    /// Check if this circle overlaps another; touching circles do not
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        let distance = (other.center - self.center).norm();
        distance < self.effective_radius() + other.effective_radius()
    }

    /// Check if this circle overlaps a rectangle; touching does not count
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        let closest = rect.collapsed().closest_point(self.center);
        (self.center - closest).norm() < self.effective_radius()
    }

    /// Find where a ray crosses this circle
    pub fn cast_ray(&self, ray: &Ray) -> RayCrossing {
        let radius = self.effective_radius();
        let to_center = self.center - ray.origin;

        // Projection of the center onto the ray line, and the perpendicular
        // distance |to_center|·sin(angle) written as a 2D cross product so a
        // ray starting at the center does not produce NaN.
        let along = to_center.dot(&ray.direction);
        let distance = ray.direction.perp(&to_center).abs();

        if distance.is_nan() || distance > radius {
            return RayCrossing::NONE;
        }

        let half_chord = (radius * radius - distance * distance).max(0.0).sqrt();
        RayCrossing {
            enter: ray.crossing_at(along - half_chord),
            exit: ray.crossing_at(along + half_chord),
        }
    }
}

/// An axis-aligned rectangle for collision detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the top-left corner
    pub x: f32,
    /// Y coordinate of the top-left corner
    pub y: f32,
    /// Width (may be negative after an oversized shrink)
    pub width: f32,
    /// Height (may be negative after an oversized shrink)
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle exactly as given
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Copy with negative width/height flipped to positive, keeping the
    /// covered area (the origin moves to the true top-left corner)
    pub fn normalized(&self) -> Self {
        let (x, width) = if self.width < 0.0 { (self.x + self.width, -self.width) } else { (self.x, self.width) };
        let (y, height) = if self.height < 0.0 { (self.y + self.height, -self.height) } else { (self.y, self.height) };
        Self { x, y, width, height }
    }

    /// Copy with negative dimensions collapsed to zero around the center
    ///
    /// This is how a rectangle shrunk past its own size is interpreted by
    /// the overlap tests.
    pub fn collapsed(&self) -> Self {
        let (x, width) = if self.width < 0.0 { (self.x + self.width * 0.5, 0.0) } else { (self.x, self.width) };
        let (y, height) = if self.height < 0.0 { (self.y + self.height * 0.5, 0.0) } else { (self.y, self.height) };
        Self { x, y, width, height }
    }

    /// X coordinate of the right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Copy moved by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Copy inset by `amount` on all four sides (negative grows)
    pub fn shrunk(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - 2.0 * amount,
            self.height - 2.0 * amount,
        )
    }

    /// Check if a point lies inside the rectangle (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point_in_aa_rect(point, self.x, self.y, self.width, self.height)
    }

    /// Get the point of the rectangle closest to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            utils::clamp(point.x, self.x, self.right()),
            utils::clamp(point.y, self.y, self.bottom()),
        )
    }

    /// Check if this rectangle overlaps another; touching edges do not count
    pub fn intersects_rect(&self, other: &Rect) -> bool {
        let a = self.collapsed();
        let b = other.collapsed();
        a.x < b.right()
            && a.right() > b.x
            && a.y < b.bottom()
            && a.bottom() > b.y
    }

    /// The four boundary edges: top, right, bottom, left
    pub fn edges(&self) -> [(Vec2, Vec2); 4] {
        let top_left = Vec2::new(self.x, self.y);
        let top_right = Vec2::new(self.right(), self.y);
        let bottom_right = Vec2::new(self.right(), self.bottom());
        let bottom_left = Vec2::new(self.x, self.bottom());
        [
            (top_left, top_right),
            (top_right, bottom_right),
            (bottom_right, bottom_left),
            (bottom_left, top_left),
        ]
    }

    /// Find where a ray crosses this rectangle's boundary
    ///
    /// A ray lying entirely inside the rectangle crosses nothing and reports
    /// no hits.
    pub fn cast_ray(&self, ray: &Ray) -> RayCrossing {
        let end = ray.end();
        let mut fractions = [0.0_f32; 2];
        let mut count = 0;

        for (edge_start, edge_end) in self.edges() {
            if let Some(t) = intersect_segment_segment(ray.origin, end, edge_start, edge_end) {
                fractions[count] = t;
                count += 1;
                // A convex shape cannot be crossed more than twice
                if count == fractions.len() {
                    break;
                }
            }
        }

        let at = |t: f32| {
            let offset = t * ray.length;
            RayPoint { offset, point: ray.point_at(offset) }
        };

        match count {
            0 => RayCrossing::NONE,
            1 => {
                let point = at(fractions[0]);
                if self.contains_point(ray.origin) {
                    RayCrossing { enter: None, exit: Some(point) }
                } else {
                    RayCrossing { enter: Some(point), exit: None }
                }
            }
            _ => {
                let (near, far) = if fractions[0] <= fractions[1] {
                    (fractions[0], fractions[1])
                } else {
                    (fractions[1], fractions[0])
                };
                RayCrossing { enter: Some(at(near)), exit: Some(at(far)) }
            }
        }
    }
}
