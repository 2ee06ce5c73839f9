//! Finite ray casting against scene objects
//!
//! A ray runs from a start point to an end point and reports every boundary
//! crossing with every object's world-space collider. Hits can optionally be
//! ordered by their distance from the start.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::foundation::math::Vec2;
use crate::physics::collidable::Collidable;
use crate::physics::collision::{Ray, RayCastHit};

/// Immutable list of ray hits
///
/// Cloning shares the underlying storage; nothing can change the hits once
/// the cast has returned.
#[derive(Debug, Clone, PartialEq)]
pub struct RayCastResult<H> {
    hits: Arc<[RayCastHit<H>]>,
}

impl<H> RayCastResult<H> {
    fn from_hits(hits: Vec<RayCastHit<H>>) -> Self {
        Self { hits: hits.into() }
    }

    /// All hits, in ray order when the cast was sorted
    pub fn hits(&self) -> &[RayCastHit<H>] {
        &self.hits
    }

    /// Number of hits
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// True if the ray hit nothing
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Iterate over the hits
    pub fn iter(&self) -> std::slice::Iter<'_, RayCastHit<H>> {
        self.hits.iter()
    }

    /// First hit where the ray enters a shape
    ///
    /// Only the closest one when the cast was sorted.
    pub fn first_entering(&self) -> Option<&RayCastHit<H>> {
        self.hits.iter().find(|hit| hit.entering)
    }
}

impl<H: Copy + PartialEq> RayCastResult<H> {
    /// Hits belonging to one object
    pub fn hits_for(&self, entity: H) -> impl Iterator<Item = &RayCastHit<H>> + '_ {
        self.hits.iter().filter(move |hit| hit.entity == entity)
    }

    /// Copy the hits out into an owned vector
    pub fn into_vec(self) -> Vec<RayCastHit<H>> {
        self.hits.to_vec()
    }
}

impl<H> Default for RayCastResult<H> {
    fn default() -> Self {
        Self::from_hits(Vec::new())
    }
}

impl<'a, H> IntoIterator for &'a RayCastResult<H> {
    type Item = &'a RayCastHit<H>;
    type IntoIter = std::slice::Iter<'a, RayCastHit<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}

/// Cast a finite ray from `start` to `end` against every object in `entities`
///
/// Each object contributes zero, one or two hits in entity order. With `sort`
/// set, hits are stably ordered by ray offset, so hits at equal offsets keep
/// their entity order. A ray shorter than the normalization epsilon hits
/// nothing.
pub fn cast_ray<E: Collidable>(
    start: Vec2,
    end: Vec2,
    entities: &[E],
    sort: bool,
) -> RayCastResult<E::Handle> {
    let ray = Ray::between(start, end);
    if ray.is_degenerate() {
        log::debug!("Degenerate ray from {start:?} to {end:?}, skipping cast");
        return RayCastResult::default();
    }

    let mut hits = Vec::new();
    for entity in entities {
        hits.extend(entity.world_shape().ray_crossing(&ray).tagged(entity.handle()));
    }

    if sort {
        // Offsets are never NaN; -0.0 and 0.0 must compare equal to keep ties in order
        hits.sort_by(|a, b| a.ray_offset.partial_cmp(&b.ray_offset).unwrap_or(Ordering::Equal));
    }

    log::trace!(
        "Ray cast against {} objects: {} hits (sorted: {})",
        entities.len(),
        hits.len(),
        sort
    );

    RayCastResult::from_hits(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Entity, SceneObject};
    use approx::assert_relative_eq;

    fn horizontal(from: f32, to: f32) -> (Vec2, Vec2) {
        (Vec2::new(from, 0.0), Vec2::new(to, 0.0))
    }

    #[test]
    fn test_cast_ray_sorted() {
        // Circle centered at (20, 0) radius 2, rect spanning x in [5, 8]
        let objects = vec![
            SceneObject::collider_circle(Entity::new(1), 18.0, -2.0, 2.0),
            SceneObject::collider_rect(Entity::new(2), 5.0, -1.0, 3.0, 2.0),
        ];
        let (start, end) = horizontal(0.0, 30.0);

        let result = cast_ray(start, end, &objects, true);

        assert_eq!(result.len(), 4);
        let offsets: Vec<f32> = result.iter().map(|hit| hit.ray_offset).collect();
        assert_relative_eq!(offsets[0], 5.0, epsilon = 1e-4);
        assert_relative_eq!(offsets[1], 8.0, epsilon = 1e-4);
        assert_relative_eq!(offsets[2], 18.0, epsilon = 1e-4);
        assert_relative_eq!(offsets[3], 22.0, epsilon = 1e-4);

        let entities: Vec<Entity> = result.iter().map(|hit| hit.entity).collect();
        assert_eq!(entities, vec![Entity::new(2), Entity::new(2), Entity::new(1), Entity::new(1)]);

        let first = result.first_entering().map(|hit| hit.entity);
        assert_eq!(first, Some(Entity::new(2)));
    }

    #[test]
    fn test_cast_ray_unsorted_keeps_entity_order() {
        let objects = vec![
            SceneObject::collider_circle(Entity::new(1), 18.0, -2.0, 2.0),
            SceneObject::collider_rect(Entity::new(2), 5.0, -1.0, 3.0, 2.0),
        ];
        let (start, end) = horizontal(0.0, 30.0);

        let result = cast_ray(start, end, &objects, false);

        let entities: Vec<Entity> = result.iter().map(|hit| hit.entity).collect();
        assert_eq!(entities, vec![Entity::new(1), Entity::new(1), Entity::new(2), Entity::new(2)]);
        // Within one object the entering hit comes first
        assert!(result.hits()[0].entering);
        assert!(!result.hits()[1].entering);
    }

    #[test]
    fn test_ray_starting_inside_reports_exit_only() {
        let objects = vec![SceneObject::collider_circle(Entity::new(7), -2.0, -2.0, 2.0)];
        let (start, end) = horizontal(0.0, 10.0);

        let result = cast_ray(start, end, &objects, true);

        assert_eq!(result.len(), 1);
        let hit = result.hits()[0];
        assert!(!hit.entering);
        assert_relative_eq!(hit.ray_offset, 2.0, epsilon = 1e-5);
        assert_relative_eq!(hit.hit_point.x, 2.0, epsilon = 1e-5);
        assert!(result.first_entering().is_none());
    }

    #[test]
    fn test_ray_stops_at_end_point() {
        let objects = vec![SceneObject::collider_circle(Entity::new(1), 18.0, -2.0, 2.0)];
        let (start, end) = horizontal(0.0, 15.0);

        assert!(cast_ray(start, end, &objects, true).is_empty());
    }

    #[test]
    fn test_degenerate_ray_hits_nothing() {
        let objects = vec![SceneObject::collider_circle(Entity::new(1), -5.0, -5.0, 5.0)];
        let point = Vec2::new(0.0, 0.0);

        let result = cast_ray(point, point, &objects, true);
        assert!(result.is_empty());
    }

    #[test]
    fn test_none_collider_is_never_hit() {
        let objects = vec![SceneObject::new(Entity::new(3), Vec2::new(5.0, 0.0))];
        let (start, end) = horizontal(0.0, 30.0);

        assert!(cast_ray(start, end, &objects, false).is_empty());
    }

    #[test]
    fn test_equal_offsets_keep_entity_order() {
        // Two identical rects produce hits at the same offsets
        let objects = vec![
            SceneObject::collider_rect(Entity::new(1), 5.0, -1.0, 3.0, 2.0),
            SceneObject::collider_rect(Entity::new(2), 5.0, -1.0, 3.0, 2.0),
        ];
        let (start, end) = horizontal(0.0, 30.0);

        let result = cast_ray(start, end, &objects, true);

        let order: Vec<(Entity, bool)> = result.iter().map(|hit| (hit.entity, hit.entering)).collect();
        assert_eq!(
            order,
            vec![
                (Entity::new(1), true),
                (Entity::new(2), true),
                (Entity::new(1), false),
                (Entity::new(2), false),
            ]
        );
    }

    #[test]
    fn test_signed_zero_offsets_keep_entity_order() {
        // The circle's exit and the rect's entry both sit on the ray start.
        // The rect edge yields -0.0 while the circle yields 0.0.
        let objects = vec![
            SceneObject::collider_circle(Entity::new(1), -4.0, -2.0, 2.0),
            SceneObject::collider_rect(Entity::new(2), 0.0, -5.0, 10.0, 10.0),
        ];
        let (start, end) = horizontal(0.0, 20.0);

        let result = cast_ray(start, end, &objects, true);

        let order: Vec<(Entity, bool)> = result.iter().map(|hit| (hit.entity, hit.entering)).collect();
        assert_eq!(
            order,
            vec![
                (Entity::new(1), false),
                (Entity::new(2), true),
                (Entity::new(2), false),
            ]
        );
        assert_relative_eq!(result.hits()[1].ray_offset, 0.0);
        assert_relative_eq!(result.hits()[2].ray_offset, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_result_queries() {
        let objects = vec![
            SceneObject::collider_circle(Entity::new(1), 18.0, -2.0, 2.0),
            SceneObject::collider_rect(Entity::new(2), 5.0, -1.0, 3.0, 2.0),
        ];
        let (start, end) = horizontal(0.0, 30.0);

        let result = cast_ray(start, end, &objects, true);
        let shared = result.clone();

        assert_eq!(result.hits_for(Entity::new(1)).count(), 2);
        assert_eq!(result.hits_for(Entity::new(9)).count(), 0);
        assert_eq!((&shared).into_iter().count(), 4);
        assert_eq!(shared.into_vec().len(), 4);
        assert_eq!(result.len(), 4);
    }
}
