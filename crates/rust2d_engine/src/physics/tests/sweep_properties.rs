//! Sweep and ray cast properties over whole object sets

use std::collections::HashSet;

use super::sample_shapes;
use crate::foundation::math::Vec2;
use crate::physics::collidable::Collidable;
use crate::physics::collision_system::{collect_collisions, sweep_collisions};
use crate::physics::ray_cast::cast_ray;
use crate::scene::{Entity, SceneObject};

fn sample_objects() -> Vec<SceneObject> {
    sample_shapes()
        .into_iter()
        .enumerate()
        .map(|(i, shape)| {
            let id = u32::try_from(i).unwrap_or(u32::MAX);
            let position = Vec2::new((i % 3) as f32, (i % 5) as f32 * 0.5);
            SceneObject::with_collider(Entity::new(id), position, shape)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_reports_each_colliding_pair_once() {
        let objects = sample_objects();

        // Brute force over ordered pairs, normalized to (low id, high id)
        let mut expected = HashSet::new();
        for a in &objects {
            for b in &objects {
                if a.entity() < b.entity() && a.collides(b, 0.0) {
                    expected.insert((a.entity(), b.entity()));
                }
            }
        }

        let mut seen = Vec::new();
        let count = sweep_collisions(&objects, 0.0, |a, b, _| {
            assert_ne!(a.entity(), b.entity(), "object paired with itself");
            seen.push((a.entity().min(b.entity()), a.entity().max(b.entity())));
        });

        let unique: HashSet<_> = seen.iter().copied().collect();
        assert_eq!(count, seen.len());
        assert_eq!(unique.len(), seen.len(), "a pair was reported twice");
        assert_eq!(unique, expected);
        assert!(!expected.is_empty());
    }

    #[test]
    fn test_sweep_result_ignores_object_order() {
        let objects = sample_objects();
        let mut reversed = objects.clone();
        reversed.reverse();

        let normalize = |objects: &[SceneObject]| -> HashSet<(Entity, Entity)> {
            collect_collisions(objects, 0.0)
                .into_iter()
                .map(|pair| (pair.entity_a.min(pair.entity_b), pair.entity_a.max(pair.entity_b)))
                .collect()
        };

        assert_eq!(normalize(&objects), normalize(&reversed));
    }

    #[test]
    fn test_despawn_through_side_list() {
        let mut objects = sample_objects();
        let before = objects.len();

        let mut despawn = HashSet::new();
        sweep_collisions(&objects, 0.0, |a, b, _| {
            despawn.insert(a.handle());
            despawn.insert(b.handle());
        });
        objects.retain(|object| !despawn.contains(&object.entity()));

        assert_eq!(objects.len(), before - despawn.len());
        // Nothing left collides after the sweep's participants are gone
        let remaining = collect_collisions(&objects, 0.0);
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_sorted_cast_is_stable_and_ordered() {
        let objects = sample_objects();
        let start = Vec2::new(-20.0, 1.5);
        let end = Vec2::new(30.0, 1.5);

        let first = cast_ray(start, end, &objects, true);
        let second = cast_ray(start, end, &objects, true);

        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert!(first
            .hits()
            .windows(2)
            .all(|pair| pair[0].ray_offset <= pair[1].ray_offset));
    }

    #[test]
    fn test_sorted_cast_is_a_permutation_of_unsorted() {
        let objects = sample_objects();
        let start = Vec2::new(1.0, -20.0);
        let end = Vec2::new(1.0, 30.0);

        let sorted = cast_ray(start, end, &objects, true);
        let unsorted = cast_ray(start, end, &objects, false);

        assert_eq!(sorted.len(), unsorted.len());
        for hit in unsorted.iter() {
            assert!(sorted.iter().any(|other| other == hit));
        }
        for hit in sorted.iter() {
            assert!(hit.ray_offset >= 0.0 && hit.ray_offset <= 50.0 + 1e-3);
        }
    }
}
