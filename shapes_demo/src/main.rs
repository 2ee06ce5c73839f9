//! Shapes demo application
//!
//! Scatters circles and rectangles over a wrapping world, moves them for a
//! number of ticks, sweeps for collisions every tick and removes fragile
//! objects that ran into a wall. A horizontal ray is cast across the world after
//! each tick to report the first object in its path.
//!
//! Usage: `shapes_demo [config.toml|config.ron]` (defaults to `shapes_demo.toml`)

mod config;

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust2d_engine::foundation::logging;
use rust2d_engine::prelude::*;

use config::DemoConfig;

const FRAGILE: u64 = 1 << 0;
const WALL: u64 = 1 << 1;

/// Scatter `config.object_count` objects with random shapes and headings
fn spawn_objects(config: &DemoConfig, rng: &mut StdRng) -> Vec<SceneObject> {
    (0..config.object_count)
        .map(|i| {
            let entity = Entity::new(u32::try_from(i).unwrap_or(u32::MAX));
            let x = rng.gen_range(0.0..config.world_width);
            let y = rng.gen_range(0.0..config.world_height);

            let mut object = if rng.gen_bool(0.5) {
                let mut object = SceneObject::collider_circle(entity, x, y, rng.gen_range(3.0..12.0));
                object.set_tag(FRAGILE);
                object
            } else {
                let mut object = SceneObject::collider_rect(
                    entity,
                    x,
                    y,
                    rng.gen_range(4.0..24.0),
                    rng.gen_range(4.0..24.0),
                );
                object.set_tag(WALL);
                object
            };

            object.set_move_direction(Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)));
            object
        })
        .collect()
}

/// Move every object along its heading, wrapping at the world edges
fn advance_objects(objects: &mut [SceneObject], config: &DemoConfig) {
    for object in objects {
        object.advance(config.speed);
        let position = object.position();
        object.set_position(Vec2::new(
            position.x.rem_euclid(config.world_width),
            position.y.rem_euclid(config.world_height),
        ));
    }
}

/// Run one sweep and despawn fragile objects that ran into a wall
fn resolve_collisions(objects: &mut Vec<SceneObject>, config: &DemoConfig) -> usize {
    let mut despawn = HashSet::new();
    let collisions = sweep_collisions(objects.as_slice(), config.collision.shrink, |a, b, _shrink| {
        let collision = ObjectCollision::new(a, b);
        let Some(wall) = collision.by_tag(WALL) else {
            return;
        };
        if let Some(fragile) = collision.other_by_tag(WALL).filter(|other| other.has_tag(FRAGILE)) {
            log::trace!("{} broke against {}", fragile.entity(), wall.entity());
            despawn.insert(fragile.entity());
        }
    });

    objects.retain(|object| !despawn.contains(&object.entity()));
    collisions
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "shapes_demo.toml".to_string());
    let config = DemoConfig::load_or_default(&path)?;
    if config.world_width <= 0.0 || config.world_height <= 0.0 {
        return Err(format!(
            "world size must be positive, got {}x{}",
            config.world_width, config.world_height
        )
        .into());
    }
    log::info!("Starting shapes demo with {config:?}");

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut objects = spawn_objects(&config, &mut rng);

    let ray_y = config.world_height * 0.5;
    let ray_start = Vec2::new(0.0, ray_y);
    let ray_end = Vec2::new(config.world_width, ray_y);

    for tick in 0..config.ticks {
        advance_objects(&mut objects, &config);

        let before = objects.len();
        let collisions = resolve_collisions(&mut objects, &config);
        if collisions > 0 {
            log::info!(
                "Tick {tick}: {collisions} collisions, {} objects removed, {} left",
                before - objects.len(),
                objects.len()
            );
        }

        let hits = cast_ray(ray_start, ray_end, &objects, config.collision.sort_ray_hits);
        match hits.first_entering() {
            Some(hit) => log::debug!(
                "Tick {tick}: ray blocked by {} at {:.1} ({} hits)",
                hit.entity,
                hit.ray_offset,
                hits.len()
            ),
            None => log::debug!("Tick {tick}: ray clear"),
        }
    }

    let fragile_left = objects.iter().filter(|object| object.has_tag(FRAGILE)).count();
    log::info!(
        "Finished after {} ticks: {} objects left ({} fragile)",
        config.ticks,
        objects.len(),
        fragile_left
    );

    Ok(())
}
