//! # Rust 2D Engine
//!
//! The geometric core of a 2D scene engine.
//!
//! ## Features
//!
//! - **Collider Shapes**: Circles and axis-aligned rectangles with shrinkable overlap tests
//! - **Collision Sweep**: Every unordered pair of a scene snapshot tested exactly once
//! - **Ray Casting**: Finite rays reporting entering and exiting hits, optionally sorted
//! - **Configuration**: TOML/RON settings files
//!
//! ## Quick Start
//!
//! ```rust
//! use rust2d_engine::prelude::*;
//!
//! let objects = vec![
//!     SceneObject::collider_circle(Entity::new(1), 0.0, 0.0, 5.0),
//!     SceneObject::collider_rect(Entity::new(2), 8.0, 0.0, 4.0, 4.0),
//! ];
//!
//! let pairs = collect_collisions(&objects, 0.0);
//! assert_eq!(pairs.len(), 1);
//!
//! let hits = cast_ray(Vec2::new(-10.0, 2.0), Vec2::new(30.0, 2.0), &objects, true);
//! assert_eq!(hits.first_entering().map(|hit| hit.entity), Some(Entity::new(1)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod physics;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{CollisionConfig, Config, ConfigError},
        foundation::math::{Vec2, Vec2Ext},
        physics::{
            cast_ray, collect_collisions, sweep_collisions, Collidable, CollisionPair, FlipDir,
            ObjectCollision, RayCastHit, RayCastResult, Shape, Tagged,
        },
        scene::{Entity, SceneObject},
    };
}
