//! Demo settings

use rust2d_engine::config::{CollisionConfig, Config, Deserialize, Serialize};

/// Settings for one demo run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of objects scattered at start
    pub object_count: usize,
    /// Number of simulation ticks to run
    pub ticks: u32,
    /// World width; objects wrap around at the edges
    pub world_width: f32,
    /// World height; objects wrap around at the edges
    pub world_height: f32,
    /// Distance every object moves per tick
    pub speed: f32,
    /// Seed for object placement
    pub seed: u64,
    /// Sweep and ray cast settings
    pub collision: CollisionConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            object_count: 24,
            ticks: 60,
            world_width: 256.0,
            world_height: 192.0,
            speed: 1.0,
            seed: 1,
            collision: CollisionConfig::default(),
        }
    }
}

impl Config for DemoConfig {}
