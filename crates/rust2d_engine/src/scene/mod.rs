//! Scene objects and their handles

pub mod entity;
pub mod scene_object;

pub use entity::Entity;
pub use scene_object::SceneObject;
