//! Narrow-phase collision geometry
//!
//! # Architecture
//!
//! - **Local Space Storage**: Shapes are stored relative to their owner
//! - **On-Demand Transformation**: Shapes are moved to world space only for tests
//! - **Value Semantics**: Every transform returns a new shape; nothing mutates in place
//!
//! # Module Organization
//!
//! - [`geometry`] - Free-standing point/segment helpers
//! - [`primitives`] - Circles, rectangles and finite rays with their algorithms
//! - [`shape`] - The [`Shape`] sum type dispatching to the primitives

pub mod geometry;
pub mod primitives;
pub mod shape;

// Re-export commonly used types
pub use geometry::{intersect_segment_segment, point_in_aa_rect, PARALLEL_EPSILON};
pub use primitives::{Circle, Ray, RayCastHit, RayCrossing, RayPoint, Rect};
pub use shape::{FlipDir, Shape};
