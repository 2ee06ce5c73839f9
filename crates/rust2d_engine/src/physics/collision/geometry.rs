//! Free-standing 2D geometry helpers
//!
//! Point containment for axis-aligned rectangles and finite segment/segment
//! intersection. Both are used by the rectangle ray cast and are public for
//! game code that needs the same tests without building a [`Shape`].
//!
//! [`Shape`]: super::Shape

use crate::foundation::math::Vec2;

/// Determinant magnitude below which two segments are treated as parallel
pub const PARALLEL_EPSILON: f32 = 1e-8;

/// Check if a point lies inside an axis-aligned rectangle
///
/// Negative width/height are normalized first by moving the origin, so a
/// rectangle may be given from any corner. All four edges are inclusive.
///
/// # Arguments
/// * `point` - Point to test
/// * `rx` - X coordinate of the rectangle's top-left corner
/// * `ry` - Y coordinate of the rectangle's top-left corner
/// * `rw` - Width of the rectangle
/// * `rh` - Height of the rectangle
pub fn point_in_aa_rect(point: Vec2, rx: f32, ry: f32, rw: f32, rh: f32) -> bool {
    let (rx, rw) = if rw < 0.0 { (rx + rw, -rw) } else { (rx, rw) };
    let (ry, rh) = if rh < 0.0 { (ry + rh, -rh) } else { (ry, rh) };

    point.x >= rx
        && point.y >= ry
        && point.x <= rx + rw
        && point.y <= ry + rh
}

/// Intersect two finite line segments `a1→a2` and `b1→b2`
///
/// Returns `Some(t)` when the segments cross in exactly one point, where `t`
/// is the fraction of the way from `a1` to `a2` (in `[0, 1]`). Returns `None`
/// when they do not cross, and also for every parallel pair (determinant
/// magnitude below [`PARALLEL_EPSILON`]), coincident overlapping segments
/// included.
pub fn intersect_segment_segment(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> Option<f32> {
    let dx_a = a1.x - a2.x;
    let dy_a = a1.y - a2.y;
    let dx_b = b1.x - b2.x;
    let dy_b = b1.y - b2.y;

    let dx_ab = a1.x - b1.x;
    let dy_ab = a1.y - b1.y;

    let denom = dx_a * dy_b - dy_a * dx_b;
    if denom.abs() < PARALLEL_EPSILON {
        // TODO: tell apart disjoint parallel, collinear-disjoint and overlapping segments
        return None;
    }

    let t = (dx_ab * dy_b - dy_ab * dx_b) / denom;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }

    let u = -(dx_a * dy_ab - dy_a * dx_ab) / denom;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    Some(t)
}
