//! Cross-module properties of the collision and ray cast layers

mod sweep_properties;

use crate::physics::collision::Shape;

/// A fixed mix of circles and rectangles around the origin, some overlapping,
/// some touching, some apart
pub(super) fn sample_shapes() -> Vec<Shape> {
    let mut shapes = vec![Shape::none()];
    for i in 0..4 {
        let offset = i as f32 * 3.0;
        shapes.push(Shape::circle(offset, 0.0, 2.0));
        shapes.push(Shape::circle(0.0, offset, 1.5));
        shapes.push(Shape::rect(offset, offset, 4.0, 2.0));
        shapes.push(Shape::rect(-offset, 1.0, 3.0, 3.0));
    }
    shapes
}
