//! Math utilities and types
//!
//! Provides the 2D vector type used by every geometric module of the engine.
//! Arithmetic, dot product and lengths come straight from nalgebra; the
//! engine-specific behaviours (guarded normalization, angle between vectors)
//! are added through [`Vec2Ext`].

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Vectors shorter than this are left untouched by [`Vec2Ext::normalize_guarded`]
pub const NORMALIZE_EPSILON: f32 = 1e-6;

/// Extension trait for Vec2 with engine conventions
pub trait Vec2Ext {
    /// Normalize in place and return the length prior to normalization.
    ///
    /// If the length is below [`NORMALIZE_EPSILON`] the vector is left
    /// unchanged and that (tiny) length is returned.
    fn normalize_guarded(&mut self) -> f32;

    /// Return a normalized copy, following the same guard as
    /// [`Vec2Ext::normalize_guarded`]
    fn normalized_guarded(&self) -> Vec2;

    /// Angle between two vectors in radians, `acos(a·b / (|a|·|b|))`.
    ///
    /// Not guarded: a zero-length operand yields `NaN`.
    fn angle_between(&self, other: &Vec2) -> f32;
}

impl Vec2Ext for Vec2 {
    fn normalize_guarded(&mut self) -> f32 {
        let length = self.norm();
        if length < NORMALIZE_EPSILON {
            return length;
        }
        *self /= length;
        length
    }

    fn normalized_guarded(&self) -> Vec2 {
        let mut copy = *self;
        copy.normalize_guarded();
        copy
    }

    fn angle_between(&self, other: &Vec2) -> f32 {
        (self.dot(other) / (self.norm() * other.norm())).acos()
    }
}

/// Math utility functions
pub mod utils {
    /// Clamp a value between min and max
    ///
    /// Unlike `f32::clamp` this never panics when `min > max`; the lower
    /// bound wins.
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_normalize_returns_previous_length() {
        let mut v = Vec2::new(3.0, 4.0);
        let length = v.normalize_guarded();

        assert_relative_eq!(length, 5.0);
        assert_relative_eq!(v.x, 0.6);
        assert_relative_eq!(v.y, 0.8);
    }

    #[test]
    fn test_normalize_tiny_vector_is_noop() {
        let mut v = Vec2::new(1e-7, 0.0);
        let length = v.normalize_guarded();

        assert!(length < NORMALIZE_EPSILON);
        assert_eq!(v, Vec2::new(1e-7, 0.0));

        let mut zero = Vec2::zeros();
        assert_eq!(zero.normalize_guarded(), 0.0);
        assert_eq!(zero, Vec2::zeros());
    }

    #[test]
    fn test_normalized_copy_leaves_original() {
        let v = Vec2::new(0.0, -2.0);
        let n = v.normalized_guarded();

        assert_eq!(v, Vec2::new(0.0, -2.0));
        assert_relative_eq!(n, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_angle_between() {
        let x = Vec2::new(1.0, 0.0);
        assert_relative_eq!(x.angle_between(&Vec2::new(0.0, 5.0)), FRAC_PI_2);
        assert_relative_eq!(x.angle_between(&Vec2::new(-2.0, 0.0)), PI);
        assert_relative_eq!(x.angle_between(&Vec2::new(7.0, 0.0)), 0.0);
    }

    #[test]
    fn test_angle_with_zero_vector_is_nan() {
        let x = Vec2::new(1.0, 0.0);
        assert!(x.angle_between(&Vec2::zeros()).is_nan());
    }

    #[test]
    fn test_vector_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);

        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_relative_eq!(a.dot(&b), 1.0);
        assert_relative_eq!(b.norm_squared(), 10.0);
    }

    #[test]
    fn test_clamp_prefers_lower_bound() {
        assert_eq!(utils::clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(utils::clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(utils::clamp(11.0, 0.0, 10.0), 10.0);
        assert_eq!(utils::clamp(3.0, 4.0, 2.0), 4.0);
    }
}
