//! Interpolation helpers shared by the movement integrator and transitions.

use glam::Vec3;

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Fast start, slow settle
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Smooth start and stop
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Values a transition can interpolate between
pub trait Lerp: Copy {
    fn lerp(self, target: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, target: Self, t: f32) -> Self {
        lerp(self, target, t)
    }
}

impl Lerp for Vec3 {
    fn lerp(self, target: Self, t: f32) -> Self {
        Vec3::lerp(self, target, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_cubic_endpoints_and_shape() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // Fast start: already past 0.8 at half time
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn ease_in_out_cubic_is_symmetric() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
        let a = ease_in_out_cubic(0.25);
        let b = ease_in_out_cubic(0.75);
        assert!((a + b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn clamp_and_lerp() {
        assert_eq!(clamp(7.0, -6.2, 6.2), 6.2);
        assert_eq!(clamp(-7.0, -6.2, 6.2), -6.2);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }
}
