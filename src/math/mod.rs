mod aabb;
pub mod easing;
mod ray;

pub use aabb::AABB;
pub use easing::{clamp, ease_in_out_cubic, ease_out_cubic, lerp, Lerp};
pub use ray::Ray;
