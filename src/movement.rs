//! Damped planar movement with collision clamping and head bob.
//!
//! Velocity is stored in the sign convention of a camera looking down its
//! local -Z: holding forward drives `z` negative and holding right drives `x`
//! negative, and the camera is translated by the negated velocity.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::camera::CameraPose;
use crate::config::{CollisionBounds, MovementConfig};
use crate::core::clock::FrameInfo;
use crate::core::controller::{Controller, Direction};
use crate::math::lerp;

/// Planar velocity, persists across ticks
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub z: f32,
}

impl Velocity {
    pub fn planar_speed(&self) -> f32 {
        (self.x * self.x + self.z * self.z).sqrt()
    }
}

/// Advance one tick of movement.
///
/// Forward/back and left/right accelerate their own axis only while a key of
/// that pair is held. Damping runs every tick. A non-positive delta leaves
/// velocity and height alone; the position clamp always runs.
pub fn integrate<C: Controller>(
    camera: &mut CameraPose,
    velocity: &mut Velocity,
    input: &C,
    frame: FrameInfo,
    config: &MovementConfig,
    bounds: &CollisionBounds,
) {
    let delta = frame.delta;
    if !(delta > 0.0) {
        camera.position = bounds.clamp(camera.position);
        return;
    }

    let direction = Vec3::new(input.lateral_axis(), 0.0, input.forward_axis()).normalize_or_zero();

    if input.is_down(Direction::Forward) || input.is_down(Direction::Back) {
        velocity.z -= direction.z * config.walk_speed * delta;
    }
    if input.is_down(Direction::Left) || input.is_down(Direction::Right) {
        velocity.x -= direction.x * config.walk_speed * delta;
    }

    // Capped at 1 so a stalled frame zeroes velocity instead of flipping it
    let decay = (config.damping * delta).min(1.0);
    velocity.x -= velocity.x * decay;
    velocity.z -= velocity.z * decay;

    camera.move_right(-velocity.x * delta);
    camera.move_forward(-velocity.z * delta);

    camera.position = bounds.clamp(camera.position);

    if velocity.planar_speed() > config.head_bob_threshold {
        let phase = frame.time * config.head_bob_frequency * TAU;
        camera.position.y = config.eye_height + phase.sin() * config.head_bob_amplitude;
    } else {
        camera.position.y = lerp(camera.position.y, config.eye_height, config.height_return);
    }
}
