//! First-person player: camera pose, velocity, held keys and pointer capture
//! owned together and advanced once per frame.

use glam::Vec3;

use crate::camera::CameraPose;
use crate::capture::{CaptureSignal, CaptureState, PointerCapture, ReleaseReason};
use crate::config::{CollisionBounds, MovementConfig};
use crate::core::clock::FrameInfo;
use crate::core::controller::{Direction, InputState};
use crate::movement::{self, Velocity};

#[derive(Debug, Clone)]
pub struct PlayerController {
    camera: CameraPose,
    velocity: Velocity,
    input: InputState,
    capture: PointerCapture,
    movement: MovementConfig,
    bounds: CollisionBounds,
}

impl PlayerController {
    pub fn new(position: Vec3, movement: MovementConfig, bounds: CollisionBounds) -> Self {
        Self {
            camera: CameraPose::new(position),
            velocity: Velocity::default(),
            input: InputState::default(),
            capture: PointerCapture::new(),
            movement,
            bounds,
        }
    }

    pub fn camera(&self) -> &CameraPose {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraPose {
        &mut self.camera
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn capture_state(&self) -> CaptureState {
        self.capture.state()
    }

    pub fn is_captured(&self) -> bool {
        self.capture.is_captured()
    }

    pub fn has_started(&self) -> bool {
        self.capture.has_started()
    }

    pub fn bounds(&self) -> &CollisionBounds {
        &self.bounds
    }

    pub fn eye_height(&self) -> f32 {
        self.movement.eye_height
    }

    /// Keys latch in either capture state; they only act while captured
    pub fn on_key_down(&mut self, direction: Direction) {
        self.input.press(direction);
    }

    pub fn on_key_up(&mut self, direction: Direction) {
        self.input.release(direction);
    }

    pub fn release_all_keys(&mut self) {
        self.input.clear();
    }

    pub fn on_mouse_move(&mut self, dx: f32, dy: f32) {
        if self.capture.is_captured() {
            self.camera.look(dx, dy, self.movement.mouse_sensitivity);
        }
    }

    pub fn lock(&mut self) -> Option<CaptureSignal> {
        self.capture.lock()
    }

    pub fn unlock(&mut self, reason: ReleaseReason) -> Option<CaptureSignal> {
        let signal = self.capture.unlock(reason);
        if signal.is_some() && self.movement.reset_velocity_on_release {
            self.velocity = Velocity::default();
        }
        signal
    }

    /// Integrate movement. Fully inert while released.
    pub fn tick(&mut self, frame: FrameInfo) {
        if !self.capture.is_captured() {
            return;
        }
        movement::integrate(
            &mut self.camera,
            &mut self.velocity,
            &self.input,
            frame,
            &self.movement,
            &self.bounds,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> PlayerController {
        PlayerController::new(
            Vec3::new(0.0, 1.7, 5.0),
            MovementConfig::default(),
            CollisionBounds::default(),
        )
    }

    fn frame(delta: f32) -> FrameInfo {
        FrameInfo::new(0, delta, delta)
    }

    #[test]
    fn released_player_does_not_move() {
        let mut p = player();
        p.on_key_down(Direction::Forward);
        p.on_mouse_move(50.0, 0.0);
        let before = *p.camera();
        for _ in 0..30 {
            p.tick(frame(1.0 / 60.0));
        }
        assert_eq!(*p.camera(), before);
        assert_eq!(p.velocity(), Velocity::default());
    }

    #[test]
    fn captured_player_walks_forward() {
        let mut p = player();
        p.lock();
        p.on_key_down(Direction::Forward);
        for _ in 0..30 {
            p.tick(frame(1.0 / 60.0));
        }
        assert!(p.camera().position.z > 5.0);
    }

    #[test]
    fn velocity_frozen_across_pause_by_default() {
        let mut p = player();
        p.lock();
        p.on_key_down(Direction::Forward);
        for _ in 0..10 {
            p.tick(frame(1.0 / 60.0));
        }
        let moving = p.velocity();
        p.unlock(ReleaseReason::Cancelled);
        p.tick(frame(1.0 / 60.0));
        assert_eq!(p.velocity(), moving);
    }

    #[test]
    fn velocity_reset_on_release_when_configured() {
        let mut p = PlayerController::new(
            Vec3::new(0.0, 1.7, 5.0),
            MovementConfig {
                reset_velocity_on_release: true,
                ..Default::default()
            },
            CollisionBounds::default(),
        );
        p.lock();
        p.on_key_down(Direction::Left);
        p.tick(frame(0.1));
        assert_ne!(p.velocity(), Velocity::default());
        p.unlock(ReleaseReason::Unlocked);
        assert_eq!(p.velocity(), Velocity::default());
    }

    #[test]
    fn mouse_look_only_when_captured() {
        let mut p = player();
        p.on_mouse_move(100.0, 0.0);
        assert_eq!(p.camera().yaw, 0.0);
        p.lock();
        p.on_mouse_move(100.0, 0.0);
        assert!(p.camera().yaw < 0.0);
    }
}
