use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::math::Ray;

/// Keep pitch just short of straight up/down so `right()` stays defined
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Camera position and orientation.
/// Yaw 0 looks down +Z; positive yaw turns toward +X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl CameraPose {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Forward projected onto the floor plane
    pub fn planar_forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }

    /// Right projected onto the floor plane
    pub fn planar_right(&self) -> Vec3 {
        self.planar_forward().cross(Vec3::Y)
    }

    /// Walk along the view direction without changing height
    pub fn move_forward(&mut self, distance: f32) {
        self.position += self.planar_forward() * distance;
    }

    pub fn move_right(&mut self, distance: f32) {
        self.position += self.planar_right() * distance;
    }

    /// Apply a pointer delta in pixels
    pub fn look(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.yaw -= dx * sensitivity;
        self.pitch = (self.pitch - dy * sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Turn to face `target` on the horizontal plane
    pub fn face_towards(&mut self, target: Vec3) {
        let to = target - self.position;
        if to.x.abs() > f32::EPSILON || to.z.abs() > f32::EPSILON {
            self.yaw = to.x.atan2(to.z);
        }
    }

    /// Ray through the exact center of the screen
    pub fn center_ray(&self) -> Ray {
        Ray::new(self.position, self.forward())
    }
}
