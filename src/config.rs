// config.rs - Tunable constants for movement, collision and interaction
use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use anyhow::{bail, Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::clamp;

pub const WALK_SPEED: f32 = 3.2;
pub const DAMPING: f32 = 8.0;
pub const HEAD_BOB_AMPLITUDE: f32 = 0.028;
pub const HEAD_BOB_FREQUENCY: f32 = 1.8;
pub const CAMERA_EYE_HEIGHT: f32 = 1.7;
pub const MOUSE_SENSITIVITY: f32 = 0.0018;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Acceleration applied per second of held input
    pub walk_speed: f32,
    /// Exponential velocity decay per second
    pub damping: f32,
    pub head_bob_amplitude: f32,
    /// Hz
    pub head_bob_frequency: f32,
    /// Planar speed above which head bob runs
    pub head_bob_threshold: f32,
    /// Fraction of the gap to eye height closed per tick when at rest
    pub height_return: f32,
    pub eye_height: f32,
    pub mouse_sensitivity: f32,
    /// Zero velocity when capture is lost instead of freezing it
    pub reset_velocity_on_release: bool,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            damping: DAMPING,
            head_bob_amplitude: HEAD_BOB_AMPLITUDE,
            head_bob_frequency: HEAD_BOB_FREQUENCY,
            head_bob_threshold: 0.1,
            height_return: 0.1,
            eye_height: CAMERA_EYE_HEIGHT,
            mouse_sensitivity: MOUSE_SENSITIVITY,
            reset_velocity_on_release: false,
        }
    }
}

/// Closed rectangle on the floor plane the camera may occupy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl CollisionBounds {
    /// Clamp x and z independently; y is left alone
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            clamp(position.x, self.min_x, self.max_x),
            position.y,
            clamp(position.z, self.min_z, self.max_z),
        )
    }

    pub fn contains(&self, position: Vec3) -> bool {
        (self.min_x..=self.max_x).contains(&position.x)
            && (self.min_z..=self.max_z).contains(&position.z)
    }
}

impl Default for CollisionBounds {
    fn default() -> Self {
        Self {
            min_x: -6.2,
            max_x: 6.2,
            min_z: 0.5,
            max_z: 26.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorConfig {
    /// Final hinge rotation in radians
    pub target_angle: f32,
    /// Seconds
    pub duration: f32,
    /// Progress added per tick when the swing is frame-coupled
    pub per_tick_step: f32,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            target_angle: -FRAC_PI_2 - 0.2,
            duration: 1.2,
            per_tick_step: 0.02,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlideConfig {
    /// Inverse of the glide duration in seconds
    pub speed: f32,
    /// How far in front of a frame the camera stops
    pub stop_distance: f32,
}

impl GlideConfig {
    pub fn duration(&self) -> f32 {
        1.0 / self.speed.max(f32::EPSILON)
    }
}

impl Default for GlideConfig {
    fn default() -> Self {
        Self {
            speed: 4.0,
            stop_distance: 1.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotlightConfig {
    pub base_intensity: f32,
    pub hover_intensity: f32,
    pub lerp_speed: f32,
    pub proximity: f32,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            base_intensity: 2.8,
            hover_intensity: 4.2,
            lerp_speed: 0.05,
            proximity: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryConfig {
    pub enabled: bool,
    pub duration: f32,
    pub start_z: f32,
    pub end_z: f32,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration: 2.5,
            start_z: -1.0,
            end_z: 2.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub movement: MovementConfig,
    pub bounds: CollisionBounds,
    pub door: DoorConfig,
    pub glide: GlideConfig,
    pub spotlight: SpotlightConfig,
    pub entry: EntryConfig,
    /// Drive the door swing by a fixed step per tick instead of elapsed time
    pub frame_coupled_door: bool,
}

impl GalleryConfig {
    /// Read a JSON config; omitted fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let b = &self.bounds;
        if b.min_x > b.max_x || b.min_z > b.max_z {
            bail!(
                "collision bounds are inverted: x [{}, {}], z [{}, {}]",
                b.min_x,
                b.max_x,
                b.min_z,
                b.max_z
            );
        }
        if !(self.door.duration > 0.0) {
            bail!("door duration must be positive, got {}", self.door.duration);
        }
        // A zero step never finishes the swing
        if self.frame_coupled_door && !(self.door.per_tick_step > 0.0) {
            bail!("door per-tick step must be positive, got {}", self.door.per_tick_step);
        }
        if !(self.glide.speed > 0.0) {
            bail!("glide speed must be positive, got {}", self.glide.speed);
        }
        if !(self.entry.duration >= 0.0) {
            bail!("entry duration must not be negative, got {}", self.entry.duration);
        }
        if self.movement.damping < 0.0 {
            bail!("damping must not be negative, got {}", self.movement.damping);
        }
        Ok(())
    }
}
