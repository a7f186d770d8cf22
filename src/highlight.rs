//! Per-frame spotlight intensity that brightens as the visitor walks up.

use glam::Vec3;

use crate::config::SpotlightConfig;
use crate::entities::{EntityCategory, EntityRegistry};
use crate::math::lerp;

#[derive(Debug, Clone, PartialEq)]
pub struct Spotlight {
    pub entity_id: String,
    pub position: Vec3,
    pub intensity: f32,
}

#[derive(Debug, Clone, Default)]
pub struct Spotlights {
    lights: Vec<Spotlight>,
}

impl Spotlights {
    /// One light per project frame, starting at base intensity
    pub fn for_frames(entities: &EntityRegistry, config: &SpotlightConfig) -> Self {
        let lights = entities
            .of_category(EntityCategory::ProjectFrame)
            .map(|entity| Spotlight {
                entity_id: entity.id.clone(),
                position: entity.position,
                intensity: config.base_intensity,
            })
            .collect();
        Self { lights }
    }

    /// Ease each light toward hover or base depending on floor distance
    pub fn update(&mut self, camera: Vec3, config: &SpotlightConfig) {
        for light in &mut self.lights {
            let offset = light.position - camera;
            let distance = (offset.x * offset.x + offset.z * offset.z).sqrt();
            let target = if distance < config.proximity {
                config.hover_intensity
            } else {
                config.base_intensity
            };
            light.intensity = lerp(light.intensity, target, config.lerp_speed);
        }
    }

    pub fn intensity(&self, entity_id: &str) -> Option<f32> {
        self.lights
            .iter()
            .find(|light| light.entity_id == entity_id)
            .map(|light| light.intensity)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Spotlight> {
        self.lights.iter()
    }
}
