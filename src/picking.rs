//! Center-screen picking against the scene graph.

use glam::Vec3;
use log::debug;

use crate::camera::CameraPose;
use crate::math::Ray;
use crate::scene::{NodeId, SceneGraph};

/// Identifier of the picked entity, if any
pub type PickResult = Option<String>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub node: NodeId,
    pub distance: f32,
    /// World-space point where the ray enters the surface
    pub point: Vec3,
}

/// Nearest surface along `ray`
pub fn cast(graph: &SceneGraph, ray: &Ray) -> Option<Hit> {
    graph
        .meshes()
        .filter_map(|node| {
            let bounds = graph.world_bounds(node)?;
            ray.intersect_aabb(&bounds).map(|distance| Hit {
                node,
                distance,
                point: ray.at(distance),
            })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// Walk from `node` toward the root and return the first identifier found.
/// Gives up at the root or after `scene::MAX_DEPTH` hops.
pub fn resolve_entity(graph: &SceneGraph, node: NodeId) -> Option<&str> {
    graph
        .ancestors(node)
        .find_map(|id| graph.node(id).tag.as_deref())
}

pub fn pick_ray(graph: &SceneGraph, ray: &Ray) -> PickResult {
    let hit = cast(graph, ray)?;
    let entity = resolve_entity(graph, hit.node);
    debug!(
        "pick hit '{}' at {:.2} ({:.2}, {:.2}, {:.2}) -> {:?}",
        graph.node(hit.node).name,
        hit.distance,
        hit.point.x,
        hit.point.y,
        hit.point.z,
        entity
    );
    entity.map(str::to_string)
}

/// Pick through the exact center of the view
pub fn pick(graph: &SceneGraph, camera: &CameraPose) -> PickResult {
    pick_ray(graph, &camera.center_ray())
}
