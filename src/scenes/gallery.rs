// gallery.rs - Interactive layout: project frames, info pedestal, exit door
use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use log::info;

use crate::entities::{EntityCategory, EntityRegistry, InteractiveEntity, ABOUT_ME_ID, RESUME_DOOR_ID};
use crate::math::AABB;
use crate::projects::{ProjectRecord, ProjectRegistry, WallSide};
use crate::scene::SceneGraph;

const LEFT_WALL_X: f32 = -7.0;
const RIGHT_WALL_X: f32 = 7.0;
const FRAME_MOUNT_Y: f32 = 2.2;
const FRAME_WALL_OFFSET: f32 = 0.05;
const FRAME_WIDTH: f32 = 2.4;
const FRAME_HEIGHT: f32 = 1.6;
const FRAME_BORDER: f32 = 0.1;
const FRAME_OUTER_DEPTH: f32 = 0.06;
const PLANE_DEPTH: f32 = 0.01;

const PLACARD_WIDTH: f32 = 1.2;
const PLACARD_HEIGHT: f32 = 0.3;
const PLACARD_OFFSET_Y: f32 = -1.1;
const PLACARD_OFFSET_Z: f32 = 0.02;

const PEDESTAL_SIZE: f32 = 0.8;
const PEDESTAL_HEIGHT: f32 = 1.1;
const PEDESTAL_TOP: f32 = 0.6;
const PEDESTAL_Z: f32 = 20.0;

const DOOR_WIDTH: f32 = 1.4;
const DOOR_HEIGHT: f32 = 2.6;
const DOOR_DEPTH: f32 = 0.08;
const DOOR_Z: f32 = 27.0;

/// Scene graph plus the interactive entities placed in it
#[derive(Debug, Clone)]
pub struct GalleryScene {
    pub graph: SceneGraph,
    pub entities: EntityRegistry,
}

/// Thin box facing local +Z
fn plane(width: f32, height: f32) -> AABB {
    AABB::from_center_size(Vec3::ZERO, Vec3::new(width, height, PLANE_DEPTH))
}

fn add_frame(scene: &mut GalleryScene, project: &ProjectRecord) {
    // Local +Z faces into the room
    let (x, rotation) = match project.wall_side {
        WallSide::Left => (LEFT_WALL_X + FRAME_WALL_OFFSET, FRAC_PI_2),
        WallSide::Right => (RIGHT_WALL_X - FRAME_WALL_OFFSET, -FRAC_PI_2),
    };
    let position = Vec3::new(x, FRAME_MOUNT_Y, project.z_position);

    let graph = &mut scene.graph;
    let group = graph.add_group(None, &format!("frame:{}", project.id), position);
    graph.set_rotation_y(group, rotation);
    graph.set_tag(group, &project.id);

    let outer = Vec3::new(
        FRAME_WIDTH + FRAME_BORDER * 2.0,
        FRAME_HEIGHT + FRAME_BORDER * 2.0,
        FRAME_OUTER_DEPTH,
    );
    graph.add_mesh(Some(group), "frame-outer", Vec3::ZERO, AABB::from_center_size(Vec3::ZERO, outer));
    graph.add_mesh(
        Some(group),
        "art",
        Vec3::new(0.0, 0.0, FRAME_OUTER_DEPTH / 2.0 + 0.005),
        plane(FRAME_WIDTH, FRAME_HEIGHT),
    );
    graph.add_mesh(
        Some(group),
        "placard",
        Vec3::new(0.0, PLACARD_OFFSET_Y, PLACARD_OFFSET_Z),
        plane(PLACARD_WIDTH, PLACARD_HEIGHT),
    );

    let facing = Vec3::new(rotation.sin(), 0.0, rotation.cos());
    scene.entities.insert(InteractiveEntity::new(
        &project.id,
        EntityCategory::ProjectFrame,
        position,
        facing,
        group,
    ));
}

fn add_pedestal(scene: &mut GalleryScene) {
    let graph = &mut scene.graph;
    let group = graph.add_group(None, "pedestal-group", Vec3::new(0.0, 0.0, PEDESTAL_Z));

    let base = graph.add_mesh(
        Some(group),
        "pedestal",
        Vec3::new(0.0, PEDESTAL_HEIGHT / 2.0, 0.0),
        AABB::from_center_size(Vec3::ZERO, Vec3::new(PEDESTAL_SIZE, PEDESTAL_HEIGHT, PEDESTAL_SIZE)),
    );
    graph.set_tag(base, ABOUT_ME_ID);

    // Lies flat on top of the block
    let top = graph.add_mesh(
        Some(group),
        "pedestal-top",
        Vec3::new(0.0, PEDESTAL_HEIGHT + 0.001, 0.0),
        AABB::from_center_size(Vec3::ZERO, Vec3::new(PEDESTAL_TOP, PLANE_DEPTH, PEDESTAL_TOP)),
    );
    graph.set_tag(top, ABOUT_ME_ID);

    let position = graph.world_position(base);
    scene.entities.insert(InteractiveEntity::new(
        ABOUT_ME_ID,
        EntityCategory::InfoPedestal,
        position,
        -Vec3::Z,
        base,
    ));
}

fn add_exit_door(scene: &mut GalleryScene) {
    let graph = &mut scene.graph;
    let group = graph.add_group(None, "exit-door-group", Vec3::new(0.0, 0.0, DOOR_Z));

    // Panel extends from the hinge toward +X so rotation pivots on its left edge
    let hinge = graph.add_mesh(
        Some(group),
        "exit-door",
        Vec3::new(-DOOR_WIDTH / 2.0, DOOR_HEIGHT / 2.0, 0.0),
        AABB::new(
            Vec3::new(0.0, -DOOR_HEIGHT / 2.0, -DOOR_DEPTH / 2.0),
            Vec3::new(DOOR_WIDTH, DOOR_HEIGHT / 2.0, DOOR_DEPTH / 2.0),
        ),
    );
    graph.set_tag(hinge, RESUME_DOOR_ID);

    // Sits on the door group, not the hinge, so it carries no identifier
    graph.add_mesh(
        Some(group),
        "exit-placard",
        Vec3::new(0.0, DOOR_HEIGHT + 0.4, 0.05),
        plane(PLACARD_WIDTH, PLACARD_HEIGHT),
    );

    let position = graph.world_position(hinge);
    scene.entities.insert(InteractiveEntity::new(
        RESUME_DOOR_ID,
        EntityCategory::ExitDoor,
        position,
        -Vec3::Z,
        hinge,
    ));
}

pub fn build_gallery(projects: &ProjectRegistry) -> GalleryScene {
    let mut scene = GalleryScene {
        graph: SceneGraph::new(),
        entities: EntityRegistry::new(),
    };

    for project in projects.iter() {
        add_frame(&mut scene, project);
    }
    add_pedestal(&mut scene);
    add_exit_door(&mut scene);

    info!(
        "Gallery scene created: {} nodes, {} interactive entities",
        scene.graph.len(),
        scene.entities.len()
    );

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraPose;
    use crate::picking;

    fn scene() -> GalleryScene {
        build_gallery(&ProjectRegistry::builtin().unwrap())
    }

    #[test]
    fn every_project_gets_a_frame_entity() {
        let scene = scene();
        assert_eq!(scene.entities.of_category(EntityCategory::ProjectFrame).count(), 6);
        assert_eq!(scene.entities.len(), 8);
    }

    #[test]
    fn frames_face_into_the_room() {
        let scene = scene();
        let left = scene.entities.get("project-1").unwrap();
        let right = scene.entities.get("project-2").unwrap();
        assert!((left.facing - Vec3::X).length() < 1e-5);
        assert!((right.facing + Vec3::X).length() < 1e-5);
    }

    #[test]
    fn looking_at_a_left_frame_picks_it() {
        let scene = scene();
        let mut camera = CameraPose::new(Vec3::new(0.0, FRAME_MOUNT_Y, 11.0));
        camera.face_towards(Vec3::new(LEFT_WALL_X, FRAME_MOUNT_Y, 11.0));
        assert_eq!(picking::pick(&scene.graph, &camera).as_deref(), Some("project-3"));
    }

    #[test]
    fn placard_resolves_to_its_frame() {
        let scene = scene();
        let mut camera = CameraPose::new(Vec3::new(0.0, FRAME_MOUNT_Y + PLACARD_OFFSET_Y, 17.0));
        camera.face_towards(Vec3::new(RIGHT_WALL_X, 0.0, 17.0));
        assert_eq!(picking::pick(&scene.graph, &camera).as_deref(), Some("project-6"));
    }

    #[test]
    fn door_is_pickable_and_its_placard_is_not() {
        let scene = scene();
        let camera = CameraPose::new(Vec3::new(0.0, 1.7, 25.0));
        assert_eq!(picking::pick(&scene.graph, &camera).as_deref(), Some(RESUME_DOOR_ID));

        let high = CameraPose::new(Vec3::new(0.0, DOOR_HEIGHT + 0.4, 25.0));
        assert_eq!(picking::pick(&scene.graph, &high), None);
    }

    #[test]
    fn pedestal_is_pickable() {
        let scene = scene();
        let camera = CameraPose::new(Vec3::new(0.0, 0.8, 15.0));
        assert_eq!(picking::pick(&scene.graph, &camera).as_deref(), Some(ABOUT_ME_ID));
    }
}
