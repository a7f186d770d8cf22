//! Route a picked identifier to the effect it triggers.

use glam::Vec3;
use log::debug;

use crate::entities::{EntityCategory, EntityRegistry};
use crate::projects::{ProjectRecord, ProjectRegistry};
use crate::scene::NodeId;

/// What the caller should do in response to a pick
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Release capture and present the record
    ShowProject {
        record: ProjectRecord,
        frame_position: Vec3,
        frame_facing: Vec3,
    },
    /// Swing the door hinge; the open flag is already set
    OpenDoor { node: NodeId },
}

/// Unknown identifiers, missing records and entities without behaviour all
/// yield `None`. An already-open door yields `None`.
pub fn dispatch(id: &str, entities: &mut EntityRegistry, projects: &ProjectRegistry) -> Option<Action> {
    let Some(entity) = entities.get_mut(id) else {
        debug!("ignoring pick of non-interactive '{id}'");
        return None;
    };

    match entity.category {
        EntityCategory::ProjectFrame => {
            let Some(record) = projects.get(id) else {
                debug!("no project record for '{id}'");
                return None;
            };
            Some(Action::ShowProject {
                record: record.clone(),
                frame_position: entity.position,
                frame_facing: entity.facing,
            })
        }
        EntityCategory::ExitDoor => {
            if entity.mark_open() {
                Some(Action::OpenDoor { node: entity.node })
            } else {
                debug!("door '{id}' already open");
                None
            }
        }
        EntityCategory::InfoPedestal => {
            debug!("'{id}' has no interaction");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::RESUME_DOOR_ID;
    use crate::scenes::build_gallery;

    fn setup() -> (EntityRegistry, ProjectRegistry) {
        let projects = ProjectRegistry::builtin().unwrap();
        let scene = build_gallery(&projects);
        (scene.entities, projects)
    }

    #[test]
    fn project_frame_shows_record() {
        let (mut entities, projects) = setup();
        match dispatch("project-3", &mut entities, &projects) {
            Some(Action::ShowProject { record, frame_facing, .. }) => {
                assert_eq!(record.title, "Project Three");
                assert!((frame_facing - Vec3::X).length() < 1e-5);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn frame_without_record_is_ignored() {
        let (mut entities, _) = setup();
        let empty = ProjectRegistry::default();
        assert_eq!(dispatch("project-1", &mut entities, &empty), None);
    }

    #[test]
    fn door_opens_once() {
        let (mut entities, projects) = setup();
        assert!(matches!(
            dispatch(RESUME_DOOR_ID, &mut entities, &projects),
            Some(Action::OpenDoor { .. })
        ));
        assert_eq!(dispatch(RESUME_DOOR_ID, &mut entities, &projects), None);
        assert!(entities.get(RESUME_DOOR_ID).unwrap().is_open());
    }

    #[test]
    fn unknown_and_pedestal_ignored() {
        let (mut entities, projects) = setup();
        assert_eq!(dispatch("ceiling", &mut entities, &projects), None);
        assert_eq!(dispatch("about-me", &mut entities, &projects), None);
    }
}
