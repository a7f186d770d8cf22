//! Scripted walk-through for headless runs: walk in, view a frame, then walk
//! to the exit door and open it.

use glam::Vec3;
use log::info;

use crate::core::controller::Direction;
use crate::entities::{EntityCategory, RESUME_DOOR_ID};
use crate::session::{GalleryEvent, GallerySession};

const PREFERRED_FRAME: &str = "project-3";
/// Seconds the overlay stays open before the visit moves on
const FRAME_VIEW_SECONDS: f32 = 1.5;
/// Distance in front of the door where the visitor stops and clicks
const DOOR_APPROACH: f32 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisitStage {
    Entering,
    WalkToFrame,
    ViewFrame { until: f32 },
    WalkToDoor,
    OpenDoor,
    Done,
}

#[derive(Debug, Clone)]
pub struct GuidedVisit {
    stage: VisitStage,
    frame: Option<Vec3>,
    door: Option<Vec3>,
}

impl GuidedVisit {
    pub fn new(session: &GallerySession) -> Self {
        let scene = session.scene();
        let frame = scene
            .entities
            .get(PREFERRED_FRAME)
            .or_else(|| scene.entities.of_category(EntityCategory::ProjectFrame).next())
            .map(|entity| entity.position);
        let door = scene
            .entities
            .get(RESUME_DOOR_ID)
            .and_then(|entity| scene.graph.world_bounds(entity.node))
            .map(|bounds| bounds.center());

        Self {
            stage: VisitStage::Entering,
            frame,
            door,
        }
    }

    pub fn stage(&self) -> VisitStage {
        self.stage
    }

    pub fn is_done(&self) -> bool {
        self.stage == VisitStage::Done
    }

    /// Drive the session for one frame; call before `GallerySession::tick`
    pub fn step(&mut self, session: &mut GallerySession, time: f32) {
        match self.stage {
            VisitStage::Entering => {
                if session.is_entering() {
                    return;
                }
                session.on_click();
                match self.frame {
                    Some(_) => {
                        session.on_key_down(Direction::Forward);
                        self.stage = VisitStage::WalkToFrame;
                    }
                    None => self.walk_to_door(session),
                }
            }
            VisitStage::WalkToFrame => {
                let Some(frame) = self.frame else {
                    self.walk_to_door(session);
                    return;
                };
                if session.camera().position.z >= frame.z {
                    session.on_key_up(Direction::Forward);
                    turn_towards(session, frame);
                    let picked = session.on_click();
                    info!("visit: viewing {picked:?}");
                    self.stage = VisitStage::ViewFrame {
                        until: time + FRAME_VIEW_SECONDS,
                    };
                }
            }
            VisitStage::ViewFrame { until } => {
                if time >= until && !session.is_gliding() {
                    if session.overlay().is_some() {
                        session.on_click();
                    }
                    self.walk_to_door(session);
                }
            }
            VisitStage::WalkToDoor => {
                let Some(door) = self.door else {
                    self.stage = VisitStage::Done;
                    return;
                };
                if session.camera().position.z >= door.z - DOOR_APPROACH {
                    session.on_key_up(Direction::Forward);
                    let picked = session.on_click();
                    info!("visit: knocked on {picked:?}");
                    self.stage = VisitStage::OpenDoor;
                }
            }
            VisitStage::OpenDoor | VisitStage::Done => {}
        }
    }

    /// Feed drained session events back in
    pub fn observe(&mut self, event: &GalleryEvent) {
        if let GalleryEvent::OpenDocument(_) = event {
            self.stage = VisitStage::Done;
        }
    }

    fn walk_to_door(&mut self, session: &mut GallerySession) {
        match self.door {
            Some(door) => {
                turn_towards(session, door);
                session.on_key_down(Direction::Forward);
                self.stage = VisitStage::WalkToDoor;
            }
            None => self.stage = VisitStage::Done,
        }
    }
}

/// Turn through the mouse-look path so capture rules still apply
fn turn_towards(session: &mut GallerySession, target: Vec3) {
    let mut aim = *session.camera();
    aim.face_towards(target);
    let sensitivity = session.config().movement.mouse_sensitivity;
    if sensitivity > 0.0 {
        let dx = (session.camera().yaw - aim.yaw) / sensitivity;
        session.on_mouse_move(dx, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GalleryConfig;
    use crate::projects::ProjectRegistry;

    fn session() -> GallerySession {
        GallerySession::new(GalleryConfig::default(), ProjectRegistry::builtin().unwrap())
    }

    #[test]
    fn waits_for_entry() {
        let mut s = session();
        let mut visit = GuidedVisit::new(&s);
        visit.step(&mut s, 0.0);
        assert_eq!(visit.stage(), VisitStage::Entering);
        assert!(!s.player().is_captured());
    }

    #[test]
    fn turn_towards_faces_target_when_captured() {
        let mut s = GallerySession::new(
            GalleryConfig {
                entry: crate::config::EntryConfig {
                    enabled: false,
                    ..Default::default()
                },
                ..Default::default()
            },
            ProjectRegistry::builtin().unwrap(),
        );
        s.on_click();
        let target = s.camera().position - Vec3::X;
        turn_towards(&mut s, target);
        assert!((s.camera().planar_forward() + Vec3::X).length() < 1e-3);
    }

    #[test]
    fn missing_frames_go_straight_to_door() {
        let s = GallerySession::new(GalleryConfig::default(), ProjectRegistry::default());
        let visit = GuidedVisit::new(&s);
        assert!(visit.frame.is_none());
        assert!(visit.door.is_some());
    }
}
