//! Single-threaded gallery session.
//!
//! The host feeds input events and one `tick` per displayed frame, then
//! drains `GalleryEvent`s for presentation. Each tick runs, in order: entry
//! walk-in, camera glide, door swing, movement, spotlights.

use glam::Vec3;
use log::{debug, info};

use crate::camera::CameraPose;
use crate::capture::{CaptureSignal, CaptureState, ReleaseReason};
use crate::config::GalleryConfig;
use crate::core::clock::FrameInfo;
use crate::core::controller::Direction;
use crate::core::input_adapter::InputCommand;
use crate::core::timer::{Easing, Progression, Transition};
use crate::highlight::Spotlights;
use crate::hud::HudPrompt;
use crate::interaction::{self, Action};
use crate::picking::{self, PickResult};
use crate::player::PlayerController;
use crate::projects::{ProjectRecord, ProjectRegistry};
use crate::scene::NodeId;
use crate::scenes::{build_gallery, GalleryScene};

/// Notifications for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryEvent {
    CaptureChanged(CaptureState),
    ProjectSelected(ProjectRecord),
    OverlayClosed,
    /// The exit door finished swinging open
    OpenDocument(String),
}

#[derive(Debug)]
struct DoorSwing {
    node: NodeId,
    transition: Transition<f32>,
}

#[derive(Debug)]
pub struct GallerySession {
    config: GalleryConfig,
    projects: ProjectRegistry,
    scene: GalleryScene,
    player: PlayerController,
    spotlights: Spotlights,
    entry: Option<Transition<Vec3>>,
    glide: Option<Transition<Vec3>>,
    door: Option<DoorSwing>,
    overlay: Option<ProjectRecord>,
    events: Vec<GalleryEvent>,
}

impl GallerySession {
    pub fn new(config: GalleryConfig, projects: ProjectRegistry) -> Self {
        let scene = build_gallery(&projects);
        let spotlights = Spotlights::for_frames(&scene.entities, &config.spotlight);

        let eye = config.movement.eye_height;
        let entry_start = Vec3::new(0.0, eye, config.entry.start_z);
        let entry_end = Vec3::new(0.0, eye, config.entry.end_z);

        let (start, entry) = if config.entry.enabled {
            let walk_in = Transition::new(
                entry_start,
                entry_end,
                Progression::Elapsed {
                    duration: config.entry.duration,
                },
                Easing::InOutCubic,
            );
            (entry_start, Some(walk_in))
        } else {
            (entry_end, None)
        };

        let player = PlayerController::new(start, config.movement, config.bounds);

        Self {
            config,
            projects,
            scene,
            player,
            spotlights,
            entry,
            glide: None,
            door: None,
            overlay: None,
            events: Vec::new(),
        }
    }

    pub fn camera(&self) -> &CameraPose {
        self.player.camera()
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn capture_state(&self) -> CaptureState {
        self.player.capture_state()
    }

    pub fn hud_prompt(&self) -> HudPrompt {
        HudPrompt::for_state(self.player.capture_state(), self.player.has_started())
    }

    pub fn overlay(&self) -> Option<&ProjectRecord> {
        self.overlay.as_ref()
    }

    pub fn scene(&self) -> &GalleryScene {
        &self.scene
    }

    pub fn spotlights(&self) -> &Spotlights {
        &self.spotlights
    }

    pub fn is_entering(&self) -> bool {
        self.entry.is_some()
    }

    pub fn is_door_swinging(&self) -> bool {
        self.door.is_some()
    }

    pub fn drain_events(&mut self) -> Vec<GalleryEvent> {
        std::mem::take(&mut self.events)
    }

    /// Route one host input to the matching handler
    pub fn handle(&mut self, command: InputCommand) {
        match command {
            InputCommand::Key {
                direction,
                pressed: true,
            } => self.on_key_down(direction),
            InputCommand::Key {
                direction,
                pressed: false,
            } => self.on_key_up(direction),
            InputCommand::Look { dx, dy } => self.on_mouse_move(dx, dy),
            InputCommand::Click => {
                self.on_click();
            }
            InputCommand::Cancel => self.cancel_capture(),
            InputCommand::FocusLost => self.on_focus_lost(),
        }
    }

    pub fn on_key_down(&mut self, direction: Direction) {
        self.player.on_key_down(direction);
    }

    pub fn on_key_up(&mut self, direction: Direction) {
        self.player.on_key_up(direction);
    }

    pub fn on_mouse_move(&mut self, dx: f32, dy: f32) {
        self.player.on_mouse_move(dx, dy);
    }

    /// Primary click on the render surface.
    ///
    /// With an overlay open the click dismisses it. While released it only
    /// requests capture; picking runs only for clicks made while captured.
    pub fn on_click(&mut self) -> PickResult {
        if self.overlay.is_some() {
            self.dismiss_overlay();
            return None;
        }
        if self.entry.is_some() {
            debug!("click ignored during entry");
            return None;
        }
        if !self.player.is_captured() {
            self.request_capture();
            return None;
        }
        if self.door.is_some() {
            debug!("click ignored while the door is swinging");
            return None;
        }

        let picked = picking::pick(&self.scene.graph, self.player.camera());
        if let Some(id) = picked.as_deref() {
            info!("picked '{id}'");
            if let Some(action) = interaction::dispatch(id, &mut self.scene.entities, &self.projects) {
                self.apply(action);
            }
        }
        picked
    }

    pub fn request_capture(&mut self) {
        if self.entry.is_some() || self.overlay.is_some() {
            return;
        }
        let signal = self.player.lock();
        self.emit_capture(signal);
    }

    /// Platform cancel (escape, focus loss)
    pub fn cancel_capture(&mut self) {
        let signal = self.player.unlock(ReleaseReason::Cancelled);
        self.emit_capture(signal);
    }

    /// Host lost focus: drop capture and any held keys
    pub fn on_focus_lost(&mut self) {
        self.player.release_all_keys();
        self.cancel_capture();
    }

    /// Close the project overlay and resume walking
    pub fn dismiss_overlay(&mut self) {
        if let Some(record) = self.overlay.take() {
            debug!("overlay for '{}' closed", record.id);
            self.events.push(GalleryEvent::OverlayClosed);
            self.request_capture();
        }
    }

    pub fn tick(&mut self, frame: FrameInfo) {
        if let Some(entry) = &mut self.entry {
            let step = entry.tick(frame.delta);
            self.player.camera_mut().position = step.value;
            if step.finished {
                debug!("entry finished");
                self.entry = None;
            }
        }

        if let Some(glide) = &mut self.glide {
            let step = glide.tick(frame.delta);
            self.player.camera_mut().position = step.value;
            if step.finished {
                self.glide = None;
            }
        }

        if let Some(door) = &mut self.door {
            let step = door.transition.tick(frame.delta);
            self.scene.graph.set_rotation_y(door.node, step.value);
            if step.finished {
                let path = self.projects.personal().resume_path.clone();
                info!("door open, requesting '{path}'");
                self.events.push(GalleryEvent::OpenDocument(path));
                self.door = None;
            }
        }

        if self.entry.is_none() && self.glide.is_none() {
            self.player.tick(frame);
        }

        self.spotlights
            .update(self.player.camera().position, &self.config.spotlight);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::ShowProject {
                record,
                frame_position,
                frame_facing,
            } => {
                let signal = self.player.unlock(ReleaseReason::Unlocked);
                self.emit_capture(signal);
                self.start_glide(frame_position, frame_facing);
                info!("showing project '{}'", record.title);
                self.events.push(GalleryEvent::ProjectSelected(record.clone()));
                self.overlay = Some(record);
            }
            Action::OpenDoor { node } => {
                let start = self.scene.graph.node(node).rotation_y;
                let door = &self.config.door;
                let progression = if self.config.frame_coupled_door {
                    Progression::PerTick {
                        step: door.per_tick_step,
                    }
                } else {
                    Progression::Elapsed {
                        duration: door.duration,
                    }
                };
                info!("opening door");
                self.door = Some(DoorSwing {
                    node,
                    transition: Transition::new(start, door.target_angle, progression, Easing::OutCubic),
                });
            }
        }
    }

    /// Walk up to a point in front of the frame and face it
    fn start_glide(&mut self, frame_position: Vec3, frame_facing: Vec3) {
        let eye = self.player.eye_height();
        let mut target = frame_position + frame_facing * self.config.glide.stop_distance;
        target.y = eye;
        let target = self.player.bounds().clamp(target);

        let camera = self.player.camera_mut();
        camera.face_towards(frame_position);
        camera.pitch = 0.0;
        self.glide = Some(Transition::ease_out(
            camera.position,
            target,
            self.config.glide.duration(),
        ));
    }

    fn emit_capture(&mut self, signal: Option<CaptureSignal>) {
        if signal.is_some() {
            self.events
                .push(GalleryEvent::CaptureChanged(self.player.capture_state()));
        }
    }
}
