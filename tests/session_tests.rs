use std::f32::consts::FRAC_PI_2;

use gallery_walk::capture::CaptureState;
use gallery_walk::config::{EntryConfig, GalleryConfig, MOUSE_SENSITIVITY};
use gallery_walk::core::clock::Clock;
use gallery_walk::core::controller::Direction;
use gallery_walk::core::input_adapter::InputCommand;
use gallery_walk::projects::ProjectRegistry;
use gallery_walk::visit::{GuidedVisit, VisitStage};
use gallery_walk::{GalleryEvent, GallerySession};

#[cfg(test)]
mod session_tests {
    use super::*;

    fn session_at(z: f32, frame_coupled_door: bool) -> GallerySession {
        let config = GalleryConfig {
            entry: EntryConfig {
                enabled: false,
                end_z: z,
                ..Default::default()
            },
            frame_coupled_door,
            ..Default::default()
        };
        GallerySession::new(config, ProjectRegistry::builtin().unwrap())
    }

    fn run(session: &mut GallerySession, clock: &mut Clock, seconds: f32) -> Vec<GalleryEvent> {
        let mut events = Vec::new();
        let ticks = (seconds * 60.0).round() as usize;
        for _ in 0..ticks {
            session.tick(clock.advance(1.0 / 60.0));
            events.extend(session.drain_events());
        }
        events
    }

    fn open_documents(events: &[GalleryEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, GalleryEvent::OpenDocument(_)))
            .count()
    }

    #[test]
    fn test_click_while_released_only_captures() {
        let mut session = session_at(2.0, false);
        // Facing the exit door, but the first click must not open it
        assert_eq!(session.on_click(), None);
        assert!(!session.is_door_swinging());
        assert_eq!(session.capture_state(), CaptureState::Captured);
    }

    #[test]
    fn test_door_opens_once_and_requests_document_once() {
        let mut session = session_at(2.0, false);
        let mut clock = Clock::new();
        session.on_click();

        assert_eq!(session.on_click().as_deref(), Some("resume-door"));
        assert!(session.is_door_swinging());
        // Ignored mid-swing
        assert_eq!(session.on_click(), None);

        let events = run(&mut session, &mut clock, 2.0);
        assert_eq!(open_documents(&events), 1);
        assert!(events.contains(&GalleryEvent::OpenDocument("/resume.pdf".to_string())));
        assert!(!session.is_door_swinging());

        session.on_click();
        let events = run(&mut session, &mut clock, 2.0);
        assert_eq!(open_documents(&events), 0);
    }

    #[test]
    fn test_frame_coupled_door_takes_fifty_ticks() {
        let mut session = session_at(2.0, true);
        let mut clock = Clock::new();
        session.on_click();
        session.on_click();
        session.drain_events();

        for _ in 0..49 {
            session.tick(clock.advance(0.0));
        }
        assert!(session.is_door_swinging());
        session.tick(clock.advance(0.0));
        assert!(!session.is_door_swinging());
        assert_eq!(open_documents(&session.drain_events()), 1);
    }

    #[test]
    fn test_project_pick_opens_overlay_and_glides() {
        let mut session = session_at(11.0, false);
        let mut clock = Clock::new();
        session.on_click();
        session.drain_events();
        session.handle(InputCommand::Look {
            dx: FRAC_PI_2 / MOUSE_SENSITIVITY,
            dy: 0.0,
        });

        assert_eq!(session.on_click().as_deref(), Some("project-3"));
        assert_eq!(session.capture_state(), CaptureState::Released);
        assert_eq!(session.overlay().map(|r| r.id.as_str()), Some("project-3"));

        let events = session.drain_events();
        assert_eq!(events[0], GalleryEvent::CaptureChanged(CaptureState::Released));
        assert!(matches!(&events[1], GalleryEvent::ProjectSelected(r) if r.id == "project-3"));

        run(&mut session, &mut clock, 0.5);
        let camera = session.camera();
        assert!((camera.position.x - (-5.75)).abs() < 1e-3);
        assert!((camera.position.z - 11.0).abs() < 1e-3);
    }

    #[test]
    fn test_overlay_blocks_picks_and_dismiss_resumes() {
        let mut session = session_at(11.0, false);
        session.on_click();
        session.on_mouse_move(FRAC_PI_2 / MOUSE_SENSITIVITY, 0.0);
        session.on_click();
        session.drain_events();

        // Dismisses instead of picking
        assert_eq!(session.on_click(), None);
        assert!(session.overlay().is_none());
        assert_eq!(
            session.drain_events(),
            vec![
                GalleryEvent::OverlayClosed,
                GalleryEvent::CaptureChanged(CaptureState::Captured)
            ]
        );
    }

    #[test]
    fn test_keys_held_while_paused_apply_after_resume() {
        let mut session = session_at(5.0, false);
        let mut clock = Clock::new();
        session.on_key_down(Direction::Forward);
        run(&mut session, &mut clock, 0.5);
        assert_eq!(session.camera().position.z, 5.0);

        session.on_click();
        run(&mut session, &mut clock, 0.5);
        assert!(session.camera().position.z > 5.0);
    }

    #[test]
    fn test_spotlight_brightens_near_frame() {
        let mut session = session_at(11.0, false);
        let mut clock = Clock::new();
        session.on_click();
        session.on_mouse_move(FRAC_PI_2 / MOUSE_SENSITIVITY, 0.0);
        session.on_click();
        run(&mut session, &mut clock, 3.0);

        // Glided up to project-3; project-4 is across the room
        let near = session.spotlights().intensity("project-3").unwrap();
        let far = session.spotlights().intensity("project-4").unwrap();
        assert!(near > 4.0);
        assert!((far - 2.8).abs() < 1e-4);
    }

    #[test]
    fn test_guided_visit_views_frame_and_opens_door() {
        let mut session = GallerySession::new(GalleryConfig::default(), ProjectRegistry::builtin().unwrap());
        let mut visit = GuidedVisit::new(&session);
        let mut clock = Clock::new();
        let mut events = Vec::new();

        for _ in 0..(180 * 60) {
            let frame = clock.advance(1.0 / 60.0);
            visit.step(&mut session, frame.time);
            session.tick(frame);
            for event in session.drain_events() {
                visit.observe(&event);
                events.push(event);
            }
            if visit.is_done() {
                break;
            }
        }

        assert_eq!(visit.stage(), VisitStage::Done);
        assert!(events
            .iter()
            .any(|e| matches!(e, GalleryEvent::ProjectSelected(r) if r.id == "project-3")));
        assert!(events.contains(&GalleryEvent::OverlayClosed));
        assert_eq!(open_documents(&events), 1);
        assert!(session.camera().position.z > 20.0);
    }
}
