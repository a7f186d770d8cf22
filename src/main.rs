use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use gallery_walk::capture::CaptureState;
use gallery_walk::cli::Cli;
use gallery_walk::core::clock::Clock;
use gallery_walk::core::input_adapter::WinitInput;
use gallery_walk::visit::GuidedVisit;
use gallery_walk::{GalleryEvent, GallerySession};

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;
const HEADLESS_STEP: f32 = 1.0 / 60.0;

struct App {
    window: Option<Arc<Window>>,
    session: GallerySession,
    input: WinitInput,
    clock: Clock,
    title: String,
}

impl App {
    fn new(session: GallerySession) -> Self {
        Self {
            window: None,
            session,
            input: WinitInput::new(),
            clock: Clock::new(),
            title: String::new(),
        }
    }

    fn set_cursor_captured(window: &Window, captured: bool) {
        let grab = if captured {
            window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            window.set_cursor_grab(CursorGrabMode::None)
        };
        if let Err(e) = grab {
            warn!("cursor grab change to captured={captured} failed: {e}");
        }
        window.set_cursor_visible(!captured);
    }

    fn present_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                GalleryEvent::CaptureChanged(state) => {
                    if let Some(window) = &self.window {
                        Self::set_cursor_captured(window, state == CaptureState::Captured);
                    }
                }
                other => log_event(&other),
            }
        }

        let line = match self.session.overlay() {
            Some(record) => format!("{} - click to close", record.title),
            None => self.session.hud_prompt().line(),
        };
        if line != self.title {
            if let Some(window) = &self.window {
                window.set_title(&format!("Gallery - {line}"));
            }
            self.title = line;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Gallery")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };
            self.window = Some(window);
            self.clock.reset();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                let frame = self.clock.tick();
                self.session.tick(frame);
                self.present_events();
            }
            other => {
                if let Some(command) = self.input.window_event(&other) {
                    self.session.handle(command);
                    self.present_events();
                }
            }
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let Some(command) = self.input.device_event(&event) {
            self.session.handle(command);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn log_event(event: &GalleryEvent) {
    match event {
        GalleryEvent::ProjectSelected(record) => {
            info!("{}", record.placard_line());
            info!("{}", record.long_description());
            if let Some(link) = &record.link {
                info!("live: {link}");
            }
            if let Some(repo) = &record.github_url {
                info!("source: {repo}");
            }
        }
        GalleryEvent::OverlayClosed => info!("overlay closed"),
        GalleryEvent::OpenDocument(path) => info!("open document {path}"),
        GalleryEvent::CaptureChanged(state) => info!("capture {state:?}"),
    }
}

/// Run the guided visit on a fixed timestep until the door opens or the
/// time budget runs out.
fn run_headless(mut session: GallerySession, seconds: f32) {
    let mut clock = Clock::new();
    let mut visit = GuidedVisit::new(&session);
    let steps = (seconds.max(0.0) / HEADLESS_STEP).ceil() as u64;

    for _ in 0..steps {
        let frame = clock.advance(HEADLESS_STEP);
        visit.step(&mut session, frame.time);
        session.tick(frame);
        for event in session.drain_events() {
            visit.observe(&event);
            log_event(&event);
        }
        if visit.is_done() {
            break;
        }
    }

    if !visit.is_done() {
        warn!("headless visit stopped at {:?} after {seconds}s", visit.stage());
    }
    let camera = session.camera();
    info!(
        "headless walk finished after {:.2}s at ({:.2}, {:.2}, {:.2})",
        clock.elapsed(),
        camera.position.x,
        camera.position.y,
        camera.position.z
    );
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    let projects = cli.load_projects()?;
    info!("{} projects on the walls", projects.len());

    let session = GallerySession::new(config, projects);

    if let Some(seconds) = cli.headless {
        run_headless(session, seconds);
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(session);

    info!("Gallery - click to start, WASD to move, Escape to pause");
    event_loop.run_app(&mut app)?;

    Ok(())
}
