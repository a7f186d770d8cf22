use winit::event::{DeviceEvent, ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::Direction;

/// Platform-neutral input the gallery session consumes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputCommand {
    Key { direction: Direction, pressed: bool },
    /// Relative pointer motion in pixels
    Look { dx: f32, dy: f32 },
    Click,
    /// Escape: give the pointer back
    Cancel,
    FocusLost,
}

/// Translates Winit events into `InputCommand`s
#[derive(Debug, Clone, Copy, Default)]
pub struct WinitInput;

impl WinitInput {
    pub fn new() -> Self {
        Self
    }

    pub fn window_event(&self, event: &WindowEvent) -> Option<InputCommand> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(keycode) = event.physical_key else {
                    return None;
                };
                let pressed = event.state == ElementState::Pressed;
                if keycode == KeyCode::Escape {
                    return pressed.then_some(InputCommand::Cancel);
                }
                // Auto-repeat presses are harmless: the latch is idempotent
                keycode_to_direction(keycode).map(|direction| InputCommand::Key { direction, pressed })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                mouse_button_to_click(*button, *state)
            }
            WindowEvent::Focused(false) => Some(InputCommand::FocusLost),
            _ => None,
        }
    }

    /// Raw device motion keeps arriving while the cursor is grabbed, unlike
    /// `CursorMoved`
    pub fn device_event(&self, event: &DeviceEvent) -> Option<InputCommand> {
        match event {
            DeviceEvent::MouseMotion { delta } => Some(InputCommand::Look {
                dx: delta.0 as f32,
                dy: delta.1 as f32,
            }),
            _ => None,
        }
    }
}

/// WASD and arrow keys
pub fn keycode_to_direction(keycode: KeyCode) -> Option<Direction> {
    match keycode {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(Direction::Forward),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(Direction::Back),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(Direction::Left),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(Direction::Right),
        _ => None,
    }
}

/// Only a left press counts as a click
pub fn mouse_button_to_click(button: MouseButton, state: ElementState) -> Option<InputCommand> {
    match (button, state) {
        (MouseButton::Left, ElementState::Pressed) => Some(InputCommand::Click),
        _ => None,
    }
}
