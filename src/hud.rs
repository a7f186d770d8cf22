// hud.rs - Prompt text derived from capture state
use crate::capture::CaptureState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudPrompt {
    pub message: &'static str,
    pub hint: &'static str,
}

impl HudPrompt {
    pub fn for_state(capture: CaptureState, started: bool) -> Self {
        match (capture, started) {
            (CaptureState::Captured, _) => Self {
                message: "",
                hint: "WASD to Move · ESC to Pause",
            },
            (CaptureState::Released, false) => Self {
                message: "CLICK TO START",
                hint: "WASD to Move · Mouse to Look",
            },
            (CaptureState::Released, true) => Self {
                message: "PAUSED",
                hint: "Click to Resume",
            },
        }
    }

    /// Single line for a title bar or log
    pub fn line(&self) -> String {
        if self.message.is_empty() {
            self.hint.to_string()
        } else {
            format!("{} - {}", self.message, self.hint)
        }
    }
}
