//! Pointer capture: gameplay focus versus paused.

use log::info;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    #[default]
    Released,
    Captured,
}

/// Emitted on an actual state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureSignal {
    Acquired,
    Lost,
}

/// Why capture was released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseReason {
    /// Platform escape gesture or focus loss
    Cancelled,
    /// Program-driven, e.g. an overlay opened
    Unlocked,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PointerCapture {
    state: CaptureState,
    /// Set once capture has been acquired at least once
    started: bool,
}

impl PointerCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_captured(&self) -> bool {
        self.state == CaptureState::Captured
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    /// User asked to begin capture. No-op when already captured.
    pub fn lock(&mut self) -> Option<CaptureSignal> {
        match self.state {
            CaptureState::Captured => None,
            CaptureState::Released => {
                self.state = CaptureState::Captured;
                self.started = true;
                info!("pointer captured");
                Some(CaptureSignal::Acquired)
            }
        }
    }

    /// Release capture. No-op when already released.
    pub fn unlock(&mut self, reason: ReleaseReason) -> Option<CaptureSignal> {
        match self.state {
            CaptureState::Released => None,
            CaptureState::Captured => {
                self.state = CaptureState::Released;
                info!("pointer released ({reason:?})");
                Some(CaptureSignal::Lost)
            }
        }
    }
}
