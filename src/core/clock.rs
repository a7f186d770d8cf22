use std::time::Instant;

/// Per-tick timing handed to every consumer in the frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the clock started
    pub time: f32,
    /// Seconds since the previous tick, never negative
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Game clock - tracks elapsed and delta time.
/// `tick` reads the wall clock; `advance` steps by a caller-supplied delta
/// for deterministic runs.
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    frame_number: u64,
    elapsed: f32,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            frame_number: 0,
            elapsed: 0.0,
        }
    }

    /// Measure wall time since last tick and advance
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.advance(delta)
    }

    /// Advance by a fixed delta in seconds. Negative deltas count as zero.
    pub fn advance(&mut self, delta: f32) -> FrameInfo {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.elapsed += delta;
        let info = FrameInfo::new(self.frame_number, self.elapsed, delta);
        self.frame_number += 1;
        info
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Drop the time accumulated since the last tick, e.g. after a stall
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
