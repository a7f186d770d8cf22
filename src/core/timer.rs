/// Eased transitions driven once per frame.
/// Progress lives in [0, 1]; completion is reported exactly once.
use std::fmt;

use crate::math::{ease_in_out_cubic, ease_out_cubic, Lerp};

/// Progress this close to 1 counts as complete, absorbing float drift from
/// repeated per-tick increments
const COMPLETE_EPSILON: f32 = 1e-4;

/// How progress advances each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progression {
    /// Elapsed seconds divided by duration
    Elapsed { duration: f32 },
    /// Fixed increment per tick, independent of frame time
    PerTick { step: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    OutCubic,
    InOutCubic,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::OutCubic => ease_out_cubic(t),
            Easing::InOutCubic => ease_in_out_cubic(t),
        }
    }
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<T> {
    pub value: T,
    /// True on the single tick that reached the end
    pub finished: bool,
}

pub struct Transition<T: Lerp> {
    start: T,
    target: T,
    progression: Progression,
    easing: Easing,
    progress: f32,
    done: bool,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl<T: Lerp> Transition<T> {
    pub fn new(start: T, target: T, progression: Progression, easing: Easing) -> Self {
        Self {
            start,
            target,
            progression,
            easing,
            progress: 0.0,
            done: false,
            on_complete: None,
        }
    }

    /// Ease-out over `duration` seconds of elapsed time
    pub fn ease_out(start: T, target: T, duration: f32) -> Self {
        Self::new(start, target, Progression::Elapsed { duration }, Easing::OutCubic)
    }

    /// Run `callback` once when the transition reaches its target
    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn tick(&mut self, delta: f32) -> Step<T> {
        if self.done {
            return Step {
                value: self.target,
                finished: false,
            };
        }

        let increment = match self.progression {
            Progression::Elapsed { duration } if duration > 0.0 => delta.max(0.0) / duration,
            Progression::Elapsed { .. } => 1.0,
            Progression::PerTick { step } => step.max(0.0),
        };
        self.progress = (self.progress + increment).min(1.0);
        if self.progress >= 1.0 - COMPLETE_EPSILON {
            self.progress = 1.0;
        }

        let value = self.value();
        if self.progress == 1.0 {
            self.done = true;
            if let Some(callback) = self.on_complete.take() {
                callback();
            }
        }

        Step {
            value,
            finished: self.done,
        }
    }

    pub fn value(&self) -> T {
        self.start.lerp(self.target, self.easing.apply(self.progress))
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_finished(&self) -> bool {
        self.done
    }
}

impl<T: Lerp + fmt::Debug> fmt::Debug for Transition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("start", &self.start)
            .field("target", &self.target)
            .field("progression", &self.progression)
            .field("easing", &self.easing)
            .field("progress", &self.progress)
            .field("done", &self.done)
            .finish()
    }
}
