//=========================================================================
// Transition System
//=========================================================================
//
// Time-bounded blend policies between an outgoing and an incoming state.
//
// Architecture:
//   Transition (trait)
//     ├─ Timeline: duration + elapsed → progress ∈ [0, 1]
//     └─ render(outgoing, incoming, progress, batch, extent)
//
//   Policies: Fade, HorizontalSlide
//
// Flow (driven by StateManager):
//   reset() → step(delta) per update → render() per frame → is_finished()
//
//=========================================================================

//=== Internal Dependencies ===============================================

use log::trace;

use crate::core::render::{Batch, Extent};
use crate::core::state::State;

//=== Module Declarations =================================================

mod fade;
mod slide;

//=== Public API ==========================================================

pub use fade::Fade;
pub use slide::{HorizontalSlide, SlideDirection};

//=== Timeline ============================================================

/// Progress this close to `1.0` counts as finished.
///
/// Covers the rounding left over when frame deltas of `duration / n` are
/// summed back up to `duration`.
const FINISH_TOLERANCE: f32 = 4.0 * f32::EPSILON;

/// Elapsed-time tracker shared by every transition policy.
///
/// Progress is `elapsed / duration` capped at `1.0` and never decreases
/// within one run. A duration that is not a finite positive number
/// finishes on the first step instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    duration: f32,
    elapsed: f64,
    progress: f32,
}

impl Timeline {
    /// Creates a timeline of `duration` seconds at elapsed 0.
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            progress: 0.0,
        }
    }

    /// Advances by `delta` seconds and returns the new progress.
    ///
    /// Negative and non-finite deltas advance nothing. Stepping a finished
    /// timeline leaves it at `1.0`.
    pub fn step(&mut self, delta: f32) -> f32 {
        if self.is_finished() {
            return self.progress;
        }

        if delta.is_finite() && delta > 0.0 {
            self.elapsed += f64::from(delta);
        } else if delta != 0.0 {
            trace!(target: "transition", "Ignoring invalid step delta {}", delta);
        }

        let next = if self.duration.is_finite() && self.duration > 0.0 {
            (self.elapsed / f64::from(self.duration)).min(1.0) as f32
        } else {
            1.0
        };

        self.progress = if next >= 1.0 - FINISH_TOLERANCE {
            1.0
        } else {
            self.progress.max(next)
        };
        self.progress
    }

    /// Rewinds to elapsed 0.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.progress = 0.0;
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }
}

//=== Transition Trait ====================================================

/// Visual blend between two states over a fixed duration.
///
/// Implementors only supply their [`Timeline`] and a composite
/// [`render`](Transition::render); stepping and completion come from the
/// provided methods.
///
/// `render` must depend only on its arguments: calling it twice with the
/// same progress draws the same frame. It must leave the batch's alpha and
/// offset as it found them.
pub trait Transition: Send {
    fn timeline(&self) -> &Timeline;

    fn timeline_mut(&mut self) -> &mut Timeline;

    /// Draws `outgoing` and `incoming` blended at `progress`.
    fn render(
        &self,
        outgoing: &dyn State,
        incoming: &dyn State,
        progress: f32,
        batch: &mut dyn Batch,
        extent: Extent,
    );

    /// Advances the transition and returns its progress.
    fn step(&mut self, delta: f32) -> f32 {
        self.timeline_mut().step(delta)
    }

    fn progress(&self) -> f32 {
        self.timeline().progress()
    }

    fn is_finished(&self) -> bool {
        self.timeline().is_finished()
    }

    /// Rewinds to the start. The manager calls this when arming.
    fn reset(&mut self) {
        self.timeline_mut().reset()
    }

    /// Name used in log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

//--- Helpers -------------------------------------------------------------

/// Clamps a progress value into `[0, 1]`, mapping NaN to 0.
pub(crate) fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
