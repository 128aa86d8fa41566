//=========================================================================
// Frame Clock
//=========================================================================
//
// Measures wall time between frames and clamps spikes (window drags,
// breakpoints, suspend) so one long frame cannot skip a whole transition.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

use log::trace;

//=== FrameClock ==========================================================

pub(crate) struct FrameClock {
    last: Option<Instant>,
    max_delta: Duration,
}

impl FrameClock {
    pub(crate) fn new(max_delta: Duration) -> Self {
        Self {
            last: None,
            max_delta,
        }
    }

    /// Seconds since the previous tick, clamped to `max_delta`.
    pub(crate) fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Tick against an explicit timestamp. The first tick returns 0.
    pub(crate) fn tick_at(&mut self, now: Instant) -> f32 {
        let Some(last) = self.last.replace(now) else {
            return 0.0;
        };

        let elapsed = now.saturating_duration_since(last);
        if elapsed > self.max_delta {
            trace!(
                target: "platform",
                "Clamping frame delta {:?} to {:?}",
                elapsed,
                self.max_delta
            );
            return self.max_delta.as_secs_f32();
        }

        elapsed.as_secs_f32()
    }

    /// Forgets the previous tick so the next delta starts from zero.
    ///
    /// Used on resume, where the suspended time must not count as a frame.
    pub(crate) fn reset(&mut self) {
        self.last = None;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
