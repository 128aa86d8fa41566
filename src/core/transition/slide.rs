//=========================================================================
// Horizontal Slide Transition
//=========================================================================
//
// Pushes the outgoing state off-screen while the incoming state slides
// in along the x-axis. Displacement is linear: offset = p * width.
//
//   LeftToRight:  outgoing → +p·w          incoming → p·w - w
//   RightToLeft:  outgoing → -p·w          incoming → w - p·w
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{clamp_progress, Timeline, Transition};
use crate::core::render::{Batch, Extent};
use crate::core::state::State;

//=== SlideDirection ======================================================

/// Direction the states travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    /// Incoming enters from the left edge, outgoing leaves to the right.
    LeftToRight,

    /// Incoming enters from the right edge, outgoing leaves to the left.
    #[default]
    RightToLeft,
}

//=== HorizontalSlide =====================================================

/// Slides both states horizontally across the world width.
#[derive(Debug, Clone)]
pub struct HorizontalSlide {
    timeline: Timeline,
    direction: SlideDirection,
}

impl HorizontalSlide {
    pub fn new(duration: f32, direction: SlideDirection) -> Self {
        Self {
            timeline: Timeline::new(duration),
            direction,
        }
    }

    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    /// Returns the x offsets `(outgoing, incoming)` at `progress`.
    pub fn offsets(&self, progress: f32, width: f32) -> (f32, f32) {
        let shift = clamp_progress(progress) * width;
        match self.direction {
            SlideDirection::LeftToRight => (shift, shift - width),
            SlideDirection::RightToLeft => (-shift, width - shift),
        }
    }
}

impl Transition for HorizontalSlide {
    fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    fn timeline_mut(&mut self) -> &mut Timeline {
        &mut self.timeline
    }

    fn render(
        &self,
        outgoing: &dyn State,
        incoming: &dyn State,
        progress: f32,
        batch: &mut dyn Batch,
        extent: Extent,
    ) {
        let (outgoing_x, incoming_x) = self.offsets(progress, extent.width);
        let (base_x, base_y) = batch.offset();

        batch.set_offset(base_x + outgoing_x, base_y);
        outgoing.render(batch);

        batch.set_offset(base_x + incoming_x, base_y);
        incoming.render(batch);

        batch.set_offset(base_x, base_y);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
