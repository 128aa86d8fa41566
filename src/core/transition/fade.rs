//=========================================================================
// Fade Transition
//=========================================================================
//
// Alpha cross-dissolve: outgoing at (1 - p), incoming at p on top.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{clamp_progress, Timeline, Transition};
use crate::core::render::{Batch, Extent};
use crate::core::state::State;

//=== Fade ================================================================

/// Cross-dissolve from the outgoing state to the incoming one.
///
/// The outgoing state is always drawn first so the incoming state lands on
/// top and intermediate frames never show the clear color through both.
#[derive(Debug, Clone)]
pub struct Fade {
    timeline: Timeline,
}

impl Fade {
    /// Creates a fade lasting `duration` seconds.
    pub fn new(duration: f32) -> Self {
        Self {
            timeline: Timeline::new(duration),
        }
    }
}

impl Transition for Fade {
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
        _extent: Extent,
    ) {
        let p = clamp_progress(progress);
        let base_alpha = batch.alpha();

        batch.set_alpha(base_alpha * (1.0 - p));
        outgoing.render(batch);

        batch.set_alpha(base_alpha * p);
        incoming.render(batch);

        batch.set_alpha(base_alpha);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::CommandBatch;
    use crate::test_support::{Trail, TrailState};

    const EXTENT: Extent = Extent::new(800.0, 600.0);

    fn render_at(progress: f32) -> CommandBatch {
        let trail = Trail::new();
        let outgoing = TrailState::new("out", &trail);
        let incoming = TrailState::new("in", &trail);
        let mut batch = CommandBatch::new();

        batch.begin();
        Fade::new(1.0).render(&outgoing, &incoming, progress, &mut batch, EXTENT);
        batch.end();
        batch
    }

    #[test]
    fn outgoing_first_then_incoming() {
        let batch = render_at(0.5);
        let commands = batch.commands();

        assert_eq!(commands.len(), 2);
        assert_eq!(
            commands[0].color,
            TrailState::color_of("out").scale_alpha(0.5)
        );
        assert_eq!(
            commands[1].color,
            TrailState::color_of("in").scale_alpha(0.5)
        );
    }

    #[test]
    fn alphas_follow_progress() {
        let batch = render_at(0.25);
        let commands = batch.commands();

        assert_eq!(commands[0].color.a, 0.75);
        assert_eq!(commands[1].color.a, 0.25);
    }

    #[test]
    fn endpoints() {
        let start = render_at(0.0);
        assert_eq!(start.commands()[0].color.a, 1.0);
        assert_eq!(start.commands()[1].color.a, 0.0);

        let end = render_at(1.0);
        assert_eq!(end.commands()[0].color.a, 0.0);
        assert_eq!(end.commands()[1].color.a, 1.0);
    }

    #[test]
    fn offsets_are_untouched() {
        let batch = render_at(0.6);
        for command in batch.commands() {
            assert_eq!(command.rect.x, 0.0);
            assert_eq!(command.rect.y, 0.0);
        }
    }

    #[test]
    fn restores_batch_alpha() {
        let trail = Trail::new();
        let outgoing = TrailState::new("out", &trail);
        let incoming = TrailState::new("in", &trail);
        let mut batch = CommandBatch::new();
        batch.set_alpha(0.8);

        Fade::new(1.0).render(&outgoing, &incoming, 0.3, &mut batch, EXTENT);

        assert_eq!(batch.alpha(), 0.8);
    }

    #[test]
    fn same_progress_renders_same_frame() {
        let first = render_at(0.42);
        let second = render_at(0.42);
        assert_eq!(first.commands(), second.commands());
    }
}
