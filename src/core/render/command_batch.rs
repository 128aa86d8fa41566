//=========================================================================
// Command Batch
//=========================================================================
//
// Recording batch: resolves alpha and offset at draw time and stores the
// result as plain commands.
//
// Frame lifecycle: begin() (clears) → draws → end() → commands()/drain()
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Batch, Color, Rect};

//=== DrawCommand =========================================================

/// A fully resolved draw: offset already added, alpha already multiplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub rect: Rect,
    pub color: Color,
}

//=== CommandBatch ========================================================

/// [`Batch`] that records [`DrawCommand`]s instead of drawing.
///
/// Hosts replay the commands on their own renderer after
/// [`StateManager::render`](crate::core::state::StateManager::render)
/// returns.
#[derive(Debug)]
pub struct CommandBatch {
    commands: Vec<DrawCommand>,
    alpha: f32,
    offset: (f32, f32),
    drawing: bool,
}

impl CommandBatch {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(64),
            alpha: 1.0,
            offset: (0.0, 0.0),
            drawing: false,
        }
    }

    /// Commands recorded since the last `begin()`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the batch empty.
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// True between `begin()` and `end()`.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
}

impl Default for CommandBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Batch for CommandBatch {
    fn begin(&mut self) {
        self.commands.clear();
        self.alpha = 1.0;
        self.offset = (0.0, 0.0);
        self.drawing = true;
    }

    fn end(&mut self) {
        self.drawing = false;
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    fn alpha(&self) -> f32 {
        self.alpha
    }

    fn set_offset(&mut self, x: f32, y: f32) {
        self.offset = (x, y);
    }

    fn offset(&self) -> (f32, f32) {
        self.offset
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand {
            rect: rect.translate(self.offset.0, self.offset.1),
            color: color.scale_alpha(self.alpha),
        });
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
