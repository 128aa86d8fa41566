//=========================================================================
// Render Seam
//=========================================================================
//
// The draw batch contract between states and the host's renderer.
//
// Architecture:
// ```text
//   State::render() ──► Batch (trait, host supplied)
//                          ├─ alpha   (multiplied into every draw)
//                          ├─ offset  (added to every draw)
//                          └─ fill_rect()
// ```
//
// The core never touches GPU resources. It only sequences calls into
// whatever batch object the host hands over each frame. `CommandBatch`
// is a ready-made batch that records resolved draw commands the host
// can replay on its backend.
//
//=========================================================================

//=== Module Declarations =================================================

mod command_batch;

//=== Public API ==========================================================

pub use command_batch::{CommandBatch, DrawCommand};

//=== Color ===============================================================

/// Linear RGBA color, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Returns the color with its alpha multiplied by `factor` (clamped to `[0, 1]`).
    pub fn scale_alpha(self, factor: f32) -> Self {
        Self {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..self
        }
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the rectangle moved by `(dx, dy)`.
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

//=== Extent ==============================================================

/// World dimensions, fixed at manager initialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if both dimensions are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

//=== Batch Trait =========================================================

/// Per-frame draw batch supplied by the host.
///
/// Transitions composite states by adjusting the batch's alpha and offset
/// between `State::render` calls, so every draw a state issues must go
/// through the batch for blending to apply.
///
/// `begin`/`end` bracket a frame and default to no-ops for backends that
/// do not need them.
pub trait Batch {
    /// Called once before the frame's first draw.
    fn begin(&mut self) {}

    /// Called once after the frame's last draw.
    fn end(&mut self) {}

    /// Sets the opacity multiplied into every subsequent draw.
    fn set_alpha(&mut self, alpha: f32);

    /// Current opacity multiplier.
    fn alpha(&self) -> f32;

    /// Sets the translation added to every subsequent draw.
    fn set_offset(&mut self, x: f32, y: f32);

    /// Current translation.
    fn offset(&self) -> (f32, f32);

    /// Draws a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_alpha_multiplies_and_clamps() {
        let color = Color::rgba(0.2, 0.4, 0.6, 0.5);
        assert_eq!(color.scale_alpha(0.5).a, 0.25);
        assert_eq!(color.scale_alpha(4.0).a, 1.0);
        assert_eq!(color.scale_alpha(-1.0).a, 0.0);
        assert_eq!(color.scale_alpha(0.5).r, 0.2);
    }

    #[test]
    fn rect_translate_keeps_size() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0).translate(-5.0, 5.0);
        assert_eq!(rect, Rect::new(5.0, 25.0, 30.0, 40.0));
    }

    #[test]
    fn extent_validity() {
        assert!(Extent::new(800.0, 600.0).is_valid());
        assert!(!Extent::new(0.0, 600.0).is_valid());
        assert!(!Extent::new(800.0, -1.0).is_valid());
        assert!(!Extent::new(f32::NAN, 600.0).is_valid());
        assert!(!Extent::new(f32::INFINITY, 600.0).is_valid());
    }
}
