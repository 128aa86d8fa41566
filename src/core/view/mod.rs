//=========================================================================
// View Seam
//=========================================================================
//
// Camera and viewport contracts supplied by the host.
//
// The manager owns one camera and one viewport for its whole lifetime.
// It forwards resize to the viewport and applies it before rendering,
// but all projection math lives in the host's implementations.
//
//   screen (pixels) ──Viewport::unproject(camera)──► world
//   world           ──Viewport::project(camera)────► screen (pixels)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::render::Extent;

//=== Camera Trait ========================================================

/// 2D camera looking at the world.
pub trait Camera: Send {
    /// World-space point at the center of the screen.
    fn position(&self) -> (f32, f32);

    /// Moves the camera center.
    fn set_position(&mut self, x: f32, y: f32);

    /// Zoom factor; `1.0` is one world unit per screen unit.
    fn zoom(&self) -> f32 {
        1.0
    }

    /// Recomputes any cached matrices. Called before every render.
    fn update(&mut self) {}
}

//=== Viewport Trait ======================================================

/// Maps the world onto the window's drawable area.
pub trait Viewport: Send {
    /// Window was resized to `width` x `height` physical pixels.
    fn update(&mut self, width: u32, height: u32);

    /// Activates this viewport on the backend before drawing.
    fn apply(&mut self, _camera: &dyn Camera) {}

    /// Screen coordinates to world coordinates.
    fn unproject(&self, camera: &dyn Camera, x: f32, y: f32) -> (f32, f32);

    /// World coordinates to screen coordinates.
    fn project(&self, camera: &dyn Camera, x: f32, y: f32) -> (f32, f32);
}

//=== View ================================================================

/// Borrowed camera + viewport pair handed to states during input handling.
///
/// States convert pointer positions with [`View::screen_to_world`] rather
/// than doing projection math themselves.
pub struct View<'a> {
    camera: &'a dyn Camera,
    viewport: &'a dyn Viewport,
    world: Extent,
}

impl<'a> View<'a> {
    pub fn new(camera: &'a dyn Camera, viewport: &'a dyn Viewport, world: Extent) -> Self {
        Self {
            camera,
            viewport,
            world,
        }
    }

    pub fn screen_to_world(&self, x: f32, y: f32) -> (f32, f32) {
        self.viewport.unproject(self.camera, x, y)
    }

    pub fn world_to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        self.viewport.project(self.camera, x, y)
    }

    pub fn camera(&self) -> &dyn Camera {
        self.camera
    }

    pub fn world(&self) -> Extent {
        self.world
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
