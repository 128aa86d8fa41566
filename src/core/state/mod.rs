//=========================================================================
// State System
//=========================================================================
//
// Screen-level application states and their lifecycle manager.
//
// Architecture:
//   StateManager
//     ├─ current:  Option<Box<dyn State>>
//     └─ pending:  Option<{ incoming: Box<dyn State>, transition: Box<dyn Transition> }>
//
// Roles:
//   inactive  – owned by the host, not installed
//   current   – updated, rendered, receives input
//   incoming  – updated and rendered (through the transition), no input
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;
use crate::core::render::Batch;
use crate::core::view::View;

//=== Module Declarations =================================================

mod error;
mod manager;
mod requests;

//=== Public API ==========================================================

pub use error::StateError;
pub use manager::StateManager;
pub use requests::{StateRequest, StateRequests};

//=== State Trait =========================================================

/// A unit of application behavior (title screen, gameplay, pause menu).
///
/// Ownership moves into the [`StateManager`] on install. The manager calls
/// [`dispose`](State::dispose) exactly once, when the state is replaced or
/// the manager is disposed.
///
/// # Minimal Implementation
///
/// Only `update()` and `render()` are required. Every other hook defaults
/// to a no-op:
///
/// ```rust
/// # use stagecraft::prelude::*;
/// struct Title;
///
/// impl State for Title {
///     fn update(&mut self, _delta: f32) {}
///
///     fn render(&self, batch: &mut dyn Batch) {
///         batch.fill_rect(Rect::new(0.0, 0.0, 800.0, 600.0), Color::BLACK);
///     }
/// }
/// ```
pub trait State: Send {
    /// Advances logic by `delta` seconds.
    fn update(&mut self, delta: f32);

    /// Draws the state. All drawing must go through `batch` so that
    /// transitions can blend it.
    fn render(&self, batch: &mut dyn Batch);

    /// Releases resources. Called once, before the state is dropped.
    fn dispose(&mut self) {}

    /// Window resized to `width` x `height` physical pixels.
    fn resize(&mut self, _width: u32, _height: u32) {}

    /// Application lost focus or was suspended.
    fn pause(&mut self) {}

    /// Application regained focus or was resumed.
    fn resume(&mut self) {}

    /// Handles an input event. Returns `true` if it was consumed.
    ///
    /// Use `view` to convert pointer positions into world coordinates.
    fn handle_input(&mut self, _event: &InputEvent, _view: &View<'_>) -> bool {
        false
    }

    /// Name used in log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
