//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use stagecraft::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::stage::{Stage, StageBuilder};

// States and switching
pub use crate::core::state::{State, StateError, StateManager, StateRequest, StateRequests};

// Transitions
pub use crate::core::transition::{Fade, HorizontalSlide, SlideDirection, Timeline, Transition};

// Rendering
pub use crate::core::render::{Batch, Color, CommandBatch, DrawCommand, Extent, Rect};

// Camera and viewport
pub use crate::core::view::{Camera, View, Viewport};

// Input
pub use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton};
