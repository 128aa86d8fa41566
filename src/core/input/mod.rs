//=========================================================================
// Input Model
//=========================================================================
//
// Backend-independent input events routed by the state manager.
//
// Only the current state receives input. An incoming state is updated
// and rendered during a transition but never sees input until it has
// been promoted.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
