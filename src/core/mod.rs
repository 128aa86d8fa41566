//=========================================================================
// Core
//
// Window-independent building blocks.
//
// Layout:
// - `state`: the `State` trait and the `StateManager` lifecycle owner
// - `transition`: timed blends between two states (`Fade`, `HorizontalSlide`)
// - `render`: the `Batch` drawing seam and a recording implementation
// - `view`: camera and viewport abstractions for coordinate mapping
// - `input`: engine-level input events
//
//=========================================================================

pub mod input;
pub mod render;
pub mod state;
pub mod transition;
pub mod view;
