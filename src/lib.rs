//=========================================================================
// Stagecraft: Library Root
//
// Screen state management with blended transitions for 2D games.
//
// Responsibilities:
// - Expose the state lifecycle API (`StateManager`, `State`, `Transition`)
// - Expose the windowed runtime facade (`Stage`, `StageBuilder`)
// - Keep the Winit integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use stagecraft::prelude::*;
//
// StageBuilder::new()
//     .build(camera, viewport)?
//     .init(|manager| manager.set_state(TitleScreen::new()))?
//     .run(batch);
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the window-independent pieces: states, transitions, the
// draw batch abstraction, camera/viewport and input events. It can be
// driven by any host loop, not only the bundled `Stage`.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the Winit event loop and window. `stage` configures
// and launches it.
//
mod platform;
mod stage;

#[cfg(test)]
mod test_support;

//--- Public Exports ------------------------------------------------------

pub use stage::{Stage, StageBuilder};
