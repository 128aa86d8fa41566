//=========================================================================
// Platform Subsystem
//
// Runs the Winit event loop and drives the StateManager once per frame.
//
// Architecture:
// ```text
//  Main Thread
//  ┌──────────────────────────────────────────────────────────┐
//  │  Winit Event Loop                                        │
//  │   ├─ Resized ─────────────► StateManager::resize         │
//  │   ├─ Suspended / Resumed ─► StateManager::pause/resume   │
//  │   ├─ Key / Mouse ─► InputProcessor ─► InputBuffer        │
//  │   ├─ RedrawRequested (frame boundary)                    │
//  │   │    1. FrameClock::tick()        → delta              │
//  │   │    2. InputBuffer::drain()      → handle_input       │
//  │   │    3. StateManager::update(delta)                    │
//  │   │    4. StateManager::apply_requests()                 │
//  │   │    5. Batch::begin → StateManager::render → end      │
//  │   └─ CloseRequested → exit → exiting() → dispose         │
//  └──────────────────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: input is buffered and handed to
//   the current state in one batch before update, in arrival order
// - **Single thread**: update and render are never concurrent or
//   re-entrant; the manager is owned by the handler
// - **Errors are logged, not fatal**: a rejected call leaves the manager
//   unchanged, so the loop keeps running
// - **Main thread requirement**: Winit mandates the main thread on
//   macOS/iOS, so this runs on the thread that called `Stage::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod frame_clock;
mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::render::Batch;
use crate::core::state::StateManager;
use crate::stage::StageConfig;
use frame_clock::FrameClock;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== PlatformError =======================================================

/// Event loop failures. Fatal: without an event loop nothing runs.
#[derive(Debug)]
pub(crate) enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Platform ============================================================

/// Window owner and frame driver.
///
/// # Fields
///
/// - `window`: Created lazily in `resumed()` (mobile compatibility)
/// - `buffer`: Accumulates input until `RedrawRequested`
/// - `clock`: Produces the clamped per-frame delta
/// - `manager`: The state manager being driven
/// - `batch`: Host-supplied draw batch, reused every frame
pub(crate) struct Platform<B: Batch> {
    config: StageConfig,
    window: Option<Window>,
    buffer: InputBuffer,
    input_processor: InputProcessor,
    clock: FrameClock,
    manager: StateManager,
    batch: B,
}

impl<B: Batch> Platform<B> {
    //--- Construction -----------------------------------------------------

    /// Does not create the window yet; that happens in `resumed()`.
    pub(crate) fn new(config: StageConfig, manager: StateManager, batch: B) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            clock: FrameClock::new(config.max_delta),
            config,
            window: None,
            buffer: InputBuffer::new(),
            input_processor: InputProcessor::new(),
            manager,
            batch,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// terminates abnormally.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        let result = event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution);

        // Loop can end without `exiting()` when run_app fails
        self.shutdown();
        result
    }

    //--- Frame ------------------------------------------------------------

    /// One frame: input, update, queued requests, render.
    fn frame(&mut self) {
        let delta = self.clock.tick();

        self.dispatch_input();

        if let Err(e) = self.manager.update(delta) {
            error!(target: "platform", "Update failed: {}", e);
        }

        match self.manager.apply_requests() {
            Ok(0) => {}
            Ok(applied) => debug!(target: "platform", "Applied {} state requests", applied),
            Err(e) => error!(target: "platform", "Applying state requests failed: {}", e),
        }

        self.batch.begin();
        if let Err(e) = self.manager.render(&mut self.batch) {
            error!(target: "platform", "Render failed: {}", e);
        }
        self.batch.end();
    }

    /// Hands buffered input to the current state.
    fn dispatch_input(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let events = self.buffer.drain();
        trace!(target: "platform::input", "Dispatching {} input events", events.len());

        for event in &events {
            if let Err(e) = self.manager.handle_input(event) {
                warn!(target: "platform::input", "Dropping {:?}: {}", event, e);
            }
        }
    }

    /// Disposes the manager once; later calls are no-ops.
    fn shutdown(&mut self) {
        if !self.manager.is_initialized() {
            return;
        }

        match self.manager.dispose() {
            Ok(()) => info!(target: "platform", "States disposed"),
            Err(e) => error!(target: "platform", "Dispose failed: {}", e),
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Err(e) = self.manager.resize(width, height) {
            error!(target: "platform", "Resize failed: {}", e);
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl<B: Batch> ApplicationHandler for Platform<B> {
    /// Creates the window on first call; later calls are resumes.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            debug!(target: "platform", "Resumed");
            self.clock.reset();
            if let Err(e) = self.manager.resume() {
                error!(target: "platform", "Resume failed: {}", e);
            }
            window.request_redraw();
            return;
        }

        let (width, height) = self.config.window_size;
        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(width, height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    size.width,
                    size.height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
                self.resize(size.width, size.height);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                event_loop.exit();
            }
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        debug!(target: "platform", "Suspended");
        if let Err(e) = self.manager.pause() {
            error!(target: "platform", "Pause failed: {}", e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.update_modifiers(state.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self
                    .input_processor
                    .process_mouse_move(position.x as f32, position.y as f32);
                self.buffer.push(event);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let mapped = self.input_processor.process_key_event(&event);
                match mapped {
                    Some(event) => self.buffer.push(event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(button, state);
                self.buffer.push(event);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let event = self.input_processor.process_wheel(delta);
                self.buffer.push(event);
            }

            WindowEvent::RedrawRequested => {
                self.frame();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        info!(target: "platform", "Event loop exiting");
        self.shutdown();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
