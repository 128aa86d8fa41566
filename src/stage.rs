//=========================================================================
// Stage
//
// Main entry point: configures a window and runs states in it.
//
// Architecture:
// ```text
//     StageBuilder  ──build()──>  Stage  ──init()──>  Stage  ──run()──>  [Event Loop]
//         │                         │                   │
//         ├─ with_title()           └─ StateManager     └─ Platform drives
//         ├─ with_window_size()        (initialized)       update + render
//         ├─ with_world_size()                             blocks until exit
//         └─ with_max_delta()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::render::Batch;
use crate::core::state::{StateError, StateManager};
use crate::core::view::{Camera, Viewport};
use crate::platform::Platform;

//=== StageConfig =========================================================

/// Window and clock settings handed to the platform.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StageConfig {
    pub(crate) title: String,
    pub(crate) window_size: (u32, u32),
    pub(crate) max_delta: Duration,
}

//=== StageBuilder ========================================================

/// Builder for configuring and constructing a [`Stage`].
///
/// # Default Values
///
/// - **Title**: "Stagecraft"
/// - **Window size**: 800x600 logical pixels
/// - **World size**: 800x600 world units
/// - **Max frame delta**: 0.25 seconds
///
/// # Examples
///
/// ```no_run
/// use stagecraft::prelude::*;
/// # struct Fixed;
/// # impl Camera for Fixed {
/// #     fn position(&self) -> (f32, f32) { (0.0, 0.0) }
/// #     fn set_position(&mut self, _x: f32, _y: f32) {}
/// # }
/// # struct Identity;
/// # impl Viewport for Identity {
/// #     fn update(&mut self, _w: u32, _h: u32) {}
/// #     fn unproject(&self, _c: &dyn Camera, x: f32, y: f32) -> (f32, f32) { (x, y) }
/// #     fn project(&self, _c: &dyn Camera, x: f32, y: f32) -> (f32, f32) { (x, y) }
/// # }
/// # struct Title;
/// # impl State for Title {
/// #     fn update(&mut self, _delta: f32) {}
/// #     fn render(&self, _batch: &mut dyn Batch) {}
/// # }
///
/// StageBuilder::new()
///     .with_title("Demo")
///     .with_window_size(1280, 720)
///     .with_world_size(320.0, 180.0)
///     .build(Fixed, Identity)?
///     .init(|manager| manager.set_state(Title))?
///     .run(CommandBatch::new());
/// # Ok::<(), StateError>(())
/// ```
pub struct StageBuilder {
    title: String,
    window_size: (u32, u32),
    world_size: (f32, f32),
    max_delta: f32,
}

impl StageBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Stagecraft".to_string(),
            window_size: (800, 600),
            world_size: (800.0, 600.0),
            max_delta: 0.25,
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    ///
    /// Default: 800x600
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Window size must be positive, got {}x{}",
            width,
            height
        );
        self.window_size = (width, height);
        self
    }

    /// Sets the logical world size states lay out against.
    ///
    /// Transitions use the world width as their slide distance.
    ///
    /// Default: 800x600
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not a positive finite number.
    pub fn with_world_size(mut self, width: f32, height: f32) -> Self {
        assert!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            "World size must be positive, got {}x{}",
            width,
            height
        );
        self.world_size = (width, height);
        self
    }

    /// Sets the longest frame delta handed to `update`, in seconds.
    ///
    /// Longer frames (window drags, breakpoints) are clamped so a single
    /// stall cannot jump a transition to its end.
    ///
    /// Default: 0.25
    ///
    /// # Panics
    ///
    /// Panics if `seconds` is not a positive finite number.
    pub fn with_max_delta(mut self, seconds: f32) -> Self {
        assert!(
            seconds.is_finite() && seconds > 0.0,
            "Max delta must be positive, got {}",
            seconds
        );
        self.max_delta = seconds;
        self
    }

    /// Builds the stage and initializes its state manager.
    ///
    /// # Errors
    ///
    /// Propagates [`StateManager::init`] failures.
    pub fn build<C, V>(self, camera: C, viewport: V) -> Result<Stage, StateError>
    where
        C: Camera + 'static,
        V: Viewport + 'static,
    {
        info!(
            "Building stage \"{}\" (window: {}x{}, world: {}x{})",
            self.title, self.window_size.0, self.window_size.1, self.world_size.0, self.world_size.1
        );

        let mut manager = StateManager::new();
        manager.init(camera, viewport, self.world_size.0, self.world_size.1)?;

        Ok(Stage {
            config: self.config(),
            manager,
        })
    }

    pub(crate) fn config(&self) -> StageConfig {
        StageConfig {
            title: self.title.clone(),
            window_size: self.window_size,
            max_delta: Duration::from_secs_f32(self.max_delta),
        }
    }
}

impl Default for StageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Stage ===============================================================

/// A configured window plus the state manager it drives.
///
/// Create via [`StageBuilder`]. States are installed in [`Stage::init`] or
/// through [`StateManager::requests`] once running.
pub struct Stage {
    config: StageConfig,
    manager: StateManager,
}

impl Stage {
    //--- Initialization ---------------------------------------------------

    /// Installs the first state (or anything else needing the manager)
    /// before the event loop starts.
    ///
    /// # Errors
    ///
    /// Returns whatever `init_fn` returns.
    pub fn init<F>(mut self, init_fn: F) -> Result<Self, StateError>
    where
        F: FnOnce(&mut StateManager) -> Result<(), StateError>,
    {
        info!("Initializing stage states");
        init_fn(&mut self.manager)?;
        Ok(self)
    }

    pub fn manager(&self) -> &StateManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut StateManager {
        &mut self.manager
    }

    //--- Execution --------------------------------------------------------

    /// Opens the window and blocks until it closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Window is created when the platform first resumes
    /// 2. Every redraw: input, `update`, queued requests, `render`
    /// 3. On close: states are disposed, then the loop exits
    ///
    /// Platform failures are logged; the states are disposed either way.
    pub fn run<B: Batch>(self, batch: B) {
        info!("Starting stage \"{}\"", self.config.title);

        let platform = Platform::new(self.config, self.manager, batch);

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Stage shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
