//=========================================================================
// State Manager
//=========================================================================
//
// Owns the current state, at most one incoming state and at most one
// running transition, and drives them once per frame.
//
// Frame lifecycle (host driven, never re-entrant):
//   update(delta) → apply_requests() → render(batch)
//
// Transition lifecycle:
//   set_state_with_transition() → pending armed (elapsed = 0)
//   update() ... transition.step() ... finished
//     → outgoing.dispose() → incoming promoted → pending cleared
//
// The incoming state and its transition live in one `Pending` slot, so
// one can never exist without the other.
//
// One manager per process is the intended usage. It is a plain value
// owned by the host, so tests build as many as they like.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use super::requests::{RequestQueue, StateRequest, StateRequests};
use super::{State, StateError};
use crate::core::input::InputEvent;
use crate::core::render::{Batch, Extent};
use crate::core::transition::Transition;
use crate::core::view::{Camera, View, Viewport};

//=== Pending =============================================================

/// Incoming state together with the transition that will promote it.
struct Pending {
    incoming: Box<dyn State>,
    transition: Box<dyn Transition>,
}

//=== Installed ===========================================================

/// Everything that exists between `init` and `dispose`.
struct Installed {
    camera: Box<dyn Camera>,
    viewport: Box<dyn Viewport>,
    world: Extent,
    current: Option<Box<dyn State>>,
    pending: Option<Pending>,
}

impl Installed {
    fn update(&mut self, delta: f32) {
        if let Some(current) = self.current.as_mut() {
            current.update(delta);
        }

        let finished = match self.pending.as_mut() {
            Some(pending) => {
                pending.incoming.update(delta);
                let progress = pending.transition.step(delta);
                trace!(
                    target: "state",
                    "Transition {} at {:.3}",
                    pending.transition.name(),
                    progress
                );
                pending.transition.is_finished()
            }
            None => false,
        };

        if finished {
            self.finish_transition();
        }
    }

    fn finish_transition(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        if let Some(mut outgoing) = self.current.take() {
            debug!(target: "state", "Disposing outgoing state {}", outgoing.name());
            outgoing.dispose();
        }

        debug!(
            target: "state",
            "Transition {} finished, promoting {}",
            pending.transition.name(),
            pending.incoming.name()
        );
        self.current = Some(pending.incoming);
    }
}

//=== StateManager ========================================================

/// Lifecycle manager for screen states with blended transitions.
///
/// Every operation returns [`StateError::NotInitialized`] until
/// [`init`](StateManager::init) succeeds, and again after
/// [`dispose`](StateManager::dispose).
///
/// # Example
///
/// ```rust
/// # use stagecraft::prelude::*;
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
/// # struct Screen;
/// # impl State for Screen {
/// #     fn update(&mut self, _delta: f32) {}
/// #     fn render(&self, _batch: &mut dyn Batch) {}
/// # }
/// let mut manager = StateManager::new();
/// manager.init(Fixed, Identity, 800.0, 600.0)?;
/// manager.set_state(Screen)?;
/// manager.set_state_with_transition(Screen, Fade::new(0.5))?;
///
/// let mut batch = CommandBatch::new();
/// manager.update(1.0 / 60.0)?;
/// manager.render(&mut batch)?;
/// # Ok::<(), StateError>(())
/// ```
pub struct StateManager {
    installed: Option<Installed>,
    requests: RequestQueue,
}

impl StateManager {
    //--- Construction -----------------------------------------------------

    /// Creates an uninitialized manager.
    pub fn new() -> Self {
        Self {
            installed: None,
            requests: RequestQueue::new(),
        }
    }

    /// Supplies the camera, viewport and world size.
    ///
    /// # Errors
    ///
    /// - [`StateError::AlreadyInitialized`] if called twice. Use
    ///   [`reconfigure`](StateManager::reconfigure) to swap the camera or
    ///   viewport of a running manager.
    /// - [`StateError::InvalidWorldSize`] for non-positive or non-finite sizes.
    pub fn init<C, V>(
        &mut self,
        camera: C,
        viewport: V,
        world_width: f32,
        world_height: f32,
    ) -> Result<(), StateError>
    where
        C: Camera + 'static,
        V: Viewport + 'static,
    {
        if self.installed.is_some() {
            warn!(target: "state", "Rejected second init of state manager");
            return Err(StateError::AlreadyInitialized);
        }

        let world = validate_world(world_width, world_height)?;

        self.installed = Some(Installed {
            camera: Box::new(camera),
            viewport: Box::new(viewport),
            world,
            current: None,
            pending: None,
        });

        info!(
            target: "state",
            "State manager initialized (world: {}x{})",
            world.width,
            world.height
        );
        Ok(())
    }

    /// Replaces the camera, viewport and world size, keeping installed states.
    ///
    /// The new viewport has not seen the window size yet; the host should
    /// follow up with [`resize`](StateManager::resize).
    pub fn reconfigure<C, V>(
        &mut self,
        camera: C,
        viewport: V,
        world_width: f32,
        world_height: f32,
    ) -> Result<(), StateError>
    where
        C: Camera + 'static,
        V: Viewport + 'static,
    {
        let installed = self.installed_mut()?;
        let world = validate_world(world_width, world_height)?;

        installed.camera = Box::new(camera);
        installed.viewport = Box::new(viewport);
        installed.world = world;

        info!(
            target: "state",
            "State manager reconfigured (world: {}x{})",
            world.width,
            world.height
        );
        Ok(())
    }

    /// True between a successful `init` and `dispose`.
    pub fn is_initialized(&self) -> bool {
        self.installed.is_some()
    }

    //--- State Switching --------------------------------------------------

    /// Disposes the current state and installs `next` without blending.
    ///
    /// # Errors
    ///
    /// [`StateError::TransitionInProgress`] while a transition runs; the
    /// current state is left untouched and `next` is dropped.
    pub fn set_state<T>(&mut self, next: T) -> Result<(), StateError>
    where
        T: State + 'static,
    {
        self.set_state_boxed(Box::new(next))
    }

    /// Boxed form of [`set_state`](StateManager::set_state).
    pub fn set_state_boxed(&mut self, next: Box<dyn State>) -> Result<(), StateError> {
        let installed = self.installed_mut()?;

        if installed.pending.is_some() {
            warn!(
                target: "state",
                "Rejected switch to {}: transition in progress",
                next.name()
            );
            return Err(StateError::TransitionInProgress);
        }

        if let Some(mut previous) = installed.current.take() {
            debug!(target: "state", "Disposing state {}", previous.name());
            previous.dispose();
        }

        debug!(target: "state", "Installing state {}", next.name());
        installed.current = Some(next);
        Ok(())
    }

    /// Starts blending from the current state into `next`.
    ///
    /// The current state becomes the outgoing state and keeps receiving
    /// input until the transition completes. With no current state there
    /// is nothing to blend from, so `next` is installed directly.
    ///
    /// # Errors
    ///
    /// [`StateError::TransitionInProgress`] if a transition is already
    /// running. Transitions never preempt each other and are not queued.
    pub fn set_state_with_transition<T, R>(
        &mut self,
        next: T,
        transition: R,
    ) -> Result<(), StateError>
    where
        T: State + 'static,
        R: Transition + 'static,
    {
        self.set_state_with_transition_boxed(Box::new(next), Box::new(transition))
    }

    /// Boxed form of [`set_state_with_transition`](StateManager::set_state_with_transition).
    pub fn set_state_with_transition_boxed(
        &mut self,
        next: Box<dyn State>,
        mut transition: Box<dyn Transition>,
    ) -> Result<(), StateError> {
        let installed = self.installed_mut()?;

        if installed.pending.is_some() {
            warn!(
                target: "state",
                "Rejected transition to {}: transition in progress",
                next.name()
            );
            return Err(StateError::TransitionInProgress);
        }

        if installed.current.is_none() {
            debug!(
                target: "state",
                "No current state to blend from, installing {} directly",
                next.name()
            );
            installed.current = Some(next);
            return Ok(());
        }

        transition.reset();
        debug!(
            target: "state",
            "Starting transition {} to {}",
            transition.name(),
            next.name()
        );
        installed.pending = Some(Pending {
            incoming: next,
            transition,
        });
        Ok(())
    }

    //--- Frame Loop -------------------------------------------------------

    /// Advances the current state, and the incoming state and transition
    /// if one is running.
    ///
    /// A transition that finishes during this call is completed before it
    /// returns: the outgoing state is disposed and the incoming state is
    /// current for the following `render`.
    ///
    /// # Errors
    ///
    /// [`StateError::InvalidDelta`] for negative or non-finite deltas.
    pub fn update(&mut self, delta: f32) -> Result<(), StateError> {
        let installed = self.installed_mut()?;

        if !delta.is_finite() || delta < 0.0 {
            return Err(StateError::InvalidDelta(delta));
        }

        installed.update(delta);
        Ok(())
    }

    /// Draws the frame into `batch`.
    ///
    /// Without a transition the current state renders itself. During a
    /// transition the transition composites outgoing and incoming; the
    /// two are never drawn independently.
    pub fn render(&mut self, batch: &mut dyn Batch) -> Result<(), StateError> {
        let installed = self.installed_mut()?;

        installed.camera.update();
        installed.viewport.apply(installed.camera.as_ref());

        match (&installed.current, &installed.pending) {
            (Some(outgoing), Some(pending)) => pending.transition.render(
                outgoing.as_ref(),
                pending.incoming.as_ref(),
                pending.transition.progress(),
                batch,
                installed.world,
            ),
            (Some(current), None) => current.render(batch),
            (None, _) => trace!(target: "state", "No state to render"),
        }

        Ok(())
    }

    //--- Lifecycle Events -------------------------------------------------

    /// Resizes the viewport, then the current and incoming states.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), StateError> {
        let installed = self.installed_mut()?;
        debug!(target: "state", "Resizing to {}x{}", width, height);

        installed.viewport.update(width, height);
        if let Some(current) = installed.current.as_mut() {
            current.resize(width, height);
        }
        if let Some(pending) = installed.pending.as_mut() {
            pending.incoming.resize(width, height);
        }
        Ok(())
    }

    /// Forwards pause to the current and incoming states.
    pub fn pause(&mut self) -> Result<(), StateError> {
        let installed = self.installed_mut()?;
        debug!(target: "state", "Pausing");

        if let Some(current) = installed.current.as_mut() {
            current.pause();
        }
        if let Some(pending) = installed.pending.as_mut() {
            pending.incoming.pause();
        }
        Ok(())
    }

    /// Forwards resume to the current and incoming states.
    pub fn resume(&mut self) -> Result<(), StateError> {
        let installed = self.installed_mut()?;
        debug!(target: "state", "Resuming");

        if let Some(current) = installed.current.as_mut() {
            current.resume();
        }
        if let Some(pending) = installed.pending.as_mut() {
            pending.incoming.resume();
        }
        Ok(())
    }

    /// Routes an input event to the current state only.
    ///
    /// Returns whether the state consumed it.
    pub fn handle_input(&mut self, event: &InputEvent) -> Result<bool, StateError> {
        let Installed {
            camera,
            viewport,
            world,
            current,
            ..
        } = self.installed_mut()?;

        let Some(current) = current.as_mut() else {
            return Ok(false);
        };

        let view = View::new(camera.as_ref(), viewport.as_ref(), *world);
        Ok(current.handle_input(event, &view))
    }

    /// Disposes every installed state, drops the transition and any
    /// queued requests, and returns the manager to its uninitialized form.
    pub fn dispose(&mut self) -> Result<(), StateError> {
        let installed = self.installed.take().ok_or(StateError::NotInitialized)?;

        if let Some(mut current) = installed.current {
            debug!(target: "state", "Disposing state {}", current.name());
            current.dispose();
        }
        if let Some(Pending { mut incoming, .. }) = installed.pending {
            debug!(target: "state", "Disposing incoming state {}", incoming.name());
            incoming.dispose();
        }

        let dropped = self.requests.drain().len();
        if dropped > 0 {
            debug!(target: "state", "Dropped {} unapplied state requests", dropped);
        }

        info!(target: "state", "State manager disposed");
        Ok(())
    }

    //--- Requests ---------------------------------------------------------

    /// Returns a handle states can keep to request state changes.
    pub fn requests(&self) -> Result<StateRequests, StateError> {
        self.installed()?;
        Ok(self.requests.handle())
    }

    /// Applies queued requests in FIFO order.
    ///
    /// Rejected requests (e.g. a second transition while one is running)
    /// are logged and dropped. Returns how many were applied.
    pub fn apply_requests(&mut self) -> Result<usize, StateError> {
        self.installed()?;

        let mut applied = 0;
        for request in self.requests.drain() {
            let result = match request {
                StateRequest::Set(next) => self.set_state_boxed(next),
                StateRequest::Transition(next, transition) => {
                    self.set_state_with_transition_boxed(next, transition)
                }
            };

            match result {
                Ok(()) => applied += 1,
                Err(e) => warn!(target: "state", "Dropped state request: {}", e),
            }
        }

        Ok(applied)
    }

    //--- Queries ----------------------------------------------------------

    /// True while an incoming state is being blended in.
    pub fn is_transitioning(&self) -> Result<bool, StateError> {
        Ok(self.installed()?.pending.is_some())
    }

    /// Progress of the running transition, if any.
    pub fn progress(&self) -> Result<Option<f32>, StateError> {
        Ok(self
            .installed()?
            .pending
            .as_ref()
            .map(|pending| pending.transition.progress()))
    }

    pub fn current_state(&self) -> Result<Option<&dyn State>, StateError> {
        Ok(self.installed()?.current.as_deref())
    }

    pub fn incoming_state(&self) -> Result<Option<&dyn State>, StateError> {
        Ok(self
            .installed()?
            .pending
            .as_ref()
            .map(|pending| pending.incoming.as_ref()))
    }

    pub fn world_extent(&self) -> Result<Extent, StateError> {
        Ok(self.installed()?.world)
    }

    pub fn screen_to_world(&self, x: f32, y: f32) -> Result<(f32, f32), StateError> {
        let installed = self.installed()?;
        let camera = installed.camera.as_ref();
        Ok(installed.viewport.unproject(camera, x, y))
    }

    pub fn world_to_screen(&self, x: f32, y: f32) -> Result<(f32, f32), StateError> {
        let installed = self.installed()?;
        let camera = installed.camera.as_ref();
        Ok(installed.viewport.project(camera, x, y))
    }

    //--- Internal Helpers -------------------------------------------------

    fn installed(&self) -> Result<&Installed, StateError> {
        self.installed.as_ref().ok_or(StateError::NotInitialized)
    }

    fn installed_mut(&mut self) -> Result<&mut Installed, StateError> {
        self.installed.as_mut().ok_or(StateError::NotInitialized)
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_world(width: f32, height: f32) -> Result<Extent, StateError> {
    let world = Extent::new(width, height);
    if world.is_valid() {
        Ok(world)
    } else {
        Err(StateError::InvalidWorldSize { width, height })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
