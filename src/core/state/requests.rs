//=========================================================================
// State Requests
//=========================================================================
//
// Deferred state changes.
//
// A state is owned by the manager while it runs, so it cannot call
// `set_state` on it directly. Instead it keeps a `StateRequests` handle
// and queues a request; the host applies the queue at the frame boundary
// via `StateManager::apply_requests`.
//
//   State / loader thread ──StateRequests::send()──► channel
//                                                      ↓
//   StateManager::apply_requests() ── FIFO ──► set_state / set_state_with_transition
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};

//=== Internal Dependencies ===============================================

use super::{State, StateError};
use crate::core::transition::Transition;

//=== StateRequest ========================================================

/// A queued state change.
pub enum StateRequest {
    /// Replace the current state immediately.
    Set(Box<dyn State>),

    /// Blend into the given state with the given transition.
    Transition(Box<dyn State>, Box<dyn Transition>),
}

impl std::fmt::Debug for StateRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Set(next) => f.debug_tuple("Set").field(&next.name()).finish(),
            Self::Transition(next, transition) => f
                .debug_tuple("Transition")
                .field(&next.name())
                .field(&transition.name())
                .finish(),
        }
    }
}

//=== StateRequests =======================================================

/// Cloneable handle for queueing state changes.
///
/// Obtained from [`StateManager::requests`](super::StateManager::requests).
/// Safe to move to other threads (e.g. an asset loader that switches to
/// the menu once loading completes).
#[derive(Clone)]
pub struct StateRequests {
    sender: Sender<StateRequest>,
}

impl StateRequests {
    /// Queues an immediate switch to `next`.
    pub fn set_state<T>(&self, next: T) -> Result<(), StateError>
    where
        T: State + 'static,
    {
        self.send(StateRequest::Set(Box::new(next)))
    }

    /// Queues a blended switch to `next`.
    pub fn set_state_with_transition<T, R>(&self, next: T, transition: R) -> Result<(), StateError>
    where
        T: State + 'static,
        R: Transition + 'static,
    {
        let request = StateRequest::Transition(Box::new(next), Box::new(transition));
        self.send(request)
    }

    /// Queues a prepared request.
    pub fn send(&self, request: StateRequest) -> Result<(), StateError> {
        self.sender
            .send(request)
            .map_err(|_| StateError::RequestsClosed)
    }
}

//=== RequestQueue ========================================================

/// Receiving side, owned by the manager.
pub(crate) struct RequestQueue {
    sender: Sender<StateRequest>,
    receiver: Receiver<StateRequest>,
}

impl RequestQueue {
    pub(crate) fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    pub(crate) fn handle(&self) -> StateRequests {
        StateRequests {
            sender: self.sender.clone(),
        }
    }

    /// Takes every queued request in FIFO order.
    pub(crate) fn drain(&self) -> Vec<StateRequest> {
        self.receiver.try_iter().collect()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.receiver.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transition::Fade;
    use crate::test_support::{Trail, TrailState};

    #[test]
    fn requests_drain_in_fifo_order() {
        let trail = Trail::new();
        let queue = RequestQueue::new();
        let handle = queue.handle();

        handle.set_state(TrailState::new("a", &trail)).unwrap();
        handle
            .set_state_with_transition(TrailState::new("b", &trail), Fade::new(1.0))
            .unwrap();
        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        match &drained[0] {
            StateRequest::Set(state) => assert_eq!(state.name(), "a"),
            other => panic!("expected a set request, got {:?}", other),
        }
        match &drained[1] {
            StateRequest::Transition(state, _) => assert_eq!(state.name(), "b"),
            other => panic!("expected a transition request, got {:?}", other),
        }
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn cloned_handles_share_queue() {
        let trail = Trail::new();
        let queue = RequestQueue::new();
        let first = queue.handle();
        let second = first.clone();

        first.set_state(TrailState::new("a", &trail)).unwrap();
        second.set_state(TrailState::new("b", &trail)).unwrap();

        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn handle_works_across_threads() {
        let trail = Trail::new();
        let queue = RequestQueue::new();
        let handle = queue.handle();
        let state = TrailState::new("loaded", &trail);

        std::thread::spawn(move || handle.set_state(state))
            .join()
            .unwrap()
            .unwrap();

        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn send_fails_after_queue_dropped() {
        let trail = Trail::new();
        let queue = RequestQueue::new();
        let handle = queue.handle();
        drop(queue);

        let result = handle.set_state(TrailState::new("a", &trail));
        assert_eq!(result, Err(StateError::RequestsClosed));
    }

    #[test]
    fn request_debug_shows_names() {
        let trail = Trail::new();
        let request = StateRequest::Set(Box::new(TrailState::new("menu", &trail)));
        assert!(format!("{:?}", request).contains("menu"));
    }
}
