//=========================================================================
// State Errors
//=========================================================================
//
// Errors reported synchronously by the state manager.
//
// Two families:
// - Configuration: manager used before init, or initialized twice.
// - Precondition: the call is rejected and nothing changes.
//
//=========================================================================

//=== StateError ==========================================================

/// Errors returned by [`StateManager`](super::StateManager) operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateError {
    /// The manager was used before `init` (or after `dispose`).
    NotInitialized,

    /// `init` was called on an initialized manager.
    AlreadyInitialized,

    /// World dimensions must be finite and positive.
    InvalidWorldSize { width: f32, height: f32 },

    /// A transition is running; it cannot be replaced or preempted.
    TransitionInProgress,

    /// Frame delta must be finite and non-negative.
    InvalidDelta(f32),

    /// The manager behind a `StateRequests` handle no longer exists.
    RequestsClosed,
}

impl StateError {
    /// True for misuse of the manager's lifecycle (fatal for the run).
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::NotInitialized | Self::AlreadyInitialized)
    }
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "State manager used before init"),
            Self::AlreadyInitialized => write!(f, "State manager is already initialized"),
            Self::InvalidWorldSize { width, height } => {
                write!(f, "Invalid world size {}x{}", width, height)
            }
            Self::TransitionInProgress => write!(f, "A transition is already in progress"),
            Self::InvalidDelta(delta) => write!(f, "Invalid frame delta: {}", delta),
            Self::RequestsClosed => write!(f, "State manager has been dropped"),
        }
    }
}

impl std::error::Error for StateError {}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<StateError>();
    }

    #[test]
    fn configuration_classification() {
        assert!(StateError::NotInitialized.is_configuration());
        assert!(StateError::AlreadyInitialized.is_configuration());
        assert!(!StateError::TransitionInProgress.is_configuration());
        assert!(!StateError::InvalidDelta(-1.0).is_configuration());
    }

    #[test]
    fn display_includes_details() {
        let error = StateError::InvalidWorldSize {
            width: 0.0,
            height: 600.0,
        };
        assert_eq!(error.to_string(), "Invalid world size 0x600");
        assert!(StateError::InvalidDelta(-0.5).to_string().contains("-0.5"));
    }
}
