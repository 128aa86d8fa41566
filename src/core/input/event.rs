//=========================================================================
// Input Event Types
//
// Engine-level representation of pointer and keyboard input, independent
// of the windowing backend.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputProcessor (platform)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateManager::handle_input → current State
// ```
//
// Pointer events carry screen-space positions. States convert them with
// `View::screen_to_world`.
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Side, thumb and macro buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier (location, not character).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Navigation -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Menu Keys --------------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,

    /// Any key the platform layer does not map.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier keys held during an event. Left and right variants are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,

    /// Ctrl, or Command on macOS.
    pub ctrl: bool,

    /// Alt, or Option on macOS.
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt
    }
}

//=== InputEvent ==========================================================

/// Input delivered to the current state.
///
/// Coordinates are screen space (physical pixels, top-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown {
        key: KeyCode,
        modifiers: Modifiers,
    },

    KeyUp {
        key: KeyCode,
        modifiers: Modifiers,
    },

    /// Button pressed at the last known cursor position.
    MouseButtonDown {
        button: MouseButton,
        x: f32,
        y: f32,
        modifiers: Modifiers,
    },

    /// Button released at the last known cursor position.
    MouseButtonUp {
        button: MouseButton,
        x: f32,
        y: f32,
        modifiers: Modifiers,
    },

    MouseMoved { x: f32, y: f32 },

    /// Wheel scrolled; positive `dy` scrolls up.
    Scrolled { dx: f32, dy: f32 },
}

impl InputEvent {
    /// Screen position for pointer events, `None` for keyboard and wheel.
    pub fn position(&self) -> Option<(f32, f32)> {
        match *self {
            Self::MouseButtonDown { x, y, .. }
            | Self::MouseButtonUp { x, y, .. }
            | Self::MouseMoved { x, y } => Some((x, y)),
            _ => None,
        }
    }

    /// True for events whose relative order matters (keys, buttons).
    ///
    /// Continuous events (cursor motion, wheel) may be coalesced.
    pub fn is_discrete(&self) -> bool {
        matches!(
            self,
            Self::KeyDown { .. }
                | Self::KeyUp { .. }
                | Self::MouseButtonDown { .. }
                | Self::MouseButtonUp { .. }
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_for_pointer_events() {
        let down = InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            x: 3.0,
            y: 4.0,
            modifiers: Modifiers::NONE,
        };
        assert_eq!(down.position(), Some((3.0, 4.0)));
        assert_eq!(
            InputEvent::MouseMoved { x: 1.0, y: 2.0 }.position(),
            Some((1.0, 2.0))
        );
    }

    #[test]
    fn no_position_for_keys_and_wheel() {
        let key = InputEvent::KeyDown {
            key: KeyCode::Space,
            modifiers: Modifiers::NONE,
        };
        assert_eq!(key.position(), None);
        assert_eq!(InputEvent::Scrolled { dx: 0.0, dy: 1.0 }.position(), None);
    }

    #[test]
    fn discrete_classification() {
        let key_up = InputEvent::KeyUp {
            key: KeyCode::Escape,
            modifiers: Modifiers::NONE,
        };
        assert!(key_up.is_discrete());
        assert!(!InputEvent::MouseMoved { x: 0.0, y: 0.0 }.is_discrete());
        assert!(!InputEvent::Scrolled { dx: 1.0, dy: 0.0 }.is_discrete());
    }

    #[test]
    fn modifiers_any() {
        assert!(!Modifiers::NONE.any());
        let shift = Modifiers {
            shift: true,
            ..Modifiers::NONE
        };
        assert!(shift.any());
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }
}
