//=========================================================================
// Input Buffer
//
// Holds input between window events and the next frame boundary.
//
// Responsibilities:
// - Keep discrete events (keys, buttons) in arrival order
// - Coalesce cursor motion (last position wins)
// - Accumulate wheel deltas into a single scroll event
// - Hand everything to the state manager in one `drain()` per frame
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    cursor: Option<(f32, f32)>,
    scroll: Option<(f32, f32)>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 32;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            cursor: None,
            scroll: None,
        }
    }

    /// Buffers an event, coalescing continuous ones.
    pub(crate) fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::MouseMoved { x, y } => self.cursor = Some((x, y)),
            InputEvent::Scrolled { dx, dy } => {
                let (sx, sy) = self.scroll.unwrap_or((0.0, 0.0));
                self.scroll = Some((sx + dx, sy + dy));
            }
            _ => self.discrete.push(event),
        }
    }

    /// Returns this frame's events and empties the buffer.
    ///
    /// Order: coalesced cursor move, discrete events as received, then the
    /// accumulated scroll. Button events carry their own positions, so the
    /// move is delivered first to leave states with the latest pointer.
    pub(crate) fn drain(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::with_capacity(self.len());

        if let Some((x, y)) = self.cursor.take() {
            events.push(InputEvent::MouseMoved { x, y });
        }
        events.append(&mut self.discrete);
        if let Some((dx, dy)) = self.scroll.take() {
            events.push(InputEvent::Scrolled { dx, dy });
        }

        events
    }

    pub(crate) fn len(&self) -> usize {
        let cursor = usize::from(self.cursor.is_some());
        let scroll = usize::from(self.scroll.is_some());
        self.discrete.len() + cursor + scroll
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, Modifiers};

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn new_buffer_is_empty() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.is_empty());
        assert!(buffer.drain().is_empty());
    }

    #[test]
    fn discrete_events_keep_order() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::KeyA));
        buffer.push(key_down(KeyCode::KeyB));
        buffer.push(key_down(KeyCode::KeyA));

        let events = buffer.drain();

        assert_eq!(
            events,
            vec![key_down(KeyCode::KeyA), key_down(KeyCode::KeyB), key_down(KeyCode::KeyA)]
        );
    }

    #[test]
    fn cursor_moves_coalesce_to_last() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::MouseMoved { x: 1.0, y: 1.0 });
        buffer.push(InputEvent::MouseMoved { x: 5.0, y: 9.0 });

        assert_eq!(buffer.len(), 1);
        assert_eq!(
            buffer.drain(),
            vec![InputEvent::MouseMoved { x: 5.0, y: 9.0 }]
        );
    }

    #[test]
    fn scroll_deltas_accumulate() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::Scrolled { dx: 0.0, dy: 20.0 });
        buffer.push(InputEvent::Scrolled { dx: 2.0, dy: -5.0 });

        assert_eq!(
            buffer.drain(),
            vec![InputEvent::Scrolled { dx: 2.0, dy: 15.0 }]
        );
    }

    #[test]
    fn drain_orders_move_then_discrete_then_scroll() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::Scrolled { dx: 0.0, dy: 1.0 });
        buffer.push(key_down(KeyCode::Space));
        buffer.push(InputEvent::MouseMoved { x: 3.0, y: 4.0 });

        let events = buffer.drain();

        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], InputEvent::MouseMoved { .. }));
        assert!(matches!(events[1], InputEvent::KeyDown { .. }));
        assert!(matches!(events[2], InputEvent::Scrolled { .. }));
    }

    #[test]
    fn drain_empties_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::Enter));
        buffer.push(InputEvent::MouseMoved { x: 0.0, y: 0.0 });

        buffer.drain();

        assert!(buffer.is_empty());
        assert!(buffer.drain().is_empty());
    }
}
