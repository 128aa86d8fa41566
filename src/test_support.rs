//=========================================================================
// Test Support
//=========================================================================
//
// Recording doubles shared by unit tests across the crate.
//
// Every double writes "<who>:<what>" lines into a shared `Trail` so tests
// can assert on call counts and ordering.
//
//=========================================================================

use std::sync::{Arc, Mutex};

use crate::core::input::InputEvent;
use crate::core::render::{Batch, Color, Extent, Rect};
use crate::core::state::State;
use crate::core::transition::{Timeline, Transition};
use crate::core::view::{Camera, View, Viewport};

//=== Trail ===============================================================

/// Shared, thread-safe event log.
#[derive(Clone, Default)]
pub(crate) struct Trail {
    events: Arc<Mutex<Vec<String>>>,
}

impl Trail {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&self, event: impl Into<String>) {
        self.events.lock().unwrap().push(event.into());
    }

    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, event: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| *e == event)
            .count()
    }

    pub(crate) fn count_prefix(&self, prefix: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.starts_with(prefix))
            .count()
    }

    /// Index of the first event starting with `prefix`.
    pub(crate) fn first_index(&self, prefix: &str) -> Option<usize> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .position(|e| e.starts_with(prefix))
    }
}

//=== TrailState ==========================================================

/// State that records every hook and draws one rect in its own color.
pub(crate) struct TrailState {
    name: String,
    trail: Trail,
}

impl TrailState {
    pub(crate) fn new(name: &str, trail: &Trail) -> Self {
        Self {
            name: name.to_string(),
            trail: trail.clone(),
        }
    }

    fn record(&self, event: String) {
        self.trail.record(format!("{}:{}", self.name, event));
    }

    /// Deterministic opaque color derived from the state name.
    pub(crate) fn color_of(name: &str) -> Color {
        let seed = name
            .bytes()
            .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
        Color::rgb(
            (seed % 7) as f32 / 7.0,
            (seed % 11) as f32 / 11.0,
            (seed % 13) as f32 / 13.0,
        )
    }
}

impl State for TrailState {
    fn update(&mut self, delta: f32) {
        self.record(format!("update({})", delta));
    }

    fn render(&self, batch: &mut dyn Batch) {
        self.record("render".to_string());
        let color = Self::color_of(&self.name);
        batch.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), color);
    }

    fn dispose(&mut self) {
        self.record("dispose".to_string());
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.record(format!("resize({}x{})", width, height));
    }

    fn pause(&mut self) {
        self.record("pause".to_string());
    }

    fn resume(&mut self) {
        self.record("resume".to_string());
    }

    fn handle_input(&mut self, event: &InputEvent, view: &View<'_>) -> bool {
        match event.position() {
            Some((x, y)) => {
                let (wx, wy) = view.screen_to_world(x, y);
                self.record(format!("input({},{})", wx, wy));
            }
            None => self.record("input".to_string()),
        }
        true
    }

    fn name(&self) -> &str {
        &self.name
    }
}

//=== BareState ===========================================================

/// State implementing only the required hooks.
pub(crate) struct BareState;

impl State for BareState {
    fn update(&mut self, _delta: f32) {}

    fn render(&self, _batch: &mut dyn Batch) {}
}

//=== TrailTransition =====================================================

/// Transition that records its composite calls and draws nothing.
pub(crate) struct TrailTransition {
    timeline: Timeline,
    trail: Trail,
}

impl TrailTransition {
    pub(crate) fn new(duration: f32, trail: &Trail) -> Self {
        Self {
            timeline: Timeline::new(duration),
            trail: trail.clone(),
        }
    }
}

impl Transition for TrailTransition {
    fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    fn timeline_mut(&mut self) -> &mut Timeline {
        &mut self.timeline
    }

    fn render(
        &self,
        outgoing: &dyn State,
        incoming: &dyn State,
        progress: f32,
        _batch: &mut dyn Batch,
        _extent: Extent,
    ) {
        self.trail.record(format!(
            "composite({},{},{:.2})",
            outgoing.name(),
            incoming.name(),
            progress
        ));
    }
}

//=== TestCamera ==========================================================

pub(crate) struct TestCamera {
    position: (f32, f32),
}

impl TestCamera {
    pub(crate) fn at(x: f32, y: f32) -> Self {
        Self { position: (x, y) }
    }
}

impl Camera for TestCamera {
    fn position(&self) -> (f32, f32) {
        self.position
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.position = (x, y);
    }
}

//=== TestViewport ========================================================

/// Viewport where world = screen + camera position.
pub(crate) struct TestViewport {
    trail: Option<Trail>,
}

impl TestViewport {
    pub(crate) fn new() -> Self {
        Self { trail: None }
    }

    pub(crate) fn with_trail(trail: &Trail) -> Self {
        Self {
            trail: Some(trail.clone()),
        }
    }

    fn record(&self, event: String) {
        if let Some(trail) = &self.trail {
            trail.record(event);
        }
    }
}

impl Viewport for TestViewport {
    fn update(&mut self, width: u32, height: u32) {
        self.record(format!("viewport:update({}x{})", width, height));
    }

    fn apply(&mut self, _camera: &dyn Camera) {
        self.record("viewport:apply".to_string());
    }

    fn unproject(&self, camera: &dyn Camera, x: f32, y: f32) -> (f32, f32) {
        let (cx, cy) = camera.position();
        (x + cx, y + cy)
    }

    fn project(&self, camera: &dyn Camera, x: f32, y: f32) -> (f32, f32) {
        let (cx, cy) = camera.position();
        (x - cx, y - cy)
    }
}
