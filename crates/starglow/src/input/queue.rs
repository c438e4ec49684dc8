/// Pointer events the backdrop understands.
/// Generic: no DOM types leak into the core.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// The pointer moved to surface coordinates (x, y).
    /// `at_ms` is the host's event timestamp, used for trail throttling.
    PointerMove { x: f32, y: f32, at_ms: f64 },
    /// The pointer left the tracked region.
    PointerLeave,
    /// The pointer entered an interactive element (glow enlarges).
    HoverEnter,
    /// The pointer left an interactive element (glow restores).
    HoverExit,
}

/// A queue of input events.
/// The host writes events as they arrive; the core drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from the host's event handlers).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
