use glam::Vec2;

/// Discrete pointer event forwarded by the host's input layer.
/// Mouse and touch are indistinguishable here; only positions and phases
/// reach the core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A touch/click began at world coordinates (x, y).
    Down { x: f32, y: f32 },
    /// A touch/cursor moved to world coordinates (x, y).
    Move { x: f32, y: f32 },
    /// A touch/click ended at world coordinates (x, y).
    Up { x: f32, y: f32 },
}

impl PointerEvent {
    /// The event's position as a vector.
    pub fn pos(&self) -> Vec2 {
        match *self {
            PointerEvent::Down { x, y }
            | PointerEvent::Move { x, y }
            | PointerEvent::Up { x, y } => Vec2::new(x, y),
        }
    }
}

/// A queue of pointer events.
/// The host writes events into the queue; the core reads and drains them
/// each tick.
pub struct InputQueue {
    events: Vec<PointerEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new pointer event (called by the host's input layer).
    pub fn push(&mut self, event: PointerEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<PointerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &PointerEvent> {
        self.events.iter()
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
