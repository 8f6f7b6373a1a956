use glam::Vec2;

/// Input event types the engine understands.
/// Generic — no game-specific semantics.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A touch/click began at world coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/click ended at world coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// A touch/cursor moved to world coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// A custom event from the host layer (UI buttons, etc.).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events plus the last known pointer position.
///
/// The host pushes events; the game reads them once per tick. Discrete
/// actions (keys, clicks) are edge-triggered through the event list, while
/// the pointer position is level-sampled: it tracks every pointer event and
/// survives `drain()`, so a game can aim even on ticks with no new events.
pub struct InputQueue {
    events: Vec<InputEvent>,
    pointer: Vec2,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
            pointer: Vec2::ZERO,
        }
    }

    /// Push a new input event (called from the host each frame).
    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y }
            | InputEvent::PointerUp { x, y }
            | InputEvent::PointerMove { x, y } => {
                self.pointer = Vec2::new(x, y);
            }
            _ => {}
        }
        self.events.push(event);
    }

    /// Last known pointer position in world coordinates.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    /// The sampled pointer position is kept.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
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
