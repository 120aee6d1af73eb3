use crate::api::types::EntityId;

/// Input event types the engine understands.
/// Generic, with no game-specific semantics. The host does raycasting and gizmo
/// handling and reports results in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The user grabbed an entity.
    DragStart { target: EntityId },
    /// The grabbed entity was moved to world position (x, y, z).
    DragMove { target: EntityId, x: f32, y: f32, z: f32 },
    /// The user released the entity.
    DragEnd { target: EntityId },
    /// Mouse wheel scrolled; positive is away from the user.
    Wheel { delta_y: f32 },
    /// A custom event from the UI layer (DOM buttons, etc.).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
    /// The host finished decoding a sound buffer.
    SoundLoaded { sound: u32 },
    /// A non-looping playback finished.
    SoundEnded { sound: u32 },
    /// The host could not fetch or decode a sound.
    SoundFailed { sound: u32 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
