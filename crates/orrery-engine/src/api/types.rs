use bytemuck::{Pod, Zeroable};
use serde::Serialize;

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Index of a registered sound. The host keeps the decoded buffer under the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SoundId(pub u32);

/// What the host should do with a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCommand {
    Play,
    Stop,
}

/// A sound request emitted by the game logic and forwarded to the host audio context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundEvent {
    pub sound: SoundId,
    /// Gain applied to this playback (0.0 – 1.0).
    pub volume: f32,
    pub looped: bool,
    pub command: SoundCommand,
}

impl SoundEvent {
    /// Floats per sound event on the wire: id, volume, looped, command.
    pub const FLOATS: usize = 4;

    pub fn play(sound: SoundId, volume: f32, looped: bool) -> Self {
        Self { sound, volume, looped, command: SoundCommand::Play }
    }

    pub fn stop(sound: SoundId) -> Self {
        Self { sound, volume: 0.0, looped: false, command: SoundCommand::Stop }
    }

    /// Flatten into the wire format.
    pub fn to_floats(&self) -> [f32; Self::FLOATS] {
        let command = match self.command {
            SoundCommand::Play => 1.0,
            SoundCommand::Stop => 0.0,
        };
        [
            self.sound.0 as f32,
            self.volume,
            if self.looped { 1.0 } else { 0.0 },
            command,
        ]
    }
}

/// A game event communicated from Rust to the host page.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32) -> Self {
        Self { kind, ..Default::default() }
    }
}

/// One `name: value` line of the informational overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayItem {
    pub name: String,
    pub value: String,
}

impl OverlayItem {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    /// Text as shown in the overlay list.
    pub fn line(&self) -> String {
        format!("{}: {}", self.name, self.value)
    }
}

/// Modal overlay content. The host renders it; Rust only decides what it says.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub title: String,
    pub items: Vec<OverlayItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sound_event_wire_format() {
        let play = SoundEvent::play(SoundId(3), 0.2, true).to_floats();
        assert_eq!(play, [3.0, 0.2, 1.0, 1.0]);

        let stop = SoundEvent::stop(SoundId(3)).to_floats();
        assert_eq!(stop[0], 3.0);
        assert_eq!(stop[3], 0.0);
    }

    #[test]
    fn overlay_item_line() {
        let item = OverlayItem::new("Earth", "149.6 million km");
        assert_eq!(item.line(), "Earth: 149.6 million km");
    }

    #[test]
    fn overlay_serializes_in_order() {
        let overlay = Overlay {
            title: "T".into(),
            items: vec![OverlayItem::new("a", "1"), OverlayItem::new("b", "2")],
        };
        let json = serde_json::to_string(&overlay).unwrap();
        assert_eq!(
            json,
            r#"{"title":"T","items":[{"name":"a","value":"1"},{"name":"b","value":"2"}]}"#
        );
    }
}
