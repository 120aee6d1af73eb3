use std::collections::HashMap;
use serde::Serialize;
use crate::api::types::{SoundEvent, SoundId};
use crate::assets::manifest::AssetManifest;

/// One registered sound and what the host has told us about it.
#[derive(Debug, Clone, Serialize)]
pub struct SoundEntry {
    pub id: SoundId,
    pub name: String,
    pub path: String,
    #[serde(skip)]
    loaded: bool,
    #[serde(skip)]
    playing: bool,
}

/// Registry of named sounds, built from an AssetManifest.
///
/// Playback is fire-and-forget: asking for a sound that is unknown or whose
/// buffer has not finished decoding yields nothing and is not an error.
#[derive(Debug, Default)]
pub struct SoundBank {
    by_name: HashMap<String, SoundId>,
    entries: Vec<SoundEntry>,
}

impl SoundBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bank from a parsed manifest. Ids follow the manifest's name order.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut bank = Self::new();
        for (name, desc) in &manifest.sounds {
            bank.register(name, &desc.path);
        }
        bank
    }

    /// Register a sound, returning its id. Re-registering a name keeps the old id.
    pub fn register(&mut self, name: &str, path: &str) -> SoundId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = SoundId(self.entries.len() as u32);
        self.entries.push(SoundEntry {
            id,
            name: name.to_string(),
            path: path.to_string(),
            loaded: false,
            playing: false,
        });
        self.by_name.insert(name.to_string(), id);
        id
    }

    pub fn id(&self, name: &str) -> Option<SoundId> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, id: SoundId) -> Option<&str> {
        self.entries.get(id.0 as usize).map(|e| e.name.as_str())
    }

    fn entry(&self, name: &str) -> Option<&SoundEntry> {
        self.id(name).and_then(|id| self.entries.get(id.0 as usize))
    }

    fn entry_mut(&mut self, name: &str) -> Option<&mut SoundEntry> {
        let id = self.id(name)?;
        self.entries.get_mut(id.0 as usize)
    }

    /// The host finished decoding this sound.
    pub fn mark_loaded(&mut self, id: SoundId) {
        if let Some(entry) = self.entries.get_mut(id.0 as usize) {
            entry.loaded = true;
        }
    }

    /// The host could not load this sound. It stays silent for the session.
    pub fn mark_failed(&mut self, id: SoundId) {
        match self.entries.get_mut(id.0 as usize) {
            Some(entry) => {
                entry.loaded = false;
                log::warn!("sound '{}' failed to load from {}", entry.name, entry.path);
            }
            None => log::warn!("unknown sound id {} failed to load", id.0),
        }
    }

    /// A one-shot playback finished on the host.
    pub fn mark_ended(&mut self, id: SoundId) {
        if let Some(entry) = self.entries.get_mut(id.0 as usize) {
            entry.playing = false;
        }
    }

    /// Forget the playing flag without telling the host to stop.
    pub fn mark_stopped(&mut self, name: &str) {
        if let Some(entry) = self.entry_mut(name) {
            entry.playing = false;
        }
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.entry(name).map(|e| e.loaded).unwrap_or(false)
    }

    pub fn is_playing(&self, name: &str) -> bool {
        self.entry(name).map(|e| e.playing).unwrap_or(false)
    }

    /// Build a play request. `None` when the sound is unknown or not loaded yet.
    pub fn play(&mut self, name: &str, volume: f32, looped: bool) -> Option<SoundEvent> {
        let entry = self.entry_mut(name)?;
        if !entry.loaded {
            return None;
        }
        entry.playing = true;
        Some(SoundEvent::play(entry.id, volume.clamp(0.0, 1.0), looped))
    }

    /// Build a stop request. `None` when the sound is unknown or not loaded.
    pub fn stop(&mut self, name: &str) -> Option<SoundEvent> {
        let entry = self.entry_mut(name)?;
        if !entry.loaded {
            return None;
        }
        entry.playing = false;
        Some(SoundEvent::stop(entry.id))
    }

    /// `[{"id":0,"name":"…","path":"…"}, …]` so the host knows what to fetch.
    pub fn sound_table_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> SoundBank {
        let manifest = AssetManifest::from_json(
            r#"{ "sounds": {
                "moving": { "path": "moving.mp3" },
                "collision": { "path": "collision.mp3" }
            } }"#,
        )
        .unwrap();
        SoundBank::from_manifest(&manifest)
    }

    #[test]
    fn ids_follow_name_order() {
        let bank = bank();
        assert_eq!(bank.id("collision"), Some(SoundId(0)));
        assert_eq!(bank.id("moving"), Some(SoundId(1)));
        assert_eq!(bank.name(SoundId(1)), Some("moving"));
    }

    #[test]
    fn unloaded_or_unknown_sound_is_silent() {
        let mut bank = bank();
        assert!(bank.play("moving", 0.01, false).is_none());
        assert!(!bank.is_playing("moving"));
        assert!(bank.play("nope", 1.0, false).is_none());
    }

    #[test]
    fn play_tracks_playing_until_ended() {
        let mut bank = bank();
        let id = bank.id("moving").unwrap();
        bank.mark_loaded(id);

        let event = bank.play("moving", 0.01, false).unwrap();
        assert_eq!(event, SoundEvent::play(id, 0.01, false));
        assert!(bank.is_playing("moving"));

        bank.mark_ended(id);
        assert!(!bank.is_playing("moving"));
    }

    #[test]
    fn stop_clears_playing() {
        let mut bank = bank();
        let id = bank.id("moving").unwrap();
        bank.mark_loaded(id);
        bank.play("moving", 0.2, true);
        assert_eq!(bank.stop("moving"), Some(SoundEvent::stop(id)));
        assert!(!bank.is_playing("moving"));
    }

    #[test]
    fn failed_sound_stays_silent() {
        let mut bank = bank();
        let id = bank.id("collision").unwrap();
        bank.mark_failed(id);
        assert!(!bank.is_loaded("collision"));
        assert!(bank.play("collision", 0.05, false).is_none());
    }

    #[test]
    fn sound_table_lists_paths() {
        let json = bank().sound_table_json().unwrap();
        assert_eq!(
            json,
            r#"[{"id":0,"name":"collision","path":"collision.mp3"},{"id":1,"name":"moving","path":"moving.mp3"}]"#
        );
    }
}
