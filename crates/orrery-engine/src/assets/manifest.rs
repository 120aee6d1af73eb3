use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Asset manifest describing the sounds and font a scene needs.
/// Loaded from a JSON file at runtime; the host fetches and decodes the bytes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Audio assets by name. Sorted, so sound ids are stable across loads.
    #[serde(default)]
    pub sounds: BTreeMap<String, SoundDescriptor>,
    /// Typeface JSON used for 3D text labels.
    #[serde(default)]
    pub font: Option<String>,
}

/// Describes an audio asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Relative path to the audio file.
    pub path: String,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
