use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::types::SoundEvent;

/// Sound asset manifest for a game. Loaded from a JSON file by the host.
///
/// Maps human-readable sound names to file paths and to the numeric event
/// ids the game emits through [`SoundEvent`]. The engine itself never plays
/// audio; the manifest just lets host and game agree on the id space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundManifest {
    /// Named sound lookup: name → path + event id.
    #[serde(default)]
    pub sounds: HashMap<String, SoundEntry>,
}

/// Describes a single audio asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundEntry {
    /// Relative path to the audio file.
    pub path: String,
    /// Numeric event id that triggers this sound from the game.
    #[serde(default)]
    pub event_id: Option<u32>,
}

impl SoundManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Find the path registered for a given sound event, if any.
    pub fn path_for(&self, event: SoundEvent) -> Option<&str> {
        self.sounds
            .values()
            .find(|entry| entry.event_id == Some(event.0))
            .map(|entry| entry.path.as_str())
    }
}
