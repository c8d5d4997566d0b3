use std::path::Path;

use macroquad::audio::{Sound, load_sound, play_sound_once};
use tracing::{info, warn};

use crate::application::{EngineEvent, EngineObserver};

/// Plays a sound once each time the simulation starts.
/// Without a loaded sound it stays silent.
#[derive(Default)]
pub struct StartCue {
    sound: Option<Sound>,
}

impl StartCue {
    pub fn silent() -> Self {
        Self::default()
    }

    /// Load the cue from disk. Missing or unreadable files leave the cue silent.
    pub async fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::silent();
        };
        if !path.exists() {
            info!(path = %path.display(), "start sound not found, cue disabled");
            return Self::silent();
        }
        match load_sound(&path.to_string_lossy()).await {
            Ok(sound) => Self { sound: Some(sound) },
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to load start sound");
                Self::silent()
            }
        }
    }

    pub fn is_silent(&self) -> bool {
        self.sound.is_none()
    }
}

impl EngineObserver for StartCue {
    fn notify(&mut self, event: &EngineEvent) {
        if let (EngineEvent::Started, Some(sound)) = (event, self.sound.as_ref()) {
            play_sound_once(sound);
        }
    }
}
