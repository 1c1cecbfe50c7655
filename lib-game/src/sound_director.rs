use hashbrown::HashMap;
use log::{info, warn};
use macroquad::audio::{PlaySoundParams, Sound, load_sound, play_sound, play_sound_once, stop_sound};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct SoundKey(pub &'static str);

/// A fire-and-forget request for the [SoundDirector].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AudioCue {
    Effect(SoundKey),
    PlayMusic(SoundKey),
    StopMusic,
}

/// Plays the sounds the game asks for. Every sound is optional:
/// the ones that failed to load are silently skipped.
pub struct SoundDirector {
    effects: HashMap<SoundKey, Sound>,
    tracks: HashMap<SoundKey, Sound>,
    playing: Option<SoundKey>,
}

impl SoundDirector {
    pub fn new() -> Self {
        Self {
            effects: HashMap::new(),
            tracks: HashMap::new(),
            playing: None,
        }
    }

    pub async fn load_effect(&mut self, key: SoundKey, path: &str) {
        if let Some(sound) = Self::load_optional(path).await {
            self.effects.insert(key, sound);
        }
    }

    pub async fn load_music(&mut self, key: SoundKey, path: &str) {
        if let Some(sound) = Self::load_optional(path).await {
            self.tracks.insert(key, sound);
        }
    }

    pub fn run(&mut self, cues: impl IntoIterator<Item = AudioCue>) {
        for cue in cues {
            match cue {
                AudioCue::Effect(key) => self.play_effect(key),
                AudioCue::PlayMusic(key) => self.play_music(key),
                AudioCue::StopMusic => self.stop_music(),
            }
        }
    }

    fn play_effect(&self, key: SoundKey) {
        let Some(sound) = self.effects.get(&key) else {
            return;
        };

        play_sound_once(sound);
    }

    fn play_music(&mut self, key: SoundKey) {
        self.stop_music();

        let Some(track) = self.tracks.get(&key) else {
            return;
        };

        play_sound(
            track,
            PlaySoundParams {
                looped: true,
                volume: 1.0,
            },
        );
        self.playing = Some(key);
    }

    fn stop_music(&mut self) {
        let Some(key) = self.playing.take() else {
            return;
        };
        let Some(track) = self.tracks.get(&key) else {
            return;
        };

        stop_sound(track);
    }

    async fn load_optional(path: &str) -> Option<Sound> {
        match load_sound(path).await {
            Ok(sound) => {
                info!("Loaded sound {path:?}");
                Some(sound)
            }
            Err(e) => {
                warn!("Sound {path:?} unavailable: {e}");
                None
            }
        }
    }
}

impl Default for SoundDirector {
    fn default() -> Self {
        SoundDirector::new()
    }
}
