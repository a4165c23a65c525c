//! Fakes for the injected speech and audio capabilities.

use crate::*;

#[derive(Debug)]
pub(crate) struct RecordingSynth {
    pub available: bool,
    pub voices: Vec<VoiceInfo>,
    pub spoken: Vec<(Utterance, Option<VoiceInfo>)>,
    pub cancels: usize,
}

impl Default for RecordingSynth {
    fn default() -> Self {
        Self {
            available: true,
            voices: Vec::new(),
            spoken: Vec::new(),
            cancels: 0,
        }
    }
}

impl RecordingSynth {
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }

    pub fn with_voices(voices: &[(&str, &str)]) -> Self {
        Self {
            voices: voices
                .iter()
                .map(|&(name, lang)| VoiceInfo {
                    name: name.into(),
                    lang: lang.into(),
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.spoken
            .iter()
            .map(|(utterance, _)| utterance.text.as_str())
            .collect()
    }

    pub fn voices_used(&self) -> Vec<Option<&str>> {
        self.spoken
            .iter()
            .map(|(_, voice)| voice.as_ref().map(|voice| voice.name.as_str()))
            .collect()
    }
}

impl SpeechSynth for RecordingSynth {
    fn is_available(&self) -> bool {
        self.available
    }

    fn voices(&self) -> Vec<VoiceInfo> {
        self.voices.clone()
    }

    fn cancel(&mut self) {
        self.cancels += 1;
    }

    fn speak(&mut self, utterance: &Utterance, voice: Option<&VoiceInfo>) {
        self.spoken.push((utterance.clone(), voice.cloned()));
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingAudio {
    /// Number of upcoming `play` calls that fail as autoplay-blocked.
    pub blocked_plays: usize,
    pub loaded: Vec<Track>,
    pub plays: usize,
    pub pauses: usize,
    pub volume: Option<f32>,
}

impl AudioSink for RecordingAudio {
    fn load(&mut self, track: Track) {
        self.loaded.push(track);
    }

    fn play(&mut self) -> core::result::Result<(), PlaybackError> {
        self.plays += 1;
        if self.blocked_plays > 0 {
            self.blocked_plays -= 1;
            return Err(PlaybackError::AutoplayBlocked);
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = Some(volume);
    }
}

/// Speech lines found in a batch of effects.
pub(crate) fn said(effects: &[Effect]) -> Vec<String> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Say { line } => Some(line.text()),
            _ => None,
        })
        .collect()
}
