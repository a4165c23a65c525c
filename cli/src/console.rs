//! Terminal stand-ins for the speech synthesizer and the music player.

use learnhub_core::{AudioSink, PlaybackError, SpeechSynth, Track, Utterance, VoiceInfo};

/// Prints utterances instead of speaking them.
pub struct ConsoleSynth {
    voices: Vec<VoiceInfo>,
    echo: bool,
}

impl ConsoleSynth {
    /// `locales` pretends one installed voice per language tag.
    pub fn new(locales: &[String], echo: bool) -> Self {
        let voices = locales
            .iter()
            .map(|lang| VoiceInfo {
                name: format!("console-{lang}"),
                lang: lang.clone(),
            })
            .collect();
        Self { voices, echo }
    }
}

impl SpeechSynth for ConsoleSynth {
    fn voices(&self) -> Vec<VoiceInfo> {
        self.voices.clone()
    }

    fn cancel(&mut self) {}

    fn speak(&mut self, utterance: &Utterance, voice: Option<&VoiceInfo>) {
        if !self.echo {
            return;
        }
        match voice {
            Some(voice) => println!("  \u{1f5e3} \"{}\" ({})", utterance.text, voice.name),
            None => println!("  \u{1f5e3} \"{}\"", utterance.text),
        }
    }
}

/// Logs what would be playing.
#[derive(Default)]
pub struct ConsoleAudio {
    track: Option<Track>,
    volume: f32,
}

impl AudioSink for ConsoleAudio {
    fn load(&mut self, track: Track) {
        self.track = Some(track);
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        let track = self.track.ok_or(PlaybackError::Unavailable)?;
        tracing::info!(track = %track.path(), volume = self.volume, "music playing");
        Ok(())
    }

    fn pause(&mut self) {
        tracing::info!("music paused");
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }
}
