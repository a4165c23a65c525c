use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// Rate and pitch a game speaks with.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub rate: f32,
    pub pitch: f32,
}

impl Voice {
    pub const fn new(rate: f32, pitch: f32) -> Self {
        Self { rate, pitch }
    }
}

impl Default for Voice {
    fn default() -> Self {
        Self::new(0.9, 1.1)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    /// BCP 47 tag the utterance must be spoken in, `None` for the synthesizer default.
    pub locale: Option<&'static str>,
}

impl Utterance {
    pub fn new(text: impl Into<String>, voice: Voice) -> Self {
        Self {
            text: text.into(),
            rate: voice.rate,
            pitch: voice.pitch,
            locale: None,
        }
    }

    pub fn in_locale(mut self, locale: &'static str) -> Self {
        self.locale = Some(locale);
        self
    }
}

/// One speech request: an ordered run of utterances, plus what to say instead when
/// no voice exists for their locale.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Line {
    pub parts: SmallVec<[Utterance; 2]>,
    pub fallback: Option<Utterance>,
}

impl Line {
    pub fn say(text: impl Into<String>, voice: Voice) -> Self {
        Utterance::new(text, voice).into()
    }

    pub fn then(mut self, part: Utterance) -> Self {
        self.parts.push(part);
        self
    }

    pub fn or_else(mut self, fallback: Utterance) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn text(&self) -> String {
        self.parts
            .iter()
            .map(|part| part.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn locale(&self) -> Option<&'static str> {
        self.parts.iter().find_map(|part| part.locale)
    }
}

impl From<Utterance> for Line {
    fn from(part: Utterance) -> Self {
        Self {
            parts: smallvec![part],
            fallback: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceInfo {
    pub name: String,
    pub lang: String,
}

/// Platform text-to-speech facility.
pub trait SpeechSynth {
    fn is_available(&self) -> bool {
        true
    }

    fn voices(&self) -> Vec<VoiceInfo>;

    /// Drops whatever is queued or playing.
    fn cancel(&mut self);

    fn speak(&mut self, utterance: &Utterance, voice: Option<&VoiceInfo>);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpeakOutcome {
    Muted,
    Unsupported,
    Spoken,
    SpokeFallback,
}

/// Speech gate: mute toggle, cancel-before-speak and locale fallback.
pub struct Speaker<S> {
    synth: S,
    enabled: bool,
}

impl<S: SpeechSynth> Speaker<S> {
    pub fn new(synth: S, enabled: bool) -> Self {
        Self { synth, enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled && self.synth.is_available() {
            self.synth.cancel();
        }
        self.enabled = enabled;
    }

    pub fn toggle(&mut self) -> bool {
        self.set_enabled(!self.enabled);
        self.enabled
    }

    pub fn synth(&self) -> &S {
        &self.synth
    }

    /// Finds a voice for `locale`: an exact tag match first, then any voice of the
    /// same language.
    pub fn find_voice(&self, locale: &str) -> Option<VoiceInfo> {
        if !self.synth.is_available() {
            return None;
        }
        let voices = self.synth.voices();
        let language = locale.split(['-', '_']).next().unwrap_or(locale);
        voices
            .iter()
            .find(|voice| voice.lang.eq_ignore_ascii_case(locale))
            .or_else(|| {
                voices.iter().find(|voice| {
                    voice
                        .lang
                        .split(['-', '_'])
                        .next()
                        .is_some_and(|lang| lang.eq_ignore_ascii_case(language))
                })
            })
            .cloned()
    }

    pub fn has_voice_for(&self, locale: &str) -> bool {
        self.find_voice(locale).is_some()
    }

    pub fn say(&mut self, line: &Line) -> SpeakOutcome {
        if !self.enabled {
            return SpeakOutcome::Muted;
        }
        if !self.synth.is_available() {
            log::debug!("speech unavailable, skipping {:?}", line.text());
            return SpeakOutcome::Unsupported;
        }

        self.synth.cancel();

        let voice = match line.locale() {
            Some(locale) => match self.find_voice(locale) {
                Some(voice) => Some(voice),
                None => {
                    if let Some(fallback) = &line.fallback {
                        log::debug!("no {} voice, speaking fallback", locale);
                        let fallback_voice = fallback.locale.and_then(|tag| self.find_voice(tag));
                        self.synth.speak(fallback, fallback_voice.as_ref());
                        return SpeakOutcome::SpokeFallback;
                    }
                    None
                }
            },
            None => None,
        };

        for part in &line.parts {
            self.synth.speak(part, voice.as_ref());
        }
        SpeakOutcome::Spoken
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::RecordingSynth;

    fn voice() -> Voice {
        Voice::default()
    }

    #[test]
    fn muted_speaker_says_nothing() {
        let mut speaker = Speaker::new(RecordingSynth::default(), false);

        assert_eq!(speaker.say(&Line::say("hello", voice())), SpeakOutcome::Muted);
        assert!(speaker.synth().spoken.is_empty());
    }

    #[test]
    fn unsupported_synth_is_skipped_silently() {
        let mut speaker = Speaker::new(RecordingSynth::unavailable(), true);

        assert_eq!(
            speaker.say(&Line::say("hello", voice())),
            SpeakOutcome::Unsupported
        );
        assert!(speaker.synth().spoken.is_empty());
        assert_eq!(speaker.synth().cancels, 0);
    }

    #[test]
    fn every_request_cancels_the_previous_one() {
        let mut speaker = Speaker::new(RecordingSynth::default(), true);

        speaker.say(&Line::say("one", voice()));
        speaker.say(&Line::say("two", voice()));

        assert_eq!(speaker.synth().cancels, 2);
        assert_eq!(speaker.synth().texts(), vec!["one", "two"]);
    }

    #[test]
    fn locale_line_prefers_exact_voice() {
        let synth = RecordingSynth::with_voices(&[("Kanya", "th-TH"), ("Alex", "en-US")]);
        let mut speaker = Speaker::new(synth, true);
        let line = Line::from(Utterance::new("ก", voice()).in_locale("th-TH"))
            .then(Utterance::new("ไก่", voice()).in_locale("th-TH"))
            .or_else(Utterance::new("Gor", voice()));

        assert_eq!(speaker.say(&line), SpeakOutcome::Spoken);
        assert_eq!(speaker.synth().texts(), vec!["ก", "ไก่"]);
        assert_eq!(speaker.synth().voices_used(), vec![Some("Kanya"), Some("Kanya")]);
    }

    #[test]
    fn language_prefix_matches_regional_voices() {
        let synth = RecordingSynth::with_voices(&[("Thai", "th_TH"), ("Alex", "en-US")]);
        let speaker = Speaker::new(synth, true);

        assert_eq!(speaker.find_voice("th-TH").map(|v| v.name), Some("Thai".into()));
        assert!(!speaker.has_voice_for("fr-FR"));
    }

    #[test]
    fn missing_locale_voice_speaks_the_fallback() {
        let synth = RecordingSynth::with_voices(&[("Alex", "en-US")]);
        let mut speaker = Speaker::new(synth, true);
        let line = Line::from(Utterance::new("ก", voice()).in_locale("th-TH"))
            .or_else(Utterance::new("Gor", voice()).in_locale("en-US"));

        assert_eq!(speaker.say(&line), SpeakOutcome::SpokeFallback);
        assert_eq!(speaker.synth().texts(), vec!["Gor"]);
    }

    #[test]
    fn toggling_reports_the_new_state() {
        let mut speaker = Speaker::new(RecordingSynth::default(), true);
        assert!(!speaker.toggle());
        assert!(speaker.toggle());
    }
}
