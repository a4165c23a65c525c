use crate::*;

pub const THAI_LOCALE: &str = "th-TH";
pub const ENGLISH_LOCALE: &str = "en-US";

/// Shown before the session when no Thai voice is installed.
pub const NO_THAI_VOICE: &str =
    "Thai voice not detected on this device. Using standard pronunciation.";

const LETTER_RATE: f32 = 0.7;
const WORD_RATE: f32 = 0.8;

#[derive(Debug)]
pub struct ThaiLetter {
    pub letter: &'static str,
    /// Romanized letter name, e.g. "Gor Kai".
    pub name: &'static str,
    pub word: &'static str,
    pub meaning: &'static str,
}

const fn letter(
    letter: &'static str,
    name: &'static str,
    word: &'static str,
    meaning: &'static str,
) -> ThaiLetter {
    ThaiLetter {
        letter,
        name,
        word,
        meaning,
    }
}

static CONSONANTS: [ThaiLetter; 20] = [
    letter("ก", "Gor Kai", "ไก่", "Chicken"),
    letter("ข", "Khor Khai", "ไข่", "Egg"),
    letter("ฃ", "Khor Khuad", "ขวด", "Bottle"),
    letter("ค", "Khor Khwai", "ควาย", "Buffalo"),
    letter("ฅ", "Khor Khon", "คน", "Person"),
    letter("ฆ", "Khor Ra-khang", "ระฆัง", "Bell"),
    letter("ง", "Ngor Ngu", "งู", "Snake"),
    letter("จ", "Jor Jan", "จาน", "Plate"),
    letter("ฉ", "Chor Ching", "ฉิ่ง", "Cymbals"),
    letter("ช", "Chor Chang", "ช้าง", "Elephant"),
    letter("ซ", "Sor So", "โซ่", "Chain"),
    letter("ฌ", "Chor Cher", "เฌอ", "Tree"),
    letter("ญ", "Yor Ying", "หญิง", "Woman"),
    letter("ฎ", "Dor Cha-da", "ชฎา", "Headdress"),
    letter("ฏ", "Tor Pa-tak", "ปฏัก", "Goad"),
    letter("ฐ", "Thor Than", "ฐาน", "Pedestal"),
    letter("ฑ", "Thor Mon-tho", "มณโฑ", "Queen"),
    letter("ฒ", "Thor Phu-thao", "ผู้เฒ่า", "Elder"),
    letter("ณ", "Nor Nen", "เณร", "Novice Monk"),
    letter("ด", "Dor Dek", "เด็ก", "Child"),
];

impl Level for ThaiLetter {
    fn answer(&self) -> Concept {
        self.letter
    }
}

impl ThaiLetter {
    fn letter_sound(&self, voice: Voice) -> Utterance {
        Utterance::new(self.letter, Voice::new(LETTER_RATE, voice.pitch)).in_locale(THAI_LOCALE)
    }

    /// The letter alone in Thai, or the first syllable of its name in English.
    pub fn short_line(&self, voice: Voice) -> Line {
        let syllable = self.name.split(' ').next().unwrap_or(self.name);
        Line::from(self.letter_sound(voice))
            .or_else(Utterance::new(syllable, voice).in_locale(ENGLISH_LOCALE))
    }

    /// The letter followed by its word in Thai, or the full name in English.
    pub fn full_line(&self, voice: Voice) -> Line {
        Line::from(self.letter_sound(voice))
            .then(Utterance::new(self.word, Voice::new(WORD_RATE, voice.pitch)).in_locale(THAI_LOCALE))
            .or_else(Utterance::new(self.name, voice).in_locale(ENGLISH_LOCALE))
    }
}

/// Pick the shown consonant among three, ก to ด.
pub struct ThaiAlphabet;

impl Lesson for ThaiAlphabet {
    type Level = ThaiLetter;

    const ID: GameId = GameId::Thai;
    const CHEERS: &'static [&'static str] = &["Correct!", "Good job!", "Very good!", "Thai expert!"];

    fn levels() -> &'static [ThaiLetter] {
        &CONSONANTS
    }

    fn rules() -> GameRules {
        GameRules::new(
            SessionRules {
                order: LevelOrder::Fixed,
                rounds: None,
                exhaustion: Exhaustion::Won,
                distractors: DistractorSource::OtherLevels,
            },
            Interaction::Tap,
        )
        .voice(Voice::new(0.9, 1.0))
        .advance_delay(2000)
    }

    fn picture(level: &ThaiLetter) -> String {
        format!("{} {} ({})", level.letter, level.word, level.meaning)
    }

    fn prompt(level: &ThaiLetter, _cue: Cue, voice: Voice) -> Line {
        level.short_line(voice)
    }

    fn repeat(level: &ThaiLetter, voice: Voice) -> Line {
        level.full_line(voice)
    }

    fn praise(level: &ThaiLetter, _cheer: &str, voice: Voice) -> Line {
        level.full_line(voice)
    }

    fn reject(_level: &ThaiLetter, _picked: Concept, voice: Voice) -> Line {
        Utterance::new("Try again", voice)
            .in_locale(ENGLISH_LOCALE)
            .into()
    }

    fn finale(_voice: Voice) -> Option<Line> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::RecordingSynth;

    #[test]
    fn thai_voice_speaks_letter_then_word() {
        let synth = RecordingSynth::with_voices(&[("Kanya", "th-TH")]);
        let mut speaker = Speaker::new(synth, true);

        speaker.say(&CONSONANTS[0].full_line(Voice::default()));

        assert_eq!(speaker.synth().texts(), vec!["ก", "ไก่"]);
        let rates: Vec<f32> = speaker.synth().spoken.iter().map(|(u, _)| u.rate).collect();
        assert_eq!(rates, vec![LETTER_RATE, WORD_RATE]);
    }

    #[test]
    fn missing_thai_voice_falls_back_to_english_names() {
        let synth = RecordingSynth::with_voices(&[("Alex", "en-US")]);
        let mut speaker = Speaker::new(synth, true);

        speaker.say(&CONSONANTS[5].short_line(Voice::default()));
        speaker.say(&CONSONANTS[5].full_line(Voice::default()));

        assert_eq!(speaker.synth().texts(), vec!["Khor", "Khor Ra-khang"]);
        assert_eq!(speaker.synth().voices_used(), vec![Some("Alex"), Some("Alex")]);
    }

    #[test]
    fn session_has_no_finale_line() {
        assert!(ThaiAlphabet::finale(Voice::default()).is_none());
    }
}
