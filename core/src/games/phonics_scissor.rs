use crate::*;

#[derive(Debug)]
pub struct ScissorWord {
    pub word: &'static str,
    pub emoji: &'static str,
    pub letter: &'static str,
    pub others: [&'static str; 2],
}

const fn page(
    word: &'static str,
    emoji: &'static str,
    letter: &'static str,
    others: [&'static str; 2],
) -> ScissorWord {
    ScissorWord {
        word,
        emoji,
        letter,
        others,
    }
}

/// The scissor book, one page per word.
static BOOK: [ScissorWord; 10] = [
    page("sun", "☀️", "s", ["b", "m"]),
    page("pig", "🐷", "p", ["d", "g"]),
    page("cat", "🐱", "c", ["k", "t"]),
    page("dog", "🐶", "d", ["b", "p"]),
    page("fish", "🐠", "f", ["v", "s"]),
    page("hat", "👒", "h", ["f", "a"]),
    page("jar", "🫙", "j", ["g", "i"]),
    page("lion", "🦁", "l", ["r", "i"]),
    page("map", "🗺️", "m", ["n", "w"]),
    page("net", "🕸️", "n", ["m", "z"]),
];

impl Level for ScissorWord {
    fn answer(&self) -> Concept {
        self.letter
    }

    fn fixed_distractors(&self) -> &[Concept] {
        &self.others
    }
}

/// Cut out the first sound of a word and paste it next to the picture.
pub struct PhonicsScissor;

impl Lesson for PhonicsScissor {
    type Level = ScissorWord;

    const ID: GameId = GameId::Scissor;
    const CHEERS: &'static [&'static str] =
        &["Good pasting!", "Stuck on tight!", "Perfect fit!", "You did it!"];

    fn levels() -> &'static [ScissorWord] {
        &BOOK
    }

    fn rules() -> GameRules {
        GameRules::new(
            SessionRules {
                order: LevelOrder::Shuffled,
                rounds: None,
                exhaustion: Exhaustion::Restart,
                distractors: DistractorSource::Fixed,
            },
            Interaction::Paste,
        )
        .prompt_delay(None)
        .advance_delay(3000)
    }

    fn picture(level: &ScissorWord) -> String {
        format!("{} {}", level.emoji, level.word)
    }

    fn prompt(level: &ScissorWord, _cue: Cue, voice: Voice) -> Line {
        Line::say(
            format!("Cut and paste the first sound for {}.", level.word),
            voice,
        )
    }

    fn praise(level: &ScissorWord, cheer: &str, voice: Voice) -> Line {
        Line::say(
            format!("{cheer} {} starts with {}.", level.word, level.letter),
            voice,
        )
    }

    fn reject(_level: &ScissorWord, picked: Concept, voice: Voice) -> Line {
        Line::say(format!("Not {picked}. Try another one!"), voice)
    }

    fn finale(voice: Voice) -> Option<Line> {
        Some(Line::say("You finished the scissor book!", voice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_are_spoken_while_the_page_is_set_up() {
        assert_eq!(PhonicsScissor::rules().prompt_delay, None);
        assert_eq!(
            PhonicsScissor::prompt(&BOOK[4], Cue::Start, Voice::default()).text(),
            "Cut and paste the first sound for fish."
        );
    }

    #[test]
    fn picked_up_letters_are_read_aloud() {
        let line = PhonicsScissor::picked_up("s", Voice::default()).unwrap();
        assert_eq!(line.text(), "s");
    }
}
