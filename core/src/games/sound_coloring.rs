use crate::*;

#[derive(Debug)]
pub struct SoundWord {
    pub word: &'static str,
    pub emoji: &'static str,
    pub letter: &'static str,
    pub others: [&'static str; 2],
}

const fn word(
    word: &'static str,
    emoji: &'static str,
    letter: &'static str,
    others: [&'static str; 2],
) -> SoundWord {
    SoundWord {
        word,
        emoji,
        letter,
        others,
    }
}

static WORDS: [SoundWord; 20] = [
    word("Apple", "🍎", "a", ["b", "s"]),
    word("Bear", "🐻", "b", ["t", "p"]),
    word("Cat", "🐱", "c", ["m", "d"]),
    word("Dog", "🐶", "d", ["f", "a"]),
    word("Elephant", "🐘", "e", ["l", "h"]),
    word("Fish", "🐠", "f", ["p", "b"]),
    word("Grapes", "🍇", "g", ["j", "c"]),
    word("House", "🏠", "h", ["m", "r"]),
    word("Ice Cream", "🍦", "i", ["l", "s"]),
    word("Jellyfish", "🪼", "j", ["k", "g"]),
    word("Kite", "🪁", "k", ["c", "t"]),
    word("Lion", "🦁", "l", ["r", "b"]),
    word("Monkey", "🐵", "m", ["n", "w"]),
    word("Nest", "🪺", "n", ["m", "u"]),
    word("Octopus", "🐙", "o", ["a", "q"]),
    word("Pig", "🐷", "p", ["b", "d"]),
    word("Queen", "👸", "q", ["k", "o"]),
    word("Rainbow", "🌈", "r", ["w", "m"]),
    word("Sun", "☀️", "s", ["c", "o"]),
    word("Turtle", "🐢", "t", ["l", "f"]),
];

impl Level for SoundWord {
    fn answer(&self) -> Concept {
        self.letter
    }

    fn fixed_distractors(&self) -> &[Concept] {
        &self.others
    }
}

/// Hear a word, then colour in the letter it starts with.
pub struct SoundColoring;

impl Lesson for SoundColoring {
    type Level = SoundWord;

    const ID: GameId = GameId::Color;
    const CHEERS: &'static [&'static str] = &[
        "You colored it!",
        "Beautiful!",
        "That matches!",
        "Perfect!",
        "Good thinking!",
    ];

    fn levels() -> &'static [SoundWord] {
        &WORDS
    }

    fn rules() -> GameRules {
        GameRules::new(
            SessionRules {
                order: LevelOrder::Shuffled,
                rounds: None,
                exhaustion: Exhaustion::Won,
                distractors: DistractorSource::Fixed,
            },
            Interaction::Paint(PaintRules {
                grid: 15,
                accept: Threshold::AtLeast(90.0),
                reject: Threshold::Above(15.0),
            }),
        )
        .prompt_delay(None)
        .advance_delay(2500)
        .brushes(&["pink", "blue", "green"])
    }

    fn picture(level: &SoundWord) -> String {
        format!("{} {}", level.emoji, level.word)
    }

    fn prompt(level: &SoundWord, cue: Cue, voice: Voice) -> Line {
        let text = match cue {
            Cue::Start => format!("Let's color! What is the first sound of {}?", level.word),
            Cue::Again | Cue::Restart => {
                format!("Let's play again! What is the first sound of {}?", level.word)
            }
            Cue::Next => format!("What starts like... {}?", level.word),
        };
        Line::say(text, voice)
    }

    fn repeat(level: &SoundWord, voice: Voice) -> Line {
        Line::say(level.word, voice)
    }

    fn praise(level: &SoundWord, cheer: &str, voice: Voice) -> Line {
        Line::say(format!("{cheer} {} is for {}.", level.letter, level.word), voice)
    }

    fn reject(_level: &SoundWord, picked: Concept, voice: Voice) -> Line {
        Line::say(format!("Not {picked}. Try again!"), voice)
    }

    fn finale(voice: Voice) -> Option<Line> {
        Some(Line::say("You are a coloring champion!", voice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_word_offers_two_other_letters() {
        for word in &WORDS {
            assert_eq!(word.fixed_distractors().len(), 2);
            assert!(!word.fixed_distractors().contains(&word.letter));
        }
    }

    #[test]
    fn repeat_says_just_the_word() {
        assert_eq!(
            SoundColoring::repeat(&WORDS[8], Voice::default()).text(),
            "Ice Cream"
        );
    }

    #[test]
    fn praise_ties_the_letter_to_the_word() {
        let line = SoundColoring::praise(&WORDS[0], "Perfect!", Voice::default());
        assert_eq!(line.text(), "Perfect! a is for Apple.");
    }
}
