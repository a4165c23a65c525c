use crate::*;

#[derive(Debug)]
pub struct LetterPair {
    pub upper: &'static str,
    pub lower: &'static str,
}

const fn pair(upper: &'static str, lower: &'static str) -> LetterPair {
    LetterPair { upper, lower }
}

static ALPHABET: [LetterPair; 26] = [
    pair("A", "a"),
    pair("B", "b"),
    pair("C", "c"),
    pair("D", "d"),
    pair("E", "e"),
    pair("F", "f"),
    pair("G", "g"),
    pair("H", "h"),
    pair("I", "i"),
    pair("J", "j"),
    pair("K", "k"),
    pair("L", "l"),
    pair("M", "m"),
    pair("N", "n"),
    pair("O", "o"),
    pair("P", "p"),
    pair("Q", "q"),
    pair("R", "r"),
    pair("S", "s"),
    pair("T", "t"),
    pair("U", "u"),
    pair("V", "v"),
    pair("W", "w"),
    pair("X", "x"),
    pair("Y", "y"),
    pair("Z", "z"),
];

impl Level for LetterPair {
    fn answer(&self) -> Concept {
        self.lower
    }
}

/// Match each capital ("mommy") letter with its lowercase baby, A to Z.
pub struct LetterMatch;

impl Lesson for LetterMatch {
    type Level = LetterPair;

    const ID: GameId = GameId::Match;
    const CHEERS: &'static [&'static str] =
        &["Great job!", "You did it!", "Super star!", "Awesome!", "Correct!"];

    fn levels() -> &'static [LetterPair] {
        &ALPHABET
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
        .voice(Voice::new(0.9, 1.2))
        .advance_delay(2000)
    }

    fn picture(level: &LetterPair) -> String {
        level.upper.to_owned()
    }

    fn prompt(level: &LetterPair, _cue: Cue, voice: Voice) -> Line {
        Line::say(format!("Find the little {}", level.upper), voice)
    }

    fn praise(_level: &LetterPair, cheer: &str, voice: Voice) -> Line {
        Line::say(cheer, voice)
    }

    fn reject(_level: &LetterPair, _picked: Concept, voice: Voice) -> Line {
        Line::say("Oops, try again!", voice)
    }

    fn finale(voice: Voice) -> Option<Line> {
        Some(Line::say("You finished the whole alphabet!", voice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn rounds_walk_the_alphabet_in_order() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut engine = RoundEngine::new(LetterMatch::levels(), LetterMatch::rules().session).unwrap();
        engine.start(&mut rng);

        for expected in ["a", "b", "c"] {
            assert_eq!(engine.level().answer(), expected);
            assert_eq!(engine.options().len(), 3);
            let correct = engine.options().correct_index().unwrap();
            engine.submit(correct).unwrap();
            engine.advance(&mut rng);
        }
        assert_eq!(engine.rounds(), 26);
    }

    #[test]
    fn prompt_names_the_capital_letter() {
        let line = LetterMatch::prompt(&ALPHABET[6], Cue::Next, Voice::default());
        assert_eq!(line.text(), "Find the little G");
    }
}
