use crate::*;

const NUMBERS: [Concept; 6] = ["0", "1", "2", "3", "4", "5"];
const NUMBER_WORDS: [&str; 6] = ["Zero", "1", "2", "3", "4", "5"];

#[derive(Debug)]
pub struct CountedThing {
    pub name: &'static str,
    pub emoji: &'static str,
}

const THING_COUNT: usize = 8;

static THINGS: [CountedThing; THING_COUNT] = [
    CountedThing { name: "apples", emoji: "🍎" },
    CountedThing { name: "cars", emoji: "🚗" },
    CountedThing { name: "stars", emoji: "⭐" },
    CountedThing { name: "fish", emoji: "🐠" },
    CountedThing { name: "bears", emoji: "🐻" },
    CountedThing { name: "balls", emoji: "⚽" },
    CountedThing { name: "cats", emoji: "🐱" },
    CountedThing { name: "flowers", emoji: "🌸" },
];

/// A box holding `count` copies of one thing.
#[derive(Copy, Clone, Debug)]
pub struct CountRound {
    pub thing: &'static CountedThing,
    pub count: usize,
}

impl Level for CountRound {
    fn answer(&self) -> Concept {
        NUMBERS[self.count]
    }
}

const ROUNDS: usize = THING_COUNT * NUMBERS.len();

const fn all_rounds() -> [CountRound; ROUNDS] {
    let mut rounds = [CountRound {
        thing: &THINGS[0],
        count: 0,
    }; ROUNDS];
    let mut i = 0;
    while i < ROUNDS {
        rounds[i] = CountRound {
            thing: &THINGS[i / NUMBERS.len()],
            count: i % NUMBERS.len(),
        };
        i += 1;
    }
    rounds
}

static COMBINATIONS: [CountRound; ROUNDS] = all_rounds();

/// Count zero to five objects in a box.
pub struct Counting;

impl Lesson for Counting {
    type Level = CountRound;

    const ID: GameId = GameId::Counting;
    const CHEERS: &'static [&'static str] =
        &["That's right!", "Good counting!", "You got it!", "Perfect!"];

    fn levels() -> &'static [CountRound] {
        &COMBINATIONS
    }

    fn rules() -> GameRules {
        GameRules::new(
            SessionRules {
                order: LevelOrder::Shuffled,
                rounds: Some(10),
                exhaustion: Exhaustion::Won,
                distractors: DistractorSource::Pool(&NUMBERS),
            },
            Interaction::Tap,
        )
        .advance_delay(2500)
    }

    fn picture(level: &CountRound) -> String {
        if level.count == 0 {
            "(empty box)".to_owned()
        } else {
            level.thing.emoji.repeat(level.count)
        }
    }

    fn prompt(level: &CountRound, _cue: Cue, voice: Voice) -> Line {
        let text = if level.count == 0 {
            format!("How many {} are in the box?", level.thing.name)
        } else {
            format!("Count the {}. How many?", level.thing.name)
        };
        Line::say(text, voice)
    }

    fn repeat(level: &CountRound, voice: Voice) -> Line {
        Line::say(format!("How many {}?", level.thing.name), voice)
    }

    fn praise(level: &CountRound, cheer: &str, voice: Voice) -> Line {
        Line::say(
            format!(
                "{cheer} There are {} {}.",
                NUMBER_WORDS[level.count], level.thing.name
            ),
            voice,
        )
    }

    fn reject(_level: &CountRound, picked: Concept, voice: Voice) -> Line {
        Line::say(format!("Not {picked}. Try again!"), voice)
    }

    fn finale(voice: Voice) -> Option<Line> {
        Some(Line::say("You are a counting champion!", voice))
    }
}
