use crate::*;

#[derive(Debug)]
pub struct AnimalFamily {
    pub adult: &'static str,
    pub baby: &'static str,
}

const fn family(adult: &'static str, baby: &'static str) -> AnimalFamily {
    AnimalFamily { adult, baby }
}

static FAMILIES: [AnimalFamily; 8] = [
    family("Hen", "Chick"),
    family("Dog", "Puppy"),
    family("Cat", "Kitten"),
    family("Cow", "Calf"),
    family("Lion", "Cub"),
    family("Pig", "Piglet"),
    family("Duck", "Duckling"),
    family("Sheep", "Lamb"),
];

impl Level for AnimalFamily {
    fn answer(&self) -> Concept {
        self.baby
    }
}

/// Find the baby that belongs to the mommy animal.
pub struct AnimalGrowth;

impl Lesson for AnimalGrowth {
    type Level = AnimalFamily;

    const ID: GameId = GameId::Growth;
    const CHEERS: &'static [&'static str] = &[
        "Growing up strong!",
        "You found the baby!",
        "That's the little one!",
        "Family reunited!",
    ];

    fn levels() -> &'static [AnimalFamily] {
        &FAMILIES
    }

    fn rules() -> GameRules {
        GameRules::new(
            SessionRules {
                order: LevelOrder::Shuffled,
                rounds: None,
                exhaustion: Exhaustion::Restart,
                distractors: DistractorSource::OtherLevels,
            },
            Interaction::Tap,
        )
        .voice(Voice::new(0.9, 1.2))
        .advance_delay(3000)
    }

    fn picture(level: &AnimalFamily) -> String {
        level.adult.to_owned()
    }

    fn prompt(level: &AnimalFamily, _cue: Cue, voice: Voice) -> Line {
        Line::say(
            format!(
                "This is the Mommy {}. Can you find her baby {}?",
                level.adult, level.baby
            ),
            voice,
        )
    }

    fn praise(level: &AnimalFamily, cheer: &str, voice: Voice) -> Line {
        Line::say(
            format!("{cheer} The baby {} is called a {}.", level.adult, level.baby),
            voice,
        )
    }

    fn reject(_level: &AnimalFamily, picked: Concept, voice: Voice) -> Line {
        Line::say(format!("That's a baby {picked}. Try again!"), voice)
    }

    fn finale(voice: Voice) -> Option<Line> {
        Some(Line::say("You matched all the families!", voice))
    }
}
