use crate::*;

#[derive(Debug)]
pub struct ColorCard {
    pub color: &'static str,
    /// Picture that has this colour.
    pub item: &'static str,
    pub others: [&'static str; 2],
}

const fn card(color: &'static str, item: &'static str, others: [&'static str; 2]) -> ColorCard {
    ColorCard {
        color,
        item,
        others,
    }
}

static COLORS: [ColorCard; 9] = [
    card("Red", "Apple", ["Leaf", "Ocean"]),
    card("Blue", "Blueberry", ["Sun", "Pig"]),
    card("Green", "Frog", ["Fire", "Snow"]),
    card("Yellow", "Duck", ["Grape", "Car"]),
    card("Purple", "Grapes", ["Lemon", "Grass"]),
    card("Orange", "Pumpkin", ["Cloud", "Night"]),
    card("Pink", "Pig", ["Frog", "Banana"]),
    card("Black", "Bat", ["Egg", "Flower"]),
    card("White", "Snowman", ["Coal", "Ladybug"]),
];

impl Level for ColorCard {
    fn answer(&self) -> Concept {
        self.item
    }

    fn fixed_distractors(&self) -> &[Concept] {
        &self.others
    }
}

/// Cut out the picture that has the named colour and paste it on the swatch.
pub struct ColorMatch;

impl Lesson for ColorMatch {
    type Level = ColorCard;

    const ID: GameId = GameId::ColorPaste;
    const CHEERS: &'static [&'static str] = &[
        "Perfect match!",
        "You found the color!",
        "Nice cutting!",
        "Color Expert!",
    ];

    fn levels() -> &'static [ColorCard] {
        &COLORS
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
        .advance_delay(3000)
    }

    fn picture(level: &ColorCard) -> String {
        level.color.to_owned()
    }

    fn prompt(level: &ColorCard, _cue: Cue, voice: Voice) -> Line {
        Line::say(
            format!("What is {}? Cut the picture and paste it.", level.color),
            voice,
        )
    }

    fn praise(level: &ColorCard, cheer: &str, voice: Voice) -> Line {
        Line::say(format!("{cheer} The {} is {}.", level.item, level.color), voice)
    }

    fn reject(level: &ColorCard, _picked: Concept, voice: Voice) -> Line {
        Line::say(format!("That's not {}. Try again!", level.color), voice)
    }

    fn finale(voice: Voice) -> Option<Line> {
        Some(Line::say("You matched all the colors!", voice))
    }
}
