use crate::*;

const SHAPES: &[Concept] = &["Circle", "Square", "Triangle", "Rectangle", "Heart"];

#[derive(Debug)]
pub struct ShapedThing {
    pub name: &'static str,
    pub emoji: &'static str,
    pub shape: &'static str,
}

const fn thing(name: &'static str, emoji: &'static str, shape: &'static str) -> ShapedThing {
    ShapedThing { name, emoji, shape }
}

static THINGS: [ShapedThing; 15] = [
    thing("Pizza Slice", "🍕", "Triangle"),
    thing("Clock", "⏰", "Circle"),
    thing("Book", "📘", "Rectangle"),
    thing("Window", "🪟", "Square"),
    thing("Cookie", "🍪", "Circle"),
    thing("Envelope", "✉️", "Rectangle"),
    thing("Watermelon", "🍉", "Triangle"),
    thing("Dice", "🎲", "Square"),
    thing("Wheel", "🛞", "Circle"),
    thing("TV", "📺", "Rectangle"),
    thing("Yield Sign", "🔻", "Triangle"),
    thing("Present", "🎁", "Square"),
    thing("Love Letter", "💌", "Heart"),
    thing("Donut", "🍩", "Circle"),
    thing("Door", "🚪", "Rectangle"),
];

impl Level for ShapedThing {
    fn answer(&self) -> Concept {
        self.shape
    }
}

/// Name the shape of an everyday object.
pub struct ShapeDetective;

impl Lesson for ShapeDetective {
    type Level = ShapedThing;

    const ID: GameId = GameId::Shapes;
    const CHEERS: &'static [&'static str] = &[
        "You found it!",
        "Shape Master!",
        "That's the shape!",
        "Great eye!",
    ];

    fn levels() -> &'static [ShapedThing] {
        &THINGS
    }

    fn rules() -> GameRules {
        GameRules::new(
            SessionRules {
                order: LevelOrder::Shuffled,
                rounds: Some(10),
                exhaustion: Exhaustion::Won,
                distractors: DistractorSource::Pool(SHAPES),
            },
            Interaction::Tap,
        )
        .advance_delay(2500)
    }

    fn picture(level: &ShapedThing) -> String {
        format!("{} {}", level.emoji, level.name)
    }

    fn prompt(level: &ShapedThing, _cue: Cue, voice: Voice) -> Line {
        Line::say(format!("What shape is the {}?", level.name), voice)
    }

    fn repeat(level: &ShapedThing, voice: Voice) -> Line {
        Line::say(format!("Look at the {}. What shape is it?", level.name), voice)
    }

    fn praise(level: &ShapedThing, cheer: &str, voice: Voice) -> Line {
        Line::say(
            format!("{cheer} The {} is a {}.", level.name, level.shape),
            voice,
        )
    }

    fn reject(_level: &ShapedThing, picked: Concept, voice: Voice) -> Line {
        Line::say(format!("Not a {picked}. Try again!"), voice)
    }

    fn finale(voice: Voice) -> Option<Line> {
        Some(Line::say("You are a Shape Detective!", voice))
    }
}
