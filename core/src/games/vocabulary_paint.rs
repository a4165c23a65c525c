use crate::*;

#[derive(Debug)]
pub struct VocabWord {
    pub letter: &'static str,
    pub word: &'static str,
    pub emoji: &'static str,
    pub others: [&'static str; 2],
}

const fn vocab(
    letter: &'static str,
    word: &'static str,
    emoji: &'static str,
    others: [&'static str; 2],
) -> VocabWord {
    VocabWord {
        letter,
        word,
        emoji,
        others,
    }
}

static VOCABULARY: [VocabWord; 26] = [
    vocab("A", "Ant", "🐜", ["🐝", "🐛"]),
    vocab("B", "Balloon", "🎈", ["🪁", "🎁"]),
    vocab("C", "Car", "🚗", ["✈️", "🚂"]),
    vocab("D", "Drum", "🥁", ["🎸", "🎺"]),
    vocab("E", "Egg", "🥚", ["🍞", "🧀"]),
    vocab("F", "Flower", "🌸", ["🌲", "🌵"]),
    vocab("G", "Gift", "🎁", ["🎈", "🕯️"]),
    vocab("H", "Hat", "👒", ["👓", "👞"]),
    vocab("I", "Ice Cream", "🍦", ["🧁", "🍪"]),
    vocab("J", "Juice", "🧃", ["🥛", "☕"]),
    vocab("K", "Key", "🔑", ["🔒", "🚪"]),
    vocab("L", "Leaf", "🍃", ["🍂", "🍁"]),
    vocab("M", "Moon", "🌙", ["☀️", "⭐"]),
    vocab("N", "Nose", "👃", ["👀", "👂"]),
    vocab("O", "Owl", "🦉", ["🦅", "🦆"]),
    vocab("P", "Pizza", "🍕", ["🍔", "🌭"]),
    vocab("Q", "Queen", "👑", ["💍", "💎"]),
    vocab("R", "Robot", "🤖", ["👾", "👽"]),
    vocab("S", "Snake", "🐍", ["🐢", "🦎"]),
    vocab("T", "Tree", "🌳", ["🍄", "💐"]),
    vocab("U", "Umbrella", "☂️", ["🌧️", "☀️"]),
    vocab("V", "Volcano", "🌋", ["🏔️", "⛰️"]),
    vocab("W", "Whale", "🐳", ["🐬", "🦈"]),
    vocab("X", "X-ray", "🦴", ["🦷", "💀"]),
    vocab("Y", "Yo-yo", "🪀", ["⚽", "🏀"]),
    vocab("Z", "Zebra", "🦓", ["🐎", "🦒"]),
];

impl Level for VocabWord {
    fn answer(&self) -> Concept {
        self.emoji
    }

    fn fixed_distractors(&self) -> &[Concept] {
        &self.others
    }
}

/// Paint the picture whose word starts with the shown letter.
pub struct VocabularyPaint;

impl Lesson for VocabularyPaint {
    type Level = VocabWord;

    const ID: GameId = GameId::Vocab;
    const CHEERS: &'static [&'static str] = &[
        "You found it!",
        "That's the one!",
        "Good coloring!",
        "Vocabulary Star!",
    ];

    fn levels() -> &'static [VocabWord] {
        &VOCABULARY
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
                grid: 10,
                accept: Threshold::Above(80.0),
                reject: Threshold::Above(20.0),
            }),
        )
        .advance_delay(3500)
        .brushes(&["red", "blue", "green", "yellow"])
    }

    fn picture(level: &VocabWord) -> String {
        level.letter.to_owned()
    }

    fn prompt(level: &VocabWord, _cue: Cue, voice: Voice) -> Line {
        Line::say(
            format!(
                "Color the picture that starts with {0}. {0} is for... ?",
                level.letter
            ),
            voice,
        )
    }

    fn repeat(level: &VocabWord, voice: Voice) -> Line {
        Line::say(format!("{} is for... ?", level.letter), voice)
    }

    fn praise(level: &VocabWord, cheer: &str, voice: Voice) -> Line {
        Line::say(
            format!("{cheer} {} is for {1}. Say, {1}!", level.letter, level.word),
            voice,
        )
    }

    fn reject(_level: &VocabWord, _picked: Concept, voice: Voice) -> Line {
        Line::say("Oops, not that one. Try again!", voice)
    }

    fn finale(voice: Voice) -> Option<Line> {
        Some(Line::say("You are a vocabulary superstar!", voice))
    }
}
