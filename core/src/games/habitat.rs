use crate::*;

#[derive(Debug)]
pub struct Habitat {
    pub name: &'static str,
    pub animal: &'static str,
    pub others: [&'static str; 2],
}

const fn home(name: &'static str, animal: &'static str, others: [&'static str; 2]) -> Habitat {
    Habitat {
        name,
        animal,
        others,
    }
}

static HABITATS: [Habitat; 6] = [
    home("Farm", "Cow", ["Shark", "Lion"]),
    home("Ocean", "Whale", ["Chicken", "Camel"]),
    home("Forest", "Bear", ["Octopus", "Zebra"]),
    home("Desert", "Camel", ["Penguin", "Fish"]),
    home("Snow", "Penguin", ["Elephant", "Snake"]),
    home("Jungle", "Monkey", ["Cow", "Polar Bear"]),
];

impl Level for Habitat {
    fn answer(&self) -> Concept {
        self.animal
    }

    fn fixed_distractors(&self) -> &[Concept] {
        &self.others
    }
}

/// Paste each animal into the place it lives.
pub struct AnimalHabitat;

impl Lesson for AnimalHabitat {
    type Level = Habitat;

    const ID: GameId = GameId::Habitat;
    const CHEERS: &'static [&'static str] = &[
        "Welcome home!",
        "Great job!",
        "That's where they live!",
        "Habitat Hero!",
    ];

    fn levels() -> &'static [Habitat] {
        &HABITATS
    }

    fn rules() -> GameRules {
        GameRules::new(
            SessionRules {
                order: LevelOrder::Shuffled,
                rounds: None,
                exhaustion: Exhaustion::Won,
                distractors: DistractorSource::Fixed,
            },
            Interaction::Paste,
        )
        .advance_delay(3000)
    }

    fn picture(level: &Habitat) -> String {
        level.name.to_owned()
    }

    fn prompt(level: &Habitat, _cue: Cue, voice: Voice) -> Line {
        Line::say(
            format!("Who lives in the {}? Paste the animal here.", level.name),
            voice,
        )
    }

    fn praise(level: &Habitat, cheer: &str, voice: Voice) -> Line {
        Line::say(
            format!("{cheer} The {} lives in the {}.", level.animal, level.name),
            voice,
        )
    }

    fn reject(_level: &Habitat, picked: Concept, voice: Voice) -> Line {
        Line::say(format!("The {picked} doesn't live here. Try again!"), voice)
    }

    fn finale(voice: Voice) -> Option<Line> {
        Some(Line::say(
            "You are a Habitat Hero! You matched all the animals!",
            voice,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_animal_is_named_in_the_hint() {
        let line = AnimalHabitat::reject(&HABITATS[3], "Penguin", Voice::default());
        assert_eq!(line.text(), "The Penguin doesn't live here. Try again!");
    }
}
