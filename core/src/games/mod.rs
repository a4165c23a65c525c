//! The twelve mini-games and the controllers that run them.
//!
//! Most games are data plus a [`Lesson`] impl driven by [`QuizGame`]; the
//! microphone game and the respect circle have their own controllers.

use core::fmt::Debug;

use serde::Serialize;

use crate::*;

pub use animal_growth::*;
pub use color_match::*;
pub use counting::*;
pub use habitat::*;
pub use letter_match::*;
pub use phonics_mic::*;
pub use phonics_scissor::*;
pub use quiz::*;
pub use respect_circle::*;
pub use shape_detective::*;
pub use sound_coloring::*;
pub use thai_alphabet::*;
pub use vocabulary_paint::*;

mod animal_growth;
mod color_match;
mod counting;
mod habitat;
mod letter_match;
mod phonics_mic;
mod phonics_scissor;
mod quiz;
mod respect_circle;
mod shape_detective;
mod sound_coloring;
mod thai_alphabet;
mod vocabulary_paint;

/// Why a round's prompt is being spoken.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cue {
    /// First round after the start button.
    Start,
    /// First round after "play again" on the won screen.
    Again,
    Next,
    /// First round of an automatic restart.
    Restart,
}

/// Content and wording of an option-based game.
pub trait Lesson: 'static {
    type Level: Level + Debug + 'static;

    const ID: GameId;
    const CHEERS: &'static [&'static str];

    fn levels() -> &'static [Self::Level];

    /// Built-in pacing and input rules, before configuration overrides.
    fn rules() -> GameRules;

    /// What the round shows as its subject, e.g. "🍎 Apple".
    fn picture(level: &Self::Level) -> String;

    fn prompt(level: &Self::Level, cue: Cue, voice: Voice) -> Line;

    /// Line for the repeat button.
    fn repeat(level: &Self::Level, voice: Voice) -> Line {
        Self::prompt(level, Cue::Next, voice)
    }

    fn praise(level: &Self::Level, cheer: &str, voice: Voice) -> Line;

    fn reject(level: &Self::Level, picked: Concept, voice: Voice) -> Line;

    /// Spoken once the last round is solved.
    fn finale(voice: Voice) -> Option<Line>;

    /// Spoken when an item is picked up in a cut-and-paste game.
    fn picked_up(item: Concept, voice: Voice) -> Option<Line> {
        Some(Line::say(item, voice))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptionView {
    pub concept: Concept,
    pub shaking: bool,
    /// Painted share of the option in percent.
    pub coverage: f32,
    /// Solved or found by the child.
    pub resolved: bool,
}

/// Renderable snapshot of a running game.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameView {
    pub game: GameId,
    pub phase: Phase,
    pub round: usize,
    pub rounds: usize,
    pub score: u32,
    pub picture: String,
    pub options: Vec<OptionView>,
    pub mode: Option<InputMode>,
    pub brush: Option<&'static str>,
    pub painted: Option<&'static str>,
    pub held: Option<Concept>,
    pub pasted: Option<Concept>,
    pub target_shaking: bool,
    pub stage: Option<MicStage>,
}

impl GameView {
    pub fn new(game: GameId, phase: Phase) -> Self {
        Self {
            game,
            phase,
            round: 0,
            rounds: 0,
            score: 0,
            picture: String::new(),
            options: Vec::new(),
            mode: None,
            brush: None,
            painted: None,
            held: None,
            pasted: None,
            target_shaking: false,
            stage: None,
        }
    }
}

/// A running game session, driven by the hub.
pub trait Game {
    fn id(&self) -> GameId;

    fn phase(&self) -> Phase;

    fn score(&self) -> u32;

    fn handle(&mut self, event: GameEvent, ctx: &mut Ctx<'_>) -> Result<()>;

    /// Fires every timer due at `ctx.now`.
    fn tick(&mut self, ctx: &mut Ctx<'_>);

    fn next_deadline(&self) -> Option<Millis>;

    fn view(&self) -> GameView;
}

/// Builds a fresh, not yet started session of `id`.
pub fn launch(id: GameId, config: &HubConfig) -> Result<Box<dyn Game>> {
    fn quiz_game<G: Lesson>(config: &HubConfig) -> Result<Box<dyn Game>> {
        let rules = config.resolve(G::ID, G::rules());
        Ok(Box::new(QuizGame::<G>::new(rules)?))
    }

    match id {
        GameId::Match => quiz_game::<LetterMatch>(config),
        GameId::Color => quiz_game::<SoundColoring>(config),
        GameId::Vocab => quiz_game::<VocabularyPaint>(config),
        GameId::Phonics => Ok(Box::new(MicGame::new(config))),
        GameId::Scissor => quiz_game::<PhonicsScissor>(config),
        GameId::Counting => quiz_game::<Counting>(config),
        GameId::Shapes => quiz_game::<ShapeDetective>(config),
        GameId::ColorPaste => quiz_game::<ColorMatch>(config),
        GameId::Habitat => quiz_game::<AnimalHabitat>(config),
        GameId::Growth => quiz_game::<AnimalGrowth>(config),
        GameId::Social => Ok(Box::new(RespectCircle::new(config))),
        GameId::Thai => quiz_game::<ThaiAlphabet>(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_game_launches_not_started() {
        let config = HubConfig::default();
        for id in GameId::ALL {
            let game = launch(id, &config).unwrap();
            assert_eq!(game.id(), id);
            assert_eq!(game.phase(), Phase::NotStarted);
            assert_eq!(game.score(), 0);
            assert_eq!(game.next_deadline(), None);
        }
    }
}
