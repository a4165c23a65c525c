use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Where a rejection cue is shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "at", content = "concept", rename_all = "snake_case")]
pub enum ShakeAt {
    /// A wrong option card or scenario card.
    Option(Concept),
    /// The paste target of a cut-and-paste game.
    Target,
}

/// Instruction from a game to its host.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    Say { line: Line },
    Shake { target: ShakeAt },
    ShakeCleared,
    RoundStarted { round: usize, rounds: usize },
    Solved {
        concept: Concept,
        score: u32,
        cheer: &'static str,
    },
    Listening,
    Revealed { concept: Concept, score: u32 },
    Won { score: u32 },
    Restarted,
    ModeChanged { mode: InputMode },
    BrushChanged { brush: &'static str },
    Advisory { message: String },
    ScreenChanged { screen: Screen },
}

/// Input routed to the active game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// Start button, also "play again" from the won screen.
    Start,
    Tap { option: usize },
    Paint { option: usize, sample: PointerSample },
    ToggleMode,
    Brush { index: usize },
    PickUp { option: usize },
    Cursor { pos: Point },
    Drop,
    Mic,
    Repeat,
}

impl GameEvent {
    /// Pointer moves do not count as the interaction that unlocks audio.
    pub fn is_user_gesture(&self) -> bool {
        !matches!(self, Self::Cursor { .. })
    }
}

/// Per-call environment handed to a game.
pub struct Ctx<'a> {
    pub now: Millis,
    pub rng: &'a mut SmallRng,
    pub out: &'a mut Vec<Effect>,
}

impl<'a> Ctx<'a> {
    pub fn new(now: Millis, rng: &'a mut SmallRng, out: &'a mut Vec<Effect>) -> Self {
        Self { now, rng, out }
    }

    pub fn emit(&mut self, effect: Effect) {
        self.out.push(effect);
    }

    pub fn say(&mut self, line: Line) {
        self.out.push(Effect::Say { line });
    }
}
