use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    NotStarted,
    Playing,
    Success,
    Won,
}

impl Phase {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// Order in which a session walks through the level table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelOrder {
    Shuffled,
    Fixed,
}

/// What happens once the last round of a session is answered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exhaustion {
    Won,
    Restart,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SessionRules {
    pub order: LevelOrder,
    /// Number of rounds per session, `None` plays the whole table.
    pub rounds: Option<usize>,
    pub exhaustion: Exhaustion,
    pub distractors: DistractorSource,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Ignored,
    Correct,
    Wrong(Concept),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    NoChange,
    NextRound,
    Won,
    Restarted,
}

/// Round progression shared by every option-based game.
#[derive(Clone, Debug)]
pub struct RoundEngine<L: 'static> {
    levels: &'static [L],
    rules: SessionRules,
    order: Vec<usize>,
    index: usize,
    score: u32,
    phase: Phase,
    options: OptionSet,
}

impl<L: Level + 'static> RoundEngine<L> {
    pub fn new(levels: &'static [L], rules: SessionRules) -> Result<Self> {
        if levels.is_empty() {
            return Err(HubError::EmptyLevels);
        }
        Ok(Self {
            levels,
            rules,
            order: Vec::new(),
            index: 0,
            score: 0,
            phase: Phase::NotStarted,
            options: OptionSet::default(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Zero-based index of the current round.
    pub fn round(&self) -> usize {
        self.index
    }

    pub fn rounds(&self) -> usize {
        self.order.len()
    }

    pub fn rules(&self) -> &SessionRules {
        &self.rules
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn level(&self) -> &'static L {
        let levels = self.levels;
        match self.order.get(self.index) {
            Some(&i) => &levels[i],
            None => &levels[0],
        }
    }

    pub fn is_last_round(&self) -> bool {
        self.index + 1 >= self.order.len()
    }

    /// Begins a new session: fresh order, zero score, first round.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut order: Vec<usize> = (0..self.levels.len()).collect();
        if matches!(self.rules.order, LevelOrder::Shuffled) {
            shuffle(&mut order, rng);
        }
        if let Some(rounds) = self.rules.rounds {
            order.truncate(rounds.max(1));
        }

        self.order = order;
        self.index = 0;
        self.score = 0;
        log::debug!("session started with {} rounds", self.order.len());
        self.begin_round(rng);
    }

    pub fn submit(&mut self, option: usize) -> Result<AnswerOutcome> {
        if !self.phase.is_playing() {
            return Ok(AnswerOutcome::Ignored);
        }
        let entry = self.options.get(option)?;
        Ok(self.accept(entry.concept))
    }

    /// Resolves the round with `concept`, whichever input produced it.
    pub fn accept(&mut self, concept: Concept) -> AnswerOutcome {
        if !self.phase.is_playing() {
            return AnswerOutcome::Ignored;
        }

        if concept == self.level().answer() {
            self.score += 1;
            self.phase = Phase::Success;
            log::debug!("round {} solved, score {}", self.index, self.score);
            AnswerOutcome::Correct
        } else {
            log::debug!("round {} rejected {:?}", self.index, concept);
            AnswerOutcome::Wrong(concept)
        }
    }

    /// Moves past a solved round.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> AdvanceOutcome {
        if !matches!(self.phase, Phase::Success) {
            return AdvanceOutcome::NoChange;
        }

        if !self.is_last_round() {
            self.index += 1;
            self.begin_round(rng);
            return AdvanceOutcome::NextRound;
        }

        match self.rules.exhaustion {
            Exhaustion::Won => {
                self.phase = Phase::Won;
                log::debug!("session won with score {}", self.score);
                AdvanceOutcome::Won
            }
            Exhaustion::Restart => {
                self.start(rng);
                AdvanceOutcome::Restarted
            }
        }
    }

    fn begin_round<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let level = self.order[self.index];
        self.options = OptionSet::for_level(self.levels, level, self.rules.distractors, rng);
        self.phase = Phase::Playing;
    }
}
