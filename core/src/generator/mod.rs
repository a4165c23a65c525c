use rand::Rng;
use serde::Serialize;
use smallvec::SmallVec;

use crate::*;
pub use random::*;

mod random;

/// Number of distractors offered next to the answer in most games.
pub const DEFAULT_DISTRACTORS: usize = 2;

/// Static description of one round's prompt.
pub trait Level {
    /// Concept that counts as the right answer.
    fn answer(&self) -> Concept;

    /// Hand-picked wrong answers, for games that do not sample them.
    fn fixed_distractors(&self) -> &[Concept] {
        &[]
    }
}

/// Where a round's wrong answers come from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DistractorSource {
    /// Answers of the other levels in the table.
    OtherLevels,
    /// A fixed pool of concepts, such as the five shapes.
    Pool(&'static [Concept]),
    /// The level's own hand-picked distractors, all of them.
    Fixed,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct OptionEntry {
    pub concept: Concept,
    pub is_correct: bool,
}

/// Ordered options for one round; exactly one entry is correct and concepts are unique.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OptionSet {
    entries: SmallVec<[OptionEntry; 4]>,
}

impl OptionSet {
    /// Shuffles the target together with up to `amount` distinct distractors drawn from
    /// `candidates`. Candidates equal to the target or repeated are ignored.
    pub fn generate<R: Rng + ?Sized>(
        target: Concept,
        candidates: impl IntoIterator<Item = Concept>,
        amount: usize,
        rng: &mut R,
    ) -> Self {
        let mut pool: Vec<Concept> = Vec::new();
        for concept in candidates {
            if concept != target && !pool.contains(&concept) {
                pool.push(concept);
            }
        }
        if pool.len() < amount {
            log::warn!(
                "Only {} distractors available for {:?}, wanted {}",
                pool.len(),
                target,
                amount
            );
        }

        let mut entries: SmallVec<[OptionEntry; 4]> = SmallVec::new();
        entries.push(OptionEntry {
            concept: target,
            is_correct: true,
        });
        entries.extend(
            sample(&pool, amount, rng)
                .into_iter()
                .map(|concept| OptionEntry {
                    concept,
                    is_correct: false,
                }),
        );
        shuffle(&mut entries, rng);
        Self { entries }
    }

    /// Builds the options for `levels[index]` according to `source`.
    pub fn for_level<L: Level, R: Rng + ?Sized>(
        levels: &[L],
        index: usize,
        source: DistractorSource,
        rng: &mut R,
    ) -> Self {
        let level = &levels[index];
        let target = level.answer();
        match source {
            DistractorSource::OtherLevels => Self::generate(
                target,
                levels
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != index)
                    .map(|(_, other)| other.answer()),
                DEFAULT_DISTRACTORS,
                rng,
            ),
            DistractorSource::Pool(pool) => {
                Self::generate(target, pool.iter().copied(), DEFAULT_DISTRACTORS, rng)
            }
            DistractorSource::Fixed => {
                let fixed = level.fixed_distractors();
                Self::generate(target, fixed.iter().copied(), fixed.len(), rng)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<OptionEntry> {
        self.entries
            .get(index)
            .copied()
            .ok_or(HubError::InvalidOption(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionEntry> {
        self.entries.iter()
    }

    pub fn correct_index(&self) -> Option<usize> {
        self.entries.iter().position(|entry| entry.is_correct)
    }

    pub fn position_of(&self, concept: Concept) -> Option<usize> {
        self.entries.iter().position(|entry| entry.concept == concept)
    }

    pub fn concepts(&self) -> impl Iterator<Item = Concept> + '_ {
        self.entries.iter().map(|entry| entry.concept)
    }
}
