use serde::Serialize;

use crate::*;

const START_PROMPT_DELAY: Millis = 600;
const LISTEN_MS: Millis = 1500;
const REVEAL_MS: Millis = 3500;

#[derive(Debug)]
pub struct PhonicsCard {
    pub letter: &'static str,
    pub word: &'static str,
    pub emoji: &'static str,
}

const fn sound(letter: &'static str, word: &'static str, emoji: &'static str) -> PhonicsCard {
    PhonicsCard {
        letter,
        word,
        emoji,
    }
}

static CARDS: [PhonicsCard; 26] = [
    sound("A", "Apple", "🍎"),
    sound("B", "Bear", "🐻"),
    sound("C", "Cat", "🐱"),
    sound("D", "Dog", "🐶"),
    sound("E", "Egg", "🥚"),
    sound("F", "Fish", "🐠"),
    sound("G", "Goat", "🐐"),
    sound("H", "Hat", "👒"),
    sound("I", "Igloo", "🏠"),
    sound("J", "Jam", "🍯"),
    sound("K", "Kite", "🪁"),
    sound("L", "Lion", "🦁"),
    sound("M", "Moon", "🌙"),
    sound("N", "Nest", "🪺"),
    sound("O", "Octopus", "🐙"),
    sound("P", "Pig", "🐷"),
    sound("Q", "Queen", "👑"),
    sound("R", "Rain", "🌧️"),
    sound("S", "Sun", "☀️"),
    sound("T", "Turtle", "🐢"),
    sound("U", "Umbrella", "☂️"),
    sound("V", "Van", "🚐"),
    sound("W", "Web", "🕸️"),
    sound("X", "Box", "📦"),
    sound("Y", "Yo-yo", "🪀"),
    sound("Z", "Zebra", "🦓"),
];

/// Where a phonics card is within its round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MicStage {
    Prompt,
    Listening,
    Reveal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum MicTimer {
    Prompt,
    Reveal,
    Advance,
}

/// Say the sound of each letter into the "microphone", A to Z.
///
/// Nothing is recorded: the mic button plays a short listening animation,
/// then the card flips to show the word and a star is awarded.
pub struct MicGame {
    cards: &'static [PhonicsCard],
    index: usize,
    score: u32,
    phase: Phase,
    stage: MicStage,
    timers: Scheduler<MicTimer>,
    voice: Voice,
    reveal_ms: Millis,
}

impl MicGame {
    pub fn new(config: &HubConfig) -> Self {
        let overrides = config.overrides(GameId::Phonics);
        let rounds = overrides
            .and_then(|game| game.rounds)
            .unwrap_or(CARDS.len())
            .clamp(1, CARDS.len());
        let mut voice = Voice::default();
        if let Some(rate) = config.speech.rate {
            voice.rate = rate;
        }
        if let Some(pitch) = config.speech.pitch {
            voice.pitch = pitch;
        }

        Self {
            cards: &CARDS[..rounds],
            index: 0,
            score: 0,
            phase: Phase::NotStarted,
            stage: MicStage::Prompt,
            timers: Scheduler::new(),
            voice,
            reveal_ms: overrides
                .and_then(|game| game.advance_delay_ms)
                .unwrap_or(REVEAL_MS),
        }
    }

    pub fn stage(&self) -> MicStage {
        self.stage
    }

    pub fn card(&self) -> &'static PhonicsCard {
        let cards = self.cards;
        &cards[self.index.min(cards.len() - 1)]
    }

    fn prompt(&self) -> Line {
        Line::say(
            format!("What sound does little {} make?", self.card().letter),
            self.voice,
        )
    }

    fn start(&mut self, ctx: &mut Ctx<'_>) {
        self.timers.bump();
        self.index = 0;
        self.score = 0;
        self.phase = Phase::Playing;
        self.stage = MicStage::Prompt;
        ctx.emit(Effect::RoundStarted {
            round: 0,
            rounds: self.cards.len(),
        });
        self.timers
            .schedule(ctx.now, START_PROMPT_DELAY, MicTimer::Prompt);
    }

    fn listen(&mut self, ctx: &mut Ctx<'_>) {
        if !self.phase.is_playing() || self.stage != MicStage::Prompt {
            return;
        }
        self.stage = MicStage::Listening;
        ctx.emit(Effect::Listening);
        self.timers.schedule(ctx.now, LISTEN_MS, MicTimer::Reveal);
    }

    fn reveal(&mut self, ctx: &mut Ctx<'_>) {
        let card = self.card();
        self.stage = MicStage::Reveal;
        self.phase = Phase::Success;
        self.score += 1;
        log::debug!("revealed {}, score {}", card.letter, self.score);
        ctx.emit(Effect::Revealed {
            concept: card.letter,
            score: self.score,
        });
        ctx.say(Line::say(
            format!("{} says... {}!", card.letter, card.word),
            self.voice,
        ));
        self.timers
            .schedule(ctx.now, self.reveal_ms, MicTimer::Advance);
    }

    fn advance(&mut self, ctx: &mut Ctx<'_>) {
        self.timers.bump();
        if self.index + 1 >= self.cards.len() {
            self.phase = Phase::Won;
            ctx.emit(Effect::Won { score: self.score });
            ctx.say(Line::say("You did all the sounds! Great job!", self.voice));
            return;
        }
        self.index += 1;
        self.phase = Phase::Playing;
        self.stage = MicStage::Prompt;
        ctx.emit(Effect::RoundStarted {
            round: self.index,
            rounds: self.cards.len(),
        });
        ctx.say(self.prompt());
    }
}

impl Game for MicGame {
    fn id(&self) -> GameId {
        GameId::Phonics
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn handle(&mut self, event: GameEvent, ctx: &mut Ctx<'_>) -> Result<()> {
        match event {
            GameEvent::Start => {
                if matches!(self.phase, Phase::NotStarted | Phase::Won) {
                    self.start(ctx);
                }
            }
            GameEvent::Mic => self.listen(ctx),
            GameEvent::Repeat => {
                if self.phase.is_playing() && self.stage == MicStage::Prompt {
                    ctx.say(self.prompt());
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn tick(&mut self, ctx: &mut Ctx<'_>) {
        while let Some(timer) = self.timers.pop_due(ctx.now) {
            match timer {
                MicTimer::Prompt => ctx.say(self.prompt()),
                MicTimer::Reveal => self.reveal(ctx),
                MicTimer::Advance => self.advance(ctx),
            }
        }
    }

    fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    fn view(&self) -> GameView {
        let mut view = GameView::new(GameId::Phonics, self.phase);
        if self.phase == Phase::NotStarted {
            return view;
        }
        let card = self.card();
        view.round = self.index;
        view.rounds = self.cards.len();
        view.score = self.score;
        view.stage = Some(self.stage);
        view.picture = match self.stage {
            MicStage::Reveal => format!("{} {} {}", card.letter, card.emoji, card.word),
            _ => card.letter.to_owned(),
        };
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::said;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    struct Harness {
        game: MicGame,
        rng: SmallRng,
    }

    impl Harness {
        fn new(config: &HubConfig) -> Self {
            Self {
                game: MicGame::new(config),
                rng: SmallRng::seed_from_u64(3),
            }
        }

        fn send(&mut self, now: Millis, event: GameEvent) -> Vec<Effect> {
            let mut out = Vec::new();
            let mut ctx = Ctx::new(now, &mut self.rng, &mut out);
            self.game.handle(event, &mut ctx).unwrap();
            out
        }

        fn tick(&mut self, now: Millis) -> Vec<Effect> {
            let mut out = Vec::new();
            let mut ctx = Ctx::new(now, &mut self.rng, &mut out);
            self.game.tick(&mut ctx);
            out
        }
    }

    #[test]
    fn mic_round_goes_prompt_listen_reveal() {
        let mut h = Harness::new(&HubConfig::default());
        h.send(0, GameEvent::Start);

        assert_eq!(
            said(&h.tick(600)),
            vec!["What sound does little A make?".to_owned()]
        );

        let effects = h.send(1_000, GameEvent::Mic);
        assert_eq!(effects, vec![Effect::Listening]);
        assert_eq!(h.game.stage(), MicStage::Listening);

        // A second press while listening changes nothing.
        assert!(h.send(1_200, GameEvent::Mic).is_empty());

        let effects = h.tick(2_500);
        assert!(effects.contains(&Effect::Revealed {
            concept: "A",
            score: 1
        }));
        assert_eq!(said(&effects), vec!["A says... Apple!".to_owned()]);

        let effects = h.tick(6_000);
        assert_eq!(
            said(&effects),
            vec!["What sound does little B make?".to_owned()]
        );
        assert_eq!(h.game.stage(), MicStage::Prompt);
        assert_eq!(h.game.phase(), Phase::Playing);
    }

    #[test]
    fn last_card_wins_the_session() {
        let config = HubConfig::from_toml_str("[games.phonics]\nrounds = 2").unwrap();
        let mut h = Harness::new(&config);
        h.send(0, GameEvent::Start);

        let mut now = 0;
        for _ in 0..2 {
            now += 1_000;
            h.send(now, GameEvent::Mic);
            now += LISTEN_MS;
            h.tick(now);
            now += REVEAL_MS;
            let effects = h.tick(now);
            if h.game.phase() == Phase::Won {
                assert!(effects.contains(&Effect::Won { score: 2 }));
            }
        }

        assert_eq!(h.game.phase(), Phase::Won);
        assert_eq!(h.game.score(), 2);
        assert_eq!(h.game.next_deadline(), None);
    }
}
