use crate::*;

const CARDS_PER_ROUND: usize = 4;
const ROUNDS: usize = 2;
const CHEER_DELAY: Millis = 1500;
const ADVANCE_DELAY: Millis = 3500;

const CHEERS: &[&str] = &[
    "You know how to be kind!",
    "Great job finding respect!",
    "Kindness is a superpower!",
    "Excellent!",
];

#[derive(Debug)]
pub struct Scenario {
    pub text: &'static str,
    pub respectful: bool,
    pub feedback: &'static str,
}

const fn scenario(text: &'static str, respectful: bool, feedback: &'static str) -> Scenario {
    Scenario {
        text,
        respectful,
        feedback,
    }
}

static SCENARIOS: [Scenario; 8] = [
    scenario("Sharing Toys", true, "Sharing is caring!"),
    scenario(
        "Yelling",
        false,
        "Yelling is not respectful. We use inside voices.",
    ),
    scenario("Helping a Friend", true, "Helping others is very respectful."),
    scenario("Fighting", false, "Fighting hurts. We should use our words."),
    scenario("Listening", true, "Listening shows you care."),
    scenario(
        "Pushing",
        false,
        "Pushing is not nice. Keep hands to yourself.",
    ),
    scenario("Cleaning Up", true, "Cleaning up your mess is respectful."),
    scenario("Being Mean", false, "Being mean makes people sad."),
];

#[derive(Copy, Clone, Debug)]
pub struct CircleCard {
    pub scenario: &'static Scenario,
    pub found: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum CircleTimer {
    Prompt,
    ClearShake(u64),
    Cheer,
    Advance,
}

/// Find every card showing kindness. Several cards can be right in one round.
pub struct RespectCircle {
    cards: Vec<CircleCard>,
    round: usize,
    rounds: usize,
    score: u32,
    phase: Phase,
    timers: Scheduler<CircleTimer>,
    shaking: Option<(usize, u64)>,
    shake_seq: u64,
    /// Encouragement reported with every find and spoken once the round is cleared.
    cheer: &'static str,
    voice: Voice,
    prompt_delay: Millis,
    shake_ms: Millis,
    advance_ms: Millis,
}

impl RespectCircle {
    pub fn new(config: &HubConfig) -> Self {
        let overrides = config.overrides(GameId::Social);
        let mut voice = Voice::default();
        if let Some(rate) = config.speech.rate {
            voice.rate = rate;
        }
        if let Some(pitch) = config.speech.pitch {
            voice.pitch = pitch;
        }

        Self {
            cards: Vec::new(),
            round: 0,
            rounds: overrides.and_then(|game| game.rounds).unwrap_or(ROUNDS),
            score: 0,
            phase: Phase::NotStarted,
            timers: Scheduler::new(),
            shaking: None,
            shake_seq: 0,
            cheer: CHEERS[0],
            voice,
            prompt_delay: config.timing.prompt_delay_ms.unwrap_or(500),
            shake_ms: config.timing.shake_ms,
            advance_ms: overrides
                .and_then(|game| game.advance_delay_ms)
                .unwrap_or(ADVANCE_DELAY),
        }
    }

    pub fn cards(&self) -> &[CircleCard] {
        &self.cards
    }

    pub fn remaining(&self) -> usize {
        self.cards
            .iter()
            .filter(|card| card.scenario.respectful && !card.found)
            .count()
    }

    fn setup_round(&mut self, ctx: &mut Ctx<'_>) {
        self.timers.bump();
        self.shaking = None;
        self.phase = Phase::Playing;

        // Resample until the round has something to find.
        if let Some(cheer) = pick(CHEERS, ctx.rng) {
            self.cheer = *cheer;
        }

        let all: Vec<&'static Scenario> = SCENARIOS.iter().collect();
        self.cards = loop {
            let picked = sample(&all, CARDS_PER_ROUND, ctx.rng);
            if picked.iter().any(|scenario| scenario.respectful) {
                break picked
                    .into_iter()
                    .map(|scenario| CircleCard {
                        scenario,
                        found: false,
                    })
                    .collect();
            }
            log::debug!("resampling a round without respectful cards");
        };

        ctx.emit(Effect::RoundStarted {
            round: self.round,
            rounds: self.rounds,
        });
        self.timers
            .schedule(ctx.now, self.prompt_delay, CircleTimer::Prompt);
    }

    fn tap(&mut self, option: usize, ctx: &mut Ctx<'_>) -> Result<()> {
        if !self.phase.is_playing() {
            return Ok(());
        }
        let card = *self
            .cards
            .get(option)
            .ok_or(HubError::InvalidOption(option))?;
        if card.found {
            return Ok(());
        }

        ctx.say(Line::say(card.scenario.feedback, self.voice));
        if !card.scenario.respectful {
            self.shake_seq += 1;
            self.shaking = Some((option, self.shake_seq));
            ctx.emit(Effect::Shake {
                target: ShakeAt::Option(card.scenario.text),
            });
            self.timers.schedule(
                ctx.now,
                self.shake_ms,
                CircleTimer::ClearShake(self.shake_seq),
            );
            return Ok(());
        }

        self.cards[option].found = true;
        self.score += 1;
        ctx.emit(Effect::Solved {
            concept: card.scenario.text,
            score: self.score,
            cheer: self.cheer,
        });

        if self.remaining() == 0 {
            log::debug!("round {} complete", self.round);
            self.phase = Phase::Success;
            self.timers
                .schedule(ctx.now, CHEER_DELAY, CircleTimer::Cheer);
            self.timers
                .schedule(ctx.now, self.advance_ms, CircleTimer::Advance);
        }
        Ok(())
    }

    fn advance(&mut self, ctx: &mut Ctx<'_>) {
        if self.round + 1 < self.rounds {
            self.round += 1;
            self.setup_round(ctx);
            return;
        }
        self.timers.bump();
        self.phase = Phase::Won;
        ctx.emit(Effect::Won { score: self.score });
        ctx.say(Line::say("You are a Respect Super Star!", self.voice));
    }
}

impl Game for RespectCircle {
    fn id(&self) -> GameId {
        GameId::Social
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn handle(&mut self, event: GameEvent, ctx: &mut Ctx<'_>) -> Result<()> {
        match event {
            GameEvent::Start if matches!(self.phase, Phase::NotStarted | Phase::Won) => {
                self.round = 0;
                self.score = 0;
                self.setup_round(ctx);
            }
            GameEvent::Tap { option } => self.tap(option, ctx)?,
            GameEvent::Repeat if self.phase.is_playing() => ctx.say(Line::say(
                "Tap the pictures that show Respect and Kindness.",
                self.voice,
            )),
            _ => {}
        }
        Ok(())
    }

    fn tick(&mut self, ctx: &mut Ctx<'_>) {
        while let Some(timer) = self.timers.pop_due(ctx.now) {
            match timer {
                CircleTimer::Prompt => ctx.say(Line::say(
                    "Tap the pictures that show Respect and Kindness.",
                    self.voice,
                )),
                CircleTimer::ClearShake(token) => {
                    if self.shaking.is_some_and(|(_, current)| current == token) {
                        self.shaking = None;
                        ctx.emit(Effect::ShakeCleared);
                    }
                }
                CircleTimer::Cheer => ctx.say(Line::say(self.cheer, self.voice)),
                CircleTimer::Advance => self.advance(ctx),
            }
        }
    }

    fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    fn view(&self) -> GameView {
        let mut view = GameView::new(GameId::Social, self.phase);
        view.round = self.round;
        view.rounds = self.rounds;
        view.score = self.score;
        view.options = self
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| OptionView {
                concept: card.scenario.text,
                shaking: self.shaking.is_some_and(|(option, _)| option == index),
                coverage: 0.0,
                resolved: card.found,
            })
            .collect();
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
        game: RespectCircle,
        rng: SmallRng,
    }

    impl Harness {
        fn new(seed: u64) -> Self {
            Self {
                game: RespectCircle::new(&HubConfig::default()),
                rng: SmallRng::seed_from_u64(seed),
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

        fn indices(&self, respectful: bool) -> Vec<usize> {
            self.game
                .cards()
                .iter()
                .enumerate()
                .filter(|(_, card)| card.scenario.respectful == respectful)
                .map(|(index, _)| index)
                .collect()
        }

        /// Taps every respectful card of the current round at `now`.
        fn clear_round(&mut self, now: Millis) -> Vec<Effect> {
            let mut effects = Vec::new();
            for option in self.indices(true) {
                effects.extend(self.send(now, GameEvent::Tap { option }));
            }
            effects
        }
    }

    #[test]
    fn every_round_has_something_to_find() {
        for seed in 0..50 {
            let mut h = Harness::new(seed);
            h.send(0, GameEvent::Start);
            assert_eq!(h.game.cards().len(), CARDS_PER_ROUND);
            assert!(h.game.remaining() > 0);
        }
    }

    #[test]
    fn respectful_card_is_found_once() {
        let mut h = Harness::new(7);
        h.send(0, GameEvent::Start);
        assert_eq!(
            said(&h.tick(500)),
            vec!["Tap the pictures that show Respect and Kindness.".to_owned()]
        );

        let option = h.indices(true)[0];
        let feedback = h.game.cards()[option].scenario.feedback;
        let effects = h.send(1_000, GameEvent::Tap { option });
        assert_eq!(said(&effects), vec![feedback.to_owned()]);
        assert_eq!(h.game.score(), 1);
        assert!(h.game.view().options[option].resolved);

        assert!(h.send(1_100, GameEvent::Tap { option }).is_empty());
        assert_eq!(h.game.score(), 1);
    }

    #[test]
    fn unkind_card_shakes_and_explains() {
        let mut h = (0..50)
            .map(Harness::new)
            .find_map(|mut h| {
                h.send(0, GameEvent::Start);
                (!h.indices(false).is_empty()).then_some(h)
            })
            .unwrap();
        h.tick(500);

        let option = h.indices(false)[0];
        let effects = h.send(1_000, GameEvent::Tap { option });
        assert!(effects.contains(&Effect::Shake {
            target: ShakeAt::Option(h.game.cards()[option].scenario.text)
        }));
        assert_eq!(h.game.score(), 0);
        assert!(h.game.view().options[option].shaking);

        assert_eq!(h.tick(1_500), vec![Effect::ShakeCleared]);
        assert!(!h.game.view().options[option].shaking);
    }

    #[test]
    fn two_cleared_rounds_win() {
        let mut h = Harness::new(11);
        h.send(0, GameEvent::Start);
        h.tick(500);
        let first = h.game.remaining() as u32;

        h.clear_round(1_000);
        assert_eq!(h.game.phase(), Phase::Success);

        let cheer = said(&h.tick(2_500));
        assert_eq!(cheer.len(), 1);
        assert!(CHEERS.contains(&cheer[0].as_str()));

        let effects = h.tick(4_500);
        assert!(effects.contains(&Effect::RoundStarted {
            round: 1,
            rounds: ROUNDS
        }));
        assert_eq!(h.game.phase(), Phase::Playing);
        let second = h.game.remaining() as u32;

        h.clear_round(6_000);
        let effects = h.tick(9_500);
        assert!(effects.contains(&Effect::Won {
            score: first + second
        }));
        assert!(said(&effects).contains(&"You are a Respect Super Star!".to_owned()));
        assert_eq!(h.game.phase(), Phase::Won);
        assert_eq!(h.game.next_deadline(), None);
    }

    #[test]
    fn spoken_cheer_is_the_reported_one() {
        for seed in 0..10 {
            let mut h = Harness::new(seed);
            h.send(0, GameEvent::Start);
            h.tick(500);

            let reported: Vec<&str> = h
                .clear_round(1_000)
                .iter()
                .filter_map(|effect| match effect {
                    Effect::Solved { cheer, .. } => Some(*cheer),
                    _ => None,
                })
                .collect();
            let spoken = said(&h.tick(2_500));

            assert!(!reported.is_empty());
            assert!(reported.iter().all(|&cheer| cheer == spoken[0]));
        }
    }

    #[test]
    fn taps_outside_the_round_are_errors() {
        let mut h = Harness::new(1);
        h.send(0, GameEvent::Start);
        let mut out = Vec::new();
        let mut ctx = Ctx::new(10, &mut h.rng, &mut out);
        assert_eq!(
            h.game.handle(GameEvent::Tap { option: 9 }, &mut ctx),
            Err(HubError::InvalidOption(9))
        );
    }
}
