use core::marker::PhantomData;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum QuizTimer {
    Prompt(Cue),
    ClearShake(u64),
    Advance,
}

/// Option-based game: tap, paint or paste the right answer, round after round.
pub struct QuizGame<G: Lesson> {
    engine: RoundEngine<G::Level>,
    rules: GameRules,
    timers: Scheduler<QuizTimer>,
    /// Current rejection cue and the token of the timer that clears it.
    shaking: Option<(ShakeAt, u64)>,
    shake_seq: u64,
    mode: InputMode,
    brush: usize,
    painted: Option<&'static str>,
    board: CoverageBoard,
    hand: HoldState,
    lesson: PhantomData<G>,
}

impl<G: Lesson> QuizGame<G> {
    pub fn new(rules: GameRules) -> Result<Self> {
        let grid = match rules.interaction {
            Interaction::Paint(paint) => paint.grid,
            _ => 1,
        };
        Ok(Self {
            engine: RoundEngine::new(G::levels(), rules.session)?,
            rules,
            timers: Scheduler::new(),
            shaking: None,
            shake_seq: 0,
            mode: InputMode::default(),
            brush: 0,
            painted: None,
            board: CoverageBoard::new(0, grid),
            hand: HoldState::default(),
            lesson: PhantomData,
        })
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn engine(&self) -> &RoundEngine<G::Level> {
        &self.engine
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn board(&self) -> &CoverageBoard {
        &self.board
    }

    pub fn hand(&self) -> &HoldState {
        &self.hand
    }

    pub fn shaking(&self) -> Option<ShakeAt> {
        self.shaking.map(|(at, _)| at)
    }

    fn paint_rules(&self) -> Option<PaintRules> {
        match self.rules.interaction {
            Interaction::Paint(paint) => Some(paint),
            _ => None,
        }
    }

    fn start(&mut self, cue: Cue, ctx: &mut Ctx<'_>) {
        log::debug!("starting {}", G::ID);
        self.engine.start(ctx.rng);
        self.setup_round(cue, ctx);
    }

    /// Resets per-round state and queues the round's prompt.
    fn setup_round(&mut self, cue: Cue, ctx: &mut Ctx<'_>) {
        self.timers.bump();
        self.shaking = None;
        self.painted = None;
        self.hand.reset();
        self.board.clear(self.engine.options().len());
        ctx.emit(Effect::RoundStarted {
            round: self.engine.round(),
            rounds: self.engine.rounds(),
        });

        let delay = match cue {
            Cue::Restart => Some(FINALE_PAUSE_MS),
            _ => self.rules.prompt_delay,
        };
        match delay {
            Some(delay) => self.timers.schedule(ctx.now, delay, QuizTimer::Prompt(cue)),
            None => ctx.say(G::prompt(self.engine.level(), cue, self.rules.voice)),
        }
    }

    fn resolve(&mut self, concept: Concept, shake: ShakeAt, ctx: &mut Ctx<'_>) {
        match self.engine.accept(concept) {
            AnswerOutcome::Correct => self.on_correct(concept, ctx),
            AnswerOutcome::Wrong(picked) => self.on_wrong(picked, shake, ctx),
            AnswerOutcome::Ignored => {}
        }
    }

    fn on_correct(&mut self, concept: Concept, ctx: &mut Ctx<'_>) {
        let cheer = pick(G::CHEERS, ctx.rng).copied().unwrap_or_default();
        ctx.emit(Effect::Solved {
            concept,
            score: self.engine.score(),
            cheer,
        });
        ctx.say(G::praise(self.engine.level(), cheer, self.rules.voice));

        if self.paint_rules().is_some() {
            self.painted = self.rules.brushes.get(self.brush).copied();
            self.board.clear(self.engine.options().len());
        }
        self.timers
            .schedule(ctx.now, self.rules.advance_delay, QuizTimer::Advance);
    }

    fn on_wrong(&mut self, picked: Concept, shake: ShakeAt, ctx: &mut Ctx<'_>) {
        if self.paint_rules().is_some()
            && let Some(option) = self.engine.options().position_of(picked)
        {
            self.board.clear_option(option);
        }

        self.shake_seq += 1;
        self.shaking = Some((shake, self.shake_seq));
        ctx.emit(Effect::Shake { target: shake });
        ctx.say(G::reject(self.engine.level(), picked, self.rules.voice));
        self.timers.schedule(
            ctx.now,
            self.rules.shake,
            QuizTimer::ClearShake(self.shake_seq),
        );
    }

    fn tap(&mut self, option: usize, ctx: &mut Ctx<'_>) -> Result<()> {
        let accepts_taps = match self.rules.interaction {
            Interaction::Tap => true,
            Interaction::Paint(_) => self.mode == InputMode::Click,
            Interaction::Paste => false,
        };
        if !accepts_taps || !self.engine.phase().is_playing() {
            return Ok(());
        }
        let entry = self.engine.options().get(option)?;
        self.resolve(entry.concept, ShakeAt::Option(entry.concept), ctx);
        Ok(())
    }

    fn paint(&mut self, option: usize, sample: PointerSample, ctx: &mut Ctx<'_>) -> Result<()> {
        let Some(paint) = self.paint_rules() else {
            return Ok(());
        };
        if self.mode != InputMode::Paint || !self.engine.phase().is_playing() || !sample.is_pressed()
        {
            return Ok(());
        }

        let entry = self.engine.options().get(option)?;
        let percent = self.board.paint(option, sample.pos, sample.extent)?;
        let threshold = if entry.is_correct {
            paint.accept
        } else {
            paint.reject
        };
        if threshold.is_met(percent) {
            log::debug!("{:?} painted to {:.1}%", entry.concept, percent);
            self.resolve(entry.concept, ShakeAt::Option(entry.concept), ctx);
        }
        Ok(())
    }

    fn toggle_mode(&mut self, ctx: &mut Ctx<'_>) {
        if self.paint_rules().is_none() {
            return;
        }
        self.mode = self.mode.toggled();
        self.board.clear(self.engine.options().len());
        ctx.emit(Effect::ModeChanged { mode: self.mode });
    }

    fn select_brush(&mut self, index: usize, ctx: &mut Ctx<'_>) -> Result<()> {
        let brush = self
            .rules
            .brushes
            .get(index)
            .copied()
            .ok_or(HubError::InvalidOption(index))?;
        self.brush = index;
        ctx.emit(Effect::BrushChanged { brush });
        Ok(())
    }

    fn pick_up(&mut self, option: usize, ctx: &mut Ctx<'_>) -> Result<()> {
        if !matches!(self.rules.interaction, Interaction::Paste) || !self.engine.phase().is_playing()
        {
            return Ok(());
        }
        let entry = self.engine.options().get(option)?;
        if let PickUpOutcome::Held(item) = self.hand.pick_up(entry.concept)
            && let Some(line) = G::picked_up(item, self.rules.voice)
        {
            ctx.say(line);
        }
        Ok(())
    }

    fn drop_on_target(&mut self, ctx: &mut Ctx<'_>) {
        if !self.engine.phase().is_playing() {
            return;
        }
        let Some(item) = self.hand.take() else {
            return;
        };
        if self.engine.level().answer() == item {
            self.hand.paste(item);
        }
        self.resolve(item, ShakeAt::Target, ctx);
    }

    fn fire(&mut self, timer: QuizTimer, ctx: &mut Ctx<'_>) {
        match timer {
            QuizTimer::Prompt(cue) => {
                ctx.say(G::prompt(self.engine.level(), cue, self.rules.voice));
            }
            QuizTimer::ClearShake(token) => {
                if self.shaking.is_some_and(|(_, current)| current == token) {
                    self.shaking = None;
                    ctx.emit(Effect::ShakeCleared);
                }
            }
            QuizTimer::Advance => match self.engine.advance(ctx.rng) {
                AdvanceOutcome::NextRound => self.setup_round(Cue::Next, ctx),
                AdvanceOutcome::Won => {
                    self.timers.bump();
                    self.shaking = None;
                    ctx.emit(Effect::Won {
                        score: self.engine.score(),
                    });
                    if let Some(line) = G::finale(self.rules.voice) {
                        ctx.say(line);
                    }
                }
                AdvanceOutcome::Restarted => {
                    if let Some(line) = G::finale(self.rules.voice) {
                        ctx.say(line);
                    }
                    ctx.emit(Effect::Restarted);
                    self.setup_round(Cue::Restart, ctx);
                }
                AdvanceOutcome::NoChange => {}
            },
        }
    }
}

impl<G: Lesson> Game for QuizGame<G> {
    fn id(&self) -> GameId {
        G::ID
    }

    fn phase(&self) -> Phase {
        self.engine.phase()
    }

    fn score(&self) -> u32 {
        self.engine.score()
    }

    fn handle(&mut self, event: GameEvent, ctx: &mut Ctx<'_>) -> Result<()> {
        match event {
            GameEvent::Start => match self.engine.phase() {
                Phase::NotStarted => self.start(Cue::Start, ctx),
                Phase::Won => self.start(Cue::Again, ctx),
                _ => {}
            },
            GameEvent::Tap { option } => self.tap(option, ctx)?,
            GameEvent::Paint { option, sample } => self.paint(option, sample, ctx)?,
            GameEvent::ToggleMode => self.toggle_mode(ctx),
            GameEvent::Brush { index } => self.select_brush(index, ctx)?,
            GameEvent::PickUp { option } => self.pick_up(option, ctx)?,
            GameEvent::Cursor { pos } => self.hand.track(pos),
            GameEvent::Drop => self.drop_on_target(ctx),
            GameEvent::Repeat => {
                if matches!(self.engine.phase(), Phase::Playing | Phase::Success) {
                    ctx.say(G::repeat(self.engine.level(), self.rules.voice));
                }
            }
            GameEvent::Mic => {}
        }
        Ok(())
    }

    fn tick(&mut self, ctx: &mut Ctx<'_>) {
        while let Some(timer) = self.timers.pop_due(ctx.now) {
            self.fire(timer, ctx);
        }
    }

    fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    fn view(&self) -> GameView {
        let phase = self.engine.phase();
        let mut view = GameView::new(G::ID, phase);
        if phase == Phase::NotStarted {
            return view;
        }

        let level = self.engine.level();
        view.round = self.engine.round();
        view.rounds = self.engine.rounds();
        view.score = self.engine.score();
        view.picture = G::picture(level);
        view.options = self
            .engine
            .options()
            .iter()
            .enumerate()
            .map(|(index, entry)| OptionView {
                concept: entry.concept,
                shaking: self.shaking() == Some(ShakeAt::Option(entry.concept)),
                coverage: self.board.percent(index),
                resolved: entry.is_correct && phase != Phase::Playing,
            })
            .collect();
        view.target_shaking = self.shaking() == Some(ShakeAt::Target);

        match self.rules.interaction {
            Interaction::Paint(_) => {
                view.mode = Some(self.mode);
                view.brush = self.rules.brushes.get(self.brush).copied();
                view.painted = self.painted;
            }
            Interaction::Paste => {
                view.held = self.hand.held();
                view.pasted = self.hand.pasted();
            }
            Interaction::Tap => {}
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::said;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const BOX: Extent = Extent::new(100.0, 100.0);

    struct Harness<G: Lesson> {
        game: QuizGame<G>,
        rng: SmallRng,
        now: Millis,
    }

    impl<G: Lesson> Harness<G> {
        fn new() -> Self {
            Self::with_rules(G::rules())
        }

        fn with_rules(rules: GameRules) -> Self {
            Self {
                game: QuizGame::new(rules).unwrap(),
                rng: SmallRng::seed_from_u64(42),
                now: 0,
            }
        }

        fn send(&mut self, event: GameEvent) -> Vec<Effect> {
            let mut out = Vec::new();
            let mut ctx = Ctx::new(self.now, &mut self.rng, &mut out);
            self.game.handle(event, &mut ctx).unwrap();
            out
        }

        fn advance_to(&mut self, now: Millis) -> Vec<Effect> {
            self.now = now;
            let mut out = Vec::new();
            let mut ctx = Ctx::new(self.now, &mut self.rng, &mut out);
            self.game.tick(&mut ctx);
            out
        }

        fn wait(&mut self, delay: Millis) -> Vec<Effect> {
            self.advance_to(self.now + delay)
        }

        fn correct(&self) -> usize {
            self.game.engine().options().correct_index().unwrap()
        }

        fn wrong(&self) -> usize {
            self.game
                .engine()
                .options()
                .iter()
                .position(|entry| !entry.is_correct)
                .unwrap()
        }

        fn scribble(&mut self, option: usize, steps: usize) -> Vec<Effect> {
            let mut effects = Vec::new();
            'rows: for row in 0..20 {
                for col in 0..20 {
                    if row * 20 + col >= steps {
                        break 'rows;
                    }
                    let pos = Point::new(col as f32 * 5.0 + 2.0, row as f32 * 5.0 + 2.0);
                    let sample = PointerSample::mouse(pos, BOX, PointerButtons::PRIMARY);
                    effects.extend(self.send(GameEvent::Paint { option, sample }));
                    if self.game.phase() != Phase::Playing || self.game.shaking().is_some() {
                        break 'rows;
                    }
                }
            }
            effects
        }
    }

    #[test]
    fn counting_session_of_ten_rounds_is_won_with_ten_stars() {
        let mut h = Harness::<Counting>::new();
        h.send(GameEvent::Start);
        assert_eq!(h.game.engine().rounds(), 10);

        for round in 0..10 {
            assert_eq!(h.game.engine().round(), round);
            let effects = h.send(GameEvent::Tap { option: h.correct() });
            assert!(effects.iter().any(|e| matches!(e, Effect::Solved { .. })));
            h.wait(h.game.rules().advance_delay);
        }

        assert_eq!(h.game.phase(), Phase::Won);
        assert_eq!(h.game.score(), 10);
    }

    #[test]
    fn first_prompt_waits_for_the_prompt_delay() {
        let mut h = Harness::<ShapeDetective>::new();

        let effects = h.send(GameEvent::Start);
        assert!(said(&effects).is_empty());
        assert_eq!(h.game.next_deadline(), Some(500));

        let effects = h.wait(500);
        assert_eq!(said(&effects).len(), 1);
        assert!(said(&effects)[0].starts_with("What shape is the"));
    }

    #[test]
    fn wrong_tap_shakes_then_clears() {
        let mut h = Harness::<ShapeDetective>::new();
        h.send(GameEvent::Start);

        let wrong = h.wrong();
        let effects = h.send(GameEvent::Tap { option: wrong });
        assert!(matches!(effects[0], Effect::Shake { target: ShakeAt::Option(_) }));
        assert_eq!(h.game.phase(), Phase::Playing);
        assert_eq!(h.game.score(), 0);
        assert!(h.game.view().options[wrong].shaking);

        let effects = h.wait(500);
        assert!(effects.contains(&Effect::ShakeCleared));
        assert_eq!(h.game.shaking(), None);
    }

    #[test]
    fn later_shake_is_not_cleared_by_an_earlier_timer() {
        let mut h = Harness::<ShapeDetective>::new();
        h.send(GameEvent::Start);
        let wrong = h.wrong();

        h.send(GameEvent::Tap { option: wrong });
        h.now = 300;
        h.send(GameEvent::Tap { option: wrong });

        let effects = h.advance_to(500);
        assert!(!effects.contains(&Effect::ShakeCleared));
        assert!(h.game.shaking().is_some());

        let effects = h.advance_to(800);
        assert!(effects.contains(&Effect::ShakeCleared));
    }

    #[test]
    fn painting_a_wrong_option_rejects_before_the_accept_bound() {
        let mut h = Harness::<VocabularyPaint>::new();
        h.send(GameEvent::Start);
        let wrong = h.wrong();

        let effects = h.scribble(wrong, 400);

        assert!(
            effects
                .iter()
                .any(|e| matches!(e, Effect::Shake { .. }))
        );
        assert_eq!(h.game.score(), 0);
        assert_eq!(h.game.phase(), Phase::Playing);
        // The rejected option starts over from a blank grid.
        assert_eq!(h.game.board().percent(wrong), 0.0);
        assert!(h.game.board().markers(wrong).is_empty());
    }

    #[test]
    fn painting_the_answer_resolves_it() {
        let mut h = Harness::<SoundColoring>::new();
        h.send(GameEvent::Start);
        h.send(GameEvent::Brush { index: 1 });
        let correct = h.correct();

        let effects = h.scribble(correct, 400);

        assert!(effects.iter().any(|e| matches!(e, Effect::Solved { .. })));
        assert_eq!(h.game.phase(), Phase::Success);
        assert_eq!(h.game.view().painted, Some("blue"));
        assert!(h.game.board().is_blank());
    }

    #[test]
    fn released_mouse_does_not_paint() {
        let mut h = Harness::<VocabularyPaint>::new();
        h.send(GameEvent::Start);

        let sample = PointerSample::mouse(Point::new(50.0, 50.0), BOX, PointerButtons::empty());
        h.send(GameEvent::Paint { option: 0, sample });

        assert!(h.game.board().is_blank());
    }

    #[test]
    fn toggling_mode_clears_all_coverage() {
        let mut h = Harness::<VocabularyPaint>::new();
        h.send(GameEvent::Start);
        let correct = h.correct();
        h.scribble(correct, 3);
        assert!(!h.game.board().is_blank());

        let effects = h.send(GameEvent::ToggleMode);

        assert_eq!(
            effects,
            vec![Effect::ModeChanged {
                mode: InputMode::Click
            }]
        );
        assert!(h.game.board().is_blank());
    }

    #[test]
    fn taps_only_count_in_click_mode() {
        let mut h = Harness::<SoundColoring>::new();
        h.send(GameEvent::Start);
        let correct = h.correct();

        assert!(h.send(GameEvent::Tap { option: correct }).is_empty());

        h.send(GameEvent::ToggleMode);
        h.send(GameEvent::Tap { option: correct });
        assert_eq!(h.game.phase(), Phase::Success);
    }

    #[test]
    fn sound_coloring_speaks_its_opening_line_right_away() {
        let mut h = Harness::<SoundColoring>::new();

        let lines = said(&h.send(GameEvent::Start));

        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Let's color! What is the first sound of"));
    }

    #[test]
    fn picking_up_twice_holds_nothing() {
        let mut h = Harness::<PhonicsScissor>::new();
        h.send(GameEvent::Start);

        let lines = said(&h.send(GameEvent::PickUp { option: 0 }));
        assert_eq!(lines.len(), 1);
        h.send(GameEvent::PickUp { option: 0 });

        assert_eq!(h.game.hand().held(), None);
    }

    #[test]
    fn wrong_paste_shakes_the_target_and_releases() {
        let mut h = Harness::<AnimalHabitat>::new();
        h.send(GameEvent::Start);
        let wrong = h.wrong();

        h.send(GameEvent::PickUp { option: wrong });
        let effects = h.send(GameEvent::Drop);

        assert!(effects.contains(&Effect::Shake {
            target: ShakeAt::Target
        }));
        assert_eq!(h.game.hand().held(), None);
        assert_eq!(h.game.hand().pasted(), None);
        assert!(h.game.view().target_shaking);
    }

    #[test]
    fn correct_paste_sticks_and_locks_the_hand() {
        let mut h = Harness::<ColorMatch>::new();
        h.send(GameEvent::Start);
        let correct = h.correct();
        let concept = h.game.engine().options().get(correct).unwrap().concept;

        h.send(GameEvent::PickUp { option: correct });
        h.send(GameEvent::Drop);

        assert_eq!(h.game.hand().pasted(), Some(concept));
        assert!(h.send(GameEvent::PickUp { option: 0 }).is_empty());
        assert_eq!(h.game.score(), 1);
    }

    #[test]
    fn drop_with_empty_hand_is_a_noop() {
        let mut h = Harness::<PhonicsScissor>::new();
        h.send(GameEvent::Start);

        assert!(h.send(GameEvent::Drop).is_empty());
        assert_eq!(h.game.shaking(), None);
    }

    #[test]
    fn restart_games_loop_and_announce_the_finale() {
        let mut h = Harness::<AnimalGrowth>::new();
        h.send(GameEvent::Start);
        let rounds = h.game.engine().rounds();

        let mut last = Vec::new();
        for _ in 0..rounds {
            h.send(GameEvent::Tap { option: h.correct() });
            last = h.wait(h.game.rules().advance_delay);
        }

        assert!(last.contains(&Effect::Restarted));
        assert!(said(&last).contains(&"You matched all the families!".to_owned()));
        assert_eq!(h.game.phase(), Phase::Playing);
        assert_eq!(h.game.score(), 0);

        let prompt = h.wait(FINALE_PAUSE_MS);
        assert_eq!(said(&prompt).len(), 1);
    }

    #[test]
    fn advance_fires_once_per_solved_round() {
        let mut h = Harness::<Counting>::new();
        h.send(GameEvent::Start);

        h.send(GameEvent::Tap { option: h.correct() });
        let effects = h.wait(2500);
        assert!(effects.contains(&Effect::RoundStarted {
            round: 1,
            rounds: 10
        }));

        let effects = h.wait(10_000);
        assert!(
            !effects
                .iter()
                .any(|e| matches!(e, Effect::RoundStarted { .. }))
        );
        assert_eq!(h.game.engine().round(), 1);
        assert_eq!(h.game.phase(), Phase::Playing);
    }

    #[test]
    fn play_again_after_winning_resets_the_score() {
        let mut rules = Counting::rules();
        rules.session.rounds = Some(1);
        let mut h = Harness::<Counting>::with_rules(rules);
        h.send(GameEvent::Start);

        h.send(GameEvent::Tap { option: h.correct() });
        let effects = h.wait(2500);
        assert!(effects.contains(&Effect::Won { score: 1 }));
        assert!(said(&effects).contains(&"You are a counting champion!".to_owned()));
        assert_eq!(h.game.next_deadline(), None);

        h.send(GameEvent::Start);
        assert_eq!(h.game.phase(), Phase::Playing);
        assert_eq!(h.game.score(), 0);
    }

    #[test]
    fn out_of_range_tap_is_an_error() {
        let mut h = Harness::<LetterMatch>::new();
        h.send(GameEvent::Start);

        let mut out = Vec::new();
        let mut ctx = Ctx::new(0, &mut h.rng, &mut out);
        assert_eq!(
            h.game.handle(GameEvent::Tap { option: 9 }, &mut ctx),
            Err(HubError::InvalidOption(9))
        );
    }

    #[test]
    fn unknown_brush_is_an_error() {
        let mut h = Harness::<VocabularyPaint>::new();
        let mut out = Vec::new();
        let mut ctx = Ctx::new(0, &mut h.rng, &mut out);
        assert_eq!(
            h.game.handle(GameEvent::Brush { index: 7 }, &mut ctx),
            Err(HubError::InvalidOption(7))
        );
    }
}
