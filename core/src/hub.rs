//! The menu/router: owns the active game and the speech and music outputs.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::*;

/// Snapshot of the whole hub for a host to render.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HubView {
    pub screen: Screen,
    pub sound_on: bool,
    pub music_on: bool,
    pub menu: Menu,
    pub page_count: usize,
    pub cards: &'static [GameDescriptor],
    pub game: Option<GameView>,
}

pub struct Hub<S, A> {
    config: HubConfig,
    rng: SmallRng,
    speaker: Speaker<S>,
    music: MusicDirector<A>,
    menu: Menu,
    screen: Screen,
    game: Option<Box<dyn Game>>,
}

impl<S: SpeechSynth, A: AudioSink> Hub<S, A> {
    /// Opens on the menu and tries to autoplay the menu track.
    pub fn new(config: HubConfig, synth: S, audio: A, seed: u64) -> Self {
        let mut music = MusicDirector::new(audio, config.music.enabled, config.music.volume);
        music.start();
        Self {
            rng: SmallRng::seed_from_u64(seed),
            speaker: Speaker::new(synth, config.speech.enabled),
            music,
            menu: Menu::new(config.menu.page_size),
            screen: Screen::Menu,
            game: None,
            config,
        }
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn speaker(&self) -> &Speaker<S> {
        &self.speaker
    }

    pub fn music(&self) -> &MusicDirector<A> {
        &self.music
    }

    pub fn game(&self) -> Option<&dyn Game> {
        self.game.as_deref()
    }

    /// Opens the game behind a menu key such as `"counting"`.
    pub fn select(&mut self, key: &str) -> Result<Vec<Effect>> {
        let id = GameId::from_key(key)?;
        self.select_game(id)
    }

    pub fn select_game(&mut self, id: GameId) -> Result<Vec<Effect>> {
        let game = launch(id, &self.config)?;
        log::info!("opening {}", id.descriptor().title);
        self.music.on_user_interaction();
        self.game = Some(game);

        let mut out = self.show(Screen::Game(id));
        if id == GameId::Thai && !self.speaker.has_voice_for(THAI_LOCALE) {
            log::warn!("no Thai voice installed");
            out.push(Effect::Advisory {
                message: NO_THAI_VOICE.to_owned(),
            });
        }
        Ok(out)
    }

    /// Leaves the active game. Its pending timers go with it.
    pub fn go_home(&mut self) -> Vec<Effect> {
        if let Some(game) = self.game.take() {
            log::debug!("leaving {} with score {}", game.id(), game.score());
        }
        self.show(Screen::Menu)
    }

    fn show(&mut self, screen: Screen) -> Vec<Effect> {
        self.screen = screen;
        self.music.on_screen(screen);
        vec![Effect::ScreenChanged { screen }]
    }

    /// Routes an input to the active game and voices the lines it produced.
    pub fn handle(&mut self, event: GameEvent, now: Millis) -> Result<Vec<Effect>> {
        if event.is_user_gesture() {
            self.music.on_user_interaction();
        }
        let game = self.game.as_mut().ok_or(HubError::NoActiveGame)?;

        let mut out = Vec::new();
        let mut ctx = Ctx::new(now, &mut self.rng, &mut out);
        game.handle(event, &mut ctx)?;
        self.voice(&out);
        Ok(out)
    }

    /// Fires every timer of the active game due at `now`.
    pub fn tick(&mut self, now: Millis) -> Vec<Effect> {
        let Some(game) = self.game.as_mut() else {
            return Vec::new();
        };
        let mut out = Vec::new();
        let mut ctx = Ctx::new(now, &mut self.rng, &mut out);
        game.tick(&mut ctx);
        self.voice(&out);
        out
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.game.as_ref().and_then(|game| game.next_deadline())
    }

    fn voice(&mut self, effects: &[Effect]) {
        for effect in effects {
            if let Effect::Say { line } = effect {
                let outcome = self.speaker.say(line);
                log::trace!("{:?}: {}", outcome, line.text());
            }
        }
    }

    /// Mutes or unmutes every game's speech. Returns whether sound is on.
    pub fn toggle_sound(&mut self) -> bool {
        let on = self.speaker.toggle();
        log::debug!("sound {}", if on { "on" } else { "off" });
        on
    }

    pub fn toggle_music(&mut self) -> bool {
        self.music.toggle()
    }

    pub fn view(&self) -> HubView {
        HubView {
            screen: self.screen,
            sound_on: self.speaker.is_enabled(),
            music_on: self.music.is_enabled(),
            menu: self.menu,
            page_count: self.menu.page_count(),
            cards: self.menu.visible(),
            game: self.game.as_ref().map(|game| game.view()),
        }
    }
}
