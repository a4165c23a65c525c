//! Hub settings loaded from TOML, plus the resolved rules a game plays by.
//!
//! Every field is optional; an empty file yields [`HubConfig::default`].
//!
//! ```toml
//! [speech]
//! enabled = true
//!
//! [music]
//! volume = 0.1
//!
//! [games.counting]
//! rounds = 5
//! advance_delay_ms = 1500
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::*;

/// How long a wrong option keeps shaking.
pub const DEFAULT_SHAKE_MS: Millis = 500;

/// Pause between an automatic restart's finale and the new session's first prompt.
pub const FINALE_PAUSE_MS: Millis = 2500;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub enabled: bool,
    /// Replaces every game's speaking rate when set.
    pub rate: Option<f32>,
    /// Replaces every game's pitch when set.
    pub pitch: Option<f32>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: None,
            pitch: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicConfig {
    pub enabled: bool,
    pub volume: f32,
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: DEFAULT_VOLUME,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub page_size: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Replaces the delay before a round's first prompt in games that wait.
    pub prompt_delay_ms: Option<Millis>,
    pub shake_ms: Millis,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            prompt_delay_ms: None,
            shake_ms: DEFAULT_SHAKE_MS,
        }
    }
}

/// Per-game tuning, keyed by game key in `[games.<key>]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOverrides {
    pub rounds: Option<usize>,
    pub advance_delay_ms: Option<Millis>,
    pub grid_size: Option<Coord>,
    pub accept_percent: Option<f32>,
    pub reject_percent: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    pub speech: SpeechConfig,
    pub music: MusicConfig,
    pub menu: MenuConfig,
    pub timing: TimingConfig,
    pub games: BTreeMap<String, GameOverrides>,
}

fn invalid(message: impl Into<String>) -> HubError {
    HubError::InvalidConfig(message.into())
}

fn check_percent(key: &str, name: &str, value: Option<f32>) -> Result<()> {
    match value {
        Some(percent) if !(0.0..=100.0).contains(&percent) => Err(invalid(format!(
            "games.{key}.{name} must be within 0..=100, got {percent}"
        ))),
        _ => Ok(()),
    }
}

impl HubConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|err| invalid(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.music.volume) {
            return Err(invalid(format!(
                "music.volume must be within 0..=1, got {}",
                self.music.volume
            )));
        }
        if self.menu.page_size == 0 {
            return Err(invalid("menu.page_size must be positive"));
        }
        for (name, value) in [("rate", self.speech.rate), ("pitch", self.speech.pitch)] {
            if value.is_some_and(|value| !(value > 0.0 && value.is_finite())) {
                return Err(invalid(format!("speech.{name} must be positive")));
            }
        }

        for (key, game) in &self.games {
            GameId::from_key(key)?;
            if game.rounds == Some(0) {
                return Err(invalid(format!("games.{key}.rounds must be positive")));
            }
            if game.grid_size == Some(0) {
                return Err(invalid(format!("games.{key}.grid_size must be positive")));
            }
            check_percent(key, "accept_percent", game.accept_percent)?;
            check_percent(key, "reject_percent", game.reject_percent)?;
        }
        Ok(())
    }

    pub fn overrides(&self, id: GameId) -> Option<&GameOverrides> {
        self.games.get(id.key())
    }

    /// Applies the file's settings on top of a game's built-in rules.
    pub fn resolve(&self, id: GameId, mut rules: GameRules) -> GameRules {
        if let Some(rate) = self.speech.rate {
            rules.voice.rate = rate;
        }
        if let Some(pitch) = self.speech.pitch {
            rules.voice.pitch = pitch;
        }
        if let (Some(delay), Some(_)) = (self.timing.prompt_delay_ms, rules.prompt_delay) {
            rules.prompt_delay = Some(delay);
        }
        rules.shake = self.timing.shake_ms;

        let Some(game) = self.overrides(id) else {
            return rules;
        };
        if let Some(rounds) = game.rounds {
            rules.session.rounds = Some(rounds);
        }
        if let Some(delay) = game.advance_delay_ms {
            rules.advance_delay = delay;
        }
        if let Interaction::Paint(paint) = &mut rules.interaction {
            if let Some(grid) = game.grid_size {
                paint.grid = grid;
            }
            if let Some(bound) = game.accept_percent {
                paint.accept = paint.accept.with_bound(bound);
            }
            if let Some(bound) = game.reject_percent {
                paint.reject = paint.reject.with_bound(bound);
            }
        }
        rules
    }
}

/// How the child answers a round.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Interaction {
    Tap,
    Paint(PaintRules),
    Paste,
}

/// Everything a running game needs to know about pacing and input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameRules {
    pub session: SessionRules,
    pub interaction: Interaction,
    pub voice: Voice,
    /// Delay before a round's prompt, `None` to speak it while the round is set up.
    pub prompt_delay: Option<Millis>,
    pub advance_delay: Millis,
    pub shake: Millis,
    /// Brush colours offered by paint games.
    pub brushes: &'static [&'static str],
}

impl GameRules {
    pub const fn new(session: SessionRules, interaction: Interaction) -> Self {
        Self {
            session,
            interaction,
            voice: Voice::new(0.9, 1.1),
            prompt_delay: Some(500),
            advance_delay: 2500,
            shake: DEFAULT_SHAKE_MS,
            brushes: &[],
        }
    }

    pub const fn voice(mut self, voice: Voice) -> Self {
        self.voice = voice;
        self
    }

    pub const fn prompt_delay(mut self, delay: Option<Millis>) -> Self {
        self.prompt_delay = delay;
        self
    }

    pub const fn advance_delay(mut self, delay: Millis) -> Self {
        self.advance_delay = delay;
        self
    }

    pub const fn brushes(mut self, brushes: &'static [&'static str]) -> Self {
        self.brushes = brushes;
        self
    }
}
