use anyhow::Result;
use clap::{Parser, Subcommand};
use learnhub_core::{
    Effect, Extent, GameEvent, GameId, Hub, HubError, Millis, Phase, Point, PointerButtons,
    PointerSample, Screen,
};

use crate::console::{ConsoleAudio, ConsoleSynth};

/// Logical time that passes between two typed commands.
const STEP_MS: Millis = 100;

/// Size every option card pretends to have when painting.
const CARD: Extent = Extent::new(100.0, 100.0);

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Input {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Press the start / play again button
    Start,
    /// Tap an option card
    Tap { option: usize },
    /// Scribble over an option card until the game decides
    Paint { option: usize },
    /// Pick up (or put back) an item in cut-and-paste games
    Pick { option: usize },
    /// Drop the held item on the picture
    Drop,
    /// Switch between painting and clicking
    Mode,
    /// Choose a brush colour
    Brush { index: usize },
    /// Press the microphone
    Mic,
    /// Hear the question again
    Repeat,
    /// Toggle speech
    Sound,
    /// Toggle background music
    Music,
    /// Show the current round
    Show,
    /// Open another game
    Open { game: GameId },
    /// Back to the menu
    Home,
    /// Leave
    Quit,
}

pub struct Session {
    hub: Hub<ConsoleSynth, ConsoleAudio>,
    json: bool,
    now: Millis,
}

impl Session {
    pub fn new(hub: Hub<ConsoleSynth, ConsoleAudio>, json: bool) -> Self {
        Self { hub, json, now: 0 }
    }

    pub fn open(&mut self, game: GameId) -> Result<()> {
        let effects = self.hub.select_game(game)?;
        self.print(&effects)?;
        Ok(())
    }

    /// Runs one typed command. Returns `false` once the user quits.
    pub fn run(&mut self, line: &str) -> Result<bool> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(true);
        }
        let action = match Input::try_parse_from(words) {
            Ok(input) => input.action,
            Err(err) => {
                err.print()?;
                return Ok(true);
            }
        };

        self.now += STEP_MS;
        let result = match action {
            Action::Start => self.send(GameEvent::Start),
            Action::Tap { option } => self.send(GameEvent::Tap { option }),
            Action::Paint { option } => self.paint(option),
            Action::Pick { option } => self.send(GameEvent::PickUp { option }),
            Action::Drop => self.send(GameEvent::Drop),
            Action::Mode => self.send(GameEvent::ToggleMode),
            Action::Brush { index } => self.send(GameEvent::Brush { index }),
            Action::Mic => self.send(GameEvent::Mic),
            Action::Repeat => self.send(GameEvent::Repeat),
            Action::Sound => {
                let on = self.hub.toggle_sound();
                println!("sound {}", if on { "on" } else { "off" });
                Ok(())
            }
            Action::Music => {
                let on = self.hub.toggle_music();
                println!("music {}", if on { "on" } else { "off" });
                Ok(())
            }
            Action::Show => self.show(),
            Action::Open { game } => self.hub.select_game(game).and_then(|effects| {
                self.print(&effects)?;
                Ok(())
            }),
            Action::Home => {
                let effects = self.hub.go_home();
                self.print(&effects)?;
                return Ok(true);
            }
            Action::Quit => return Ok(false),
        };

        match result {
            Ok(()) => self.settle()?,
            Err(err) => eprintln!("{err}"),
        }
        Ok(true)
    }

    fn send(&mut self, event: GameEvent) -> learnhub_core::Result<()> {
        let effects = self.hub.handle(event, self.now)?;
        self.print(&effects)
    }

    /// Sweeps the card row by row with the primary button held.
    fn paint(&mut self, option: usize) -> learnhub_core::Result<()> {
        let round = self.round();
        for row in 0..20 {
            for col in 0..20 {
                let pos = Point::new(col as f32 * 5.0 + 2.5, row as f32 * 5.0 + 2.5);
                let sample = PointerSample::mouse(pos, CARD, PointerButtons::PRIMARY);
                self.send(GameEvent::Paint { option, sample })?;
                if self.round() != round {
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    /// Phase and shake state, to notice when painting was decided.
    fn round(&self) -> Option<(Phase, bool)> {
        let view = self.hub.view().game?;
        let shaking = view.options.iter().any(|option| option.shaking);
        Some((view.phase, shaking))
    }

    /// Jumps the clock through every pending timer.
    fn settle(&mut self) -> Result<()> {
        while let Some(deadline) = self.hub.next_deadline() {
            self.now = self.now.max(deadline);
            let effects = self.hub.tick(self.now);
            self.print(&effects)?;
        }
        Ok(())
    }

    fn show(&self) -> learnhub_core::Result<()> {
        let view = self.hub.view();
        if self.json {
            println!("{}", to_json(&view));
            return Ok(());
        }
        let Some(game) = view.game else {
            return Err(HubError::NoActiveGame);
        };
        println!(
            "{} round {}/{} stars {} [{:?}] {}",
            game.game,
            game.round + 1,
            game.rounds,
            game.score,
            game.phase,
            game.picture
        );
        for (index, option) in game.options.iter().enumerate() {
            let mark = if option.resolved { "*" } else { " " };
            println!(
                "  {index}{mark} {} {:.0}%",
                option.concept, option.coverage
            );
        }
        if let Some(mode) = game.mode {
            println!("  mode {:?} brush {}", mode, game.brush.unwrap_or("-"));
        }
        if let Some(held) = game.held {
            println!("  holding {held}");
        }
        Ok(())
    }

    fn print(&self, effects: &[Effect]) -> learnhub_core::Result<()> {
        for effect in effects {
            if self.json {
                println!("{}", to_json(effect));
                continue;
            }
            match effect {
                // The console synthesizer prints what is actually spoken.
                Effect::Say { .. } => {}
                Effect::Shake { target } => println!("  \u{2717} shake {target:?}"),
                Effect::ShakeCleared => {}
                Effect::RoundStarted { round, rounds } => {
                    println!("-- round {} of {} --", round + 1, rounds);
                    self.show()?;
                }
                Effect::Solved {
                    concept,
                    score,
                    cheer,
                } => println!("  \u{2605} {concept}! {cheer} ({score} stars)"),
                Effect::Listening => println!("  listening..."),
                Effect::Revealed { concept, score } => {
                    println!("  \u{2605} {concept} ({score} stars)")
                }
                Effect::Won { score } => println!("== won with {score} stars, `start` to play again =="),
                Effect::Restarted => println!("== starting over =="),
                Effect::ModeChanged { mode } => println!("  mode {mode:?}"),
                Effect::BrushChanged { brush } => println!("  brush {brush}"),
                Effect::Advisory { message } => println!("! {message}"),
                Effect::ScreenChanged { screen } => match screen {
                    Screen::Menu => println!("back at the menu, `open <game>` to play"),
                    Screen::Game(id) => {
                        println!("== {} ==", id.descriptor().title);
                        println!("{}; type `start` to begin", id.descriptor().description);
                    }
                },
            }
        }
        Ok(())
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| format!("{{\"error\":\"{err}\"}}"))
}
