//! Terminal front-end for the learning hub.
//!
//! `learnhub list` prints the menu; `learnhub play <game>` opens a game and
//! reads commands from stdin (`help` lists them). Time is logical: after
//! every command the clock jumps through all pending timers.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use learnhub_core::{GameId, Hub, HubConfig, Menu};
use tracing_subscriber::EnvFilter;

use console::{ConsoleAudio, ConsoleSynth};
use repl::Session;

mod console;
mod repl;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with speech turned off
    #[arg(long)]
    mute: bool,

    /// Print effects as JSON lines
    #[arg(long)]
    json: bool,

    /// Language tags of the voices to pretend are installed
    #[arg(long, value_delimiter = ',', default_value = "en-US")]
    voices: Vec<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the game menu
    List,
    /// Open a game by its menu key
    Play { game: GameId },
}

fn init_logging(verbose: &clap_verbosity_flag::Verbosity) {
    // LEARNHUB_LOG takes full filter directives and wins over -v/-q.
    let filter = EnvFilter::try_from_env("LEARNHUB_LOG")
        .unwrap_or_else(|_| EnvFilter::default().add_directive(verbose.tracing_level_filter().into()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(args: &Args) -> Result<HubConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Could not read {}", path.display()))?;
            HubConfig::from_toml_str(&source)
                .with_context(|| format!("Invalid settings in {}", path.display()))?
        }
        None => HubConfig::default(),
    };
    if args.mute {
        config.speech.enabled = false;
    }
    Ok(config)
}

fn print_menu(page_size: usize) {
    let mut menu = Menu::new(page_size);
    loop {
        println!("-- page {} of {} --", menu.page() + 1, menu.page_count());
        for card in menu.visible() {
            println!(
                "  {:<11} {:<17} {}",
                card.id.key(),
                card.title,
                card.description
            );
        }
        if !menu.next() {
            break;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let config = load_config(&args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, "starting hub");

    let game = match args.command {
        None | Some(Command::List) => {
            print_menu(config.menu.page_size);
            return Ok(());
        }
        Some(Command::Play { game }) => game,
    };

    let synth = ConsoleSynth::new(&args.voices, !args.json);
    let hub = Hub::new(config, synth, ConsoleAudio::default(), seed);
    let mut session = Session::new(hub, args.json);
    session.open(game)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        if !session.run(&line?)? {
            break;
        }
    }
    Ok(())
}
