//! Game logic for a children's learning hub: a menu of twelve mini-games
//! with spoken prompts, paint-to-select and cut-and-paste input, and
//! background music.
//!
//! Nothing here draws, speaks or plays audio directly. A host feeds
//! [`GameEvent`]s and clock ticks into a [`Hub`], renders its [`HubView`]
//! and acts on the returned [`Effect`]s. Speech and music go through the
//! [`SpeechSynth`] and [`AudioSink`] traits.

pub use config::*;
pub use coverage::*;
pub use effect::*;
pub use engine::*;
pub use error::*;
pub use games::*;
pub use generator::*;
pub use holding::*;
pub use hub::*;
pub use menu::*;
pub use music::*;
pub use speech::*;
pub use timer::*;
pub use types::*;

mod config;
mod coverage;
mod effect;
mod engine;
mod error;
mod games;
mod generator;
mod holding;
mod hub;
mod menu;
mod music;
mod speech;
mod timer;
mod types;

#[cfg(test)]
mod testutil;
