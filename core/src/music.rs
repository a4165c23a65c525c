use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::*;

pub const DEFAULT_VOLUME: f32 = 0.15;

/// A looping background track.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    Joy,
    November,
    Cloud,
    SweetTalks,
    ThatDay,
    Creamy,
}

impl Track {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::November => "november",
            Self::Cloud => "cloud",
            Self::SweetTalks => "sweet_talks",
            Self::ThatDay => "that_day",
            Self::Creamy => "creamy",
        }
    }

    pub fn path(self) -> String {
        format!("/music/{}.mp3", self.name())
    }
}

/// What the hub is currently showing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", content = "game", rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Menu,
    Game(GameId),
}

pub const fn track_for(screen: Screen) -> Track {
    match screen {
        Screen::Menu => Track::Joy,
        Screen::Game(id) => match id {
            GameId::Match | GameId::Counting | GameId::Social => Track::November,
            GameId::Color | GameId::Shapes | GameId::Thai => Track::Cloud,
            GameId::Vocab | GameId::ColorPaste => Track::SweetTalks,
            GameId::Phonics | GameId::Habitat => Track::ThatDay,
            GameId::Scissor | GameId::Growth => Track::Creamy,
        },
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("Playback blocked until the user interacts")]
    AutoplayBlocked,
    #[error("Audio output is unavailable")]
    Unavailable,
}

/// Platform audio element playing one looping track at a time.
pub trait AudioSink {
    fn load(&mut self, track: Track);
    fn play(&mut self) -> core::result::Result<(), PlaybackError>;
    fn pause(&mut self);
    fn set_volume(&mut self, volume: f32);
}

/// Background music: one track per screen, switched only when the track changes.
pub struct MusicDirector<A> {
    sink: A,
    track: Option<Track>,
    enabled: bool,
    volume: f32,
    retry_on_interaction: bool,
}

impl<A: AudioSink> MusicDirector<A> {
    pub fn new(sink: A, enabled: bool, volume: f32) -> Self {
        Self {
            sink,
            track: None,
            enabled,
            volume: volume.clamp(0.0, 1.0),
            retry_on_interaction: false,
        }
    }

    pub fn sink(&self) -> &A {
        &self.sink
    }

    pub fn track(&self) -> Option<Track> {
        self.track
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_waiting_for_interaction(&self) -> bool {
        self.retry_on_interaction
    }

    /// Loads the menu track and tries to autoplay it.
    pub fn start(&mut self) {
        self.sink.set_volume(self.volume);
        let track = track_for(Screen::Menu);
        self.sink.load(track);
        self.track = Some(track);
        if !self.enabled {
            return;
        }
        match self.sink.play() {
            Ok(()) => log::debug!("autoplay started {}", track.name()),
            Err(PlaybackError::AutoplayBlocked) => {
                log::debug!("autoplay blocked, waiting for interaction");
                self.retry_on_interaction = true;
            }
            Err(err) => log::warn!("music unavailable: {}", err),
        }
    }

    /// Follows a screen change. Returns whether a new track was loaded.
    pub fn on_screen(&mut self, screen: Screen) -> bool {
        let track = track_for(screen);
        if self.track == Some(track) {
            return false;
        }
        log::debug!("switching music to {}", track.name());
        self.sink.load(track);
        self.track = Some(track);
        if self.enabled
            && let Err(err) = self.sink.play()
        {
            log::debug!("track switch play failed: {}", err);
        }
        true
    }

    /// First click, key or touch after a blocked autoplay retries playback once.
    pub fn on_user_interaction(&mut self) {
        if !self.retry_on_interaction {
            return;
        }
        self.retry_on_interaction = false;
        if !self.enabled {
            return;
        }
        match self.sink.play() {
            Ok(()) => log::debug!("music started after interaction"),
            Err(err) => log::warn!("music still failed after interaction: {}", err),
        }
    }

    /// Pauses or resumes, returning the new state.
    pub fn toggle(&mut self) -> bool {
        if self.enabled {
            self.sink.pause();
            self.enabled = false;
        } else {
            if let Err(err) = self.sink.play() {
                log::debug!("manual play failed: {}", err);
            }
            self.enabled = true;
        }
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::RecordingAudio;

    #[test]
    fn every_screen_has_a_track() {
        assert_eq!(track_for(Screen::Menu).path(), "/music/joy.mp3");
        assert_eq!(track_for(Screen::Game(GameId::Vocab)), Track::SweetTalks);
        assert_eq!(track_for(Screen::Game(GameId::Thai)), Track::Cloud);
    }

    #[test]
    fn start_sets_the_volume_and_plays_the_menu_track() {
        let mut music = MusicDirector::new(RecordingAudio::default(), true, DEFAULT_VOLUME);
        music.start();

        assert_eq!(music.sink().volume, Some(DEFAULT_VOLUME));
        assert_eq!(music.sink().loaded, vec![Track::Joy]);
        assert_eq!(music.sink().plays, 1);
        assert!(!music.is_waiting_for_interaction());
    }

    #[test]
    fn blocked_autoplay_retries_once_after_interaction() {
        let audio = RecordingAudio {
            blocked_plays: 1,
            ..RecordingAudio::default()
        };
        let mut music = MusicDirector::new(audio, true, DEFAULT_VOLUME);
        music.start();
        assert!(music.is_waiting_for_interaction());

        music.on_user_interaction();
        music.on_user_interaction();

        assert_eq!(music.sink().plays, 2);
        assert!(!music.is_waiting_for_interaction());
    }

    #[test]
    fn games_sharing_a_track_do_not_restart_it() {
        let mut music = MusicDirector::new(RecordingAudio::default(), true, DEFAULT_VOLUME);
        music.start();

        assert!(music.on_screen(Screen::Game(GameId::Match)));
        assert!(!music.on_screen(Screen::Game(GameId::Counting)));
        assert!(music.on_screen(Screen::Menu));
        assert_eq!(
            music.sink().loaded,
            vec![Track::Joy, Track::November, Track::Joy]
        );
    }

    #[test]
    fn paused_music_switches_tracks_silently() {
        let mut music = MusicDirector::new(RecordingAudio::default(), true, DEFAULT_VOLUME);
        music.start();
        assert!(!music.toggle());
        assert_eq!(music.sink().pauses, 1);

        music.on_screen(Screen::Game(GameId::Habitat));
        assert_eq!(music.sink().plays, 1);

        assert!(music.toggle());
        assert_eq!(music.sink().plays, 2);
    }
}
