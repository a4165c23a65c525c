use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::*;

/// Games listed per menu page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    Match,
    Color,
    Vocab,
    Phonics,
    Scissor,
    Counting,
    Shapes,
    ColorPaste,
    Habitat,
    Growth,
    Social,
    Thai,
}

impl GameId {
    pub const ALL: [GameId; 12] = [
        Self::Match,
        Self::Color,
        Self::Vocab,
        Self::Phonics,
        Self::Scissor,
        Self::Counting,
        Self::Shapes,
        Self::ColorPaste,
        Self::Habitat,
        Self::Growth,
        Self::Social,
        Self::Thai,
    ];

    /// Stable key used by the router and config files.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Color => "color",
            Self::Vocab => "vocab",
            Self::Phonics => "phonics",
            Self::Scissor => "scissor",
            Self::Counting => "counting",
            Self::Shapes => "shapes",
            Self::ColorPaste => "colorpaste",
            Self::Habitat => "habitat",
            Self::Growth => "growth",
            Self::Social => "social",
            Self::Thai => "thai",
        }
    }

    pub fn from_key(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.key() == key)
            .ok_or_else(|| HubError::UnknownGame(key.to_owned()))
    }

    pub fn descriptor(self) -> &'static GameDescriptor {
        &REGISTRY[self as usize]
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for GameId {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s)
    }
}

/// Menu card contents for one game.
#[derive(Debug, PartialEq, Serialize)]
pub struct GameDescriptor {
    pub id: GameId,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

const fn card(
    id: GameId,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    color: &'static str,
) -> GameDescriptor {
    GameDescriptor {
        id,
        title,
        description,
        icon,
        color,
    }
}

/// Every game in menu order, indexed by `GameId as usize`.
pub static REGISTRY: [GameDescriptor; 12] = [
    card(GameId::Match, "Letter Match", "Match Mommy & Baby letters", "type", "pink"),
    card(GameId::Color, "Color Sounds", "Color the letter you hear", "palette", "orange"),
    card(GameId::Vocab, "Vocabulary Paint", "Find and paint the picture", "brush", "green"),
    card(GameId::Phonics, "Phonics Mic", "Say the sound of the letter", "mic", "indigo"),
    card(GameId::Scissor, "Cut & Paste", "Cut sound and paste to picture", "scissors", "slate"),
    card(GameId::Counting, "Counting 1-2-3", "Count the objects (0-5)", "calculator", "cyan"),
    card(GameId::Shapes, "Shape Detective", "What shape is the picture?", "shapes", "purple"),
    card(GameId::ColorPaste, "Color Match", "Cut & Paste to match color", "paint-bucket", "red"),
    card(GameId::Habitat, "Habitats", "Where do animals live?", "map-pin", "emerald"),
    card(GameId::Growth, "Animal Growth", "Match Mommy & Baby", "baby", "pink"),
    card(GameId::Social, "Respect Circle", "Circle good choices", "users", "teal"),
    card(GameId::Thai, "Thai Alphabet", "Learn ก to ด", "languages", "orange"),
];

/// Paged view over the game registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Menu {
    page: usize,
    page_size: usize,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Menu {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        REGISTRY.len().div_ceil(self.page_size)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn prev(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn visible(&self) -> &'static [GameDescriptor] {
        let start = (self.page * self.page_size).min(REGISTRY.len());
        let end = (start + self.page_size).min(REGISTRY.len());
        &REGISTRY[start..end]
    }
}
