use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HubError {
    #[error("Unknown game {0:?}")]
    UnknownGame(String),
    #[error("Option index {0} is out of range")]
    InvalidOption(usize),
    #[error("Level table is empty")]
    EmptyLevels,
    #[error("No game is running")]
    NoActiveGame,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = core::result::Result<T, HubError>;
