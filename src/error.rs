//! Error types for the Othello crate
//!
//! The rules, evaluation and search are total functions and never fail.
//! These errors cover the driver layer: parsing boards, loading
//! configuration and rejecting moves made through the interactive game.

use std::path::PathBuf;

use thiserror::Error;

use crate::board::Pos;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board string has wrong length: expected {expected} cells, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("illegal move at {pos}: it flips no disks")]
    IllegalMove { pos: Pos },

    #[error("game already over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,

    #[error("AI is thinking")]
    AiThinking,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
