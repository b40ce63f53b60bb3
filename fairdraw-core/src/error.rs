use crate::round::RoundId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FairdrawError>;

#[derive(Error, Debug)]
pub enum FairdrawError {
    #[error("Unsupported game type: {0}")]
    UnsupportedGameType(String),

    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    #[error("Invalid commit hash: {0}")]
    InvalidCommitHash(String),

    #[error("Invalid game parameters: {0}")]
    InvalidParams(String),

    #[error("Bet of {bet} is below the minimum of {min}")]
    InvalidBet { bet: u64, min: u64 },

    #[error("Round not found: {0}")]
    RoundNotFound(RoundId),

    #[error("Reveal does not match commitment for round {0}")]
    InvalidReveal(RoundId),

    #[error("Reveal deadline expired for round {0}")]
    RevealExpired(RoundId),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FairdrawError {
    pub fn invalid_seed(msg: impl Into<String>) -> Self {
        Self::InvalidSeed(msg.into())
    }

    pub fn invalid_commit_hash(msg: impl Into<String>) -> Self {
        Self::InvalidCommitHash(msg.into())
    }

    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
