use schema::Species;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for everything outside the turn loop.
///
/// Game-logic failures inside a turn (a missed move, a stat already at its cap)
/// are never errors; they surface as events with `success == false`.
#[derive(Debug, Error)]
pub enum BattleError {
    /// The battle configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A party member could not be built.
    #[error(transparent)]
    Party(#[from] PartyError),
    /// A battle snapshot could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] postcard::Error),
}

/// Errors raised while reading a RON battle configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read battle config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed battle config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Errors raised while building a party member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartyError {
    /// Level must be within 1..=100.
    #[error("level {0} is outside 1..=100")]
    InvalidLevel(u8),
    /// A party member needs at least one move.
    #[error("{0} knows no moves")]
    NoMoves(Species),
    /// At most four moves fit in the move slots.
    #[error("{species} was given {count} moves, but only four fit")]
    TooManyMoves { species: Species, count: usize },
    /// Current HP cannot exceed max HP.
    #[error("{species} cannot have {hp} HP with a max of {max_hp}")]
    HpAboveMax { species: Species, hp: u16, max_hp: u16 },
}

pub type BattleResult<T> = Result<T, BattleError>;
