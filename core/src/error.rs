use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Tile id is outside the board")]
    InvalidTile,
    #[error("No round is being played")]
    NotPlaying,
    #[error("Tile is already revealed")]
    AlreadyRevealed,
    #[error("Reveal at least one safe tile before cashing out")]
    NothingToCashOut,
    #[error("Too many mines")]
    TooManyMines,
    #[error("A round is in progress, finish or cash out first")]
    RoundInProgress,
    #[error("Unknown difficulty")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
