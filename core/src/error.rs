use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board rows must be non-empty and of equal length")]
    InvalidBoardShape,
    #[error("Cell label must look like \"row-col\"")]
    InvalidCoordLabel,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
