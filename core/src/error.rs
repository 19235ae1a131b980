use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Too many mines to fit outside the safe zone")]
    TooManyMines,
    #[error("Mine layout overlaps the first-click safe zone")]
    MineInSafeZone,
}

pub type Result<T> = core::result::Result<T, GameError>;
