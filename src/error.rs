use crate::{board::Player, win::GameState};

/// Reasons a game command can be rejected
///
/// A rejected command never changes the board, the turn or the game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("illegal move at row {row}, column {col}")]
    IllegalMove { row: usize, col: usize },

    #[error("column {col} is full or outside the board")]
    ColumnFull { col: usize },

    #[error("the game is already decided: {0:?}")]
    GameOver(GameState),

    #[error("out of turn, the {expected:?} player is to move")]
    OutOfTurn { expected: Player },

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}
