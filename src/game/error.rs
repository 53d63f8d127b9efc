use derive_more::{Display, Error};

/// Domain failures of game operations
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// No game is stored under the id
    #[display("game not found: {game_id}")]
    NotFound { game_id: String },
    /// Coordinates off the board, or the target cell is already taken
    #[display("invalid move at [{row},{col}]")]
    InvalidMove { row: i32, col: i32 },
}
