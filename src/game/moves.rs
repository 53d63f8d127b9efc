use crate::game::board::{Board, GameStatus, BOARD_SIZE};
use crate::game::error::GameError;
use serde::{Deserialize, Serialize};

/// A single game: its board and the status derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub board: Board,
    pub status: GameStatus,
}

impl Game {
    /// Empty board, status ongoing
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::Ongoing,
        }
    }

    /// Current status and flattened board, as returned on the wire
    pub fn outcome(&self) -> MoveOutcome {
        MoveOutcome {
            status: self.status.clone(),
            board: self.board.flatten(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Status and row-major board after a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub status: GameStatus,
    pub board: Vec<String>,
}

fn board_index(value: i32) -> Option<usize> {
    usize::try_from(value).ok().filter(|&v| v < BOARD_SIZE)
}

/// Validate and apply a move.
///
/// A finished game is left untouched and its state is echoed back, whatever
/// the coordinates. On an ongoing game the coordinates must be on the board
/// and the cell empty; otherwise nothing changes and `InvalidMove` is
/// returned. The player's mark is written verbatim; turn order is not
/// checked.
pub fn apply_move(
    game: &mut Game,
    row: i32,
    col: i32,
    player: &str,
) -> Result<MoveOutcome, GameError> {
    if !game.status.is_ongoing() {
        return Ok(game.outcome());
    }

    let (r, c) = match (board_index(row), board_index(col)) {
        (Some(r), Some(c)) if game.board.is_empty_at(r, c) => (r, c),
        _ => return Err(GameError::InvalidMove { row, col }),
    };

    game.board.set(r, c, player);
    game.status = game.board.status();

    Ok(game.outcome())
}
