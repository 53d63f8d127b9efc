pub mod board;
pub mod error;
pub mod moves;

pub use board::{Board, GameStatus, BOARD_SIZE};
pub use error::GameError;
pub use moves::{apply_move, Game, MoveOutcome};
