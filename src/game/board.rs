use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the grid
pub const BOARD_SIZE: usize = 3;

/// Every winning line, checked in this order: rows top-to-bottom,
/// columns left-to-right, then the main and anti diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Classification of a game, terminal once it leaves `Ongoing`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    /// Holds the mark that completed a line
    Won(String),
    Draw,
}

impl GameStatus {
    pub fn is_ongoing(&self) -> bool {
        matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Won(mark) => write!(f, "{}_wins", mark),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

/// 3x3 grid of player marks. An empty string is an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[String; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panics when `row` or `col` is 3 or more
    pub(crate) fn cell(&self, row: usize, col: usize) -> &str {
        &self.cells[row][col]
    }

    pub(crate) fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].is_empty()
    }

    /// Write a mark into a cell. Callers check bounds and occupancy first.
    pub(crate) fn set(&mut self, row: usize, col: usize, mark: &str) {
        self.cells[row][col] = mark.to_string();
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Derive the status of the board.
    ///
    /// The first line (in `LINES` order) holding three equal non-empty marks
    /// wins. Without a winner the game is ongoing while any cell is empty,
    /// and a draw once the board is full.
    pub fn status(&self) -> GameStatus {
        for line in LINES.iter() {
            let [a, b, c] = line.map(|(row, col)| self.cell(row, col));
            if !a.is_empty() && a == b && a == c {
                return GameStatus::Won(a.to_string());
            }
        }

        if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }

    /// Row-major copy of the nine cells
    pub fn flatten(&self) -> Vec<String> {
        self.cells.iter().flatten().cloned().collect()
    }
}
