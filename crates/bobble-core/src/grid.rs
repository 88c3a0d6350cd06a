//! Square letter grid and its cell coordinates.
//!
//! This module contains:
//! - `Cell`: a (row, col) position with 8-way adjacency
//! - `Grid`: the immutable N×N board, stored row-major
//! - The flattened board-string encoding used to replay a board
//!
//! A board string is exactly `size * size` letters, row-major, with no
//! separators. `"ABCDEFGHI"` with size 3 is:
//!
//! ```text
//! A B C
//! D E F
//! G H I
//! ```

use crate::dice::DicePool;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// A position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Offsets to the eight surrounding cells, row by row
    pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    /// Create a new cell
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell shifted by the given offset, if it stays on a `size`×`size` grid
    pub fn offset(&self, d_row: isize, d_col: isize, size: usize) -> Option<Cell> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < size && col < size).then_some(Cell::new(row, col))
    }

    /// The in-bounds neighbors of this cell
    pub fn neighbors(&self, size: usize) -> impl Iterator<Item = Cell> {
        let origin = *self;
        Self::NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(d_row, d_col)| origin.offset(d_row, d_col, size))
    }

    /// Whether two distinct cells touch, including diagonally
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

/// An ordered walk over distinct, adjacent cells
pub type Path = Vec<Cell>;

/// Errors raised while building a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Board must have at least one cell")]
    EmptyBoard,

    #[error("Board string has {actual} letters, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid board letter '{0}'")]
    InvalidLetter(char),

    #[error("Board size {0} is too large")]
    TooLarge(usize),
}

/// Cells on a `size`×`size` board
fn cell_count_for(size: usize) -> Result<usize, GridError> {
    match size.checked_mul(size) {
        Some(0) => Err(GridError::EmptyBoard),
        Some(count) => Ok(count),
        None => Err(GridError::TooLarge(size)),
    }
}

/// The letter board, immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    /// Uppercase letters, row-major
    letters: Vec<char>,
}

impl Grid {
    /// Roll a fresh board of the given size
    pub fn random(size: usize) -> Result<Self, GridError> {
        let mut rng = rand::thread_rng();
        Self::generate(size, &mut rng)
    }

    /// Roll a fresh board with a provided RNG.
    /// A seeded RNG always produces the same board.
    pub fn generate<R: Rng>(size: usize, rng: &mut R) -> Result<Self, GridError> {
        let cell_count = cell_count_for(size)?;

        let letters = DicePool::for_board(size).deal(cell_count, rng);
        debug_assert_eq!(letters.len(), cell_count);

        Ok(Self { size, letters })
    }

    /// Rebuild a board from its flattened, row-major letters
    pub fn from_board_string(size: usize, board: &str) -> Result<Self, GridError> {
        let expected = cell_count_for(size)?;

        let letters: Vec<char> = board.chars().map(|c| c.to_ascii_uppercase()).collect();
        if letters.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: letters.len(),
            });
        }
        if let Some(&bad) = letters.iter().find(|c| !c.is_ascii_uppercase()) {
            return Err(GridError::InvalidLetter(bad));
        }

        Ok(Self { size, letters })
    }

    /// Rows (and columns) on the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.letters.len()
    }

    /// Row-major index of a cell, if it is on the board
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        (cell.row < self.size && cell.col < self.size).then(|| cell.row * self.size + cell.col)
    }

    /// The letter at a cell
    pub fn get(&self, cell: Cell) -> Option<char> {
        self.index_of(cell).map(|index| self.letters[index])
    }

    /// The letter at a row-major index
    pub(crate) fn letter_at(&self, index: usize) -> char {
        self.letters[index]
    }

    /// Every cell, row-major
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Cell::new(row, col)))
    }

    /// The board as rows of letters
    pub fn rows(&self) -> Vec<Vec<char>> {
        self.letters.chunks(self.size).map(<[char]>::to_vec).collect()
    }

    /// The flattened board string accepted by [`Grid::from_board_string`]
    pub fn board_string(&self) -> String {
        self.letters.iter().collect()
    }

    /// Check that `path` is a legal walk on this board that spells `text`.
    ///
    /// Every cell must be on the board and appear once, consecutive cells must
    /// be adjacent, and the letters along the walk must equal `text`.
    pub fn traces(&self, path: &[Cell], text: &str) -> bool {
        if path.is_empty() || path.len() != text.chars().count() {
            return false;
        }

        let mut seen = HashSet::with_capacity(path.len());
        if !path.iter().all(|cell| seen.insert(*cell)) {
            return false;
        }
        if !path.windows(2).all(|pair| pair[0].is_adjacent(&pair[1])) {
            return false;
        }

        path.iter()
            .zip(text.chars())
            .all(|(cell, expected)| self.get(*cell) == Some(expected))
    }

    /// JSON-friendly representation with the board split into rows
    pub fn to_json_friendly(&self) -> GridJson {
        GridJson {
            size: self.size,
            board: self.rows(),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.letters.chunks(self.size).enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for (col, letter) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

/// Board as sent to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridJson {
    pub size: usize,
    pub board: Vec<Vec<char>>,
}
