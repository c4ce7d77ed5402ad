use anyhow::{anyhow, Result};
use thiserror::Error;

use crate::{HEIGHT, WIDTH};

/// One of the two players
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::One => Cell::One,
            Side::Two => Cell::Two,
        }
    }
}

/// The error signalled by [`Board::drop`] for a move that cannot be played
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum InvalidMove {
    #[error("invalid move, column {0} out of range")]
    OutOfRange(usize),
    #[error("invalid move, column {0} full")]
    ColumnFull(usize),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
    heights: [usize; WIDTH],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
            heights: [0; WIDTH],
        }
    }

    /// Builds a board from a string of one-indexed columns, alternating
    /// sides starting with `first`
    pub fn from_moves<S: AsRef<str>>(first: Side, moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut side = first;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    board = board.drop(column - 1, side)?;
                    // abort if the position is won at any point
                    if board.has_four_in_a_row(side) {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    side = side.other();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// The cell at `column`, `row`, with row 0 at the bottom
    pub fn cell(&self, column: usize, row: usize) -> Cell {
        self.cells[column + WIDTH * row]
    }

    pub fn playable(&self, column: usize) -> bool {
        self.heights[column] < HEIGHT
    }

    /// Every column whose top cell is empty, in ascending order
    ///
    /// The enumeration order matters: it is the order the search explores
    /// moves in, and therefore the order ties are broken in.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&column| self.playable(column)).collect()
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&height| height == HEIGHT)
    }

    /// Returns a new board with a `side` piece in the lowest empty cell of
    /// `column`, leaving the original untouched
    pub fn drop(&self, column: usize, side: Side) -> Result<Self, InvalidMove> {
        if column >= WIDTH {
            return Err(InvalidMove::OutOfRange(column));
        }
        if !self.playable(column) {
            return Err(InvalidMove::ColumnFull(column));
        }

        let mut next = *self;
        next.cells[column + WIDTH * next.heights[column]] = side.into();
        next.heights[column] += 1;
        Ok(next)
    }

    /// True iff four `side` cells are consecutive horizontally, vertically,
    /// or along either diagonal
    pub fn has_four_in_a_row(&self, side: Side) -> bool {
        let target = Cell::from(side);

        // horizontal alignments
        for row in 0..HEIGHT {
            for column in 0..=WIDTH - 4 {
                if (0..4).all(|i| self.cell(column + i, row) == target) {
                    return true;
                }
            }
        }

        // vertical alignments
        for column in 0..WIDTH {
            for row in 0..=HEIGHT - 4 {
                if (0..4).all(|i| self.cell(column, row + i) == target) {
                    return true;
                }
            }
        }

        // diagonal / alignments
        for row in 0..=HEIGHT - 4 {
            for column in 0..=WIDTH - 4 {
                if (0..4).all(|i| self.cell(column + i, row + i) == target) {
                    return true;
                }
            }
        }

        // diagonal \ alignments
        for row in 3..HEIGHT {
            for column in 0..=WIDTH - 4 {
                if (0..4).all(|i| self.cell(column + i, row - i) == target) {
                    return true;
                }
            }
        }

        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
