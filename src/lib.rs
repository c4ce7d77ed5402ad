//! A minimax agent for playing the board game 'Connect 4'
//!
//! This agent performs a depth-bounded game tree search over board
//! futures to pick a column for the side to move. Scoring is flat:
//! a won position is worth 100, a lost one -100, anything else 0,
//! so at shallow depths the agent plays forced wins and blocks
//! forced losses but has no positional preference otherwise.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{Board, Searcher, Side, DEFAULT_DEPTH};
//!
//! let board = Board::new();
//! let mut searcher = Searcher::new();
//! let result = searcher.choose_move(&board, DEFAULT_DEPTH, Side::One);
//!
//! assert!((result.column, result.score) == (Some(0), 0));
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod search;


pub use board::{Board, Cell, InvalidMove, Side};
pub use search::{evaluate, SearchResult, Searcher, WIN_SCORE};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The default lookahead in plies: one engine move and one reply, doubled
pub const DEFAULT_DEPTH: u32 = 4;

// ensure that a four-in-a-row window fits on the board in every orientation
const_assert!(WIDTH >= 4);
const_assert!(HEIGHT >= 4);
