//! A fixed-depth minimax agent for choosing Connect 4 moves

use rayon::prelude::*;

use crate::board::{Board, Side};

/// The score of a position won by the maximizing side
pub const WIN_SCORE: i32 = 100;

/// Scores a board from `maximizing_side`'s perspective
///
/// A position the maximizing side has won is worth [`WIN_SCORE`], a position
/// the opponent has won is worth `-WIN_SCORE`, and everything else is worth 0.
/// There is deliberately no finer positional heuristic: with the shallow
/// default depth the agent only needs to see forced wins and losses.
pub fn evaluate(board: &Board, maximizing_side: Side) -> i32 {
    if board.has_four_in_a_row(maximizing_side) {
        WIN_SCORE
    } else if board.has_four_in_a_row(maximizing_side.other()) {
        -WIN_SCORE
    } else {
        0
    }
}

/// The outcome of a search: the chosen column and its evaluation
///
/// `column` is `None` only at terminal positions, where there is no move to
/// choose: the board is full, already won, or the depth limit is 0.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i32,
}

/// An agent to choose Connect 4 moves by depth-bounded minimax
///
/// # Notes
/// The search explores legal columns in ascending order and only replaces its
/// best candidate on a strict improvement, so ties always resolve to the
/// lowest-indexed column. That tie-break is part of the agent's observable
/// behaviour and is preserved by every search variant here, including the
/// parallel one.
///
/// By default no pruning is performed, so the explored tree (and
/// [`node_count`]) matches the plain minimax recurrence exactly. Alpha-beta
/// cutoffs can be enabled with [`with_pruning`] for deeper searches; they
/// choose the same root move but may visit far fewer nodes.
///
/// [`node_count`]: #structfield.node_count
/// [`with_pruning`]: #method.with_pruning
#[derive(Clone)]
pub struct Searcher {
    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
    pruning: bool,
}

impl Searcher {
    /// Creates a new `Searcher` that searches without pruning
    pub fn new() -> Self {
        Self {
            node_count: 0,
            pruning: false,
        }
    }

    /// Enables alpha-beta cutoffs on an existing `Searcher`
    pub fn with_pruning(mut self) -> Self {
        self.pruning = true;
        self
    }

    /// Chooses the best column for `maximizing_side` on `board`, looking
    /// `depth` plies ahead
    ///
    /// The board is only ever copied, never mutated: each explored branch
    /// plays its move on its own copy and discards it afterwards. Calling
    /// this twice with the same arguments returns the same result.
    pub fn choose_move(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing_side: Side,
    ) -> SearchResult {
        if self.pruning {
            self.alphabeta(
                board,
                depth,
                maximizing_side,
                true,
                -WIN_SCORE - 1,
                WIN_SCORE + 1,
            )
        } else {
            self.minimax(board, depth, maximizing_side, true)
        }
    }

    /// Like [`choose_move`], but fans the top-level columns out across a
    /// rayon thread pool
    ///
    /// Sibling branches have no data dependency on each other, so each one
    /// searches its own board copy in parallel. Ties between equally scored
    /// columns are still resolved by enumeration order, not completion
    /// order, so the chosen move matches the sequential search.
    ///
    /// [`choose_move`]: #method.choose_move
    pub fn choose_move_parallel(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing_side: Side,
    ) -> SearchResult {
        self.node_count += 1;

        let legal = board.legal_columns();
        let terminal = board.has_four_in_a_row(Side::One)
            || board.has_four_in_a_row(Side::Two)
            || legal.is_empty();
        if depth == 0 || terminal {
            return SearchResult {
                column: None,
                score: evaluate(board, maximizing_side),
            };
        }

        let pruning = self.pruning;
        let branches: Vec<(i32, usize)> = legal
            .par_iter()
            .map(|&column| {
                let mut branch = Searcher {
                    node_count: 0,
                    pruning,
                };
                let child = board
                    .drop(column, maximizing_side)
                    .expect("column came from legal_columns");
                let result = branch.search(&child, depth - 1, maximizing_side, false);
                (result.score, branch.node_count)
            })
            .collect();

        // collect() keeps the results in column enumeration order, so the
        // strict comparison below breaks ties exactly like the sequential loop
        let mut best_column = legal[0];
        let mut best_score = i32::MIN;
        for (&column, &(score, nodes)) in legal.iter().zip(branches.iter()) {
            self.node_count += nodes;
            if score > best_score {
                best_score = score;
                best_column = column;
            }
        }

        SearchResult {
            column: Some(best_column),
            score: best_score,
        }
    }

    fn search(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing_side: Side,
        maximizing_turn: bool,
    ) -> SearchResult {
        if self.pruning {
            self.alphabeta(
                board,
                depth,
                maximizing_side,
                maximizing_turn,
                -WIN_SCORE - 1,
                WIN_SCORE + 1,
            )
        } else {
            self.minimax(board, depth, maximizing_side, maximizing_turn)
        }
    }

    /// Performs the plain fixed-depth game tree search, with no pruning
    ///
    /// The score is always taken from the fixed `maximizing_side`'s
    /// perspective; only which player's moves are being tried flips between
    /// recursion levels.
    fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing_side: Side,
        maximizing_turn: bool,
    ) -> SearchResult {
        self.node_count += 1;

        let legal = board.legal_columns();
        let terminal = board.has_four_in_a_row(Side::One)
            || board.has_four_in_a_row(Side::Two)
            || legal.is_empty();
        if depth == 0 || terminal {
            return SearchResult {
                column: None,
                score: evaluate(board, maximizing_side),
            };
        }

        let side = if maximizing_turn {
            maximizing_side
        } else {
            maximizing_side.other()
        };

        let mut best_column = legal[0];
        let mut best_score = if maximizing_turn { i32::MIN } else { i32::MAX };
        for &column in &legal {
            let child = board
                .drop(column, side)
                .expect("column came from legal_columns");
            let score = self
                .minimax(&child, depth - 1, maximizing_side, !maximizing_turn)
                .score;

            // a strict comparison keeps the earliest column on ties
            let improved = if maximizing_turn {
                score > best_score
            } else {
                score < best_score
            };
            if improved {
                best_score = score;
                best_column = column;
            }
        }

        SearchResult {
            column: Some(best_column),
            score: best_score,
        }
    }

    /// Performs the same search with alpha-beta cutoffs
    ///
    /// Cutoffs never change the root move because a branch is only abandoned
    /// once it can no longer strictly improve on an earlier one.
    fn alphabeta(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing_side: Side,
        maximizing_turn: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchResult {
        self.node_count += 1;

        let legal = board.legal_columns();
        let terminal = board.has_four_in_a_row(Side::One)
            || board.has_four_in_a_row(Side::Two)
            || legal.is_empty();
        if depth == 0 || terminal {
            return SearchResult {
                column: None,
                score: evaluate(board, maximizing_side),
            };
        }

        let side = if maximizing_turn {
            maximizing_side
        } else {
            maximizing_side.other()
        };

        let mut best_column = legal[0];
        let mut best_score = if maximizing_turn { i32::MIN } else { i32::MAX };
        for &column in &legal {
            let child = board
                .drop(column, side)
                .expect("column came from legal_columns");
            let score = self
                .alphabeta(
                    &child,
                    depth - 1,
                    maximizing_side,
                    !maximizing_turn,
                    alpha,
                    beta,
                )
                .score;

            if maximizing_turn {
                if score > best_score {
                    best_score = score;
                    best_column = column;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_column = column;
                }
                beta = beta.min(best_score);
            }
            // a perfect opponent will not let the search reach this branch
            if alpha >= beta {
                break;
            }
        }

        SearchResult {
            column: Some(best_column),
            score: best_score,
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
