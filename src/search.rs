//! A depth-limited minimax agent for the computer player

use tracing::debug;

use crate::{
    board::{Board, Move, Player},
    heuristic,
    win::{self, GameState},
};

/// The value of a position the computer has won, negated for a human win
pub const WIN_SCORE: i32 = 200;

/// An agent choosing the computer's moves
///
/// # Notes
/// The search explores every legal move down to `lookahead` plies below the
/// computer's candidate move, then scores the leaves with
/// [`heuristic::evaluate`]. There is no pruning, so the cost grows with
/// `columns ^ (lookahead + 2)`.
///
/// The board is explored in place: each speculative move is held by a
/// [`Speculation`](crate::board::Speculation) guard, so the board is restored
/// exactly when the search returns.
#[derive(Clone, Debug)]
pub struct Searcher {
    lookahead: i32,

    /// The number of positions visited by the last `best_move` call (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    pub fn new(lookahead: u8) -> Self {
        Self {
            lookahead: lookahead as i32,
            node_count: 0,
        }
    }

    /// Minimax value of a position, positive values favouring the computer
    ///
    /// Decided games are scored before the depth cutoff so a forced result is
    /// never hidden behind the heuristic. A position with no legal moves is
    /// worth 0.
    pub fn minimax(&mut self, board: &mut Board, depth: i32, maximizing: bool) -> i32 {
        self.node_count += 1;

        match win::evaluate(board) {
            GameState::ComputerWin => return WIN_SCORE,
            GameState::HumanWin => return -WIN_SCORE,
            _ => {}
        }

        if depth < 0 {
            return heuristic::evaluate(board);
        }

        let mover = if maximizing {
            Player::Computer
        } else {
            Player::Human
        };

        let mut best: Option<i32> = None;
        for col in 0..board.cols() {
            let row = match board.legal_row(col) {
                Some(row) => row,
                None => continue,
            };
            let mut next = match board.speculate(row, col, mover) {
                Ok(next) => next,
                Err(_) => continue,
            };
            let value = self.minimax(&mut next, depth - 1, !maximizing);

            best = Some(match best {
                None => value,
                Some(best) if maximizing => best.max(value),
                Some(best) => best.min(value),
            });
        }

        best.unwrap_or(0)
    }

    /// Picks the computer's move, returning it with its minimax value
    ///
    /// Candidates are tried columns ascending; on equal values the first one
    /// found is kept. Returns `None` if the board has no legal move.
    pub fn best_move(&mut self, board: &mut Board) -> Option<(Move, i32)> {
        self.node_count = 0;

        let mut best: Option<(Move, i32)> = None;
        for col in 0..board.cols() {
            let row = match board.legal_row(col) {
                Some(row) => row,
                None => continue,
            };
            let value = match board.speculate(row, col, Player::Computer) {
                // the reply belongs to the human, so the search starts minimizing
                Ok(mut next) => self.minimax(&mut next, self.lookahead, false),
                Err(_) => continue,
            };

            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((Move::new(row, col), value));
            }
        }

        debug!(
            nodes = self.node_count,
            lookahead = self.lookahead,
            chosen = ?best,
            "search complete"
        );
        best
    }
}
