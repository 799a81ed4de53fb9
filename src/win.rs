//! Detection of decided games

use crate::{
    board::{Board, Player},
    RUN_LENGTH,
};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GameState {
    Playing,
    HumanWin,
    ComputerWin,
    Tie,
}

impl GameState {
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Human => GameState::HumanWin,
            Player::Computer => GameState::ComputerWin,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::HumanWin => Some(Player::Human),
            GameState::ComputerWin => Some(Player::Computer),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        *self != GameState::Playing
    }
}

/// Forward directions as (row step, column step): right, down, down-right, down-left.
/// Every line is probed once, from its top/left end.
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Scans the whole board for a completed run, then for exhaustion
pub fn evaluate(board: &Board) -> GameState {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let player = match board.cell(row, col).color {
                Some(player) => player,
                None => continue,
            };
            if DIRECTIONS
                .iter()
                .any(|&(dr, dc)| completes_run(board, row, col, dr, dc, player))
            {
                return GameState::won_by(player);
            }
        }
    }

    if board.is_full() {
        GameState::Tie
    } else {
        GameState::Playing
    }
}

fn completes_run(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    player: Player,
) -> bool {
    (1..RUN_LENGTH as isize).all(|step| {
        let r = row as isize + dr * step;
        let c = col as isize + dc * step;
        r >= 0
            && c >= 0
            && board
                .get(r as usize, c as usize)
                .map_or(false, |cell| cell.color == Some(player))
    })
}
