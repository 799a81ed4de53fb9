//! Static evaluation of undecided positions

use crate::{
    board::{Board, Player},
    win::DIRECTIONS,
    RUN_LENGTH,
};

/// Points awarded to a window by the number of the player's tiles it holds
pub const POINTS: [i32; RUN_LENGTH + 1] = [0, 1, 2, 25, 100];

/// Deducted once per tile of the player
pub const ISOLATION_PENALTY: i32 = 3;

/// Heuristic value of a board for one player
///
/// Each of the player's tiles anchors one window of `RUN_LENGTH` tiles in
/// every forward direction. Windows are clipped at the board edge: tiles that
/// would fall outside simply don't count.
pub fn score(board: &Board, player: Player) -> i32 {
    let mut total = 0;
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if board.cell(row, col).color != Some(player) {
                continue;
            }
            total += DIRECTIONS
                .iter()
                .map(|&(dr, dc)| POINTS[window_count(board, row, col, dr, dc, player)])
                .sum::<i32>();
            total -= ISOLATION_PENALTY;
        }
    }
    total
}

/// Score of a position from the computer's point of view
pub fn evaluate(board: &Board) -> i32 {
    score(board, Player::Computer) - score(board, Player::Human)
}

fn window_count(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    player: Player,
) -> usize {
    (0..RUN_LENGTH as isize)
        .filter(|&step| {
            let r = row as isize + dr * step;
            let c = col as isize + dc * step;
            r >= 0
                && c >= 0
                && board
                    .get(r as usize, c as usize)
                    .map_or(false, |cell| cell.color == Some(player))
        })
        .count()
}
