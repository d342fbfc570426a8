//! Terminal detector - win and loss predicates over a board

use crate::board::Board;
use crate::line::can_merge;
use crate::types::GameStatus;

/// True if any cell equals the win threshold
pub fn has_win_tile(board: &Board, win_tile: u32) -> bool {
    board.contains(win_tile)
}

/// True unless the board is in the loss condition: some cell is empty, or
/// two horizontally or vertically adjacent tiles can merge.
///
/// On any non-empty board this is the same as "some move changes the board".
/// The empty board has moves by this definition even though no direction
/// changes it.
pub fn has_moves(board: &Board) -> bool {
    let n = board.size() as usize;
    for row in 0..n {
        let cells = board.row(row);
        for col in 0..n {
            let value = cells[col];
            if value == 0 {
                return true;
            }
            if col + 1 < n && can_merge(value, cells[col + 1]) {
                return true;
            }
            if row + 1 < n && can_merge(value, board.row(row + 1)[col]) {
                return true;
            }
        }
    }
    false
}

/// True if the board is full and has no adjacent equal pair
pub fn is_stuck(board: &Board) -> bool {
    !has_moves(board)
}

/// Classify a board. Win is checked before loss, so a stuck board holding the
/// win tile is `Won`.
pub fn classify(board: &Board, win_tile: u32) -> GameStatus {
    if has_win_tile(board, win_tile) {
        GameStatus::Won
    } else if is_stuck(board) {
        GameStatus::Lost
    } else {
        GameStatus::Playing
    }
}
