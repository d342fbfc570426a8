//! Directional transform - maps every move onto the leftward reduction
//!
//! Only one reduction exists: [`reduce_line`](crate::line::reduce_line) applied
//! to each row, left to right. The other directions are exact geometric
//! reinterpretations built from two involutions on the board:
//!
//! | Direction | Before | After |
//! |-----------|--------|-------|
//! | Left | - | - |
//! | Right | mirror | mirror |
//! | Up | transpose | transpose |
//! | Down | transpose, mirror | mirror, transpose |

use crate::board::Board;
use crate::line::reduce_in_place;
use crate::types::Direction;

/// Outcome of applying one move to a board (before any spawn)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub board: Board,
    /// True iff `board` differs from the input in at least one cell
    pub moved: bool,
    /// Sum of all merged tiles created by the move
    pub score_delta: u64,
}

/// Reduce every row toward column 0
fn reduce_left(board: &Board) -> (Board, u64) {
    let mut out = board.clone();
    let mut score = 0u64;
    for row in 0..board.size() as usize {
        score += reduce_in_place(out.row_mut(row));
    }
    (out, score)
}

/// Re-orient the board so `direction` points toward column 0
fn orient(board: &Board, direction: Direction) -> Board {
    match direction {
        Direction::Left => board.clone(),
        Direction::Right => board.mirror_horizontal(),
        Direction::Up => board.transpose(),
        Direction::Down => board.transpose().mirror_horizontal(),
    }
}

/// Undo [`orient`]
fn restore(board: &Board, direction: Direction) -> Board {
    match direction {
        Direction::Left => board.clone(),
        Direction::Right => board.mirror_horizontal(),
        Direction::Up => board.transpose(),
        Direction::Down => board.mirror_horizontal().transpose(),
    }
}

/// Apply a move to the board.
///
/// Never fails: every direction is defined on every board. A move that
/// changes nothing reports `moved == false` and a zero score.
///
/// # Examples
///
/// ```
/// use twenty48_core::{apply_move, Board};
/// use twenty48_core::types::Direction;
///
/// let board = Board::from_rows(&[
///     [0, 0, 2, 2],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
/// ])
/// .unwrap();
///
/// let result = apply_move(&board, Direction::Left);
/// assert!(result.moved);
/// assert_eq!(result.score_delta, 4);
/// assert_eq!(result.board.row(0), &[4, 0, 0, 0]);
/// ```
pub fn apply_move(board: &Board, direction: Direction) -> MoveResult {
    let oriented = orient(board, direction);
    let (reduced, score_delta) = reduce_left(&oriented);
    let result = restore(&reduced, direction);
    let moved = result != *board;

    MoveResult {
        board: result,
        moved,
        score_delta,
    }
}

/// True if moving in `direction` would change the board
pub fn can_move(board: &Board, direction: Direction) -> bool {
    apply_move(board, direction).moved
}
