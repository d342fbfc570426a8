//! Line reducer - collapses one row or column toward its front
//!
//! Every move is expressed as this single operation applied to rows that
//! have been oriented so the move points toward index 0:
//!
//! 1. Compact: drop empty cells, keep order, pad with zeros at the back.
//! 2. Merge: scan once from the front; an equal non-zero neighbour pair
//!    becomes one tile of double value and the scan skips the consumed tile.
//! 3. Compact again to close the gaps left by merges.
//!
//! A tile takes part in at most one merge per move, so `[2, 2, 2, 2]` becomes
//! `[4, 4, 0, 0]` and never `[8, 0, 0, 0]`. Tiles already at [`MAX_TILE`]
//! do not merge.

use crate::board::Line;
use crate::types::MAX_TILE;

/// Result of reducing one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReduction {
    /// Reduced line, same length as the input
    pub tiles: Line,
    /// Sum of the tiles created by merges
    pub score: u64,
}

/// True if neighbouring tiles `a` and `b` combine into one
#[inline]
pub fn can_merge(a: u32, b: u32) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

/// Slide non-zero tiles to the front, preserving order.
fn compact(line: &mut [u32]) {
    let mut write = 0;
    for read in 0..line.len() {
        let value = line[read];
        if value != 0 {
            line[write] = value;
            write += 1;
        }
    }
    for cell in &mut line[write..] {
        *cell = 0;
    }
}

/// Merge equal neighbours of an already compacted line, front to back.
fn merge(line: &mut [u32]) -> u64 {
    let mut score = 0u64;
    let mut i = 0;
    while i + 1 < line.len() {
        if can_merge(line[i], line[i + 1]) {
            line[i] *= 2;
            line[i + 1] = 0;
            score += line[i] as u64;
            i += 2;
        } else {
            i += 1;
        }
    }
    score
}

/// Reduce a line in place and return the merge score.
pub(crate) fn reduce_in_place(line: &mut [u32]) -> u64 {
    compact(line);
    let score = merge(line);
    compact(line);
    score
}

/// Reduce a line toward index 0.
///
/// # Examples
///
/// ```
/// use twenty48_core::reduce_line;
///
/// let r = reduce_line(&[2, 0, 2, 4]);
/// assert_eq!(r.tiles.as_slice(), &[4, 4, 0, 0]);
/// assert_eq!(r.score, 4);
/// ```
pub fn reduce_line(line: &[u32]) -> LineReduction {
    let mut tiles: Line = line.iter().copied().collect();
    let score = reduce_in_place(&mut tiles);
    LineReduction { tiles, score }
}
