//! Board module - the N x N tile grid
//!
//! The board is a square grid of tile values where `0` is an empty cell and
//! every other value is a power of two >= 2. Grid sizes range from 4 to 8.
//! Storage is a flat fixed-capacity array (row-major, stride = size) so boards
//! are cheap to clone and never allocate.
//! Coordinates: (row, col) where row 0 is the top edge and col 0 the left edge.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::EngineError;
use crate::types::{is_valid_grid_size, MAX_CELLS, MAX_GRID_SIZE};

/// Longest row or column on any supported board
pub const MAX_LINE: usize = MAX_GRID_SIZE as usize;

/// A single row or column, copied out of a board
pub type Line = ArrayVec<u32, MAX_LINE>;

/// Returns true if `value` may appear in a cell (0 or a power of two >= 2)
#[inline]
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// The game board - `size` x `size` cells using flat array storage
///
/// Cells outside the active `size * size` prefix are always zero, so derived
/// equality and hashing compare only the visible grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    /// Row-major cells (row * size + col)
    cells: [u32; MAX_CELLS],
}

impl Board {
    /// Create a new empty board of the given size
    pub fn new(size: u8) -> Result<Self, EngineError> {
        if !is_valid_grid_size(size) {
            return Err(EngineError::InvalidGridSize {
                size: size as usize,
            });
        }
        Ok(Self {
            size,
            cells: [0; MAX_CELLS],
        })
    }

    /// Build a board from explicit rows, validating shape and tile values.
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48_core::Board;
    ///
    /// let board = Board::from_rows(&[
    ///     [2, 0, 0, 0],
    ///     [0, 4, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 8],
    /// ])
    /// .unwrap();
    /// assert_eq!(board.get(1, 1), Some(4));
    /// assert_eq!(board.empty_count(), 13);
    /// ```
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, EngineError> {
        let size = rows.len();
        if size > MAX_LINE || !is_valid_grid_size(size as u8) {
            return Err(EngineError::InvalidGridSize { size });
        }

        let mut board = Self::new(size as u8)?;
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(EngineError::NotSquare {
                    rows: size,
                    cols: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(EngineError::InvalidTile { row, col, value });
                }
                board.cells[row * size + col] = value;
            }
        }
        Ok(board)
    }

    /// An empty board of the same size
    pub fn cleared(&self) -> Board {
        Board {
            size: self.size,
            cells: [0; MAX_CELLS],
        }
    }

    /// Grid dimension N
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline(always)]
    fn n(&self) -> usize {
        self.size as usize
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        let n = self.n();
        if row >= n || col >= n {
            return None;
        }
        Some(row * n + col)
    }

    /// Get cell at (row, col); None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        debug_assert!(is_valid_tile(value));
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// The active cells in row-major order
    pub fn cells(&self) -> &[u32] {
        let n = self.n();
        &self.cells[..n * n]
    }

    /// Row `row` as a slice. Panics if out of bounds.
    pub fn row(&self, row: usize) -> &[u32] {
        let n = self.n();
        &self.cells[row * n..row * n + n]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [u32] {
        let n = self.n();
        &mut self.cells[row * n..row * n + n]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells().chunks_exact(self.n())
    }

    /// Column `col`, top to bottom
    pub fn column(&self, col: usize) -> Line {
        self.rows().map(|row| row[col]).collect()
    }

    /// Copy out as nested rows (for UI collaborators and snapshots)
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Empty cells as (row, col), in row-major order
    pub fn empty_cells(&self) -> ArrayVec<(u8, u8), MAX_CELLS> {
        let n = self.n();
        self.cells()
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(idx, _)| ((idx / n) as u8, (idx % n) as u8))
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells().iter().filter(|&&v| v == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells().iter().all(|&v| v != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.cells().iter().all(|&v| v == 0)
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells().len() - self.empty_count()
    }

    /// True if any cell holds exactly `value`
    pub fn contains(&self, value: u32) -> bool {
        self.cells().contains(&value)
    }

    /// Largest tile on the board (0 for an empty board)
    pub fn max_tile(&self) -> u32 {
        self.cells().iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells().iter().map(|&v| v as u64).sum()
    }

    /// Swap rows and columns (cell (r, c) moves to (c, r))
    pub fn transpose(&self) -> Board {
        let n = self.n();
        let mut out = self.clone();
        for row in 0..n {
            for col in 0..n {
                out.cells[col * n + row] = self.cells[row * n + col];
            }
        }
        out
    }

    /// Reverse every row (cell (r, c) moves to (r, n - 1 - c))
    pub fn mirror_horizontal(&self) -> Board {
        let mut out = self.clone();
        for row in 0..self.n() {
            out.row_mut(row).reverse();
        }
        out
    }
}

impl fmt::Display for Board {
    /// Plain text grid, `.` for empty cells, right-aligned columns
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        for row in self.rows() {
            let mut first = true;
            for &value in row {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                if value == 0 {
                    write!(f, "{:>width$}", ".", width = width)?;
                } else {
                    write!(f, "{:>width$}", value, width = width)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::from_rows(&[
            [2, 4, 8, 16],
            [0, 0, 0, 32],
            [0, 64, 0, 0],
            [128, 0, 0, 2],
        ])
        .unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        for size in 4..=8u8 {
            let board = Board::new(size).unwrap();
            assert_eq!(board.size(), size);
            assert!(board.is_empty());
            assert_eq!(board.empty_count(), (size as usize).pow(2));
        }
    }

    #[test]
    fn test_new_rejects_unsupported_sizes() {
        assert_eq!(
            Board::new(3).unwrap_err(),
            EngineError::InvalidGridSize { size: 3 }
        );
        assert!(Board::new(9).is_err());
    }

    #[test]
    fn test_from_rows_validation() {
        let ragged: Vec<Vec<u32>> = vec![vec![0; 4], vec![0; 4], vec![0; 3], vec![0; 4]];
        assert_eq!(
            Board::from_rows(&ragged).unwrap_err(),
            EngineError::NotSquare { rows: 4, cols: 3 }
        );

        let bad_tile = [[0, 0, 0, 0], [0, 3, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
        assert_eq!(
            Board::from_rows(&bad_tile).unwrap_err(),
            EngineError::InvalidTile {
                row: 1,
                col: 1,
                value: 3
            }
        );

        let one = [[1, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
        assert!(Board::from_rows(&one).is_err());

        let small = [[0, 0], [0, 0]];
        assert!(matches!(
            Board::from_rows(&small),
            Err(EngineError::InvalidGridSize { size: 2 })
        ));
    }

    #[test]
    fn test_get_and_set() {
        let mut board = Board::new(5).unwrap();
        assert!(board.set(4, 4, 8));
        assert_eq!(board.get(4, 4), Some(8));
        assert_eq!(board.get(5, 0), None);
        assert!(!board.set(0, 5, 2));
    }

    #[test]
    fn test_rows_and_columns() {
        let board = sample();
        assert_eq!(board.row(0), &[2, 4, 8, 16]);
        assert_eq!(board.column(3).as_slice(), &[16, 32, 0, 2]);
        assert_eq!(board.rows().count(), 4);
        assert_eq!(board.to_rows()[3], vec![128, 0, 0, 2]);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = sample();
        let empty = board.empty_cells();
        assert_eq!(empty.len(), 8);
        assert_eq!(empty[0], (1, 0));
        assert_eq!(empty[empty.len() - 1], (3, 2));
        assert_eq!(board.tile_count(), 8);
    }

    #[test]
    fn test_aggregates() {
        let board = sample();
        assert_eq!(board.max_tile(), 128);
        assert_eq!(board.tile_sum(), 2 + 4 + 8 + 16 + 32 + 64 + 128 + 2);
        assert!(board.contains(64));
        assert!(!board.contains(256));
        assert!(!board.is_full());
    }

    #[test]
    fn test_transpose_and_mirror_are_involutions() {
        let board = sample();
        assert_eq!(board.transpose().transpose(), board);
        assert_eq!(board.mirror_horizontal().mirror_horizontal(), board);

        let t = board.transpose();
        assert_eq!(t.row(0), &[2, 0, 0, 128]);
        let m = board.mirror_horizontal();
        assert_eq!(m.row(3), &[2, 0, 0, 128]);
    }

    #[test]
    fn test_display_grid() {
        let board = Board::from_rows(&[
            [2, 0, 0, 0],
            [0, 16, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 4],
        ])
        .unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " 2  .  .  .");
        assert_eq!(lines[1], " . 16  .  .");
        assert_eq!(lines.len(), 4);
    }
}
