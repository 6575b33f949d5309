//! Dense board storage addressed by linear cell index

use super::{Stone, DEFAULT_COLS, DEFAULT_ROWS};

/// Rectangular game board
///
/// Cells are stored row-major and addressed by a single linear index
/// `i = row * cols + col`. Dimensions are fixed for the lifetime of the
/// board; `cells.len() == rows * cols` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Stone>,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Stone::Empty; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`)
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Get stone at cell index
    #[inline]
    pub fn get(&self, index: usize) -> Stone {
        debug_assert!(index < self.cells.len());
        self.cells[index]
    }

    /// Place a stone at cell index
    #[inline]
    pub fn set(&mut self, index: usize, stone: Stone) {
        debug_assert!(index < self.cells.len());
        self.cells[index] = stone;
    }

    /// Check if a cell is empty
    #[inline]
    pub fn is_empty(&self, index: usize) -> bool {
        self.get(index) == Stone::Empty
    }

    /// Row containing the cell index
    #[inline]
    pub fn row_of(&self, index: usize) -> usize {
        index / self.cols
    }

    /// Column containing the cell index
    #[inline]
    pub fn col_of(&self, index: usize) -> usize {
        index % self.cols
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
