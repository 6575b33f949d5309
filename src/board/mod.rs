//! Board representation for Gomoku

pub mod board;


// Re-exports
pub use board::Board;

/// Default grid dimensions (20x20, 400 cells)
pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 20;
/// Default run length required to win
pub const DEFAULT_WIN_LEN: usize = 5;

/// Stone colors
///
/// Black moves first. How a stone is drawn is a display-layer concern;
/// the core only needs two distinguishable player identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }
}
