//! Game rules for freestyle Gomoku
//!
//! The only rule with algorithmic content is win detection: K stones of one
//! color in a row, column or diagonal.

pub mod win;

// Re-exports for convenient access
pub use win::find_winning_line;
