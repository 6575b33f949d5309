//! Freestyle Gomoku with a replayable move history
//!
//! Two players alternate placing stones on a rectangular grid (20x20 by
//! default); the first to line up K stones in a row, column or diagonal
//! wins. The crate is a small rules core plus an egui front end:
//! - [`board`]: dense board storage addressed by linear cell index
//! - [`rules`]: win detection scanning only around the most recent move
//! - [`session`]: move history with undo, restart and turn tracking
//! - [`ui`]: egui/eframe front end
//!
//! The front end talks to the core through a narrow interface: submit a
//! move, read the current snapshot, undo, restart. Invalid in-game requests
//! (occupied cell, move after the game is decided) are silently ignored;
//! only contract violations surface as errors.
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Session, Stone};
//!
//! let mut session = Session::new(3, 3, 3)?;
//!
//! // Black takes the top row while White answers below
//! for index in [0, 3, 1, 4, 2] {
//!     session.play(index)?;
//! }
//!
//! assert_eq!(session.winner(), Some(Stone::Black));
//! assert_eq!(session.winning_line(), Some(&[0, 1, 2][..]));
//! # Ok::<(), gomoku::SessionError>(())
//! ```

pub mod board;
pub mod error;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Stone, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_WIN_LEN};
pub use error::SessionError;
pub use session::{MoveOutcome, Session};
