//! Game session: move history, turn tracking and win status
//!
//! A [`Session`] owns the append-only sequence of board snapshots for one
//! game and a cursor into it. Every accepted move derives a new snapshot
//! from the current one (snapshots are never mutated after creation), runs
//! win detection around the placed cell, and records the verdict. Rewinding
//! truncates the history at the cursor; there is no redo and no branching.
//!
//! A session is a plain value with no interior synchronization. It expects
//! a single writer; published snapshots are immutable and safe to read
//! while the next move is being computed.

use tracing::{debug, trace};

use crate::board::{Board, Stone, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_WIN_LEN};
use crate::error::SessionError;
use crate::rules::find_winning_line;

/// Result of a [`Session::play`] request that passed the index check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The stone was placed; `cursor` points at the new snapshot.
    Placed {
        cursor: usize,
        /// Cells of the completed run, for highlighting. Not part of the
        /// history.
        winning_line: Option<Vec<usize>>,
    },
    /// The request was ignored: the cell is occupied or the game is already
    /// decided. The session is unchanged.
    Ignored,
}

/// One game of Gomoku with full move history.
pub struct Session {
    win_len: usize,
    /// `history[0]` is the all-empty board; each later snapshot differs
    /// from its predecessor in exactly one cell.
    history: Vec<Board>,
    cursor: usize,
    turn: Stone,
    winner: Option<Stone>,
    winning_line: Option<Vec<usize>>,
}

impl Session {
    /// Create a session for a `rows` x `cols` board where `win_len` stones
    /// in a row win.
    ///
    /// Dimension/win-length consistency is validated once here rather than
    /// on every move.
    pub fn new(rows: usize, cols: usize, win_len: usize) -> Result<Self, SessionError> {
        if rows == 0 || cols == 0 || win_len == 0 || win_len > rows.max(cols) {
            return Err(SessionError::InvalidConfiguration {
                rows,
                cols,
                win_len,
            });
        }
        Ok(Self {
            win_len,
            history: vec![Board::new(rows, cols)],
            cursor: 0,
            turn: Stone::Black,
            winner: None,
            winning_line: None,
        })
    }

    /// Session with the stock 20x20 board and five-in-a-row rule.
    pub fn with_defaults() -> Self {
        Self {
            win_len: DEFAULT_WIN_LEN,
            history: vec![Board::new(DEFAULT_ROWS, DEFAULT_COLS)],
            cursor: 0,
            turn: Stone::Black,
            winner: None,
            winning_line: None,
        }
    }

    /// Place the current player's stone at `index`.
    ///
    /// An index outside the board is a caller contract violation and comes
    /// back as [`SessionError::OutOfRange`]. An occupied cell or a move
    /// after the game is decided is not an error: the request is ignored
    /// and the session left untouched.
    pub fn play(&mut self, index: usize) -> Result<MoveOutcome, SessionError> {
        let current = &self.history[self.cursor];
        if index >= current.len() {
            return Err(SessionError::OutOfRange {
                index,
                rows: current.rows(),
                cols: current.cols(),
            });
        }
        if self.winner.is_some() || !current.is_empty(index) {
            trace!(index, "move ignored");
            return Ok(MoveOutcome::Ignored);
        }

        // Drop any redo tail left behind by an earlier rewind.
        self.history.truncate(self.cursor + 1);

        let mut next = self.history[self.cursor].clone();
        next.set(index, self.turn);

        let line = find_winning_line(&next, index, self.win_len);

        self.history.push(next);
        self.cursor = self.history.len() - 1;

        if line.is_some() {
            self.winner = Some(self.turn);
            debug!(player = ?self.turn, index, "winning move");
        } else {
            trace!(player = ?self.turn, index, cursor = self.cursor, "move placed");
        }
        self.winning_line = line.clone();

        // The turn flips even on a winning move; `turn` carries no meaning
        // once a winner is set.
        self.turn = self.turn.opponent();

        Ok(MoveOutcome::Placed {
            cursor: self.cursor,
            winning_line: line,
        })
    }

    /// Undo one move, discarding the current snapshot.
    ///
    /// There is no redo: a later [`Session::play`] overwrites the future.
    /// Ignored at the initial snapshot. The turn toggle assumes rewinds
    /// alternate with plays; consecutive rewinds leave `turn` out of step
    /// with the cursor parity.
    pub fn rewind(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.history.truncate(self.cursor);
        self.cursor = self.history.len() - 1;
        self.turn = self.turn.opponent();
        self.winner = None;
        self.winning_line = None;
        debug!(cursor = self.cursor, "rewound one move");
    }

    /// Start the game over, keeping the board dimensions and win length.
    pub fn reset(&mut self) {
        let (rows, cols) = (self.rows(), self.cols());
        self.history = vec![Board::new(rows, cols)];
        self.cursor = 0;
        self.turn = Stone::Black;
        self.winner = None;
        self.winning_line = None;
        debug!("session reset");
    }

    /// Snapshot at the cursor (the board to display).
    #[inline]
    pub fn current(&self) -> &Board {
        &self.history[self.cursor]
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of moves played so far; equals the cursor.
    #[inline]
    pub fn move_number(&self) -> usize {
        self.cursor
    }

    /// Whose stone the next accepted move places.
    #[inline]
    pub fn turn(&self) -> Stone {
        self.turn
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    /// Cells of the winning run, ascending, present only while the winner
    /// is set.
    pub fn winning_line(&self) -> Option<&[usize]> {
        self.winning_line.as_deref()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.history[0].rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.history[0].cols()
    }

    #[inline]
    pub fn win_len(&self) -> usize {
        self.win_len
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Cell changed by the most recent move, recovered from the
    /// one-cell-per-snapshot history invariant. `None` at the initial
    /// snapshot.
    pub fn last_move(&self) -> Option<usize> {
        if self.cursor == 0 {
            return None;
        }
        let prev = &self.history[self.cursor - 1];
        let current = &self.history[self.cursor];
        (0..current.len()).find(|&i| prev.get(i) != current.get(i))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_3x3() -> Session {
        Session::new(3, 3, 3).unwrap()
    }

    #[test]
    fn test_new_session_initial_state() {
        let session = session_3x3();
        assert_eq!(session.history_len(), 1);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.turn(), Stone::Black);
        assert_eq!(session.winner(), None);
        assert!(session.current().is_board_empty());
        assert_eq!(session.last_move(), None);
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        assert!(matches!(
            Session::new(0, 3, 3),
            Err(SessionError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Session::new(3, 0, 3),
            Err(SessionError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Session::new(3, 3, 0),
            Err(SessionError::InvalidConfiguration { .. })
        ));
        // K must fit the longer board dimension
        assert!(matches!(
            Session::new(3, 4, 5),
            Err(SessionError::InvalidConfiguration { .. })
        ));
        assert!(Session::new(3, 5, 5).is_ok());
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        let mut session = session_3x3();
        assert_eq!(
            session.play(9),
            Err(SessionError::OutOfRange {
                index: 9,
                rows: 3,
                cols: 3
            })
        );
        // And the session is untouched
        assert_eq!(session.history_len(), 1);
        assert_eq!(session.turn(), Stone::Black);
    }

    #[test]
    fn test_turn_alternation() {
        let mut session = Session::with_defaults();
        for (n, index) in [0usize, 1, 2, 3, 4, 5].into_iter().enumerate() {
            let expected = if n % 2 == 0 { Stone::Black } else { Stone::White };
            assert_eq!(session.turn(), expected);
            assert!(matches!(
                session.play(index),
                Ok(MoveOutcome::Placed { .. })
            ));
        }
    }

    #[test]
    fn test_history_grows_one_cell_per_move() {
        let mut session = Session::with_defaults();
        session.play(0).unwrap();
        session.play(21).unwrap();
        session.play(7).unwrap();

        assert_eq!(session.history_len(), session.cursor() + 1);
        assert_eq!(session.cursor(), 3);
        assert_eq!(session.last_move(), Some(7));
        assert_eq!(session.current().stone_count(), 3);
    }

    #[test]
    fn test_occupied_cell_silently_ignored() {
        let mut session = session_3x3();
        session.play(4).unwrap();
        let turn_before = session.turn();

        assert_eq!(session.play(4), Ok(MoveOutcome::Ignored));
        assert_eq!(session.history_len(), 2);
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.turn(), turn_before);
        assert_eq!(session.winner(), None);
    }

    #[test]
    fn test_horizontal_win_scenario() {
        // Black: 0, 1, 2 across the top row; White: 3, 4
        let mut session = session_3x3();
        for index in [0, 3, 1, 4] {
            session.play(index).unwrap();
        }
        let outcome = session.play(2).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::Placed {
                cursor: 5,
                winning_line: Some(vec![0, 1, 2]),
            }
        );
        assert_eq!(session.winner(), Some(Stone::Black));
        assert_eq!(session.winning_line(), Some(&[0, 1, 2][..]));
        // Reference behavior: turn flips even on the winning move
        assert_eq!(session.turn(), Stone::White);
    }

    #[test]
    fn test_diagonal_win_scenario() {
        // Black marches down the "\" diagonal 0, 6, 12 on a 5x5 board;
        // White plays elsewhere and never blocks
        let mut session = Session::new(5, 5, 3).unwrap();
        for index in [0, 20, 6, 21] {
            session.play(index).unwrap();
        }
        let outcome = session.play(12).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::Placed {
                cursor: 5,
                winning_line: Some(vec![0, 6, 12]),
            }
        );
        assert_eq!(session.winner(), Some(Stone::Black));
    }

    #[test]
    fn test_moves_after_win_ignored() {
        let mut session = session_3x3();
        for index in [0, 3, 1, 4, 2] {
            session.play(index).unwrap();
        }
        assert_eq!(session.winner(), Some(Stone::Black));

        let history_before = session.history_len();
        assert_eq!(session.play(8), Ok(MoveOutcome::Ignored));
        assert_eq!(session.history_len(), history_before);
        assert_eq!(session.winner(), Some(Stone::Black));
    }

    #[test]
    fn test_rewind_steps_back_and_clears_winner() {
        let mut session = session_3x3();
        for index in [0, 3, 1, 4, 2] {
            session.play(index).unwrap();
        }
        assert_eq!(session.winner(), Some(Stone::Black));

        session.rewind();
        assert_eq!(session.cursor(), 4);
        assert_eq!(session.history_len(), 5);
        assert_eq!(session.winner(), None);
        assert_eq!(session.winning_line(), None);
        // The winning move is gone from the board
        assert!(session.current().is_empty(2));
        // One-ply undo toggles the turn back to the player who just moved
        assert_eq!(session.turn(), Stone::Black);
    }

    #[test]
    fn test_rewind_at_start_is_a_no_op() {
        let mut session = session_3x3();
        session.rewind();
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.history_len(), 1);
        assert_eq!(session.turn(), Stone::Black);
    }

    #[test]
    fn test_play_after_rewind_overwrites_future() {
        let mut session = session_3x3();
        session.play(0).unwrap();
        session.play(4).unwrap();

        session.rewind();
        assert_eq!(session.cursor(), 1);

        // A different move replaces the discarded snapshot
        session.play(8).unwrap();
        assert_eq!(session.history_len(), session.cursor() + 1);
        assert_eq!(session.cursor(), 2);
        assert!(session.current().is_empty(4));
        assert_eq!(session.current().get(8), Stone::White);
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut session = session_3x3();
        for index in [0, 3, 1, 4, 2] {
            session.play(index).unwrap();
        }
        session.reset();

        assert_eq!(session.history_len(), 1);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.turn(), Stone::Black);
        assert_eq!(session.winner(), None);
        assert_eq!(session.winning_line(), None);
        assert!(session.current().is_board_empty());
        // Dimensions and win length survive the reset
        assert_eq!(session.rows(), 3);
        assert_eq!(session.cols(), 3);
        assert_eq!(session.win_len(), 3);
    }

    #[test]
    fn test_last_move_after_rewind() {
        let mut session = session_3x3();
        session.play(0).unwrap();
        session.play(4).unwrap();
        assert_eq!(session.last_move(), Some(4));

        session.rewind();
        assert_eq!(session.last_move(), Some(0));

        session.rewind();
        assert_eq!(session.last_move(), None);
    }

    #[test]
    fn test_snapshots_are_immutable_history() {
        // Earlier snapshots keep their contents as the game advances
        let mut session = session_3x3();
        session.play(0).unwrap();
        session.play(4).unwrap();

        session.rewind();
        session.rewind();
        assert!(session.current().is_board_empty());
    }
}
