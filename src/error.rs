/// Errors surfaced to the host when a session request breaks its contract.
///
/// In-game rejections (occupied cell, game already decided, undo at the
/// initial snapshot) are deliberately not errors; they are silently ignored
/// and leave the session unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("cell index {index} out of range for a {rows}x{cols} board")]
    OutOfRange {
        index: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid configuration: win length {win_len} does not fit a {rows}x{cols} board")]
    InvalidConfiguration {
        rows: usize,
        cols: usize,
        win_len: usize,
    },
}
