//! Win detection around the most recent move
//!
//! Only runs passing through the just-placed cell can change the game's
//! status, so instead of rescanning the whole board each direction is
//! scanned inside a window of `2K-1` cells centered on the placed move,
//! clipped at the board edges. O(K) per direction, independent of board
//! size.

use crate::board::{Board, Stone};

/// A directional scan: step size in linear-index space plus how many steps
/// the window may reach backward/forward from the placed cell without
/// crossing a row or column boundary.
#[derive(Debug, Clone, Copy)]
struct Scan {
    step: usize,
    back: usize,
    forward: usize,
}

/// Find a run of `win_len` equal stones through `placed`, if one exists.
///
/// Returns the cell indices of the run in ascending board order, always
/// exactly `win_len` long and containing `placed`. Directions are tried in
/// a fixed order (row, column, `\` diagonal, `/` diagonal) and the first
/// completed run wins; a single placement can complete at most one run per
/// direction. Returns `None` when the placed cell is empty.
pub fn find_winning_line(board: &Board, placed: usize, win_len: usize) -> Option<Vec<usize>> {
    let target = board.get(placed);
    if target == Stone::Empty {
        return None;
    }

    let cols = board.cols();
    let reach = win_len - 1;

    // Distances from the placed cell to each board edge, in cells
    let left = board.col_of(placed);
    let top = board.row_of(placed);
    let right = cols - 1 - left;
    let bottom = board.rows() - 1 - top;

    let scans = [
        // Row
        Scan {
            step: 1,
            back: left.min(reach),
            forward: right.min(reach),
        },
        // Column
        Scan {
            step: cols,
            back: top.min(reach),
            forward: bottom.min(reach),
        },
        // Diagonal "\" (down-right)
        Scan {
            step: cols + 1,
            back: left.min(top).min(reach),
            forward: right.min(bottom).min(reach),
        },
        // Diagonal "/" (down-left); degenerate (step 0) on a 1-wide board
        Scan {
            step: cols - 1,
            back: right.min(top).min(reach),
            forward: left.min(bottom).min(reach),
        },
    ];

    scans
        .iter()
        .filter(|scan| scan.step > 0)
        .find_map(|scan| scan_window(board, target, placed, *scan, win_len))
}

/// Scan one clipped window for a run of `win_len` stones matching `target`.
///
/// Walks the window in ascending index order keeping the current run of
/// consecutive matches; any empty or opposing cell resets it. Stops early
/// once the cells left in the window cannot complete the run.
fn scan_window(
    board: &Board,
    target: Stone,
    placed: usize,
    scan: Scan,
    win_len: usize,
) -> Option<Vec<usize>> {
    let low = placed - scan.back * scan.step;
    let high = placed + scan.forward * scan.step;

    let mut run: Vec<usize> = Vec::with_capacity(win_len);
    let mut index = low;

    while index <= high {
        // Cells left in the window, counting this one
        let remaining = (high - index) / scan.step + 1;
        if remaining < win_len - run.len() {
            break;
        }

        if board.get(index) == target {
            run.push(index);
            if run.len() == win_len {
                return Some(run);
            }
        } else {
            run.clear();
        }

        index += scan.step;
    }

    None
}
