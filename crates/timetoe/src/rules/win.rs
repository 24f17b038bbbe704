//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, STANDARD_SIDE, Square};
use serde::Serialize;
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::instrument;

static STANDARD_LINES: LazyLock<Vec<Vec<usize>>> = LazyLock::new(|| lines(STANDARD_SIDE));

/// Indices of a completed line, in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WinningLine {
    player: Player,
    indices: Vec<usize>,
}

impl WinningLine {
    /// The player whose marks fill the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Board indices that make up the line.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Checks whether `pos` lies on the line.
    pub fn contains(&self, pos: usize) -> bool {
        self.indices.contains(&pos)
    }
}

/// Enumerates every winning line for a `side` x `side` board.
///
/// Rows top to bottom, then columns left to right, then the main diagonal
/// and the anti-diagonal. For a 3x3 board these are the usual eight triples.
pub fn lines(side: usize) -> Vec<Vec<usize>> {
    let rows = (0..side).map(|r| (0..side).map(|c| r * side + c).collect::<Vec<_>>());
    let cols = (0..side).map(|c| (0..side).map(|r| r * side + c).collect::<Vec<_>>());
    let main: Vec<usize> = (0..side).map(|i| i * side + i).collect();
    let anti: Vec<usize> = (0..side).map(|i| i * side + (side - 1 - i)).collect();
    rows.chain(cols).chain([main, anti]).collect()
}

/// Winning lines for `side`, shared for the standard board and built on
/// demand for any other size.
pub fn lines_for(side: usize) -> Cow<'static, [Vec<usize>]> {
    if side == STANDARD_SIDE {
        Cow::Borrowed(STANDARD_LINES.as_slice())
    } else {
        Cow::Owned(lines(side))
    }
}

/// Returns the first line whose squares all hold the same mark.
///
/// Lines are checked in [`lines`] order, so if a board somehow holds two
/// completed lines the earlier one is reported.
#[instrument(skip(board), fields(side = board.side()))]
pub fn evaluate(board: &Board) -> Option<WinningLine> {
    lines_for(board.side()).iter().find_map(|line| {
        let first = line.first().and_then(|&i| board.get(i))?;
        let Square::Occupied(player) = first else {
            return None;
        };
        line.iter()
            .all(|&i| board.get(i) == Some(first))
            .then(|| WinningLine {
                player,
                indices: line.clone(),
            })
    })
}
