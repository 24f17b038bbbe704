//! Stateless view models for the board and the move list.
//!
//! Nothing here holds state: each call re-derives its output from the
//! arguments. Cells and move entries carry the message they dispatch when
//! clicked, leaving it to the controller to decide whether the message
//! does anything.

use crate::history::SortOrder;
use crate::rules::WinningLine;
use crate::status::Status;
use crate::{Action, Board, GameState, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One square as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView<A> {
    /// Board index.
    pub index: usize,
    /// Row, from the top.
    pub row: usize,
    /// Column, from the left.
    pub col: usize,
    /// Contents of the square.
    pub square: Square,
    /// Whether the square lies on the winning line.
    pub winning: bool,
    /// Message produced by clicking this square.
    pub on_click: A,
}

impl<A> CellView<A> {
    /// Text shown in the cell; blank when empty.
    pub fn label(&self) -> &'static str {
        self.square.label()
    }
}

/// A board laid out as rows of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView<A> {
    /// Side length.
    pub side: usize,
    /// Cells in row-major order.
    pub cells: Vec<CellView<A>>,
}

impl<A> BoardView<A> {
    /// Cells grouped by row.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView<A>]> {
        self.cells.chunks(self.side.max(1))
    }

    /// Cell at `index`.
    pub fn cell(&self, index: usize) -> Option<&CellView<A>> {
        self.cells.get(index)
    }
}

/// Lays out `board`, marking cells on `winning` and attaching `on_click`'s
/// message to every cell regardless of its contents.
#[instrument(skip_all, fields(side = board.side()))]
pub fn render_board<A, F>(board: &Board, winning: Option<&WinningLine>, on_click: F) -> BoardView<A>
where
    F: Fn(usize) -> A,
{
    let side = board.side();
    let cells = board
        .squares()
        .iter()
        .enumerate()
        .map(|(index, &square)| CellView {
            index,
            row: index / side,
            col: index % side,
            square,
            winning: winning.is_some_and(|line| line.contains(index)),
            on_click: on_click(index),
        })
        .collect();
    BoardView { side, cells }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Snapshot id.
    pub id: usize,
    /// Button text.
    pub label: String,
    /// Whether this snapshot is the one displayed.
    pub current: bool,
    /// Message produced by clicking the entry.
    pub on_click: Action,
}

/// Builds the move list in stored order.
///
/// Moves are labelled with their 1-based `(column, row)`.
#[instrument(skip(state), fields(step = state.step(), len = state.history().len()))]
pub fn render_moves(state: &GameState) -> Vec<MoveEntry> {
    state
        .history()
        .steps()
        .iter()
        .map(|step| {
            let id = *step.id();
            let label = match *step.changed() {
                Some(changed) if id > 0 => {
                    let (row, col) = step.board().coordinate(changed);
                    format!("Go to move # {id} ({}, {})", col + 1, row + 1)
                }
                _ => "Go to game start".to_string(),
            };
            MoveEntry {
                id,
                label,
                current: id == state.step(),
                on_click: Action::JumpTo(id),
            }
        })
        .collect()
}

/// Label for the sort control.
pub fn sort_label(order: SortOrder) -> String {
    format!("sort ({order})")
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The current board.
    pub board: BoardView<Action>,
    /// Status line.
    pub status: Status,
    /// Move list in stored order.
    pub moves: Vec<MoveEntry>,
    /// Current sort direction.
    pub order: SortOrder,
}

impl GameView {
    /// Derives the full view from `state`.
    #[instrument(skip(state), fields(step = state.step()))]
    pub fn of(state: &GameState) -> Self {
        let winning = state.winning_line();
        Self {
            board: render_board(state.board(), winning.as_ref(), Action::Click),
            status: state.status(),
            moves: render_moves(state),
            order: state.sort_order(),
        }
    }

    /// Renders the view as plain text: board, status, then the move list.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in self.board.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| {
                    let mark = match cell.label() {
                        "" => ".",
                        label => label,
                    };
                    if cell.winning {
                        format!("[{mark}]")
                    } else {
                        format!(" {mark} ")
                    }
                })
                .collect();
            out.push_str(&line.concat());
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.status.to_string());
        out.push('\n');
        for (n, entry) in self.moves.iter().enumerate() {
            let marker = if entry.current { '>' } else { ' ' };
            out.push_str(&format!("{marker} {}. {}\n", n + 1, entry.label));
        }
        out
    }
}
