//! Tic-tac-toe with a time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw evaluation over a [`Board`]
//! - **Game**: [`GameState`], an immutable controller driven by [`reduce`]
//! - **History**: snapshots with jump-back and reversible ordering
//! - **View**: stateless board and move-list models for any front end
//!
//! # Example
//!
//! ```
//! use timetoe::{Action, GameState, Status, reduce};
//!
//! let state = [0, 1, 4, 2, 8]
//!     .into_iter()
//!     .fold(GameState::new(), |state, i| reduce(&state, Action::Click(i)));
//! assert_eq!(state.status().to_string(), "Winner: X");
//! assert!(matches!(state.status(), Status::Winner(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
pub mod rules;
mod status;
mod types;
pub mod view;

pub use action::{Action, ParseActionError, reduce};
pub use game::GameState;
pub use history::{History, SortOrder, Step};
pub use rules::WinningLine;
pub use status::Status;
pub use types::{Board, BoardShapeError, Player, STANDARD_SIDE, Square};
pub use view::{BoardView, CellView, GameView, MoveEntry};
