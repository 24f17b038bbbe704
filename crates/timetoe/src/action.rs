//! First-class actions and the reducer that applies them.
//!
//! Front ends never mutate [`GameState`] directly; they turn input into an
//! [`Action`] and replace their state with [`reduce`]'s result.

use crate::GameState;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    /// Mark the square at this index.
    #[display("click {_0}")]
    Click(usize),
    /// Show the snapshot with this id.
    #[display("jump {_0}")]
    JumpTo(usize),
    /// Flip the history sort order.
    #[display("reverse")]
    ReverseHistory,
}

/// Applies `action` to `state`, returning the next state.
#[instrument(skip(state), fields(step = state.step()))]
pub fn reduce(state: &GameState, action: Action) -> GameState {
    match action {
        Action::Click(index) => state.handle_click(index),
        Action::JumpTo(step) => state.jump_to(step),
        Action::ReverseHistory => state.reverse_history(),
    }
}

/// A token that does not name an action.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid action {token:?}: expected <index>, j<step> or r")]
pub struct ParseActionError {
    /// The rejected token.
    pub token: String,
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses `"4"` as a click, `"j2"` as a jump and `"r"` as a reverse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let err = || ParseActionError {
            token: token.to_string(),
        };
        if token.eq_ignore_ascii_case("r") {
            return Ok(Action::ReverseHistory);
        }
        if let Some(step) = token.strip_prefix('j').or_else(|| token.strip_prefix('J')) {
            return step.parse().map(Action::JumpTo).map_err(|_| err());
        }
        token.parse().map(Action::Click).map_err(|_| err())
    }
}
