//! Game controller: history, current step, turn and sort order.
//!
//! Every operation takes `&self` and returns the next state, so the
//! controller can be driven as a plain reducer (see [`crate::reduce`]).
//! Rejected input yields an unchanged copy rather than an error.

use crate::history::{History, SortOrder, Step};
use crate::rules::{self, WinningLine};
use crate::status::Status;
use crate::{Board, Player};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Complete game state.
///
/// History always holds step 0, so [`GameState::current`] always finds an
/// entry. States can be serialized but only built through the constructors
/// and transitions below:
///
/// ```compile_fail
/// let json = r#"{"history":{"steps":[],"order":"Ascending"},"step":0,"next":"X"}"#;
/// let _state: timetoe::GameState = serde_json::from_str(json).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: History,
    /// Id of the snapshot being displayed and played from.
    step: usize,
    /// Player who places the next mark.
    next: Player,
}

impl GameState {
    /// Starts a game on an empty standard board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Starts a game from `board` as step 0.
    #[instrument(skip(board), fields(side = board.side()))]
    pub fn with_board(board: Board) -> Self {
        Self {
            history: History::new(board),
            step: 0,
            next: Player::X,
        }
    }

    /// Every snapshot, in display order.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Id of the current snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Player who places the next mark.
    pub fn next_player(&self) -> Player {
        self.next
    }

    /// Direction history is stored in.
    pub fn sort_order(&self) -> SortOrder {
        self.history.order()
    }

    /// The snapshot whose id matches the current step.
    pub fn current(&self) -> &Step {
        // jump_to only accepts ids present in history.
        self.history
            .find(self.step)
            .unwrap_or_else(|| &self.history.steps()[0])
    }

    /// Board of the current snapshot.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Completed line on the current board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::evaluate(self.board())
    }

    /// Status line for the current snapshot.
    ///
    /// The winner is named as the opposite of the next mover, which is the
    /// player who placed the last mark.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn status(&self) -> Status {
        if self.winning_line().is_some() {
            Status::Winner(self.next.opponent())
        } else if rules::is_full(self.board()) {
            Status::Draw
        } else {
            Status::Next(self.next)
        }
    }

    /// Places the next mark at `index` on the current snapshot.
    ///
    /// Snapshots newer than the current step are discarded first. Clicking
    /// a decided board or an occupied square leaves the state unchanged.
    #[instrument(skip(self), fields(step = self.step, next = %self.next))]
    pub fn handle_click(&self, index: usize) -> Self {
        let mut history = self.history.truncated(self.step);
        let Some(active) = history.latest() else {
            warn!("History is empty; ignoring click");
            return self.clone();
        };

        if let Some(line) = rules::evaluate(active.board()) {
            debug!(line = ?line.indices(), "Board already decided; ignoring click");
            return self.clone();
        }

        let mut board = active.board().clone();
        if !board.place(index, self.next) {
            debug!("Square occupied; ignoring click");
            return self.clone();
        }

        let id = history.len();
        history.push_latest(Step::after_move(id, board, index));
        info!(id, index, player = %self.next, "Move placed");

        Self {
            history,
            step: id,
            next: self.next.opponent(),
        }
    }

    /// Makes snapshot `step` current without touching history.
    ///
    /// The next mover follows step parity. Unknown ids are ignored.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&self, step: usize) -> Self {
        if self.history.find(step).is_none() {
            warn!(step, "No such step; ignoring jump");
            return self.clone();
        }
        debug!(step, "Jumping");
        Self {
            history: self.history.clone(),
            step,
            next: Player::for_step(step),
        }
    }

    /// Reverses the stored order of history and flips the sort direction.
    #[instrument(skip(self), fields(order = %self.history.order()))]
    pub fn reverse_history(&self) -> Self {
        debug!("Reversing history");
        Self {
            history: self.history.reversed(),
            step: self.step,
            next: self.next,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(moves: &[usize]) -> GameState {
        moves
            .iter()
            .fold(GameState::new(), |state, &pos| state.handle_click(pos))
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.step(), 0);
        assert_eq!(state.next_player(), Player::X);
        assert_eq!(state.sort_order(), SortOrder::Ascending);
        assert_eq!(state.status(), Status::Next(Player::X));
    }

    #[test]
    fn test_click_after_jump_discards_future() {
        let state = play(&[0, 1, 2]).jump_to(1).handle_click(8);
        assert_eq!(state.history().len(), 3);
        assert_eq!(state.step(), 2);
        assert_eq!(state.board().get(8), Some(Square::Occupied(Player::O)));
        assert_eq!(state.board().get(1), Some(Square::Empty));
    }

    #[test]
    fn test_click_while_descending_appends_at_front() {
        let state = play(&[0, 1]).reverse_history().handle_click(4);
        let ids: Vec<usize> = state.history().steps().iter().map(|s| *s.id()).collect();
        assert_eq!(ids, vec![3, 2, 1, 0]);
        assert_eq!(state.step(), 3);
        assert_eq!(state.board().get(4), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_click_after_jump_while_descending() {
        let state = play(&[0, 1, 2]).reverse_history().jump_to(1).handle_click(5);
        let ids: Vec<usize> = state.history().steps().iter().map(|s| *s.id()).collect();
        assert_eq!(ids, vec![2, 1, 0]);
        assert_eq!(*state.current().changed(), Some(5));
    }

    #[test]
    fn test_active_step_is_latest_after_truncation() {
        let state = play(&[0, 1, 2]).reverse_history().jump_to(2);
        let truncated = state.history().truncated(state.step());
        assert_eq!(truncated.latest(), state.history().find(2));
    }

    #[test]
    fn test_serialized_state_keeps_opening_step() {
        let json = serde_json::to_value(play(&[4]).reverse_history()).expect("serializable");
        let steps = json["history"]["steps"].as_array().expect("steps");
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1]["id"], serde_json::json!(0));
        assert_eq!(steps[1]["changed"], serde_json::Value::Null);
        assert_eq!(json["next"], serde_json::json!("O"));
    }

    #[test]
    fn test_jump_to_unknown_step_is_ignored() {
        let state = play(&[4]);
        assert_eq!(state.jump_to(5), state);
    }

    #[test]
    fn test_out_of_range_click_is_ignored() {
        let state = play(&[4]);
        assert_eq!(state.handle_click(9), state);
    }

    #[test]
    fn test_jump_to_start_restores_empty_board() {
        let state = play(&[4, 0]).jump_to(0);
        assert!(state.board().squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(state.next_player(), Player::X);
        assert_eq!(state.history().len(), 3);
    }

    #[test]
    fn test_reverse_keeps_current_step() {
        let state = play(&[4, 0]).jump_to(1).reverse_history();
        assert_eq!(state.step(), 1);
        assert_eq!(*state.current().changed(), Some(4));
    }
}
