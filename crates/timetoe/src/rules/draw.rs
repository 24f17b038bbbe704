//! Draw detection logic for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// True once every square carries a mark.
///
/// Callers rule out a completed line first; a full board without one is a
/// draw.
#[instrument(skip(board), fields(side = board.side()))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|square| square.player().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;
    use crate::rules::win::evaluate;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && evaluate(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(4, Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_one_by_one_fills_after_one_mark() {
        let mut board = Board::with_side(1);
        assert!(!is_full(&board));
        board.place(0, Player::O);
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        for (pos, player) in [0, 2, 4, 5, 7].map(|p| (p, Player::X)) {
            board.place(pos, player);
        }
        for pos in [1, 3, 6, 8] {
            board.place(pos, Player::O);
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for pos in [0, 1, 2, 4, 8] {
            board.place(pos, Player::X);
        }
        for pos in [3, 5, 6, 7] {
            board.place(pos, Player::O);
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
