//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the standard board.
pub const STANDARD_SIDE: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player due to move at the given step.
    ///
    /// X moves on even steps and O on odd ones, since exactly one mark is
    /// placed per step.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Text shown for this square. Empty squares render blank.
    pub fn label(self) -> &'static str {
        match self {
            Square::Empty => "",
            Square::Occupied(Player::X) => "X",
            Square::Occupied(Player::O) => "O",
        }
    }
}

/// The squares handed to [`Board::from_squares`] do not form a square grid.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{len} squares do not form a square board")]
pub struct BoardShapeError {
    /// Number of squares supplied.
    pub len: usize,
}

/// Square board stored row-major.
///
/// The length is always a non-zero perfect square.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty standard 3x3 board.
    pub fn new() -> Self {
        Self::with_side(STANDARD_SIDE)
    }

    /// Creates an empty `side` x `side` board. A side of 0 yields a 1x1 board.
    pub fn with_side(side: usize) -> Self {
        let side = side.max(1);
        Self {
            squares: vec![Square::Empty; side * side],
        }
    }

    /// Builds a board from row-major squares.
    ///
    /// # Errors
    ///
    /// Returns [`BoardShapeError`] unless the length is a non-zero perfect
    /// square.
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_squares(squares: Vec<Square>) -> Result<Self, BoardShapeError> {
        let len = squares.len();
        let side = len.isqrt();
        if len == 0 || side * side != len {
            return Err(BoardShapeError { len });
        }
        Ok(Self { squares })
    }

    /// Side length of the board.
    pub fn side(&self) -> usize {
        self.squares.len().isqrt()
    }

    /// Number of squares on the board.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Always false for a well-formed board.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Gets the square at the given index.
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Checks if the square at `pos` exists and holds no mark.
    pub fn is_vacant(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Places `player` at `pos` if that square is vacant.
    ///
    /// Returns whether the mark was placed.
    pub fn place(&mut self, pos: usize, player: Player) -> bool {
        match self.squares.get_mut(pos) {
            Some(square @ Square::Empty) => {
                *square = Square::Occupied(player);
                true
            }
            _ => false,
        }
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Maps an index to its `(row, col)` coordinate.
    pub fn coordinate(&self, pos: usize) -> (usize, usize) {
        let side = self.side();
        (pos / side, pos % side)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_three_by_three() {
        let board = Board::new();
        assert_eq!(board.len(), 9);
        assert_eq!(board.side(), 3);
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_from_squares_rejects_non_square_lengths() {
        assert_eq!(
            Board::from_squares(vec![Square::Empty; 8]),
            Err(BoardShapeError { len: 8 })
        );
        assert!(Board::from_squares(Vec::new()).is_err());
        assert_eq!(Board::from_squares(vec![Square::Empty; 16]).map(|b| b.side()), Ok(4));
    }

    #[test]
    fn test_place_only_fills_vacant_squares() {
        let mut board = Board::new();
        assert!(board.place(4, Player::X));
        assert!(!board.place(4, Player::O));
        assert!(!board.place(9, Player::O));
        assert_eq!(board.get(4), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_coordinate_is_row_major() {
        let board = Board::new();
        assert_eq!(board.coordinate(0), (0, 0));
        assert_eq!(board.coordinate(5), (1, 2));
        assert_eq!(board.coordinate(7), (2, 1));
    }

    #[test]
    fn test_player_for_step_alternates() {
        assert_eq!(Player::for_step(0), Player::X);
        assert_eq!(Player::for_step(1), Player::O);
        assert_eq!(Player::for_step(6), Player::X);
    }

    #[test]
    fn test_zero_side_is_clamped() {
        let board = Board::with_side(0);
        assert_eq!(board.len(), 1);
        assert_eq!(board.side(), 1);
        assert_eq!(board.coordinate(0), (0, 0));
    }
}
