//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage and from the controller so the view and the reducer can
//! both consult them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinningLine, evaluate, lines, lines_for};
