//! Status line derived from the current snapshot.

use crate::Player;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// What the status line reports for the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Status {
    /// A line is complete.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Every square is filled and no line is complete.
    #[display("It's a draw.")]
    Draw,
    /// Play continues with this player.
    #[display("Next player: {_0}")]
    Next(Player),
}

impl Status {
    /// Whether the snapshot is decided.
    pub fn is_over(self) -> bool {
        !matches!(self, Status::Next(_))
    }
}
