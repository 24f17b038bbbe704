//! Move history with time-travel and reversible ordering.

use crate::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Direction in which history entries are stored and listed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Oldest entry first.
    #[default]
    Ascending,
    /// Newest entry first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One immutable board snapshot in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Step {
    /// Position of this snapshot in play order; 0 is the empty board.
    id: usize,
    /// The board after this step's move.
    board: Board,
    /// Square that changed to produce this snapshot, absent for step 0.
    changed: Option<usize>,
}

impl Step {
    /// The opening snapshot.
    pub fn initial(board: Board) -> Self {
        Self {
            id: 0,
            board,
            changed: None,
        }
    }

    /// A snapshot produced by marking `changed`.
    pub fn after_move(id: usize, board: Board, changed: usize) -> Self {
        Self {
            id,
            board,
            changed: Some(changed),
        }
    }
}

/// Ordered snapshots plus the direction they are stored in.
///
/// Ids are contiguous from 0 and physical order is always monotonic in id:
/// increasing when [`SortOrder::Ascending`], decreasing otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    steps: Vec<Step>,
    order: SortOrder,
}

impl History {
    /// Creates a history holding only the opening snapshot.
    pub fn new(board: Board) -> Self {
        Self {
            steps: vec![Step::initial(board)],
            order: SortOrder::Ascending,
        }
    }

    /// Entries in physical (display) order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Current storage direction.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: the opening snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Looks an entry up by id, independent of physical position.
    pub fn find(&self, id: usize) -> Option<&Step> {
        self.steps.iter().find(|step| step.id == id)
    }

    /// The logically latest entry: last when ascending, first when descending.
    pub fn latest(&self) -> Option<&Step> {
        match self.order {
            SortOrder::Ascending => self.steps.last(),
            SortOrder::Descending => self.steps.first(),
        }
    }

    /// Copy of this history without entries newer than `step`.
    #[instrument(skip(self), fields(len = self.steps.len()))]
    pub fn truncated(&self, step: usize) -> Self {
        let steps: Vec<Step> = self
            .steps
            .iter()
            .filter(|entry| entry.id <= step)
            .cloned()
            .collect();
        debug!(kept = steps.len(), "Truncated history");
        Self {
            steps,
            order: self.order,
        }
    }

    /// Inserts `step` at the logically latest end.
    pub fn push_latest(&mut self, step: Step) {
        match self.order {
            SortOrder::Ascending => self.steps.push(step),
            SortOrder::Descending => self.steps.insert(0, step),
        }
    }

    /// Copy with physical order reversed and the direction flipped.
    pub fn reversed(&self) -> Self {
        let mut steps = self.steps.clone();
        steps.reverse();
        Self {
            steps,
            order: self.order.flip(),
        }
    }
}
