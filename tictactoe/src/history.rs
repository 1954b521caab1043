use std::fmt::Display;

use ttt_types::{Board, Outcome, Player, Square};

use crate::rules;

/// Presentation order of the move list. Orthogonal to how snapshots are
/// stored, which is always chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayOrder {
    #[default]
    Ascending,
    Descending,
}

impl DisplayOrder {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            DisplayOrder::Ascending => DisplayOrder::Descending,
            DisplayOrder::Descending => DisplayOrder::Ascending,
        }
    }
}

/// Status of the currently viewed snapshot, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Winner(Player),
    Draw,
    NextPlayer(Player),
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(player) => write!(f, "Winner: {player}"),
            Status::Draw => write!(f, "It's a draw!"),
            Status::NextPlayer(player) => write!(f, "Next player: {player}"),
        }
    }
}

/// One row of the rendered move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    pub index: usize,
    pub is_viewed: bool,
}

impl MoveEntry {
    /// The viewed entry renders as a static label instead of a jump
    /// control, except "game start", which stays jumpable in both orders.
    #[must_use]
    pub const fn is_jump_target(self) -> bool {
        !self.is_viewed || self.index == 0
    }
}

/// The ordered snapshots of one game plus the pointer to the snapshot
/// currently shown. Snapshot 0 is always the empty board; snapshot i + 1
/// differs from snapshot i in exactly one square.
#[derive(Debug, Clone)]
pub struct GameHistory {
    snapshots: Vec<Board>,
    viewed: usize,
    order: DisplayOrder,
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GameHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::with_order(DisplayOrder::Ascending)
    }

    #[must_use]
    pub fn with_order(order: DisplayOrder) -> Self {
        Self {
            snapshots: vec![Board::EMPTY],
            viewed: 0,
            order,
        }
    }

    #[must_use]
    pub fn current(&self) -> Board {
        self.snapshots[self.viewed]
    }

    #[must_use]
    pub fn viewed_index(&self) -> usize {
        self.viewed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_latest(&self) -> bool {
        self.viewed == self.snapshots.len() - 1
    }

    #[must_use]
    pub const fn display_order(&self) -> DisplayOrder {
        self.order
    }

    /// X moves on even snapshots, O on odd ones. Derived from the viewed
    /// index, never stored.
    #[must_use]
    pub const fn player_to_move(&self) -> Player {
        if self.viewed % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Play `square` on the viewed snapshot. A decided game or an occupied
    /// square makes this a no-op returning false. Otherwise any snapshots
    /// after the viewed one are discarded (they belong to an abandoned
    /// branch), the new board is appended and becomes the viewed one.
    pub fn apply_move(&mut self, square: Square) -> bool {
        let current = self.current();
        if !rules::can_play(&current, square) {
            return false;
        }
        let next = current.with(square, self.player_to_move());
        self.snapshots.truncate(self.viewed + 1);
        self.snapshots.push(next);
        self.viewed = self.snapshots.len() - 1;
        true
    }

    /// Move the view pointer without touching the snapshots.
    ///
    /// # Panics
    /// If `index` is out of range; callers only offer valid indices
    pub fn jump_to(&mut self, index: usize) {
        assert!(index < self.snapshots.len());
        self.viewed = index;
    }

    /// Flip the presentation order. The viewed snapshot is unchanged:
    /// `viewed` indexes the snapshots, not the displayed list.
    pub fn toggle_display_order(&mut self) {
        self.order = self.order.flipped();
    }

    #[must_use]
    pub fn status(&self) -> Status {
        match rules::evaluate(&self.current()) {
            Outcome::Won { player, .. } => Status::Winner(player),
            Outcome::Draw => Status::Draw,
            Outcome::InProgress => Status::NextPlayer(self.player_to_move()),
        }
    }

    /// Entries for the move list, in display order.
    #[must_use]
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let entries = (0..self.snapshots.len()).map(|index| MoveEntry {
            index,
            is_viewed: index == self.viewed,
        });
        match self.order {
            DisplayOrder::Ascending => entries.collect(),
            DisplayOrder::Descending => entries.rev().collect(),
        }
    }
}
