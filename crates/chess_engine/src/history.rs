//! Game history and navigation
//!
//! Keeps every position of the game in order, starting with the setup at
//! index 0, plus one [`MoveRecord`] per applied move. The history is
//! append-only: the engine pushes one entry per accepted move, and nothing ever
//! truncates it.
//!
//! A cursor marks which entry is being viewed. Stepping backward and forward
//! moves only the cursor, so reviewing an old position never disturbs the
//! game. Moves are only accepted while the cursor is on the latest entry (see
//! [`crate::api::request_move`]).
//!
//! Positions are also the input for threefold repetition, see
//! [`crate::draw::repetition_count`].

use crate::board::Board;
use crate::types::{Color, PieceId, PieceKind, Square};
use serde::{Deserialize, Serialize};

/// One applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece_id: PieceId,
    pub piece_kind: PieceKind,
    pub piece_color: Color,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub is_castling: bool,
    pub is_en_passant: bool,
    pub promotion: Option<PieceKind>,
    pub is_check: bool,
    pub is_checkmate: bool,
}

/// Positions of a game plus a viewing cursor
///
/// # Examples
///
/// ```rust,ignore
/// let mut history = GameHistory::new(Board::standard());
/// history.push(next_board, record);
/// history.step_back();
/// assert!(!history.is_at_latest());
/// assert_eq!(history.viewed(), history.get(0).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    positions: Vec<Board>,
    records: Vec<MoveRecord>,
    cursor: usize,
}

impl GameHistory {
    /// Start a history from a setup position
    pub fn new(setup: Board) -> GameHistory {
        GameHistory {
            positions: vec![setup],
            records: Vec::new(),
            cursor: 0,
        }
    }

    /// Append the position reached by `record` and view it
    pub(crate) fn push(&mut self, board: Board, record: MoveRecord) {
        self.positions.push(board);
        self.records.push(record);
        self.cursor = self.positions.len() - 1;
    }

    /// Most recent position
    pub fn latest(&self) -> &Board {
        // positions always holds the setup
        &self.positions[self.positions.len() - 1]
    }

    /// Position under the cursor
    pub fn viewed(&self) -> &Board {
        &self.positions[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn latest_index(&self) -> usize {
        self.positions.len() - 1
    }

    pub fn is_at_latest(&self) -> bool {
        self.cursor == self.latest_index()
    }

    /// Move the cursor one entry back; `false` at the setup
    pub fn step_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor one entry forward; `false` at the latest
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_latest() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn jump_to_latest(&mut self) {
        self.cursor = self.latest_index();
    }

    /// Number of positions, setup included
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// A history always holds its setup
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of moves played
    pub fn ply(&self) -> usize {
        self.records.len()
    }

    pub fn get(&self, index: usize) -> Option<&Board> {
        self.positions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.positions.iter()
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Record of the move that produced the position at `index`
    pub fn record_into(&self, index: usize) -> Option<&MoveRecord> {
        index.checked_sub(1).and_then(|i| self.records.get(i))
    }

    pub fn last_record(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub(crate) fn last_record_mut(&mut self) -> Option<&mut MoveRecord> {
        self.records.last_mut()
    }
}
