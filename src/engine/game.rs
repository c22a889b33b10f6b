//! Session holder pairing the current board with the current selection.
//!
//! `Game` is what a front end keeps between input events. It exposes the
//! click-driven state machine plus the explicit actions a store layer
//! dispatches (select, deselect, move, new game) and keeps the selection in
//! step with the board: any board change drops the old selection.

use serde::{Deserialize, Serialize};

use crate::engine::board::Board;
use crate::engine::selection::{self, ClickEvent, Selection};
use crate::engine::types::{MoveSet, Square};

// =========================================================================
// Game
// =========================================================================

/// The current board and selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    board: Board,
    selection: Selection,
}

impl Game {
    // -----------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------

    /// Create a new game from the standard starting position.
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Start from an arbitrary board with nothing selected.
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            selection: Selection::Idle,
        }
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Candidate moves of the selected piece.
    pub fn available_moves(&self) -> &MoveSet {
        self.selection.available_moves()
    }

    // -----------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------

    /// Feed one click through the selection state machine.
    pub fn click(&mut self, square: Square) -> ClickEvent {
        let transition = selection::click(&self.board, &self.selection, square);
        if let Some(board) = transition.board {
            self.board = board;
        }
        self.selection = transition.selection;
        transition.event
    }

    /// Select `square` unconditionally, replacing any current selection.
    pub fn select(&mut self, square: Square) {
        self.selection = Selection::select(square, &self.board);
        tracing::debug!(%square, candidates = self.available_moves().len(), "select");
    }

    /// Drop the current selection.
    pub fn deselect(&mut self) {
        tracing::debug!(square = ?self.selection.square(), "deselect");
        self.selection = Selection::Idle;
    }

    /// Relocate a piece without consulting the candidate set.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        tracing::debug!(%from, %to, "move_piece");
        self.board = self.board.apply_move(from, to);
        self.selection = Selection::Idle;
    }

    /// Reset to the starting position.
    pub fn new_game(&mut self) {
        tracing::debug!("new game");
        *self = Self::new();
    }
}

// =========================================================================
// Tests
// =========================================================================
