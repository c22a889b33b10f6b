//! Click-driven selection state machine.
//!
//! States are `Idle` and `Selected`. A click on an occupied square selects it
//! and computes its candidate moves; a second click on the same square drops
//! the selection; a click on a candidate commits the move. Clicking another
//! occupied square re-selects, and clicking an empty non-candidate square
//! while something is selected leaves the selection as it was.
//!
//! The machine is synchronous and holds nothing between calls: the caller
//! owns the current `Board` and `Selection` and passes both in.

use serde::{Deserialize, Serialize};

use crate::engine::board::Board;
use crate::engine::movegen::moves_for;
use crate::engine::types::{MoveSet, Piece, Square};

static NO_MOVES: MoveSet = MoveSet::new();

// =========================================================================
// Selection
// =========================================================================

/// The caller-held selection, derived from the board it was computed on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Selection {
    #[default]
    Idle,
    Selected {
        square: Square,
        #[serde(rename = "availableMoves")]
        moves: MoveSet,
    },
}

impl Selection {
    /// Select `square` on `board`. An empty or off-board square gives `Idle`.
    pub fn select(square: Square, board: &Board) -> Self {
        if board.piece_at(square).is_none() {
            return Selection::Idle;
        }
        Selection::Selected {
            square,
            moves: moves_for(square, board),
        }
    }

    /// The selected square, if any.
    pub fn square(&self) -> Option<Square> {
        match self {
            Selection::Idle => None,
            Selection::Selected { square, .. } => Some(*square),
        }
    }

    /// Candidate destinations; empty when idle.
    pub fn available_moves(&self) -> &MoveSet {
        match self {
            Selection::Idle => &NO_MOVES,
            Selection::Selected { moves, .. } => moves,
        }
    }

    #[inline]
    pub fn is_candidate(&self, sq: Square) -> bool {
        self.available_moves().contains(&sq)
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }
}

// =========================================================================
// Transitions
// =========================================================================

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClickEvent {
    /// A piece was selected (from idle, or replacing another selection).
    Selected { square: Square },
    /// The selected square was clicked again.
    Deselected { square: Square },
    /// A candidate was clicked and the move committed.
    Moved {
        from: Square,
        to: Square,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        captured: Option<Piece>,
    },
    /// Nothing changed.
    Ignored { square: Square },
}

/// Result of feeding one click to the state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub selection: Selection,
    /// The next board, present only when a move was committed.
    pub board: Option<Board>,
    pub event: ClickEvent,
}

impl Transition {
    fn unchanged(selection: &Selection, square: Square) -> Self {
        Transition {
            selection: selection.clone(),
            board: None,
            event: ClickEvent::Ignored { square },
        }
    }
}

/// Advance the selection for a click on `clicked`.
pub fn click(board: &Board, selection: &Selection, clicked: Square) -> Transition {
    let transition = match selection {
        Selection::Idle => match Selection::select(clicked, board) {
            Selection::Idle => Transition::unchanged(selection, clicked),
            selected => Transition {
                selection: selected,
                board: None,
                event: ClickEvent::Selected { square: clicked },
            },
        },

        Selection::Selected { square, .. } if *square == clicked => Transition {
            selection: Selection::Idle,
            board: None,
            event: ClickEvent::Deselected { square: clicked },
        },

        Selection::Selected { square, moves } if moves.contains(&clicked) => {
            let captured = board.piece_at(clicked);
            Transition {
                selection: Selection::Idle,
                board: Some(board.apply_move(*square, clicked)),
                event: ClickEvent::Moved {
                    from: *square,
                    to: clicked,
                    captured,
                },
            }
        }

        Selection::Selected { .. } => match Selection::select(clicked, board) {
            Selection::Idle => Transition::unchanged(selection, clicked),
            reselected => Transition {
                selection: reselected,
                board: None,
                event: ClickEvent::Selected { square: clicked },
            },
        },
    };

    tracing::debug!(
        %clicked,
        event = ?transition.event,
        candidates = transition.selection.available_moves().len(),
        "click"
    );
    transition
}

// =========================================================================
// Tests
// =========================================================================
