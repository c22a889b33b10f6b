//! Board geometry predicates used by move generation.

use crate::engine::board::Board;
use crate::engine::layout;
use crate::engine::types::{PieceType, Square};

/// True iff `sq` lies in columns A–H and rows 1–8.
#[inline]
pub fn is_within_board(sq: Square) -> bool {
    (1..=8).contains(&sq.row) && ('A'..='H').contains(&sq.column)
}

/// True iff `sq` is on the board and holds a piece.
#[inline]
pub fn is_occupied(sq: Square, board: &Board) -> bool {
    board.piece_at(sq).is_some()
}

/// True iff a pawn stood on `sq` in the initial position.
///
/// This is positional: it does not know whether the pawn now on `sq` has
/// moved, only whether `sq` is a pawn starting square.
#[inline]
pub fn is_first_move(sq: Square) -> bool {
    layout::initial_piece(sq).is_some_and(|p| p.kind == PieceType::Pawn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn within_board_edges() {
        assert!(is_within_board(Square::new('A', 1)));
        assert!(is_within_board(Square::new('H', 8)));
        assert!(!is_within_board(Square::new('A', 0)));
        assert!(!is_within_board(Square::new('H', 9)));
        assert!(!is_within_board(Square::new('I', 4)));
        assert!(!is_within_board(Square::new('@', 4)));
        assert!(!is_within_board(Square::new('d', 4)));
    }

    #[test]
    fn occupancy_on_start() {
        let b = Board::new();
        assert!(is_occupied(sq("a1"), &b));
        assert!(is_occupied(sq("h7"), &b));
        assert!(!is_occupied(sq("e4"), &b));
        assert!(!is_occupied(Square::new('E', 0), &b));
    }

    #[test]
    fn first_move_squares() {
        for c in 'A'..='H' {
            assert!(is_first_move(Square::new(c, 2)));
            assert!(is_first_move(Square::new(c, 7)));
        }
        assert!(!is_first_move(sq("e1")));
        assert!(!is_first_move(sq("b4")));
        assert!(!is_first_move(Square::new('B', 0)));
    }

    #[test]
    fn first_move_is_colour_blind() {
        // Keyed to the square alone; the occupant's colour is never consulted.
        assert!(is_first_move(sq("c7")));
        assert!(is_first_move(sq("c2")));
        assert!(!is_first_move(sq("c3")));
    }
}
