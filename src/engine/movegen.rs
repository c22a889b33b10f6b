//! Pseudo-legal move generation.
//!
//! Moves respect board edges and blocking/capture rules but never look at
//! whether the mover's king ends up attacked. Generation is total: an empty
//! square yields an empty set, never an error.

use crate::engine::board::Board;
use crate::engine::geometry::{is_first_move, is_occupied, is_within_board};
use crate::engine::types::{MoveSet, Piece, PieceType, Square};

/// `(column delta, row delta)` pairs.
type Offsets = [(i8, i8)];

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

// =========================================================================
// Public API
// =========================================================================

/// Squares the piece on `from` may move to.
pub fn moves_for(from: Square, board: &Board) -> MoveSet {
    let Some(piece) = board.piece_at(from) else {
        return MoveSet::new();
    };
    match piece.kind {
        PieceType::Pawn => pawn_moves(piece, from, board),
        PieceType::Rook => slider_moves(piece, from, board, &ORTHOGONAL),
        PieceType::Bishop => slider_moves(piece, from, board, &DIAGONAL),
        PieceType::Queen => slider_moves(piece, from, board, &ALL_DIRECTIONS),
        PieceType::Knight => step_moves(piece, from, board, &KNIGHT_JUMPS),
        PieceType::King => step_moves(piece, from, board, &ALL_DIRECTIONS),
    }
}

// =========================================================================
// Pawn moves
// =========================================================================

fn pawn_moves(pawn: Piece, from: Square, board: &Board) -> MoveSet {
    let mut moves = MoveSet::new();
    let dir = pawn.color.forward();

    // --- Single push ---
    let one = from.offset(0, dir);
    if is_within_board(one) && !is_occupied(one, board) {
        moves.insert(one);

        // --- Double push, keyed to the starting square ---
        if is_first_move(from) {
            let two = from.offset(0, dir * 2);
            if is_within_board(two) && !is_occupied(two, board) {
                moves.insert(two);
            }
        }
    }

    // --- Diagonal captures only ---
    for d_col in [-1, 1] {
        let target = from.offset(d_col, dir);
        if is_within_board(target) && is_enemy(pawn, target, board) {
            moves.insert(target);
        }
    }

    moves
}

// =========================================================================
// Slider moves (rook, bishop, queen)
// =========================================================================

fn slider_moves(piece: Piece, from: Square, board: &Board, directions: &Offsets) -> MoveSet {
    let mut moves = MoveSet::new();
    for &(d_col, d_row) in directions {
        let mut target = from.offset(d_col, d_row);
        while is_within_board(target) {
            match board.piece_at(target) {
                None => {
                    moves.insert(target);
                }
                Some(other) => {
                    if piece.is_enemy_of(other) {
                        moves.insert(target);
                    }
                    break;
                }
            }
            target = target.offset(d_col, d_row);
        }
    }
    moves
}

// =========================================================================
// Stepping moves (knight, king)
// =========================================================================

fn step_moves(piece: Piece, from: Square, board: &Board, offsets: &Offsets) -> MoveSet {
    offsets
        .iter()
        .map(|&(d_col, d_row)| from.offset(d_col, d_row))
        .filter(|&target| is_within_board(target))
        .filter(|&target| !is_occupied(target, board) || is_enemy(piece, target, board))
        .collect()
}

#[inline]
fn is_enemy(piece: Piece, target: Square, board: &Board) -> bool {
    board
        .piece_at(target)
        .is_some_and(|other| piece.is_enemy_of(other))
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn board(placement: &str) -> Board {
        Board::from_placement(placement).unwrap()
    }

    fn set(names: &[&str]) -> MoveSet {
        names.iter().map(|n| sq(n)).collect()
    }

    // -------------------------------------------------------------------
    // Starting position
    // -------------------------------------------------------------------

    #[test]
    fn starting_position_has_20_moves_per_side() {
        let b = Board::new();
        for row in [1, 2] {
            let white: usize = ('A'..='H')
                .map(|c| moves_for(Square::new(c, row), &b).len())
                .sum();
            let black: usize = ('A'..='H')
                .map(|c| moves_for(Square::new(c, 9 - row), &b).len())
                .sum();
            let expected = if row == 1 { 4 } else { 16 };
            assert_eq!(white, expected);
            assert_eq!(black, expected);
        }
    }

    #[test]
    fn empty_square_has_no_moves() {
        assert!(moves_for(sq("e4"), &Board::new()).is_empty());
    }

    #[test]
    fn off_board_square_has_no_moves() {
        assert!(moves_for(Square::new('J', 4), &Board::new()).is_empty());
    }

    // -------------------------------------------------------------------
    // Pawn moves
    // -------------------------------------------------------------------

    #[test]
    fn pawn_single_and_double_push() {
        assert_eq!(moves_for(sq("e2"), &Board::new()), set(&["e3", "e4"]));
        assert_eq!(moves_for(sq("d7"), &Board::new()), set(&["d6", "d5"]));
    }

    #[test]
    fn pawn_blocked() {
        let b = board("8/8/8/8/8/4p3/4P3/8");
        assert!(moves_for(sq("e2"), &b).is_empty());
    }

    #[test]
    fn pawn_double_push_blocked_on_destination() {
        let b = board("8/8/8/8/4n3/8/4P3/8");
        assert_eq!(moves_for(sq("e2"), &b), set(&["e3"]));
    }

    #[test]
    fn pawn_captures_enemies_only() {
        // Black pawns on d3 (enemy) and a white knight on f3 (friendly).
        let b = board("8/8/8/8/8/3p1N2/4P3/8");
        assert_eq!(moves_for(sq("e2"), &b), set(&["e3", "e4", "d3"]));
    }

    #[test]
    fn pawn_never_moves_diagonally_onto_empty_square() {
        let b = board("8/8/8/8/3P4/8/8/8");
        assert_eq!(moves_for(sq("d4"), &b), set(&["d5"]));
    }

    #[test]
    fn black_pawn_moves_down() {
        let b = board("8/8/8/4p3/3P1P2/8/8/8");
        assert_eq!(moves_for(sq("e5"), &b), set(&["e4", "d4", "f4"]));
    }

    #[test]
    fn pawn_on_edge_column() {
        let b = board("8/8/8/8/8/1p6/P7/8");
        assert_eq!(moves_for(sq("a2"), &b), set(&["a3", "a4", "b3"]));
    }

    #[test]
    fn pawn_on_last_row_stays_put() {
        let b = board("P7/8/8/8/8/8/8/8");
        assert!(moves_for(sq("a8"), &b).is_empty());
    }

    #[test]
    fn pawn_on_foreign_start_square_gets_double_step() {
        // A white pawn on C7 has a black starting square under it; the
        // double step would land on row 9 and is dropped by the bounds check.
        let b = board("8/2P5/8/8/8/8/8/8");
        assert_eq!(moves_for(sq("c7"), &b), set(&["c8"]));
    }

    // -------------------------------------------------------------------
    // Sliders
    // -------------------------------------------------------------------

    #[test]
    fn rook_open_board() {
        let moves = moves_for(sq("d4"), &board("8/8/8/8/3R4/8/8/8"));
        assert_eq!(moves.len(), 14);
        assert!(moves.contains(&sq("d8")));
        assert!(moves.contains(&sq("a4")));
        assert!(!moves.contains(&sq("e5")));
    }

    #[test]
    fn rook_stops_at_friend() {
        let moves = moves_for(sq("d4"), &board("8/8/3P4/8/3R4/8/8/8"));
        assert!(moves.contains(&sq("d5")));
        assert!(!moves.contains(&sq("d6")));
        assert!(!moves.contains(&sq("d7")));
    }

    #[test]
    fn bishop_open_board() {
        let moves = moves_for(sq("d4"), &board("8/8/8/8/3B4/8/8/8"));
        assert_eq!(moves.len(), 13);
        assert!(moves.contains(&sq("a1")));
        assert!(moves.contains(&sq("h8")));
        assert!(moves.contains(&sq("a7")));
        assert!(moves.contains(&sq("g1")));
    }

    #[test]
    fn bishop_captures_then_stops() {
        let moves = moves_for(sq("c1"), &board("8/8/8/8/8/4p3/8/2B5"));
        assert_eq!(moves, set(&["d2", "e3", "b2", "a3"]));
    }

    #[test]
    fn queen_open_board() {
        assert_eq!(moves_for(sq("d4"), &board("8/8/8/8/3Q4/8/8/8")).len(), 27);
    }

    #[test]
    fn queen_hemmed_in_at_start() {
        assert!(moves_for(sq("d1"), &Board::new()).is_empty());
    }

    // -------------------------------------------------------------------
    // Steppers
    // -------------------------------------------------------------------

    #[test]
    fn knight_from_corner_region() {
        let moves = moves_for(sq("b1"), &board("8/8/8/8/8/8/8/1N6"));
        assert_eq!(moves, set(&["a3", "c3", "d2"]));
    }

    #[test]
    fn knight_at_start() {
        assert_eq!(moves_for(sq("g1"), &Board::new()), set(&["f3", "h3"]));
    }

    #[test]
    fn knight_captures_enemy_not_friend() {
        let moves = moves_for(sq("d4"), &board("8/8/2p1P3/8/3N4/8/8/8"));
        assert!(moves.contains(&sq("c6")));
        assert!(!moves.contains(&sq("e6")));
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn king_center_and_corner() {
        assert_eq!(moves_for(sq("d4"), &board("8/8/8/8/3K4/8/8/8")).len(), 8);
        assert_eq!(
            moves_for(sq("h8"), &board("7k/8/8/8/8/8/8/8")),
            set(&["g8", "g7", "h7"])
        );
    }

    #[test]
    fn king_captures_adjacent_enemy() {
        let moves = moves_for(sq("e1"), &board("8/8/8/8/8/8/3pP3/4K3"));
        assert_eq!(moves, set(&["d1", "f1", "d2", "f2"]));
    }

    #[test]
    fn moves_for_is_pure() {
        let b = Board::new().apply_move(sq("e2"), sq("e4"));
        let before = b.clone();
        for s in Square::all() {
            assert_eq!(moves_for(s, &b), moves_for(s, &b));
        }
        assert_eq!(b, before);
    }
}
