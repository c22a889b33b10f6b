//! The initial position table.
//!
//! A fixed mapping from the 32 starting coordinates to the piece standing
//! there when a game begins. It seeds `Board::new` and backs the positional
//! first-move test in `geometry`. The lookup map is built once (via
//! `OnceLock`) and lives for the lifetime of the process.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::engine::types::{Color, Piece, PieceType, Square};

const fn white(kind: PieceType) -> Piece {
    Piece::new(kind, Color::White)
}

const fn black(kind: PieceType) -> Piece {
    Piece::new(kind, Color::Black)
}

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Every starting coordinate with its piece, white first.
pub fn initial_position() -> impl Iterator<Item = (Square, Piece)> {
    let columns = 'A'..='H';
    let white_back = columns
        .clone()
        .zip(BACK_RANK)
        .map(|(c, kind)| (Square::new(c, 1), white(kind)));
    let white_pawns = columns
        .clone()
        .map(|c| (Square::new(c, 2), white(PieceType::Pawn)));
    let black_back = columns
        .clone()
        .zip(BACK_RANK)
        .map(|(c, kind)| (Square::new(c, 8), black(kind)));
    let black_pawns = columns.map(|c| (Square::new(c, 7), black(PieceType::Pawn)));
    white_back
        .chain(white_pawns)
        .chain(black_back)
        .chain(black_pawns)
}

fn table() -> &'static HashMap<Square, Piece> {
    static TABLE: OnceLock<HashMap<Square, Piece>> = OnceLock::new();
    TABLE.get_or_init(|| initial_position().collect())
}

/// The piece that stands on `sq` at game start, if any.
#[inline]
pub fn initial_piece(sq: Square) -> Option<Piece> {
    table().get(&sq).copied()
}
