use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// The two sides in a chess game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Row delta of a pawn advance: White moves up the board, Black down.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

// ---------------------------------------------------------------------------
// PieceType
// ---------------------------------------------------------------------------

/// The six piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    /// All piece types in order.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Single uppercase letter for white, lowercase for black.
    pub fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceType::Pawn => 'p',
            PieceType::Rook => 'r',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parse a piece character; case selects the colour.
    pub fn from_char(c: char) -> Option<(Color, PieceType)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'r' => PieceType::Rook,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };
        Some((color, piece))
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "pawn"),
            PieceType::Rook => write!(f, "rook"),
            PieceType::Knight => write!(f, "knight"),
            PieceType::Bishop => write!(f, "bishop"),
            PieceType::Queen => write!(f, "queen"),
            PieceType::King => write!(f, "king"),
        }
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

/// A coloured piece. Serialises as `{ "name": "PAWN", "color": "WHITE" }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "name")]
    pub kind: PieceType,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceType, color: Color) -> Self {
        Piece { kind, color }
    }

    #[inline]
    pub fn to_char(self) -> char {
        self.kind.to_char(self.color)
    }

    #[inline]
    pub fn is_enemy_of(self, other: Piece) -> bool {
        self.color != other.color
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// A board coordinate: column letter `'A'..='H'` and row `1..=8`.
///
/// Offsets may produce coordinates outside the board; those are still valid
/// `Square` values and are rejected by `geometry::is_within_board`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub column: char,
    pub row: i8,
}

impl Square {
    pub const NUM: usize = 64;

    #[inline]
    pub const fn new(column: char, row: i8) -> Self {
        Square { column, row }
    }

    /// The coordinate `d_col` columns and `d_row` rows away.
    pub fn offset(self, d_col: i8, d_row: i8) -> Self {
        let column = (self.column as u32).wrapping_add_signed(i32::from(d_col));
        Square {
            column: char::from_u32(column).unwrap_or(char::REPLACEMENT_CHARACTER),
            row: self.row.saturating_add(d_row),
        }
    }

    /// `(row_index, column_index)` into an 8×8 grid, if on the board.
    #[inline]
    pub(crate) fn grid_index(self) -> Option<(usize, usize)> {
        if ('A'..='H').contains(&self.column) && (1..=8).contains(&self.row) {
            Some(((self.row - 1) as usize, (self.column as u8 - b'A') as usize))
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn from_grid_index(row_idx: usize, col_idx: usize) -> Self {
        debug_assert!(row_idx < 8 && col_idx < 8);
        Square {
            column: (b'A' + col_idx as u8) as char,
            row: row_idx as i8 + 1,
        }
    }

    /// All 64 on-board squares, A1, B1, … H1, A2, … H8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|r| (0..8).map(move |c| Square::from_grid_index(r, c)))
    }

    /// Parse algebraic notation like "e4" or "E4".
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let column = bytes[0].to_ascii_uppercase();
        let row = bytes[1].wrapping_sub(b'0');
        let sq = Square::new(column as char, row as i8);
        sq.grid_index().map(|_| sq)
    }

    /// Convert to notation like "E4".
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.column, self.row)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s.trim()).ok_or_else(|| ChessError::InvalidSquare(s.to_string()))
    }
}

/// Candidate destinations for one piece. Only membership is meaningful.
pub type MoveSet = BTreeSet<Square>;

// ---------------------------------------------------------------------------
// ChessError
// ---------------------------------------------------------------------------

/// Domain errors for the board engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("square {column}{row} is outside the board")]
    OutOfBounds { column: char, row: i8 },

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
