//! Mailbox board representation.
//!
//! `Board` stores an 8×8 grid of optional pieces indexed `[row - 1][column - 'A']`
//! (row 1 first). A board is never mutated in place once handed out:
//! `apply_move` and `with_piece` return a fresh value and leave earlier states
//! untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::layout;
use crate::engine::types::{ChessError, Piece, PieceType, Square};

// ---------------------------------------------------------------------------
// Cell: a square together with its occupant
// ---------------------------------------------------------------------------

/// A board square and the piece standing on it, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(flatten)]
    pub square: Square,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub piece: Option<Piece>,
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// Piece placement on an 8×8 board.
///
/// Serialises as its placement string (see [`Board::to_placement`]).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Create an empty board with no pieces.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (sq, piece) in layout::initial_position() {
            board.put(sq, Some(piece));
        }
        board
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The cell at a coordinate.
    ///
    /// Callers are expected to bounds-check first; a coordinate outside
    /// A–H / 1–8 fails with `ChessError::OutOfBounds`.
    pub fn square_at(&self, column: char, row: i8) -> Result<Cell, ChessError> {
        let square = Square::new(column, row);
        let (r, c) = square
            .grid_index()
            .ok_or(ChessError::OutOfBounds { column, row })?;
        Ok(Cell {
            square,
            piece: self.squares[r][c],
        })
    }

    /// What piece (if any) is on a given square? Off-board squares hold nothing.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        let (r, c) = sq.grid_index()?;
        self.squares[r][c]
    }

    /// All occupied squares, A1 to H8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().filter(|p| p.is_some()).count()
    }

    /// Rows in display order (row 8 first), each running A to H.
    pub fn rows(&self) -> impl Iterator<Item = [Cell; 8]> + '_ {
        (0..8).rev().map(move |r| {
            std::array::from_fn(|c| Cell {
                square: Square::from_grid_index(r, c),
                piece: self.squares[r][c],
            })
        })
    }

    // -----------------------------------------------------------------------
    // New boards from old
    // -----------------------------------------------------------------------

    /// A copy of this board with `sq` set to `piece` (or cleared with `None`).
    pub fn with_piece(&self, sq: Square, piece: Option<Piece>) -> Result<Self, ChessError> {
        if sq.grid_index().is_none() {
            return Err(ChessError::OutOfBounds {
                column: sq.column,
                row: sq.row,
            });
        }
        let mut next = self.clone();
        next.put(sq, piece);
        Ok(next)
    }

    /// Relocate the piece on `from` to `to`, capturing whatever stood there.
    ///
    /// No legality check is made; gating moves is the selection layer's job.
    /// If `from` is empty, equals `to`, or either square is off the board,
    /// the result is an unchanged copy.
    pub fn apply_move(&self, from: Square, to: Square) -> Self {
        let mut next = self.clone();
        let Some(piece) = self.piece_at(from) else {
            tracing::trace!(%from, %to, "apply_move: no piece on origin");
            return next;
        };
        if from == to || to.grid_index().is_none() {
            tracing::trace!(%from, %to, "apply_move: degenerate target");
            return next;
        }
        let captured = self.piece_at(to);
        next.put(from, None);
        next.put(to, Some(piece));
        tracing::trace!(%from, %to, %piece, captured = ?captured, "piece relocated");
        next
    }

    /// Low-level write. Off-board squares are ignored.
    #[inline]
    fn put(&mut self, sq: Square, piece: Option<Piece>) {
        if let Some((r, c)) = sq.grid_index() {
            self.squares[r][c] = piece;
        }
    }

    // -----------------------------------------------------------------------
    // Board display (8×8 text grid)
    // -----------------------------------------------------------------------

    /// Render the board as text (row 8 at top), useful for debugging.
    pub fn board_string(&self) -> String {
        let mut s = String::with_capacity(200);
        for row in self.rows() {
            s.push_str(&row[0].square.row.to_string());
            s.push(' ');
            for (i, cell) in row.iter().enumerate() {
                s.push(cell.piece.map_or('.', Piece::to_char));
                if i < 7 {
                    s.push(' ');
                }
            }
            s.push('\n');
        }
        s.push_str("  A B C D E F G H");
        s
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.board_string())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

// ---------------------------------------------------------------------------
// Placement parsing & generation
// ---------------------------------------------------------------------------

impl Board {
    /// Parse a piece-placement string: eight `/`-separated rows, row 8 first,
    /// digits for runs of empty squares, `PRNBQK` for white and `prnbqk`
    /// for black.
    pub fn from_placement(placement: &str) -> Result<Self, ChessError> {
        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(ChessError::InvalidPlacement(format!(
                "expected 8 rows, got {}",
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (idx, row_str) in rows.iter().enumerate() {
            let row = 8 - idx as i8;
            let mut col: usize = 0;
            for ch in row_str.chars() {
                if col > 7 {
                    return Err(ChessError::InvalidPlacement(format!(
                        "too many squares in row {row}"
                    )));
                }
                if let Some(digit) = ch.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(ChessError::InvalidPlacement(format!(
                            "invalid empty count '{ch}' in row {row}"
                        )));
                    }
                    col += digit as usize;
                } else if let Some((color, kind)) = PieceType::from_char(ch) {
                    let sq = Square::from_grid_index((row - 1) as usize, col);
                    board.put(sq, Some(Piece::new(kind, color)));
                    col += 1;
                } else {
                    return Err(ChessError::InvalidPlacement(format!(
                        "invalid character '{ch}' in row {row}"
                    )));
                }
            }
            if col != 8 {
                return Err(ChessError::InvalidPlacement(format!(
                    "row {row} has {col} squares instead of 8"
                )));
            }
        }
        Ok(board)
    }

    /// Generate the piece-placement string.
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for cell in row {
                match cell.piece {
                    Some(p) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(p.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_placement()
    }
}

impl TryFrom<String> for Board {
    type Error = ChessError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Board::from_placement(&s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
