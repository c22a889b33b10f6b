//! Move-legality engine for an interactive chess board.
//!
//! The engine is a pure function of board state: it builds the starting
//! board, computes pseudo-legal destinations for a selected piece, applies a
//! move to produce a new board, and sequences clicks through a small
//! selection state machine. It performs no I/O.

pub mod config;
pub mod engine;
