//! Error types for position and search operations.

use std::fmt;

use super::types::{CastleSide, Color, Piece, Square};

/// Error type for move application failures.
///
/// Application is all-or-nothing: on any of these errors the position is
/// left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// The moving piece is not on its claimed origin square
    MoverMissing {
        piece: Piece,
        color: Color,
        square: Square,
    },
    /// Castling attempted without the matching castling right
    CastlingRightsMissing { color: Color, side: CastleSide },
    /// Castling attempted with occupied squares between king and rook
    CastlingObstructed { color: Color, side: CastleSide },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyError::MoverMissing {
                piece,
                color,
                square,
            } => {
                write!(f, "No {color} {piece:?} on {square} to move")
            }
            ApplyError::CastlingRightsMissing { color, side } => {
                write!(f, "{color} may no longer castle {side:?}")
            }
            ApplyError::CastlingObstructed { color, side } => {
                write!(f, "{color} {side:?} castling path is obstructed")
            }
        }
    }
}

impl std::error::Error for ApplyError {}

/// Error type for search failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The side to move has no applicable move (checkmate or stalemate
    /// surface; this engine does not distinguish the two)
    NoMoves,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoMoves => write!(f, "No move can be applied in this position"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
