//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_minimax::board::prelude::*;
//! ```

pub use super::{
    best_move, ApplyError, Bitboard, CastleSide, Color, Evaluator, Move, MoveList, Piece,
    Position, PositionBuilder, SearchConfig, SearchError, Snapshot, Square,
};
