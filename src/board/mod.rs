//! Chess position representation and engine core.
//!
//! Uses bitboards for move generation and evaluation. Move generation is
//! pseudo-legal: moves obey piece geometry and never capture a friendly
//! piece, but may leave the mover's king en prise. The search treats the
//! capture of a king as its win/loss signal.
//!
//! # Example
//! ```
//! use chess_minimax::board::{Color, Position};
//!
//! let position = Position::starting();
//! let moves = position.moves_for(Color::White);
//! assert_eq!(moves.len(), 20);
//! ```

mod apply;
mod attack_tables;
mod builder;
mod error;
mod eval;
mod movegen;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{ApplyError, SearchError, SquareError};
pub use eval::Evaluator;
pub use state::{Position, Snapshot};
pub use types::{Bitboard, CastleSide, Color, Move, MoveList, MoveListIter, Piece, Square};

// Public API - search entry point and configuration
pub use search::{best_move, SearchConfig, DEFAULT_PLY_LIMIT};
