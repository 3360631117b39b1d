//! Fluent builder for constructing positions.
//!
//! Lets tests and diagnostics lay out a position piece by piece.
//!
//! # Example
//! ```
//! use chess_minimax::board::{Color, Piece, PositionBuilder};
//!
//! let position = PositionBuilder::new()
//!     .piece("e1".parse().unwrap(), Color::White, Piece::King)
//!     .piece("e8".parse().unwrap(), Color::Black, Piece::King)
//!     .side_to_move(Color::White)
//!     .build();
//! ```

use super::types::{Bitboard, Color, Piece, Square, ALL_RIGHTS};
use super::Position;

/// A fluent builder for `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling: [Bitboard; 2],
    en_passant_target: Option<Square>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty builder: no pieces, no castling rights, White
    /// to move.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: [Bitboard::EMPTY; 2],
            en_passant_target: None,
        }
    }

    /// Place a piece, replacing whatever was on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Enable kingside castling for a color. The king and rook placement
    /// is the caller's responsibility.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        let home_rank = if color == Color::White { 0 } else { 7 };
        self.castling[color.index()] |= Square::new(home_rank, 7).bit();
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        let home_rank = if color == Color::White { 0 } else { 7 };
        self.castling[color.index()] |= Square::new(home_rank, 0).bit();
        self
    }

    /// Enable all four castling rights.
    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castling = ALL_RIGHTS;
        self
    }

    /// Set the en passant target square (the square a pawn of the side
    /// NOT to move just double-pushed over). The candidate capturers are
    /// derived during `build`.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the position.
    #[must_use]
    pub fn build(self) -> Position {
        let mut position = Position::empty();
        for (square, color, piece) in self.pieces {
            position.set_piece(square, color, piece);
        }
        position.set_side_to_move(self.side_to_move);
        position.state.castling = self.castling;

        if let Some(target) = self.en_passant_target {
            let target = target.bit();
            // The victim pawn sits one rank behind the target from the
            // capturing side's point of view
            let victim = match self.side_to_move {
                Color::White => Bitboard(target.0 >> 8),
                Color::Black => Bitboard(target.0 << 8),
            };
            let beside = Bitboard(victim.0 << 1) & !Bitboard::FILE_A
                | Bitboard(victim.0 >> 1) & !Bitboard::FILE_H;
            position.state.ep_target = target;
            position.state.ep_participants =
                beside & position.pieces_of(self.side_to_move, Piece::Pawn);
        }

        position
    }
}
