//! Move application.

use super::error::ApplyError;
use super::types::{castle_geometry, Bitboard, CastleSide, Color, Move, Piece};
use super::Position;

impl Position {
    /// Apply a move to the position.
    ///
    /// Mutates piece boards, castling rights, and the en passant fields,
    /// then refreshes the occupancy caches. Does NOT flip the side to
    /// move. On error the position is left exactly as it was.
    ///
    /// Errors when the mover is absent from its origin square, or when a
    /// castling move no longer has its right or has pieces between king
    /// and rook.
    pub fn apply(&mut self, mv: &Move) -> Result<(), ApplyError> {
        let color = mv.color();
        let c_idx = color.index();

        if !self.state.pieces[c_idx][mv.piece().index()].intersects(mv.from()) {
            return Err(ApplyError::MoverMissing {
                piece: mv.piece(),
                color,
                square: mv.from_square(),
            });
        }

        if let Some(side) = mv.castle_side() {
            return self.apply_castling(color, side);
        }

        self.state.ep_target = Bitboard::EMPTY;
        self.state.ep_participants = Bitboard::EMPTY;

        let o_idx = color.opponent().index();

        if let Some(victim) = mv.captured() {
            if mv.ep_victim().is_empty() {
                self.state.pieces[o_idx][victim.index()] ^= mv.to();
                // A rook captured on its home square can no longer castle
                self.state.castling[o_idx] &= !mv.to();
            } else {
                self.state.pieces[o_idx][Piece::Pawn.index()] ^= mv.ep_victim();
            }
        }

        if let Some(promoted) = mv.promotion() {
            self.state.pieces[c_idx][Piece::Pawn.index()] ^= mv.from();
            self.state.pieces[c_idx][promoted.index()] |= mv.to();
        } else {
            self.state.pieces[c_idx][mv.piece().index()] ^= mv.from() | mv.to();
        }

        if mv.is_double_push() {
            self.mark_en_passant(mv, o_idx);
        }

        match mv.piece() {
            Piece::King => self.state.castling[c_idx] = Bitboard::EMPTY,
            Piece::Rook => self.state.castling[c_idx] &= !mv.from(),
            _ => {}
        }

        self.refresh_occupancy();
        Ok(())
    }

    /// Record the square jumped over and the enemy pawns that could
    /// capture en passant next ply (the pawns beside the landing square).
    fn mark_en_passant(&mut self, mv: &Move, o_idx: usize) {
        let jumped = match mv.color() {
            Color::White => Bitboard(mv.from().0 << 8),
            Color::Black => Bitboard(mv.from().0 >> 8),
        };
        let beside = Bitboard(mv.to().0 << 1) & !Bitboard::FILE_A
            | Bitboard(mv.to().0 >> 1) & !Bitboard::FILE_H;
        self.state.ep_target = jumped;
        self.state.ep_participants = beside & self.state.pieces[o_idx][Piece::Pawn.index()];
    }

    fn apply_castling(&mut self, color: Color, side: CastleSide) -> Result<(), ApplyError> {
        let c_idx = color.index();
        let geometry = castle_geometry(color, side);

        // Validate before touching anything
        if !self.state.castling[c_idx].intersects(geometry.rook_from) {
            return Err(ApplyError::CastlingRightsMissing { color, side });
        }
        if self.state.all_occupied.intersects(geometry.between) {
            return Err(ApplyError::CastlingObstructed { color, side });
        }

        self.state.ep_target = Bitboard::EMPTY;
        self.state.ep_participants = Bitboard::EMPTY;

        self.state.pieces[c_idx][Piece::King.index()] ^= geometry.king_from | geometry.king_to;
        self.state.pieces[c_idx][Piece::Rook.index()] ^= geometry.rook_from | geometry.rook_to;
        self.state.castling[c_idx] = Bitboard::EMPTY;

        self.refresh_occupancy();
        Ok(())
    }
}
