//! King move generation, including castling.

use super::super::attack_tables::KING_ATTACKS;
use super::super::types::{
    castle_geometry, Bitboard, CastleSide, Color, Move, MoveList, Piece,
};
use super::super::Position;

impl Position {
    pub(crate) fn king_moves(&self, side: Color, moves: &mut MoveList) {
        let own = self.state.occupied[side.index()].0;
        let mut kings = self.state.pieces[side.index()][Piece::King.index()].0;

        while kings != 0 {
            let p = kings & kings.wrapping_neg();
            kings ^= p;
            let from = Bitboard(p).first_square();

            let mut targets = KING_ATTACKS[from.as_index()] & !own;
            while targets != 0 {
                let t = targets & targets.wrapping_neg();
                targets ^= t;
                self.emit_step(from, Bitboard(t).first_square(), Piece::King, side, moves);
            }
        }

        self.castling_moves(side, moves);
    }

    /// Castling is emitted on two conditions only: the right's bit is
    /// still set and the squares between king and rook are empty. Whether
    /// the king is, passes through, or lands on an attacked square is not
    /// checked anywhere in this engine.
    fn castling_moves(&self, side: Color, moves: &mut MoveList) {
        let rights = self.state.castling[side.index()];
        if rights.is_empty() {
            return;
        }
        for castle in [CastleSide::KingSide, CastleSide::QueenSide] {
            let geometry = castle_geometry(side, castle);
            if rights.intersects(geometry.rook_from)
                && !self.state.all_occupied.intersects(geometry.between)
            {
                moves.push(Move::castle(side, castle));
            }
        }
    }
}
