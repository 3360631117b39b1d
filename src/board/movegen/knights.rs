//! Knight move generation.

use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::types::{Bitboard, Color, MoveList, Piece};
use super::super::Position;

impl Position {
    pub(crate) fn knight_moves(&self, side: Color, moves: &mut MoveList) {
        let own = self.state.occupied[side.index()].0;
        let mut knights = self.state.pieces[side.index()][Piece::Knight.index()].0;

        while knights != 0 {
            let p = knights & knights.wrapping_neg();
            knights ^= p;
            let from = Bitboard(p).first_square();

            let mut targets = KNIGHT_ATTACKS[from.as_index()] & !own;
            while targets != 0 {
                let t = targets & targets.wrapping_neg();
                targets ^= t;
                self.emit_step(from, Bitboard(t).first_square(), Piece::Knight, side, moves);
            }
        }
    }
}
