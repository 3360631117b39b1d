//! Sliding piece move generation (bishop, rook, queen).

use super::super::attack_tables::{diagonal_attacks, orthogonal_attacks};
use super::super::types::{Bitboard, Color, MoveList, Piece};
use super::super::Position;

impl Position {
    pub(crate) fn slider_moves(&self, side: Color, piece: Piece, moves: &mut MoveList) {
        let own = self.state.occupied[side.index()].0;
        let occ_all = self.state.all_occupied.0;
        let mut sliders = self.state.pieces[side.index()][piece.index()].0;

        while sliders != 0 {
            let p = sliders & sliders.wrapping_neg();
            sliders ^= p;
            let from = Bitboard(p).first_square();
            let from_idx = from.as_index();

            let reachable = match piece {
                Piece::Bishop => diagonal_attacks(from_idx, occ_all),
                Piece::Rook => orthogonal_attacks(from_idx, occ_all),
                Piece::Queen => {
                    diagonal_attacks(from_idx, occ_all) | orthogonal_attacks(from_idx, occ_all)
                }
                _ => unreachable!("not a slider: {piece:?}"),
            };

            let mut targets = reachable & !own;
            while targets != 0 {
                let t = targets & targets.wrapping_neg();
                targets ^= t;
                self.emit_step(from, Bitboard(t).first_square(), piece, side, moves);
            }
        }
    }
}
