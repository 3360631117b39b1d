//! Pawn move generation: pushes, captures, promotions, en passant.

use super::super::types::{Bitboard, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};
use super::super::Position;

impl Position {
    pub(crate) fn pawn_moves(&self, side: Color, moves: &mut MoveList) {
        let occ_all = self.state.all_occupied.0;
        let mut pawns = self.state.pieces[side.index()][Piece::Pawn.index()].0;

        while pawns != 0 {
            let p = pawns & pawns.wrapping_neg();
            pawns ^= p;
            match side {
                Color::White => self.white_pawn_moves(p, occ_all, moves),
                Color::Black => self.black_pawn_moves(p, occ_all, moves),
            }
        }

        self.en_passant_moves(side, moves);
    }

    fn white_pawn_moves(&self, p: u64, occ_all: u64, moves: &mut MoveList) {
        let from = Bitboard(p).first_square();

        let push = (p << 8) & !occ_all;
        if push != 0 {
            let to = Bitboard(push).first_square();
            if push & Bitboard::RANK_8.0 != 0 {
                for promoted in PROMOTION_PIECES {
                    moves.push(Move::new_promotion(from, to, Color::White, promoted));
                }
            } else {
                moves.push(Move::quiet(from, to, Piece::Pawn, Color::White));
            }
            // The intermediate square must be clear as well
            let double = ((p & Bitboard::RANK_2.0) << 16) & !occ_all & !(occ_all << 8);
            if double != 0 {
                let to = Bitboard(double).first_square();
                moves.push(Move::quiet(from, to, Piece::Pawn, Color::White));
            }
        }

        let up_right = (p << 9) & !Bitboard::FILE_A.0;
        let up_left = (p << 7) & !Bitboard::FILE_H.0;
        for target in [up_right, up_left] {
            self.pawn_capture(from, target, Color::White, Bitboard::RANK_8, moves);
        }
    }

    fn black_pawn_moves(&self, p: u64, occ_all: u64, moves: &mut MoveList) {
        let from = Bitboard(p).first_square();

        let push = (p >> 8) & !occ_all;
        if push != 0 {
            let to = Bitboard(push).first_square();
            if push & Bitboard::RANK_1.0 != 0 {
                for promoted in PROMOTION_PIECES {
                    moves.push(Move::new_promotion(from, to, Color::Black, promoted));
                }
            } else {
                moves.push(Move::quiet(from, to, Piece::Pawn, Color::Black));
            }
            let double = ((p & Bitboard::RANK_7.0) >> 16) & !occ_all & !(occ_all >> 8);
            if double != 0 {
                let to = Bitboard(double).first_square();
                moves.push(Move::quiet(from, to, Piece::Pawn, Color::Black));
            }
        }

        let down_left = (p >> 9) & !Bitboard::FILE_H.0;
        let down_right = (p >> 7) & !Bitboard::FILE_A.0;
        for target in [down_left, down_right] {
            self.pawn_capture(from, target, Color::Black, Bitboard::RANK_1, moves);
        }
    }

    fn pawn_capture(
        &self,
        from: Square,
        target: u64,
        side: Color,
        promotion_rank: Bitboard,
        moves: &mut MoveList,
    ) {
        let enemy = self.state.occupied[side.opponent().index()].0;
        if target & enemy == 0 {
            return;
        }
        let to = Bitboard(target).first_square();
        let victim = match self.piece_at(to) {
            Some((_, piece)) => piece,
            None => return,
        };
        if target & promotion_rank.0 != 0 {
            for promoted in PROMOTION_PIECES {
                moves.push(Move::new_promotion_capture(from, to, side, victim, promoted));
            }
        } else {
            moves.push(Move::capture(from, to, Piece::Pawn, side, victim));
        }
    }

    /// En passant: the capturers were recorded when the double push was
    /// applied, so no scanning is needed here. At most two moves.
    fn en_passant_moves(&self, side: Color, moves: &mut MoveList) {
        if self.state.ep_target.is_empty() {
            return;
        }
        let to = self.state.ep_target.first_square();
        let victim = match side {
            Color::White => Bitboard(self.state.ep_target.0 >> 8),
            Color::Black => Bitboard(self.state.ep_target.0 << 8),
        }
        .first_square();

        let mut capturers =
            (self.state.ep_participants & self.state.pieces[side.index()][Piece::Pawn.index()]).0;
        while capturers != 0 {
            let p = capturers & capturers.wrapping_neg();
            capturers ^= p;
            let from = Bitboard(p).first_square();
            moves.push(Move::en_passant(from, to, side, victim));
        }
    }
}
