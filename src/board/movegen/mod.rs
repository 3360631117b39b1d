//! Pseudo-legal move generation.
//!
//! Every emitted move obeys piece geometry and never captures a friendly
//! piece. Moves that leave the mover's king attacked are NOT filtered out;
//! the search resolves those lines by capturing the king one ply later.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::types::{Color, Move, MoveList, Piece, Square};
use super::Position;

impl Position {
    /// Every pseudo-legal move for `side` in the current position.
    ///
    /// Captures (including en passant and capturing promotions) iterate
    /// before quiet moves; within a bucket the order is deterministic.
    #[must_use]
    pub fn moves_for(&self, side: Color) -> MoveList {
        let mut moves = MoveList::new();
        self.pawn_moves(side, &mut moves);
        self.knight_moves(side, &mut moves);
        self.slider_moves(side, Piece::Bishop, &mut moves);
        self.slider_moves(side, Piece::Rook, &mut moves);
        self.slider_moves(side, Piece::Queen, &mut moves);
        self.king_moves(side, &mut moves);
        moves
    }

    /// Emit a step to `to`: a capture if an enemy piece sits there, a
    /// quiet move otherwise. The target must not hold a friendly piece.
    fn emit_step(&self, from: Square, to: Square, piece: Piece, side: Color, moves: &mut MoveList) {
        match self.piece_at(to) {
            Some((_, victim)) => moves.push(Move::capture(from, to, piece, side, victim)),
            None => moves.push(Move::quiet(from, to, piece, side)),
        }
    }

    /// Count leaf positions reachable in `depth` plies, alternating sides
    /// starting with `side`. Exercises generation and application together.
    #[must_use]
    pub fn perft(&mut self, side: Color, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.moves_for(side);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in &moves {
            let snapshot = self.snapshot();
            if self.apply(&mv).is_err() {
                continue;
            }
            nodes += self.perft(side.opponent(), depth - 1);
            self.restore(snapshot);
        }
        nodes
    }
}
