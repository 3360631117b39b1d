//! Castling types and board geometry.
//!
//! Castling rights are stored per color as a bitboard of home rook squares
//! (a1/h1 for White, a8/h8 for Black). A set bit means the king has not
//! moved and that rook still sits on its home square.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::piece::Color;

/// Which side of the board a castling move is on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

const A1: Bitboard = Bitboard(1);
const H1: Bitboard = Bitboard(1 << 7);
const A8: Bitboard = Bitboard(1 << 56);
const H8: Bitboard = Bitboard(1 << 63);

/// Full castling rights for both colors, indexed by `Color::index()`
pub(crate) const ALL_RIGHTS: [Bitboard; 2] = [Bitboard(A1.0 | H1.0), Bitboard(A8.0 | H8.0)];

/// Fixed squares involved in one castling move.
#[derive(Clone, Copy)]
pub(crate) struct CastleGeometry {
    pub king_from: Bitboard,
    pub king_to: Bitboard,
    pub rook_from: Bitboard,
    pub rook_to: Bitboard,
    /// Squares strictly between king and rook; all must be empty
    pub between: Bitboard,
}

/// Geometry for a castling move: king e->g with rook h->f on the king
/// side, king e->c with rook a->d on the queen side.
pub(crate) const fn castle_geometry(color: Color, side: CastleSide) -> CastleGeometry {
    let shift = match color {
        Color::White => 0,
        Color::Black => 56,
    };
    match side {
        CastleSide::KingSide => CastleGeometry {
            king_from: Bitboard(1 << (4 + shift)),
            king_to: Bitboard(1 << (6 + shift)),
            rook_from: Bitboard(1 << (7 + shift)),
            rook_to: Bitboard(1 << (5 + shift)),
            between: Bitboard(0b0110_0000 << shift),
        },
        CastleSide::QueenSide => CastleGeometry {
            king_from: Bitboard(1 << (4 + shift)),
            king_to: Bitboard(1 << (2 + shift)),
            rook_from: Bitboard(1 << shift),
            rook_to: Bitboard(1 << (3 + shift)),
            between: Bitboard(0b0000_1110 << shift),
        },
    }
}
