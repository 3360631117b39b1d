//! Position state: bitboards, snapshots, and the virtualization layer.

use std::fmt;

use super::error::ApplyError;
use super::types::{Bitboard, Color, Move, Piece, Square, ALL_RIGHTS};

/// Everything a snapshot captures: the twelve piece boards, the occupancy
/// caches, castling rights, and the en passant fields. The side to move is
/// deliberately not part of this; the search tracks it per ply.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct BoardState {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) castling: [Bitboard; 2],
    pub(crate) ep_target: Bitboard,
    pub(crate) ep_participants: Bitboard,
}

impl BoardState {
    const fn empty() -> Self {
        BoardState {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            castling: [Bitboard::EMPTY; 2],
            ep_target: Bitboard::EMPTY,
            ep_participants: Bitboard::EMPTY,
        }
    }
}

/// An opaque copy of position state, restorable in O(1).
///
/// Not `Clone`: `Position::restore` consumes the token, so each snapshot
/// can be used at most once and unwinding stays strictly LIFO.
#[derive(Debug)]
pub struct Snapshot(pub(crate) BoardState);

/// A chess position held as bitboards.
///
/// Twelve piece boards (six kinds per color), cached per-color and total
/// occupancy, castling rights as home-rook-square masks, the en passant
/// target and its candidate capturers, and the side to move.
///
/// `apply` mutates in place and never flips the side to move; callers that
/// care about the turn (the engine facade, the search) manage it
/// themselves. Undo goes through `snapshot`/`restore`, or through the
/// heap-free `virtual_apply`/`commit_virtual`/`wipe_virtual` triple for
/// single-ply speculation.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) state: BoardState,
    pub(crate) side_to_move: Color,
    shadow: Option<BoardState>,
}

impl Position {
    /// The standard starting position: White to move, full castling
    /// rights, no en passant target.
    #[must_use]
    pub fn starting() -> Self {
        let mut position = Position::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, &piece) in back_rank.iter().enumerate() {
            position.set_piece(Square::new(0, file), Color::White, piece);
            position.set_piece(Square::new(7, file), Color::Black, piece);
            position.set_piece(Square::new(1, file), Color::White, Piece::Pawn);
            position.set_piece(Square::new(6, file), Color::Black, Piece::Pawn);
        }
        position.state.castling = ALL_RIGHTS;
        position
    }

    pub(crate) fn empty() -> Self {
        Position {
            state: BoardState::empty(),
            side_to_move: Color::White,
            shadow: None,
        }
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = sq.bit();
        self.state.pieces[color.index()][piece.index()] |= bit;
        self.state.occupied[color.index()] |= bit;
        self.state.all_occupied |= bit;
    }

    /// Recompute the occupancy caches from the piece boards
    pub(crate) fn refresh_occupancy(&mut self) {
        for color in [Color::White, Color::Black] {
            let mut occ = Bitboard::EMPTY;
            for board in &self.state.pieces[color.index()] {
                occ |= *board;
            }
            self.state.occupied[color.index()] = occ;
        }
        self.state.all_occupied = self.state.occupied[0] | self.state.occupied[1];
    }

    /// What occupies the given square, if anything
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let bit = sq.bit();
        if !self.state.all_occupied.intersects(bit) {
            return None;
        }
        let color = if self.state.occupied[0].intersects(bit) {
            Color::White
        } else {
            Color::Black
        };
        for piece in [
            Piece::Pawn,
            Piece::Knight,
            Piece::Bishop,
            Piece::Rook,
            Piece::Queen,
            Piece::King,
        ] {
            if self.state.pieces[color.index()][piece.index()].intersects(bit) {
                return Some((color, piece));
            }
        }
        None
    }

    /// True iff either color has no king on the board. The search uses
    /// this as its only win/loss signal.
    #[must_use]
    pub fn king_missing(&self) -> bool {
        self.state.pieces[0][Piece::King.index()].is_empty()
            || self.state.pieces[1][Piece::King.index()].is_empty()
    }

    /// Capture the full bitboard state for a later `restore`
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.state)
    }

    /// Restore a previously captured state, bit-exact. Consumes the
    /// snapshot; the side to move is untouched.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.state = snapshot.0;
    }

    /// Speculatively apply a move, keeping the predecessor state in an
    /// inline shadow. Follow with `commit_virtual` or `wipe_virtual`.
    /// On error the position is untouched and no shadow is kept.
    pub fn virtual_apply(&mut self, mv: &Move) -> Result<(), ApplyError> {
        debug_assert!(self.shadow.is_none(), "virtual apply while shadow is live");
        let saved = self.state;
        self.apply(mv)?;
        self.shadow = Some(saved);
        Ok(())
    }

    /// Keep the speculative move: the shadow is discarded
    pub fn commit_virtual(&mut self) {
        debug_assert!(self.shadow.is_some(), "commit without a live shadow");
        self.shadow = None;
    }

    /// Discard the speculative move: the shadow becomes the live state
    pub fn wipe_virtual(&mut self) {
        debug_assert!(self.shadow.is_some(), "wipe without a live shadow");
        if let Some(saved) = self.shadow.take() {
            self.state = saved;
        }
    }

    // Read-only views for external collaborators (pretty-printing UI)

    /// The bitboard of one piece kind for one color
    #[inline]
    #[must_use]
    pub fn pieces_of(&self, color: Color, piece: Piece) -> Bitboard {
        self.state.pieces[color.index()][piece.index()]
    }

    /// All squares occupied by one color
    #[inline]
    #[must_use]
    pub fn occupied(&self, color: Color) -> Bitboard {
        self.state.occupied[color.index()]
    }

    /// All occupied squares
    #[inline]
    #[must_use]
    pub fn occupied_all(&self) -> Bitboard {
        self.state.all_occupied
    }

    /// Home rook squares still eligible for castling
    #[inline]
    #[must_use]
    pub fn castling_rights(&self, color: Color) -> Bitboard {
        self.state.castling[color.index()]
    }

    /// The square a pawn just double-pushed over, if any
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Bitboard {
        self.state.ep_target
    }

    /// The side to move
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting()
    }
}

/// Positions compare equal when their observable state matches: bitboards,
/// castling, en passant fields, and side to move. The shadow is invisible.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.side_to_move == other.side_to_move
    }
}

impl Eq for Position {}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let ch = match self.piece_at(Square::new(rank, file)) {
                    Some((color, piece)) => piece.to_symbol(color),
                    None => '.',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}
