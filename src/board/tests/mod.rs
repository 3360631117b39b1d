//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Move generation correctness
//! - `apply_restore.rs` - Apply, snapshot/restore, and virtualization
//! - `perft.rs` - Node counts for generation and application together
//! - `eval.rs` - Evaluation terms and symmetry
//! - `search.rs` - Search behavior and move selection
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod proptest;

use super::{Color, Move, Piece, Position, Square};

/// Parse a square literal; test-only shorthand.
pub(crate) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Find the generated move matching `from`/`to` (and promotion, if any).
pub(crate) fn find_move(
    position: &Position,
    side: Color,
    from: &str,
    to: &str,
    promotion: Option<Piece>,
) -> Move {
    let from = sq(from);
    let to = sq(to);
    for mv in &position.moves_for(side) {
        if mv.from_square() == from && mv.to_square() == to && mv.promotion() == promotion {
            return mv;
        }
    }
    panic!("Expected move {from}{to} not found");
}

/// Apply a sequence of (side, from, to) quiet-or-capture moves.
pub(crate) fn play(position: &mut Position, moves: &[(Color, &str, &str)]) {
    for &(side, from, to) in moves {
        let mv = find_move(position, side, from, to, None);
        position.apply(&mv).unwrap();
    }
}
