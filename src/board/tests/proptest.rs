//! Property-based tests using proptest.

use proptest::prelude::*;

use crate::board::{Bitboard, Color, Piece, Position, Snapshot};

/// Strategy for a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy for a move-selection seed
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Walk `num_moves` random pseudo-legal moves from the start, alternating
/// sides, recording a snapshot before each apply.
fn random_playout(
    seed: u64,
    num_moves: usize,
    mut visit: impl FnMut(&Position),
) -> (Position, Vec<Snapshot>) {
    use rand::prelude::*;

    let mut position = Position::starting();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut history = Vec::new();
    let mut side = Color::White;

    for _ in 0..num_moves {
        let moves = position.moves_for(side);
        if moves.is_empty() {
            break;
        }
        let mv = moves.get(rng.gen_range(0..moves.len())).unwrap();
        let snapshot = position.snapshot();
        if position.apply(&mv).is_err() {
            continue;
        }
        history.push(snapshot);
        side = side.opponent();
        visit(&position);
    }
    (position, history)
}

const ALL_PIECES: [Piece; 6] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
    Piece::King,
];

proptest! {
    /// Property: LIFO restore walks any playout back to the exact start
    #[test]
    fn prop_playout_unwinds_to_start(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let initial = Position::starting();
        let (mut position, mut history) = random_playout(seed, num_moves, |_| {});

        while let Some(snapshot) = history.pop() {
            position.restore(snapshot);
        }
        prop_assert_eq!(position, initial);
    }

    /// Property: the twelve piece boards stay pairwise disjoint and the
    /// occupancy caches agree with them in every reachable position
    #[test]
    fn prop_piece_boards_stay_disjoint(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut failures = Vec::new();
        random_playout(seed, num_moves, |position| {
            let mut boards = Vec::new();
            for color in [Color::White, Color::Black] {
                for piece in ALL_PIECES {
                    boards.push(position.pieces_of(color, piece));
                }
            }
            for i in 0..boards.len() {
                for j in (i + 1)..boards.len() {
                    if boards[i].intersects(boards[j]) {
                        failures.push((i, j));
                    }
                }
            }

            let union = boards.iter().fold(Bitboard::EMPTY, |acc, b| acc | *b);
            if union != position.occupied_all() {
                failures.push((usize::MAX, usize::MAX));
            }
        });
        prop_assert!(failures.is_empty(), "overlapping boards: {failures:?}");
    }

    /// Property: speculating any generated move and wiping it leaves the
    /// position untouched
    #[test]
    fn prop_virtual_apply_wipe_is_identity(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (mut position, _) = random_playout(seed, num_moves, |_| {});

        for side in [Color::White, Color::Black] {
            let moves = position.moves_for(side);
            let before = position.clone();
            for mv in &moves {
                if position.virtual_apply(&mv).is_ok() {
                    position.wipe_virtual();
                }
                prop_assert_eq!(&position, &before);
            }
        }
    }

    /// Property: generation is a pure function of the position
    #[test]
    fn prop_generation_is_deterministic(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (position, _) = random_playout(seed, num_moves, |_| {});

        for side in [Color::White, Color::Black] {
            let first: Vec<_> = position.moves_for(side).iter().collect();
            let second: Vec<_> = position.moves_for(side).iter().collect();
            prop_assert_eq!(first, second);
        }
    }

    /// Property: every generated capture names the piece actually sitting
    /// on its target square (or the en passant victim square)
    #[test]
    fn prop_captures_name_their_victims(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (position, _) = random_playout(seed, num_moves, |_| {});

        for side in [Color::White, Color::Black] {
            for mv in &position.moves_for(side) {
                if let Some(victim) = mv.captured() {
                    let target = if mv.is_en_passant() {
                        mv.ep_victim().first_square()
                    } else {
                        mv.to_square()
                    };
                    prop_assert_eq!(
                        position.piece_at(target),
                        Some((side.opponent(), victim)),
                        "bad capture {} for {:?}", mv, side
                    );
                }
            }
        }
    }
}
