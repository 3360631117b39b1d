//! Alpha-beta minimax search with iterative deepening.
//!
//! Deepens from one ply up to the configured limit, keeping the best root
//! move of the deepest completed iteration. The engine maximizes at odd
//! depths and minimizes at even ones; capturing the opposing king is the
//! only win/loss signal, collapsing a node to plus or minus infinity.
//!
//! A single position is mutated in place throughout. Each frame owns one
//! snapshot and restores it before returning, so unwinding is strictly
//! LIFO; the horizon ply speculates through the virtualization layer
//! instead and never allocates.

mod alphabeta;

use super::error::SearchError;
use super::eval::Evaluator;
use super::types::{Color, Move};
use super::Position;

/// Maximum search depth in plies
pub const DEFAULT_PLY_LIMIT: u32 = 7;

/// Sentinel for the alpha-beta window bounds and the king-capture shortcut
pub(crate) const INFINITY: i32 = 1_000_000;

/// Search configuration.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// How many plies deep the final iteration looks
    pub ply_limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            ply_limit: DEFAULT_PLY_LIMIT,
        }
    }
}

struct SearchContext<'a> {
    position: &'a mut Position,
    evaluator: &'a Evaluator,
    ply_limit: u32,
    nodes: u64,
}

/// Find the best move for the evaluator's color.
///
/// The position is mutated during the search and fully restored before
/// returning. Errors with [`SearchError::NoMoves`] when not a single root
/// move can be applied (checkmate or stalemate surface).
pub fn best_move(
    position: &mut Position,
    evaluator: &Evaluator,
    config: &SearchConfig,
) -> Result<Move, SearchError> {
    let mut ctx = SearchContext {
        position,
        evaluator,
        ply_limit: config.ply_limit.max(1),
        nodes: 0,
    };

    let mut best: Option<Move> = None;
    for depth_limit in 1..=ctx.ply_limit {
        match ctx.search_root(depth_limit) {
            Some((mv, value)) => {
                log::debug!(
                    "depth {depth_limit}: best {mv} value {value} nodes {}",
                    ctx.nodes
                );
                best = Some(mv);
            }
            // No applicable root move; deeper iterations cannot differ
            None => break,
        }
    }
    best.ok_or(SearchError::NoMoves)
}

impl SearchContext<'_> {
    /// The color on the move at a given depth: the engine moves at odd
    /// depths, the opponent at even ones.
    fn side_at(&self, depth: u32) -> Color {
        if depth % 2 == 1 {
            self.evaluator.engine_color()
        } else {
            self.evaluator.engine_color().opponent()
        }
    }

    /// One iteration of deepening: score every root move and keep the
    /// argmax. Ties keep the earliest move, so the result is deterministic
    /// for a given position.
    fn search_root(&mut self, depth_limit: u32) -> Option<(Move, i32)> {
        let side = self.evaluator.engine_color();
        let moves = self.position.moves_for(side);
        let mut best: Option<(Move, i32)> = None;

        for mv in &moves {
            let value = if depth_limit == 1 {
                match self.position.virtual_apply(&mv) {
                    Ok(()) => {
                        self.nodes += 1;
                        let value = self.evaluator.evaluate(self.position);
                        self.position.wipe_virtual();
                        value
                    }
                    Err(_) => continue,
                }
            } else {
                let snapshot = self.position.snapshot();
                if self.position.apply(&mv).is_err() {
                    continue;
                }
                self.nodes += 1;
                let value = if self.position.king_missing() {
                    INFINITY
                } else {
                    self.alpha_beta(2, -INFINITY, INFINITY, depth_limit)
                };
                self.position.restore(snapshot);
                value
            };

            if best.map_or(true, |(_, b)| value > b) {
                best = Some((mv, value));
            }
        }
        best
    }
}
