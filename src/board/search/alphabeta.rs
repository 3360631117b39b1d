//! The recursive alpha-beta tree walk.

use super::{SearchContext, INFINITY};

impl SearchContext<'_> {
    /// Search one interior node. `depth` is 2 at the first recursion below
    /// the root; odd depths maximize for the engine, even depths minimize.
    /// `limit` is the horizon of the current deepening iteration.
    ///
    /// Precondition: `alpha < beta`. A call that violates it is a bug.
    pub(super) fn alpha_beta(&mut self, depth: u32, mut alpha: i32, mut beta: i32, limit: u32) -> i32 {
        debug_assert!(alpha < beta, "inverted window: {alpha} >= {beta}");

        if depth == limit {
            return self.horizon(depth, alpha, beta);
        }

        let maximizing = depth % 2 == 1;
        let moves = self.position.moves_for(self.side_at(depth));

        for mv in &moves {
            let snapshot = self.position.snapshot();
            if self.position.apply(&mv).is_err() {
                continue;
            }
            self.nodes += 1;

            let value = if self.position.king_missing() {
                // The mover just captured the opposing king: this line is
                // decided, no need to look deeper
                if maximizing {
                    INFINITY
                } else {
                    -INFINITY
                }
            } else {
                self.alpha_beta(depth + 1, alpha, beta, limit)
            };
            self.position.restore(snapshot);

            if maximizing {
                if value > alpha {
                    alpha = value;
                }
            } else if value < beta {
                beta = value;
            }
            if alpha >= beta {
                break;
            }
        }

        if maximizing {
            alpha
        } else {
            beta
        }
    }

    /// The horizon ply: score each move through the virtualization layer
    /// instead of recursing. A position with no moves at all gets the
    /// static evaluation as it stands.
    fn horizon(&mut self, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
        let maximizing = depth % 2 == 1;
        let moves = self.position.moves_for(self.side_at(depth));

        if moves.is_empty() {
            return self.evaluator.evaluate(self.position);
        }

        for mv in &moves {
            if self.position.virtual_apply(&mv).is_err() {
                continue;
            }
            self.nodes += 1;
            let value = self.evaluator.evaluate(self.position);
            self.position.wipe_virtual();

            if maximizing {
                if value > alpha {
                    alpha = value;
                }
            } else if value < beta {
                beta = value;
            }
            if alpha >= beta {
                break;
            }
        }

        if maximizing {
            alpha
        } else {
            beta
        }
    }
}
