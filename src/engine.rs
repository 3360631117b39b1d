//! The engine facade: one position, one evaluator, one side to play for.
//!
//! This is the boundary the surrounding program talks to. The notation
//! parser hands in fully-populated [`Move`] values through [`Engine::ingest`];
//! [`Engine::best_move`] runs the search and returns the chosen move for an
//! external translator to render. The engine holds no other state and
//! persists nothing.

use crate::board::{
    best_move, ApplyError, Color, Evaluator, Move, Position, SearchConfig, SearchError,
};

/// How many game plies the central-development bonus stays active
pub const DEFAULT_DEVELOPMENT_PLIES: u32 = 20;

/// Engine configuration.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub search: SearchConfig,
    /// Game plies after which the evaluator's central bonus is switched
    /// off; development is over by then
    pub development_plies: u32,
}

impl EngineConfig {
    #[must_use]
    pub fn new() -> Self {
        EngineConfig {
            search: SearchConfig::default(),
            development_plies: DEFAULT_DEVELOPMENT_PLIES,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig::new()
    }
}

/// A chess engine playing one color from the standard starting position.
pub struct Engine {
    position: Position,
    evaluator: Evaluator,
    config: EngineConfig,
    plies_seen: u32,
}

impl Engine {
    /// An engine playing `color` with the default configuration.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Engine::with_config(color, EngineConfig::new())
    }

    /// An engine playing `color` with an explicit configuration.
    #[must_use]
    pub fn with_config(color: Color, config: EngineConfig) -> Self {
        Engine {
            position: Position::starting(),
            evaluator: Evaluator::new(color),
            config,
            plies_seen: 0,
        }
    }

    /// The color this engine plays for
    #[must_use]
    pub fn color(&self) -> Color {
        self.evaluator.engine_color()
    }

    /// The current game position, for diagnostics and pretty-printing
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Apply one move of the game, from either player.
    ///
    /// The move must be fully populated (the external parser resolves
    /// captures, promotions, castling, and en passant before it gets
    /// here). On error the game state is unchanged.
    pub fn ingest(&mut self, mv: &Move) -> Result<(), ApplyError> {
        self.position.apply(mv)?;
        self.position.set_side_to_move(mv.color().opponent());
        self.plies_seen += 1;
        log::trace!("ingested {mv}, {} plies seen", self.plies_seen);

        if self.plies_seen == self.config.development_plies
            && self.evaluator.central_bonus_enabled()
        {
            self.evaluator.set_central_bonus(false);
            log::debug!(
                "development bonus off after {} plies",
                self.plies_seen
            );
        }
        Ok(())
    }

    /// Search for the best move in the current position.
    ///
    /// The game state is unchanged afterwards; the caller decides whether
    /// to play the returned move and feed it back through [`Engine::ingest`].
    /// Errors when the engine has no applicable move (mate or stalemate).
    pub fn best_move(&mut self) -> Result<Move, SearchError> {
        debug_assert_eq!(self.position.side_to_move(), self.color());
        best_move(&mut self.position, &self.evaluator, &self.config.search)
    }
}
