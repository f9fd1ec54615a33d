//! Computer opponents.

use crate::board::Board;
use crate::error::{EngineError, EngineErrorKind, EngineResult};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use tracing::{debug, instrument};

/// Anything that can pick a cell for the side it plays.
pub trait Opponent {
    /// Chooses a free cell on `board`.
    ///
    /// # Errors
    ///
    /// Returns `NoAvailableCells` if the board is full.
    fn choose_move(&mut self, board: &Board) -> EngineResult<usize>;

    /// Returns the opponent's display name.
    fn name(&self) -> &str;
}

/// Picks uniformly among the free cells. No strategy.
#[derive(Debug, Clone, derive_new::new)]
pub struct RandomOpponent<R> {
    rng: R,
}

impl RandomOpponent<StdRng> {
    /// Random opponent seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible random opponent.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: rand::Rng> Opponent for RandomOpponent<R> {
    #[instrument(skip_all, fields(free = board.available_cells().len()))]
    fn choose_move(&mut self, board: &Board) -> EngineResult<usize> {
        let mut cells = board.available_cells();
        cells.shuffle(&mut self.rng);
        let cell = cells
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| EngineError::new(EngineErrorKind::NoAvailableCells))?;
        debug!(cell, "Random opponent chose cell");
        Ok(cell)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
