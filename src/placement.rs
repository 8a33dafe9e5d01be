use std::collections::HashSet;

use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::grid::{GridSize, Position};

/// Placement failures.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum PlacementError {
    #[error("no free cell left on the {width}x{height} board")]
    BoardFull { width: u16, height: u16 },
}

/// Picks a free cell for a new fruit or obstacle.
pub trait PlacementStrategy {
    /// Returns a cell inside `bounds` that is not in `excluded`.
    fn place(
        &mut self,
        bounds: GridSize,
        excluded: &HashSet<Position>,
    ) -> Result<Position, PlacementError>;
}

/// Uniform choice among an explicit list of free cells.
///
/// Always terminates; costs one pass over the board.
#[derive(Debug, Clone)]
pub struct FreeCellScan<R> {
    rng: R,
}

impl<R: Rng> FreeCellScan<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PlacementStrategy for FreeCellScan<R> {
    fn place(
        &mut self,
        bounds: GridSize,
        excluded: &HashSet<Position>,
    ) -> Result<Position, PlacementError> {
        let candidates: Vec<Position> = bounds
            .cells()
            .filter(|position| !excluded.contains(position))
            .collect();

        if candidates.is_empty() {
            return Err(board_full(bounds));
        }

        let index = self.rng.gen_range(0..candidates.len());
        Ok(candidates[index])
    }
}

/// Uniform rejection sampling over the whole board.
///
/// Gives up after a bounded number of draws and falls back to scanning the
/// remaining free cells, so a nearly full board still resolves.
#[derive(Debug, Clone)]
pub struct RejectionSampler {
    rng: StdRng,
    max_attempts: usize,
}

impl RejectionSampler {
    /// Draw budget per free cell before falling back to a full scan.
    pub const ATTEMPTS_PER_CELL: usize = 4;

    /// Creates a deterministic sampler for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            max_attempts: 0,
        }
    }

    /// Overrides the draw budget; `0` derives it from the board size.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    fn attempt_budget(&self, bounds: GridSize) -> usize {
        if self.max_attempts > 0 {
            self.max_attempts
        } else {
            bounds.total_cells() * Self::ATTEMPTS_PER_CELL
        }
    }
}

impl PlacementStrategy for RejectionSampler {
    fn place(
        &mut self,
        bounds: GridSize,
        excluded: &HashSet<Position>,
    ) -> Result<Position, PlacementError> {
        if bounds.total_cells() == 0 {
            return Err(board_full(bounds));
        }

        for _ in 0..self.attempt_budget(bounds) {
            let candidate = Position {
                x: self.rng.gen_range(0..i32::from(bounds.width)),
                y: self.rng.gen_range(0..i32::from(bounds.height)),
            };
            if !excluded.contains(&candidate) {
                return Ok(candidate);
            }
        }

        warn!(
            "rejection sampling exhausted on {}x{} board with {} excluded cells; scanning free cells",
            bounds.width,
            bounds.height,
            excluded.len()
        );
        FreeCellScan::new(&mut self.rng).place(bounds, excluded)
    }
}

fn board_full(bounds: GridSize) -> PlacementError {
    PlacementError::BoardFull {
        width: bounds.width,
        height: bounds.height,
    }
}
