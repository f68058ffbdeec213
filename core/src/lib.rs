#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use solver::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod solver;
mod types;

/// Parameters for generating a new board.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// `(rows, cols)`
    pub size: Coord2,
    /// Probability of each cell starting lit, in `[0, 1]`.
    pub chance_lit: f64,
}

impl BoardConfig {
    pub const DEFAULT_SIZE: Coord2 = (5, 5);
    pub const DEFAULT_CHANCE_LIT: f64 = 0.0;

    pub const fn new_unchecked(size: Coord2, chance_lit: f64) -> Self {
        Self { size, chance_lit }
    }

    /// Clamps the dimensions to at least one cell and the probability into `[0, 1]`.
    pub fn new((rows, cols): Coord2, chance_lit: f64) -> Self {
        let rows = rows.clamp(1, Coord::MAX);
        let cols = cols.clamp(1, Coord::MAX);
        Self::new_unchecked((rows, cols), clamp_chance(chance_lit))
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE, Self::DEFAULT_CHANCE_LIT)
    }
}

fn clamp_chance(chance: f64) -> f64 {
    if chance.is_nan() {
        log::warn!("Lit chance is NaN, using 0");
        return 0.0;
    }
    let clamped = chance.clamp(0.0, 1.0);
    if clamped != chance {
        log::warn!("Lit chance {} out of range, clamped to {}", chance, clamped);
    }
    clamped
}
